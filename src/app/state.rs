//! Zustand einer Editor-Sitzung.

use crate::app::CommandLog;
use crate::core::{Level, NodeId};
use crate::shared::EngineOptions;
use std::path::PathBuf;

/// Hauptzustand des Editors
pub struct EditorState {
    /// Aktuell bearbeitetes Level
    pub level: Level,
    /// Laufzeit-Optionen (Pick-Radien, Schema-Policy, Farb-Seed)
    pub options: EngineOptions,
    /// Aktuell gezogener Knoten
    pub dragged: Option<NodeId>,
    /// Pfad der zuletzt geladenen/gespeicherten Datei
    pub current_file_path: Option<PathBuf>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl EditorState {
    /// Erstellt eine Sitzung für ein bereits aufgebautes Level.
    pub fn new(level: Level, options: EngineOptions) -> Self {
        Self {
            level,
            options,
            dragged: None,
            current_file_path: None,
            command_log: CommandLog::new(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }
}

impl Default for EditorState {
    fn default() -> Self {
        let options = EngineOptions::default();
        Self::new(Level::new(options.color_seed), options)
    }
}
