//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::EditorState;
use crate::level_file;
use anyhow::Context;
use std::path::PathBuf;

/// Lädt eine Level-Datei in den EditorState.
pub fn load_level_file(state: &mut EditorState, path: PathBuf) -> anyhow::Result<()> {
    let level = level_file::load_level(&path, &state.options)
        .with_context(|| format!("Level {} konnte nicht geladen werden", path.display()))?;

    state.level = level;
    state.dragged = None;
    state.current_file_path = Some(path);

    if state.level.is_complete() {
        log::info!("Level ist bereits vollständig verbunden");
    }
    Ok(())
}

/// Speichert das Level unter `path` bzw. unter dem aktuellen Pfad.
pub fn save_level_file(state: &mut EditorState, path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path
        .or_else(|| state.current_file_path.clone())
        .context("Kein Speicherpfad bekannt")?;

    level_file::save_level_file(&state.level, &path)?;
    state.current_file_path = Some(path);
    Ok(())
}
