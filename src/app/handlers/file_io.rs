//! Handler für Datei-Operationen.

use crate::app::use_cases;
use crate::app::EditorState;
use std::path::PathBuf;

/// Lädt eine Level-Datei.
pub fn load(state: &mut EditorState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::file_io::load_level_file(state, path)
}

/// Speichert das Level (None = aktueller Pfad).
pub fn save(state: &mut EditorState, path: Option<PathBuf>) -> anyhow::Result<()> {
    use_cases::file_io::save_level_file(state, path)
}
