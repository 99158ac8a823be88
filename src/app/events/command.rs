use crate::core::{EdgeId, NodeId, Vector};
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// Beweglichen Knoten zum Ziehen auswählen
    BeginDrag { node: NodeId },
    /// Gezogenen Knoten verschieben
    DragTo { position: Vector },
    /// Ziehen beenden und ggf. mit nahem Knoten verschmelzen
    FinishDrag,
    /// Ziehen ohne Verschmelzen abbrechen
    CancelDrag,
    /// Neuen Knoten setzen, optional mit Straße zu `connect_to`
    AddJunction {
        position: Vector,
        connect_to: Option<NodeId>,
    },
    /// Straße an Position teilen
    SplitRoad { edge: EdgeId, position: Vector },
    /// Beweglichen Knoten samt Straßen löschen
    RemoveJunction { node: NodeId },
    /// Straße löschen
    RemoveRoad { edge: EdgeId },
    /// Ebene einer Straße ändern
    ChangeTier { edge: EdgeId, delta: i32 },
    /// Level-Datei laden
    LoadLevel { path: PathBuf },
    /// Level speichern (None = aktueller Pfad)
    SaveLevel { path: Option<PathBuf> },
}
