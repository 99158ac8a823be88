//! Handler für Knoten- und Straßen-Editing.

use crate::app::use_cases;
use crate::app::EditorState;
use crate::core::{EdgeId, NodeId, Vector};

/// Fügt einen neuen Knoten hinzu (optional verbunden).
pub fn add_junction(
    state: &mut EditorState,
    position: Vector,
    connect_to: Option<NodeId>,
) -> anyhow::Result<()> {
    use_cases::editing::add_junction(state, position, connect_to)?;
    Ok(())
}

/// Teilt eine Straße an der Klickposition.
pub fn split_road(state: &mut EditorState, edge: EdgeId, position: Vector) -> anyhow::Result<()> {
    Ok(use_cases::editing::split_road(state, edge, position)?)
}

/// Löscht einen beweglichen Knoten.
pub fn remove_junction(state: &mut EditorState, node: NodeId) -> anyhow::Result<()> {
    Ok(use_cases::editing::remove_junction(state, node)?)
}

/// Löscht eine Straße.
pub fn remove_road(state: &mut EditorState, edge: EdgeId) -> anyhow::Result<()> {
    Ok(use_cases::editing::remove_road(state, edge)?)
}

/// Ändert die Ebene einer Straße.
pub fn change_tier(state: &mut EditorState, edge: EdgeId, delta: i32) -> anyhow::Result<()> {
    Ok(use_cases::editing::change_tier(state, edge, delta)?)
}
