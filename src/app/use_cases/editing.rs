//! Use-Cases für Knoten- und Straßen-Editing.

use crate::app::EditorState;
use crate::core::{EdgeId, NodeId, StructuralViolation, Vector};

/// Setzt einen neuen Knoten und wählt ihn zum Ziehen aus.
///
/// Mit `connect_to` übernimmt der Knoten Farbe und Ebene des Nachbarn und wird
/// per Straße mit ihm verbunden, sofern die Straße nichts kreuzt.
pub fn add_junction(
    state: &mut EditorState,
    position: Vector,
    connect_to: Option<NodeId>,
) -> Result<Option<NodeId>, StructuralViolation> {
    let neighbour = connect_to
        .and_then(|id| state.level.junction(id).map(|j| (id, j.color, j.tier)));
    let (color, tier) = match neighbour {
        Some((_, color, tier)) => (color, tier),
        None => (state.level.random_color(0), 0),
    };

    let Some(node) = state.level.add_junction(position, color, tier) else {
        return Ok(None);
    };
    if let Some((other, _, _)) = neighbour {
        state.level.connect(other, node)?;
    }
    state.dragged = Some(node);
    Ok(Some(node))
}

/// Teilt eine Straße und wählt den neuen Knoten zum Ziehen aus.
pub fn split_road(
    state: &mut EditorState,
    edge: EdgeId,
    position: Vector,
) -> Result<(), StructuralViolation> {
    if let Some(node) = state.level.split_road(edge, position)? {
        state.dragged = Some(node);
    }
    Ok(())
}

pub fn remove_junction(state: &mut EditorState, node: NodeId) -> Result<(), StructuralViolation> {
    if state.level.remove_junction(node)? && state.dragged == Some(node) {
        state.dragged = None;
    }
    Ok(())
}

pub fn remove_road(state: &mut EditorState, edge: EdgeId) -> Result<(), StructuralViolation> {
    state.level.remove_road(edge)
}

/// Ändert die Ebene einer Straße; ungültige Wechsel werden verworfen.
pub fn change_tier(
    state: &mut EditorState,
    edge: EdgeId,
    delta: i32,
) -> Result<(), StructuralViolation> {
    if !state.level.change_tier(edge, delta)? {
        log::debug!("Ebenenwechsel {:+} für {} verworfen", delta, edge);
    }
    Ok(())
}
