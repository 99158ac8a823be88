//! Use-Case: Ziehen und Verschmelzen des ausgewählten Knotens.

use crate::app::EditorState;
use crate::core::{NodeId, StructuralViolation, Vector};

/// Wählt einen Knoten zum Ziehen aus.
pub fn begin_drag(state: &mut EditorState, node: NodeId) {
    log::info!("Knoten {} ausgewählt", node);
    state.dragged = Some(node);
}

/// Verschiebt den gezogenen Knoten.
///
/// Wird die Verschiebung abgelehnt, geht die Auswahl verloren und der Knoten
/// wird wie beim Loslassen mit einem nahen Knoten verschmolzen.
pub fn drag_to(state: &mut EditorState, position: Vector) -> Result<(), StructuralViolation> {
    let Some(node) = state.dragged else {
        return Ok(());
    };
    if state.level.commit_move(node, position)? {
        return Ok(());
    }

    state.dragged = None;
    merge_with_nearest(state, node)?;
    Ok(())
}

/// Beendet das Ziehen und verschmilzt ggf. mit einem Knoten im Pick-Radius.
pub fn finish_drag(state: &mut EditorState) -> Result<Option<NodeId>, StructuralViolation> {
    match state.dragged.take() {
        Some(node) => merge_with_nearest(state, node),
        None => Ok(None),
    }
}

pub fn cancel_drag(state: &mut EditorState) {
    state.dragged = None;
}

/// Verschmilzt `node` mit dem nächsten anderen Knoten innerhalb des Pick-Radius.
fn merge_with_nearest(
    state: &mut EditorState,
    node: NodeId,
) -> Result<Option<NodeId>, StructuralViolation> {
    let Some(position) = state.level.junction(node).map(|j| j.position) else {
        return Ok(None);
    };
    let Some(other) = state
        .level
        .nearest_node(position, &[node])
        .filter(|hit| hit.distance <= state.options.pick_radius)
    else {
        return Ok(None);
    };

    log::info!("Verschmelze Knoten {} mit {}", node, other.node_id);
    state.level.merge_junctions(node, other.node_id)
}
