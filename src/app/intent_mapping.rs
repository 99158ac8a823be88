//! Mapping von Editor-Intents auf mutierende Editor-Commands.

use super::{EditorCommand, EditorIntent, EditorState, PointerButton};
use crate::core::Vector;

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer `EditorCommand`s.
pub fn map_intent_to_commands(state: &EditorState, intent: EditorIntent) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::PointerPressed { position, button } => map_press(state, position, button),
        EditorIntent::PointerMoved { position } => {
            if state.is_dragging() {
                vec![EditorCommand::DragTo { position }]
            } else {
                vec![]
            }
        }
        EditorIntent::PointerReleased { .. } => {
            if state.is_dragging() {
                vec![EditorCommand::FinishDrag]
            } else {
                vec![]
            }
        }
        EditorIntent::Cancel => vec![EditorCommand::CancelDrag],
        EditorIntent::LevelFileSelected { path } => {
            vec![EditorCommand::CancelDrag, EditorCommand::LoadLevel { path }]
        }
        EditorIntent::SaveRequested { path } => vec![EditorCommand::SaveLevel { path }],
    }
}

/// Knoten vor Straße vor freier Fläche.
fn map_press(state: &EditorState, position: Vector, button: PointerButton) -> Vec<EditorCommand> {
    let level = &state.level;
    let options = &state.options;
    let nearest = level.nearest_node(position, &[]);

    if let Some(hit) = nearest.filter(|hit| hit.distance <= options.pick_radius) {
        let node = hit.node_id;
        if !level.junction(node).is_some_and(|j| j.movable) {
            log::debug!("Knoten {} ist fest", node);
            return vec![];
        }
        return match button {
            PointerButton::Primary => vec![EditorCommand::BeginDrag { node }],
            PointerButton::Secondary => vec![EditorCommand::RemoveJunction { node }],
            PointerButton::WheelUp | PointerButton::WheelDown => vec![],
        };
    }

    if let Some(hit) = level
        .nearest_edge(position)
        .filter(|hit| hit.distance <= options.road_pick_radius())
    {
        let edge = hit.edge_id;
        return match button {
            PointerButton::Primary => vec![EditorCommand::SplitRoad { edge, position }],
            PointerButton::Secondary => vec![EditorCommand::RemoveRoad { edge }],
            PointerButton::WheelUp => vec![EditorCommand::ChangeTier { edge, delta: 1 }],
            PointerButton::WheelDown => vec![EditorCommand::ChangeTier { edge, delta: -1 }],
        };
    }

    match button {
        PointerButton::Primary => {
            let connect_to = nearest
                .filter(|hit| hit.distance <= options.auto_connect_radius())
                .map(|hit| hit.node_id);
            vec![EditorCommand::AddJunction {
                position,
                connect_to,
            }]
        }
        _ => vec![],
    }
}
