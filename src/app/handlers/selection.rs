//! Handler für Auswahl und Ziehen.

use crate::app::use_cases;
use crate::app::EditorState;
use crate::core::{NodeId, Vector};

pub fn begin_drag(state: &mut EditorState, node: NodeId) {
    use_cases::selection::begin_drag(state, node);
}

pub fn drag_to(state: &mut EditorState, position: Vector) -> anyhow::Result<()> {
    Ok(use_cases::selection::drag_to(state, position)?)
}

pub fn finish_drag(state: &mut EditorState) -> anyhow::Result<()> {
    use_cases::selection::finish_drag(state)?;
    Ok(())
}

pub fn cancel_drag(state: &mut EditorState) {
    use_cases::selection::cancel_drag(state);
}
