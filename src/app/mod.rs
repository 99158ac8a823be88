//! Application-Layer: Controller, State, Events und Use-Cases.
//!
//! Der Host (Fenster, Terminal, Test) liefert `EditorIntent`s in
//! Weltkoordinaten; der Controller übersetzt sie in `EditorCommand`s und
//! führt sie auf dem `EditorState` aus.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::EditorController;
pub use events::{EditorCommand, EditorIntent, PointerButton};
pub use state::EditorState;
