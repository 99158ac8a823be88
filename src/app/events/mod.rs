//! EditorIntent- und EditorCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::EditorCommand;
pub use intent::{EditorIntent, PointerButton};
