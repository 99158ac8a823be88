//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die von `app`, `level_file` und der CLI
//! gemeinsam gelesen werden.

pub mod options;

pub use options::EngineOptions;
pub use options::{AUTO_CONNECT_FACTOR, PICK_RADIUS, ROAD_PICK_FACTOR};
