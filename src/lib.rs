//! Freeway Interchange Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod level_file;
pub mod shared;

pub use app::{EditorCommand, EditorController, EditorIntent, EditorState, PointerButton};
pub use core::{
    Biome, Color, EdgeId, FlowRequirement, Graph, Junction, Level, NodeId, Obstacle, Road,
    RoadNetwork, StructuralViolation, Vector, TIERS,
};
pub use level_file::{
    load_level, parse_level, read_level_file, save_level_file, write_level, InterchangeSchema,
    LevelFile, LoadError, SchemaPolicy,
};
pub use shared::EngineOptions;
