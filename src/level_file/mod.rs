//! JSON Import/Export für Level-Beschreibungen.
//!
//! Ein Level besteht aus Routen (Ein-/Ausfahrten), Hindernissen, geforderten
//! Verbindungen (Liaisons) und optional dem bereits gebauten Netz.

pub mod format;
pub mod parser;
pub mod schema;
pub mod writer;

pub use format::{
    BoundsDecl, Extent, JunctionDecl, LevelFile, LiaisonDecl, NetworkDecl, NodeRef,
    ObstacleDecl, RoadDecl, RouteDecl,
};
pub use parser::{load_level, parse_level, read_level_file};
pub use schema::{InterchangeSchema, SchemaPolicy, SchemaValidator, LEVEL_DEFINITION, LEVEL_SCHEMA};
pub use writer::{save_level_file, to_level_file, write_level};

use std::path::PathBuf;
use thiserror::Error;

/// Fehler beim Laden oder Schreiben eines Levels.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Datei {path} nicht lesbar/schreibbar")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Level-Dokument fehlerhaft: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Level verletzt das Format «{schema}» ({} Befunde)", violations.len())]
    Schema {
        schema: String,
        violations: Vec<String>,
    },
    #[error("Route «{0}» hat weder Ein- noch Ausfahrt")]
    InvalidRoute(String),
    #[error("Route «{0}» ist doppelt deklariert")]
    DuplicateRoute(String),
    #[error("Liaison verweist auf unbekannte Route «{0}»")]
    UnknownRoute(String),
    #[error("Route «{route}» hat keine {side}")]
    MissingEndpoint { route: String, side: &'static str },
    #[error("Netz ungültig: {0}")]
    InvalidNetwork(String),
}
