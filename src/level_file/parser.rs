//! Parser für Level-Dokumente.

use super::schema::{InterchangeSchema, SchemaPolicy, SchemaValidator};
use super::{LevelFile, LoadError, LEVEL_DEFINITION, LEVEL_SCHEMA};
use crate::core::Level;
use crate::shared::EngineOptions;
use serde_json::Value;
use std::path::Path;

/// Parsed ein Level aus einem JSON-String.
///
/// Das Dokument wird zuerst gegen das Schema `interchange#level` geprüft.
/// Bei `SchemaPolicy::Advisory` werden Befunde nur geloggt, bei
/// `SchemaPolicy::Strict` bricht das Laden mit `LoadError::Schema` ab.
pub fn parse_level(
    json: &str,
    validator: &dyn SchemaValidator,
    policy: SchemaPolicy,
) -> Result<LevelFile, LoadError> {
    let document: Value = serde_json::from_str(json)?;

    let violations = validator.validate(LEVEL_SCHEMA, Some(LEVEL_DEFINITION), &document);
    if !violations.is_empty() {
        match policy {
            SchemaPolicy::Strict => {
                return Err(LoadError::Schema {
                    schema: LEVEL_SCHEMA.to_string(),
                    violations,
                })
            }
            SchemaPolicy::Advisory => {
                for violation in &violations {
                    log::warn!("Schema-Befund: {}", violation);
                }
            }
        }
    }

    let file: LevelFile = serde_json::from_value(document)?;
    log::debug!(
        "Level geparst: {} Routen, {} Hindernisse, {} Liaisons",
        file.routes.len(),
        file.obstacles.len(),
        file.liaisons.len()
    );
    Ok(file)
}

/// Liest und parsed eine Level-Datei.
pub fn read_level_file(
    path: &Path,
    validator: &dyn SchemaValidator,
    policy: SchemaPolicy,
) -> Result<LevelFile, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Lade Level: {}", path.display());
    parse_level(&content, validator, policy)
}

/// Liest eine Level-Datei und baut das Level auf.
///
/// Geprüft wird gegen das eingebaute Schema bzw. gegen die Schemas aus
/// `options.schema_dir`, falls gesetzt.
pub fn load_level(path: &Path, options: &EngineOptions) -> Result<Level, LoadError> {
    let validator = match &options.schema_dir {
        Some(dir) => InterchangeSchema::from_dir(dir)?,
        None => InterchangeSchema::builtin(),
    };
    let file = read_level_file(path, &validator, options.schema_policy)?;
    Level::load(&file, options.color_seed)
}
