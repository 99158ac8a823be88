//! Schema-Prüfung für Level-Dokumente.
//!
//! Schemas sind JSON-Schema-Dokumente (Draft 2020-12), benannt nach ihrem
//! Dateistamm (`interchange.schema.json` → `interchange`). Eine optionale
//! Unterdefinition wird über `$defs` aufgelöst. Die Prüfung läuft auf dem rohen
//! JSON-Wert, bevor er in die Serde-Typen überführt wird, und sammelt alle
//! Befunde statt beim ersten abzubrechen.

use super::LoadError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Name des eingebauten Level-Schemas.
pub const LEVEL_SCHEMA: &str = "interchange";
/// Unterdefinition für ein vollständiges Level.
pub const LEVEL_DEFINITION: &str = "level";

const SCHEMA_SUFFIX: &str = ".schema.json";
const BUILTIN_SCHEMA: &str = include_str!("../../schemas/interchange.schema.json");

/// Umgang mit Schema-Befunden beim Laden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaPolicy {
    /// Befunde werden als Warnung geloggt, das Laden geht weiter
    #[default]
    Advisory,
    /// Befunde brechen das Laden ab
    Strict,
}

/// Prüft ein JSON-Dokument gegen ein benanntes Schema (optional eine Unterdefinition).
///
/// Gibt die Liste der Befunde zurück; leer bedeutet gültig.
pub trait SchemaValidator {
    fn validate(&self, schema: &str, definition: Option<&str>, document: &Value) -> Vec<String>;
}

/// Benannte JSON-Schemas, geprüft mit `jsonschema`.
///
/// Enthält immer das eingebaute Schema `interchange` (Definitionen `level`,
/// `route`, `obstacle`, `liaison`, `network` u. a.). Für `interchange#level`
/// kommen Querverweise hinzu, die sich nicht als Schema ausdrücken lassen:
/// doppelte Routennamen und Liaisons auf unbekannte Routen.
#[derive(Debug, Clone)]
pub struct InterchangeSchema {
    schemas: HashMap<String, Value>,
}

impl Default for InterchangeSchema {
    fn default() -> Self {
        Self::builtin()
    }
}

impl InterchangeSchema {
    /// Nur das eingebaute Schema.
    pub fn builtin() -> Self {
        let mut schemas = HashMap::new();
        match serde_json::from_str(BUILTIN_SCHEMA) {
            Ok(schema) => {
                schemas.insert(LEVEL_SCHEMA.to_string(), schema);
            }
            Err(e) => log::error!("Eingebautes Schema «{}» ist kein JSON: {}", LEVEL_SCHEMA, e),
        }
        Self { schemas }
    }

    /// Eingebautes Schema plus alle `*.schema.json` aus `dir`.
    ///
    /// Eine Datei `interchange.schema.json` ersetzt das eingebaute Schema.
    /// Dateien, die kein JSON sind, werden mit Warnung übersprungen.
    pub fn from_dir(dir: &Path) -> Result<Self, LoadError> {
        let io_error = |source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let mut registry = Self::builtin();

        for entry in std::fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            let Some(name) = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| name.strip_suffix(SCHEMA_SUFFIX))
            else {
                continue;
            };
            let content = std::fs::read_to_string(&path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;
            match serde_json::from_str::<Value>(&content) {
                Ok(schema) => {
                    log::info!("Schema «{}» geladen aus: {}", name, path.display());
                    registry.schemas.insert(name.to_string(), schema);
                }
                Err(e) => log::warn!("Schema-Datei {} ist kein JSON: {}", path.display(), e),
            }
        }
        Ok(registry)
    }

    pub fn contains(&self, schema: &str) -> bool {
        self.schemas.contains_key(schema)
    }

    /// Schema-Dokument, das direkt gegen `schema#definition` prüft.
    ///
    /// Für eine Unterdefinition bleiben `$schema`, `$id` und `$defs` erhalten,
    /// damit interne `$ref` weiter auflösbar sind.
    fn resolve(&self, schema: &str, definition: Option<&str>) -> Result<Value, String> {
        let root = self
            .schemas
            .get(schema)
            .ok_or_else(|| format!("Unbekanntes Schema «{schema}»"))?;
        let Some(definition) = definition else {
            return Ok(root.clone());
        };
        if root
            .get("$defs")
            .and_then(|defs| defs.get(definition))
            .is_none()
        {
            return Err(format!("Unbekannte Definition «{schema}#{definition}»"));
        }

        let mut resolved = Map::new();
        for key in ["$schema", "$id", "$defs"] {
            if let Some(value) = root.get(key) {
                resolved.insert(key.to_string(), value.clone());
            }
        }
        resolved.insert(
            "$ref".to_string(),
            Value::String(format!("#/$defs/{definition}")),
        );
        Ok(Value::Object(resolved))
    }
}

impl SchemaValidator for InterchangeSchema {
    fn validate(&self, schema: &str, definition: Option<&str>, document: &Value) -> Vec<String> {
        let resolved = match self.resolve(schema, definition) {
            Ok(resolved) => resolved,
            Err(message) => return vec![finding("", &message)],
        };
        let validator = match jsonschema::validator_for(&resolved) {
            Ok(validator) => validator,
            Err(e) => {
                log::error!("Schema «{}» ist fehlerhaft: {}", schema, e);
                return vec![finding("", &format!("Schema «{schema}» ist fehlerhaft"))];
            }
        };

        let mut findings: Vec<String> = validator
            .iter_errors(document)
            .map(|error| finding(&error.instance_path.to_string(), &error.to_string()))
            .collect();
        if schema == LEVEL_SCHEMA && definition.unwrap_or(LEVEL_DEFINITION) == LEVEL_DEFINITION {
            findings.extend(check_route_references(document));
        }
        findings
    }
}

fn finding(path: &str, message: &str) -> String {
    let path = if path.is_empty() { "/" } else { path };
    format!("{path}: {message}")
}

/// Routennamen müssen eindeutig sein, Liaisons dürfen nur deklarierte Routen nennen.
fn check_route_references(document: &Value) -> Vec<String> {
    let entries = |key: &str| {
        document
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    };
    let mut findings = Vec::new();
    let mut names = HashSet::new();

    for (i, route) in entries("routes").iter().enumerate() {
        if let Some(name) = route.get("name").and_then(Value::as_str) {
            if !names.insert(name) {
                findings.push(finding(
                    &format!("/routes/{i}"),
                    &format!("Route «{name}» doppelt"),
                ));
            }
        }
    }

    for (i, liaison) in entries("liaisons").iter().enumerate() {
        for key in ["source", "target"] {
            if let Some(name) = liaison.get(key).and_then(Value::as_str) {
                if !names.contains(name) {
                    findings.push(finding(
                        &format!("/liaisons/{i}/{key}"),
                        &format!("Route «{name}» unbekannt"),
                    ));
                }
            }
        }
    }
    findings
}
