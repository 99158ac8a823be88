//! Zentrale Konfiguration für den Kreuzungs-Editor.
//!
//! `EngineOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::level_file::SchemaPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius in Welteinheiten für Knoten.
pub const PICK_RADIUS: f64 = 10.0;
/// Anteil des Pick-Radius, der für Straßen gilt.
pub const ROAD_PICK_FACTOR: f64 = 0.5;
/// Vielfaches des Pick-Radius, in dem ein neuer Knoten automatisch verbunden wird.
pub const AUTO_CONNECT_FACTOR: f64 = 10.0;

/// Dateiname der Optionen-Datei neben der Binary.
const CONFIG_FILE_NAME: &str = "freeway_interchange.toml";

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `freeway_interchange.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Radius für Knoten in Welteinheiten
    pub pick_radius: f64,
    /// Faktor auf den Pick-Radius für Straßen
    pub road_pick_factor: f64,
    /// Faktor auf den Pick-Radius für automatisches Verbinden neuer Knoten
    pub auto_connect_factor: f64,

    // ── Laden ───────────────────────────────────────────────────
    /// Umgang mit Schema-Befunden
    #[serde(default)]
    pub schema_policy: SchemaPolicy,
    /// Startwert für reproduzierbare Zufallsfarben
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_seed: Option<u64>,
    /// Verzeichnis mit zusätzlichen `*.schema.json`-Dateien
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_dir: Option<PathBuf>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            pick_radius: PICK_RADIUS,
            road_pick_factor: ROAD_PICK_FACTOR,
            auto_connect_factor: AUTO_CONNECT_FACTOR,
            schema_policy: SchemaPolicy::default(),
            color_seed: None,
            schema_dir: None,
        }
    }
}

impl EngineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("freeway-interchange"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Pick-Radius für Straßen.
    pub fn road_pick_radius(&self) -> f64 {
        self.pick_radius * self.road_pick_factor
    }

    /// Radius, in dem ein neu gesetzter Knoten mit dem nächsten verbunden wird.
    pub fn auto_connect_radius(&self) -> f64 {
        self.pick_radius * self.auto_connect_factor
    }
}
