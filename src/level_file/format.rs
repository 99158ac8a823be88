//! Serde-Abbild des JSON-Levelformats.
//!
//! Die französischen Schlüssel des Ursprungsformats (`entrée`, `sortie`,
//! `largeur`, `hauteur`, `rôle`) werden beim Lesen als Aliase akzeptiert.

use crate::core::{Biome, Vector};
use serde::{Deserialize, Serialize};

/// Punkt bzw. Ausdehnung in Breite/Höhe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    #[serde(alias = "largeur")]
    pub width: f64,
    #[serde(alias = "hauteur")]
    pub height: f64,
}

impl Extent {
    pub fn to_vector(self) -> Vector {
        Vector::new(self.width, self.height)
    }
}

impl From<Vector> for Extent {
    fn from(v: Vector) -> Self {
        Self {
            width: v.x,
            height: v.y,
        }
    }
}

/// Route mit optionaler Ein- und Ausfahrt (mindestens eine davon).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDecl {
    pub name: String,
    #[serde(default, alias = "entrée", skip_serializing_if = "Option::is_none")]
    pub entry: Option<Extent>,
    #[serde(default, alias = "sortie", skip_serializing_if = "Option::is_none")]
    pub exit: Option<Extent>,
}

/// Gegenüberliegende Ecken eines Hindernisses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsDecl {
    pub inf: Extent,
    pub sup: Extent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleDecl {
    pub position: BoundsDecl,
    #[serde(alias = "rôle")]
    pub role: Biome,
}

/// Geforderte Verbindung zwischen zwei Routen (per Name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiaisonDecl {
    pub source: String,
    pub target: String,
    pub flow: u32,
}

/// Verweis auf einen Knoten im gespeicherten Netz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRef {
    /// Einfahrt der benannten Route
    Entry(String),
    /// Ausfahrt der benannten Route
    Exit(String),
    /// Index in `network.junctions`
    Junction(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JunctionDecl {
    pub position: Extent,
    #[serde(default)]
    pub tier: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadDecl {
    pub ends: [NodeRef; 2],
    #[serde(default)]
    pub tier: u8,
}

/// Vom Benutzer gebautes Netz (Knoten außerhalb der Routen und alle Straßen).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDecl {
    #[serde(default)]
    pub junctions: Vec<JunctionDecl>,
    #[serde(default)]
    pub roads: Vec<RoadDecl>,
}

impl NetworkDecl {
    pub fn is_empty(&self) -> bool {
        self.junctions.is_empty() && self.roads.is_empty()
    }
}

/// Vollständige Level-Beschreibung.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelFile {
    pub routes: Vec<RouteDecl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub obstacles: Vec<ObstacleDecl>,
    #[serde(default)]
    pub liaisons: Vec<LiaisonDecl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkDecl>,
}
