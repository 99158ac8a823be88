//! Rechteckige Hindernisse und Biome.

use super::vector::Vector;
use serde::{Deserialize, Serialize};

/// Gelände-/Rollen-Klassifikation von Knoten und Hindernissen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    #[default]
    #[serde(alias = "NONE", alias = "AUCUN")]
    None,
    #[serde(alias = "ENTRY", alias = "ENTRÉE")]
    Entry,
    #[serde(alias = "EXIT", alias = "SORTIE")]
    Exit,
    #[serde(alias = "FOREST", alias = "FORÊT")]
    Forest,
    #[serde(alias = "FACTORY", alias = "USINE")]
    Factory,
    #[serde(alias = "RIVER", alias = "FLEUVE")]
    River,
}

/// Achsenparalleles Rechteck, das keine Straße kreuzen darf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Untere linke Ecke
    pub min: Vector,
    /// Obere rechte Ecke
    pub max: Vector,
    pub biome: Biome,
}

impl Obstacle {
    /// Erstellt ein Hindernis; die Ecken werden komponentenweise normalisiert.
    pub fn new(corner_a: Vector, corner_b: Vector, biome: Biome) -> Self {
        Self {
            min: corner_a.min(corner_b),
            max: corner_a.max(corner_b),
            biome,
        }
    }

    /// Punkt liegt in der abgeschlossenen Box (Rand inklusive).
    pub fn contains(&self, point: Vector) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn size(&self) -> Vector {
        self.max - self.min
    }

    /// Die vier Randstrecken als (Startpunkt, Richtung): links, rechts, unten, oben.
    pub fn sides(&self) -> [(Vector, Vector); 4] {
        let size = self.size();
        let vertical = Vector::new(0.0, size.y);
        let horizontal = Vector::new(size.x, 0.0);
        [
            (self.min, vertical),
            (Vector::new(self.max.x, self.min.y), vertical),
            (self.min, horizontal),
            (Vector::new(self.min.x, self.max.y), horizontal),
        ]
    }
}
