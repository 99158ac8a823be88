//! Attribute von Knoten (Junction) und Kanten (Road) sowie Ebenen-Farblogik.

use super::geometry::{Placed, Tiered};
use super::obstacle::Biome;
use super::vector::Vector;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Anzahl der Höhenebenen (Tiers).
pub const TIERS: u8 = 3;

/// Helligkeitsschritt pro Ebene (volle Skala / `TIERS`).
const TIER_INTENSITY_STEP: f64 = 255.0 / TIERS as f64;

/// RGB-Farbe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Color {
    /// Zufallsfarbe, deren Kanäle im Helligkeitsband der Ebene liegen.
    pub fn random_for_tier<R: Rng + ?Sized>(tier: u8, rng: &mut R) -> Self {
        let tier = tier.min(TIERS - 1) as f64;
        let low = (TIER_INTENSITY_STEP * tier).round() as u8;
        let high = (TIER_INTENSITY_STEP * (tier + 1.0)).round() as u8;
        Self([
            rng.gen_range(low..=high),
            rng.gen_range(low..=high),
            rng.gen_range(low..=high),
        ])
    }

    /// Verschiebt die Helligkeit um `steps` Ebenen, je Kanal auf [0, 255] begrenzt.
    pub fn shifted_by_tiers(self, steps: i32) -> Self {
        let delta = TIER_INTENSITY_STEP * steps as f64;
        Self(self.0.map(|c| (c as f64 + delta).clamp(0.0, 255.0).round() as u8))
    }
}

/// Attribute eines Knotens.
#[derive(Debug, Clone, PartialEq)]
pub struct Junction {
    pub position: Vector,
    pub color: Color,
    pub tier: u8,
    /// Ein- und Ausfahrten sind fest; nur bewegliche Knoten dürfen verschoben,
    /// gelöscht oder weg-verschmolzen werden.
    pub movable: bool,
    pub biome: Biome,
}

impl Junction {
    /// Beweglicher Knoten ohne Biom.
    pub fn movable(position: Vector, color: Color, tier: u8) -> Self {
        Self {
            position,
            color,
            tier,
            movable: true,
            biome: Biome::None,
        }
    }

    /// Fester Knoten einer Route (Ein- oder Ausfahrt) auf Ebene 0.
    pub fn fixed(position: Vector, color: Color, biome: Biome) -> Self {
        Self {
            position,
            color,
            tier: 0,
            movable: false,
            biome,
        }
    }
}

/// Attribute einer Straße (Kante).
#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    pub color: Color,
    pub tier: u8,
}

impl Road {
    pub fn new(color: Color, tier: u8) -> Self {
        Self { color, tier }
    }
}

impl Placed for Junction {
    fn position(&self) -> Vector {
        self.position
    }
}

impl Tiered for Road {
    fn tier(&self) -> u8 {
        self.tier
    }
}
