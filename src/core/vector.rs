//! 2D-Vektorarithmetik für alle geometrischen Tests.
//!
//! Als Vektortyp dient `glam::DVec2` (x = Breite, y = Höhe). Die Erweiterung
//! `PlanarVector` ergänzt die Operationen, die glam anders benennt oder nicht hat.

use glam::DVec2;

/// Unveränderliches Koordinatenpaar (Breite, Höhe).
pub type Vector = DVec2;

/// Planare Zusatzoperationen auf [`Vector`].
pub trait PlanarVector: Copy {
    /// Erstellt einen Vektor aus Breite und Höhe.
    fn from_extent(width: f64, height: f64) -> Self;
    /// Skalares Kreuzprodukt `a.x * b.y - a.y * b.x`.
    fn cross(self, other: Self) -> f64;
    /// Quadrierte euklidische Norm.
    fn norm2(self) -> f64;
    /// Euklidische Norm.
    fn norm(self) -> f64;
}

impl PlanarVector for DVec2 {
    fn from_extent(width: f64, height: f64) -> Self {
        DVec2::new(width, height)
    }

    fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    fn norm2(self) -> f64 {
        self.dot(self)
    }

    fn norm(self) -> f64 {
        self.norm2().sqrt()
    }
}
