use crate::core::Vector;
use std::path::PathBuf;

/// Zeiger-Taste bzw. Mausrad-Richtung eines Klicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Taste: auswählen, teilen, hinzufügen
    Primary,
    /// Rechte Taste: löschen
    Secondary,
    /// Mausrad hoch: Ebene erhöhen
    WheelUp,
    /// Mausrad runter: Ebene senken
    WheelDown,
}

/// Editor-Intents sind Eingaben aus dem Host ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorIntent {
    /// Taste an Weltposition gedrückt
    PointerPressed {
        position: Vector,
        button: PointerButton,
    },
    /// Zeiger an neue Weltposition bewegt
    PointerMoved { position: Vector },
    /// Taste an Weltposition losgelassen
    PointerReleased { position: Vector },
    /// Laufende Aktion abbrechen (Escape)
    Cancel,
    /// Level-Datei wurde zum Laden ausgewählt
    LevelFileSelected { path: PathBuf },
    /// Level speichern (None = aktueller Pfad)
    SaveRequested { path: Option<PathBuf> },
}
