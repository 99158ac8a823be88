//! Verbindungsanforderungen (Liaisons) zwischen Routen.

use super::graph::NodeId;

/// Geforderte Verbindung von der Einfahrt einer Route zur Ausfahrt einer Route.
///
/// Der Durchsatz `flow` wird deklariert, aber bisher nicht erzwungen: für die
/// Vollständigkeit eines Levels zählt nur die Erreichbarkeit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowRequirement {
    /// Einfahrt der Quell-Route
    pub source: NodeId,
    /// Ausfahrt der Ziel-Route
    pub target: NodeId,
    /// Geforderter Durchsatz
    pub flow: u32,
    /// Name der Quell-Route (für den Export)
    pub source_route: String,
    /// Name der Ziel-Route (für den Export)
    pub target_route: String,
}

/// Ein- und Ausfahrtsknoten einer geladenen Route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub name: String,
    pub entry: Option<NodeId>,
    pub exit: Option<NodeId>,
}
