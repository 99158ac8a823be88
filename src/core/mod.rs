//! Core-Domänentypen: Vektoren, Graph, Geometrie, Hindernisse, Level.

pub mod flow;
pub mod geometry;
/// Generischer Knoten/Kanten-Container
///
/// - Graph: Arena aller Knoten und Kanten mit gegenseitigen Bindungen
/// - GraphNode / GraphEdge: Einträge mit Nutzdaten und Bindungslisten
pub mod graph;
pub mod junction;
pub mod level;
pub mod obstacle;
pub mod vector;

pub use flow::{FlowRequirement, RouteRecord};
pub use geometry::{
    find_crossing, nearest_edge, nearest_node, network_is_valid, obstacle_intersects_segment,
    segment_endpoints_intersect, segment_intersect, EdgeMatch, NodeMatch, Placed, Tiered,
    COLLINEAR_TOLERANCE,
};
pub use graph::{EdgeId, Graph, GraphEdge, GraphNode, MergeResult, NodeId, StructuralViolation};
pub use junction::{Color, Junction, Road, TIERS};
pub use level::{Level, RoadNetwork};
pub use obstacle::{Biome, Obstacle};
pub use vector::{PlanarVector, Vector};
