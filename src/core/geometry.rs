//! Geometrische Gültigkeitsprüfungen: Streckenschnitt, Kreuzungsfreiheit je
//! Ebene, nächster Knoten/nächste Kante, Hindernis-Kollision.

use super::graph::{EdgeId, Graph, NodeId};
use super::obstacle::Obstacle;
use super::vector::{PlanarVector, Vector};

/// Toleranz für den Kollinearitätstest paralleler Strecken (|cos| >= 1 - Toleranz).
pub const COLLINEAR_TOLERANCE: f64 = 1e-7;

/// Knoten-Attribute mit Weltposition.
pub trait Placed {
    fn position(&self) -> Vector;
}

/// Kanten-Attribute mit Höhenebene.
pub trait Tiered {
    fn tier(&self) -> u8;
}

/// Treffer einer Knotensuche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeMatch {
    pub node_id: NodeId,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Treffer einer Kantensuche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeMatch {
    pub edge_id: EdgeId,
    /// Lotabstand zur Kante
    pub distance: f64,
}

/// Prüft, ob sich die Strecken `p1 → p1+v1` und `p2 → p2+v2` schneiden.
///
/// Löst `v1*t1 - v2*t2 = p2 - p1`; bei nicht verschwindender Determinante
/// liegt ein Schnitt vor, wenn beide Parameter in `[0, 1]` liegen. Parallele
/// Strecken gelten als schneidend, wenn sie auf derselben Geraden liegen.
///
/// Entartete Fälle: identische Startpunkte berühren sich (`true`); ist eine
/// Strecke ein Punkt, wird die Kollinearität gegen die andere Richtung
/// geprüft; sind beide Punkte, schneiden sie sich nur bei Gleichheit.
pub fn segment_intersect(p1: Vector, v1: Vector, p2: Vector, v2: Vector) -> bool {
    let offset = p2 - p1;
    let det = v1.y * v2.x - v1.x * v2.y;

    if det != 0.0 {
        let t1 = (v2.x * offset.y - v2.y * offset.x) / det;
        let t2 = (v1.x * offset.y - v1.y * offset.x) / det;
        return (0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2);
    }

    let offset_norm = offset.norm();
    if offset_norm == 0.0 {
        return true;
    }
    let direction = if v1.norm2() >= v2.norm2() { v1 } else { v2 };
    let direction_norm = direction.norm();
    if direction_norm == 0.0 {
        return false;
    }
    let cosine = direction.dot(offset).abs() / (direction_norm * offset_norm);
    cosine >= 1.0 - COLLINEAR_TOLERANCE
}

/// Wie [`segment_intersect`], aber mit Start- und Endpunkten.
pub fn segment_endpoints_intersect(a0: Vector, a1: Vector, b0: Vector, b1: Vector) -> bool {
    segment_intersect(a0, a1 - a0, b0, b1 - b0)
}

/// Start- und Endpunkt einer wohlgeformten Kante.
pub fn edge_segment<N: Placed, E>(graph: &Graph<N, E>, edge: EdgeId) -> Option<(Vector, Vector)> {
    let (a, b) = graph.endpoint_pair(edge)?;
    Some((
        graph.node(a)?.data.position(),
        graph.node(b)?.data.position(),
    ))
}

/// Findet das erste Kantenpaar gleicher Ebene ohne gemeinsamen Knoten, das sich schneidet.
pub fn find_crossing<N: Placed, E: Tiered>(graph: &Graph<N, E>) -> Option<(EdgeId, EdgeId)> {
    let segments: Vec<(EdgeId, u8, Vector, Vector)> = graph
        .edges()
        .filter_map(|edge| {
            let (start, end) = edge_segment(graph, edge.id())?;
            Some((edge.id(), edge.data.tier(), start, end))
        })
        .collect();

    for (i, (edge_a, tier_a, a0, a1)) in segments.iter().enumerate() {
        for (edge_b, tier_b, b0, b1) in &segments[i + 1..] {
            if tier_a != tier_b || !graph.shared_endpoints(*edge_a, *edge_b).is_empty() {
                continue;
            }
            if segment_endpoints_intersect(*a0, *a1, *b0, *b1) {
                return Some((*edge_a, *edge_b));
            }
        }
    }
    None
}

/// Ein Netz ist gültig, wenn sich keine zwei Kanten gleicher Ebene ohne
/// gemeinsamen Knoten schneiden.
pub fn network_is_valid<N: Placed, E: Tiered>(graph: &Graph<N, E>) -> bool {
    match find_crossing(graph) {
        Some((a, b)) => {
            log::debug!("Kreuzung auf gleicher Ebene: {} x {}", a, b);
            false
        }
        None => true,
    }
}

/// Nächster Knoten zu `position`, ohne die ausgeschlossenen Knoten.
///
/// Bei Gleichstand gewinnt der zuerst iterierte Knoten.
pub fn nearest_node<N: Placed, E>(
    graph: &Graph<N, E>,
    position: Vector,
    excluded: &[NodeId],
) -> Option<NodeMatch> {
    let mut best: Option<(NodeId, f64)> = None;
    for node in graph.nodes() {
        if excluded.contains(&node.id()) {
            continue;
        }
        let d2 = (node.data.position() - position).norm2();
        if best.is_none_or(|(_, best_d2)| d2 < best_d2) {
            best = Some((node.id(), d2));
        }
    }
    best.map(|(node_id, d2)| NodeMatch {
        node_id,
        distance: d2.sqrt(),
    })
}

/// Nächste Kante zu `position` (Lotabstand zur Geraden).
///
/// Eine Kante kommt nur in Frage, wenn der Lotfußpunkt innerhalb der Strecke liegt.
pub fn nearest_edge<N: Placed, E>(graph: &Graph<N, E>, position: Vector) -> Option<EdgeMatch> {
    let mut best: Option<EdgeMatch> = None;
    for edge in graph.edges() {
        let Some((start, end)) = edge_segment(graph, edge.id()) else {
            continue;
        };
        let along = end - start;
        let length2 = along.norm2();
        if length2 == 0.0 {
            continue;
        }
        let to_point = position - start;
        let projection = along.dot(to_point);
        if !(0.0..=length2).contains(&projection) {
            continue;
        }
        let distance = (along.cross(to_point) / length2.sqrt()).abs();
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(EdgeMatch {
                edge_id: edge.id(),
                distance,
            });
        }
    }
    best
}

/// Prüft, ob die Strecke `p → q` einen der vier Ränder des Hindernisses schneidet.
pub fn obstacle_intersects_segment(obstacle: &Obstacle, p: Vector, q: Vector) -> bool {
    let direction = q - p;
    obstacle
        .sides()
        .iter()
        .any(|(start, side)| segment_intersect(p, direction, *start, *side))
}
