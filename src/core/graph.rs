//! Generischer bidirektionaler Graph (Arena) mit Bindungen, Verschmelzung und
//! Duplikat-Bereinigung.
//!
//! Knoten und Kanten liegen in zwei einfügegeordneten Arenen und werden über
//! nie wiederverwendete Handles (`NodeId`, `EdgeId`) adressiert. Eine Bindung
//! ist immer gegenseitig: steht eine Kante in der Liste eines Knotens, steht der
//! Knoten auch in der Endpunktliste der Kante.

use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Handle eines Knotens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

/// Handle einer Kante.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Verletzung einer strukturellen Graph-Invariante (Aufruferfehler).
///
/// Wird geprüft, bevor eine Operation den Graphen verändert: ein Fehler
/// hinterlässt den Graphen unverändert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralViolation {
    #[error("Knoten {0} existiert nicht")]
    UnknownNode(NodeId),
    #[error("Kante {0} existiert nicht")]
    UnknownEdge(EdgeId),
    #[error("Kante {edge} ist bereits an Knoten {node} gebunden")]
    AlreadyBound { edge: EdgeId, node: NodeId },
    #[error("Kante {edge} hätte mehr als zwei Endpunkte")]
    EdgeOverbound { edge: EdgeId },
    #[error("Bindung {edge} <-> {node} fehlt (Symmetrie verletzt)")]
    MissingBinding { edge: EdgeId, node: NodeId },
    #[error("Knoten {0} kann nicht mit sich selbst verschmolzen werden")]
    SelfMerge(NodeId),
    #[error("Kante von Knoten {0} zu sich selbst")]
    SelfLoop(NodeId),
}

/// Knoten-Eintrag: Nutzdaten plus geordnete Liste der inzidenten Kanten.
#[derive(Debug, Clone)]
pub struct GraphNode<N> {
    id: NodeId,
    /// Attribute des Knotens
    pub data: N,
    edges: Vec<EdgeId>,
}

impl<N> GraphNode<N> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Inzidente Kanten in Bindungsreihenfolge.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// Kanten-Eintrag: Nutzdaten plus geordnete Endpunktliste.
#[derive(Debug, Clone)]
pub struct GraphEdge<E> {
    id: EdgeId,
    /// Attribute der Kante
    pub data: E,
    nodes: Vec<NodeId>,
}

impl<E> GraphEdge<E> {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Endpunkte in Bindungsreihenfolge.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Beide Endpunkte, falls die Kante wohlgeformt ist.
    pub fn endpoint_pair(&self) -> Option<(NodeId, NodeId)> {
        match self.nodes.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}

/// Ergebnis einer Knoten-Verschmelzung.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeResult {
    /// Auf den Ziel-Knoten umgehängte Kanten
    pub rebound_edges: Vec<EdgeId>,
    /// Kanten, die Quelle und Ziel direkt verbanden und dabei wegfielen
    pub collapsed_edges: Vec<EdgeId>,
    /// Nach dem Umhängen entfernte Duplikat-Kanten
    pub removed_duplicates: Vec<EdgeId>,
}

/// Bidirektionaler Graph aus Knoten (`N`) und Kanten (`E`).
#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    nodes: IndexMap<NodeId, GraphNode<N>>,
    edges: IndexMap<EdgeId, GraphEdge<E>>,
    next_id: u64,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self {
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
            next_id: 0,
        }
    }
}

impl<N, E> Graph<N, E> {
    /// Erstellt einen leeren Graphen.
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Legt einen neuen, ungebundenen Knoten an.
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId(self.allocate_id());
        self.nodes.insert(
            id,
            GraphNode {
                id,
                data,
                edges: Vec::new(),
            },
        );
        id
    }

    /// Legt eine neue, ungebundene Kante an.
    pub fn add_edge(&mut self, data: E) -> EdgeId {
        let id = EdgeId(self.allocate_id());
        self.edges.insert(
            id,
            GraphEdge {
                id,
                data,
                nodes: Vec::new(),
            },
        );
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&GraphNode<N>> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut GraphNode<N>> {
        self.nodes.get_mut(&id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&GraphEdge<E>> {
        self.edges.get(&id)
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut GraphEdge<E>> {
        self.edges.get_mut(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterator über alle Knoten in Einfügereihenfolge.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode<N>> + Clone {
        self.nodes.values()
    }

    /// Iterator über alle Kanten in Einfügereihenfolge.
    pub fn edges(&self) -> impl Iterator<Item = &GraphEdge<E>> + Clone {
        self.edges.values()
    }

    /// Inzidente Kanten eines Knotens (leer bei unbekanntem Knoten).
    pub fn incident_edges(&self, node: NodeId) -> &[EdgeId] {
        self.nodes.get(&node).map(|n| n.edges.as_slice()).unwrap_or(&[])
    }

    /// Endpunkte einer Kante (leer bei unbekannter Kante).
    pub fn endpoints(&self, edge: EdgeId) -> &[NodeId] {
        self.edges.get(&edge).map(|e| e.nodes.as_slice()).unwrap_or(&[])
    }

    /// Beide Endpunkte einer wohlgeformten Kante.
    pub fn endpoint_pair(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges.get(&edge)?.endpoint_pair()
    }

    /// Nachbarknoten über alle inzidenten Kanten (mit Wiederholungen bei Mehrfachkanten).
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incident_edges(node).iter().flat_map(move |edge| {
            self.endpoints(*edge)
                .iter()
                .copied()
                .filter(move |other| *other != node)
        })
    }

    /// Erste Kante, die genau `a` und `b` verbindet.
    pub fn find_edge_between(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.incident_edges(a).iter().copied().find(|edge| {
            let nodes = self.endpoints(*edge);
            nodes.len() == 2 && nodes.contains(&a) && nodes.contains(&b)
        })
    }

    /// Knoten, die beide Kanten gemeinsam haben.
    pub fn shared_endpoints(&self, a: EdgeId, b: EdgeId) -> Vec<NodeId> {
        let other = self.endpoints(b);
        self.endpoints(a)
            .iter()
            .copied()
            .filter(|node| other.contains(node))
            .collect()
    }

    /// Zwei Kanten sind ähnlich, wenn sie exakt dieselbe Endpunktmenge haben.
    ///
    /// Unbekannte Kanten sind zu nichts ähnlich.
    pub fn is_similar(&self, a: EdgeId, b: EdgeId) -> bool {
        let (Some(a), Some(b)) = (self.edges.get(&a), self.edges.get(&b)) else {
            return false;
        };
        a.nodes.len() == b.nodes.len() && a.nodes.iter().all(|n| b.nodes.contains(n))
    }

    fn require_node(&self, id: NodeId) -> Result<&GraphNode<N>, StructuralViolation> {
        self.nodes
            .get(&id)
            .ok_or(StructuralViolation::UnknownNode(id))
    }

    fn require_edge(&self, id: EdgeId) -> Result<&GraphEdge<E>, StructuralViolation> {
        self.edges
            .get(&id)
            .ok_or(StructuralViolation::UnknownEdge(id))
    }

    /// Bindet eine Kante gegenseitig an die übergebenen Knoten.
    ///
    /// Eine Kante hat höchstens zwei verschiedene Endpunkte; Verstöße werden
    /// vor jeder Änderung gemeldet.
    pub fn bind(&mut self, edge: EdgeId, nodes: &[NodeId]) -> Result<(), StructuralViolation> {
        let current = self.require_edge(edge)?;
        if current.nodes.len() + nodes.len() > 2 {
            return Err(StructuralViolation::EdgeOverbound { edge });
        }
        for (i, node) in nodes.iter().enumerate() {
            self.require_node(*node)?;
            if current.nodes.contains(node) || nodes[..i].contains(node) {
                return Err(StructuralViolation::AlreadyBound { edge, node: *node });
            }
        }

        for node in nodes {
            self.link(edge, *node);
        }
        Ok(())
    }

    /// Löst die gegenseitigen Bindungen einer Kante zu den übergebenen Knoten.
    pub fn unbind(&mut self, edge: EdgeId, nodes: &[NodeId]) -> Result<(), StructuralViolation> {
        let current = self.require_edge(edge)?;
        for (i, node) in nodes.iter().enumerate() {
            let target = self.require_node(*node)?;
            let bound = current.nodes.contains(node) && target.edges.contains(&edge);
            if !bound || nodes[..i].contains(node) {
                return Err(StructuralViolation::MissingBinding { edge, node: *node });
            }
        }

        for node in nodes {
            self.unlink(edge, *node);
        }
        Ok(())
    }

    fn link(&mut self, edge: EdgeId, node: NodeId) {
        if let Some(e) = self.edges.get_mut(&edge) {
            e.nodes.push(node);
        }
        if let Some(n) = self.nodes.get_mut(&node) {
            n.edges.push(edge);
        }
    }

    fn unlink(&mut self, edge: EdgeId, node: NodeId) {
        let mut removed = 0;
        if let Some(e) = self.edges.get_mut(&edge) {
            if let Some(pos) = e.nodes.iter().position(|n| *n == node) {
                e.nodes.remove(pos);
                removed += 1;
            }
        }
        if let Some(n) = self.nodes.get_mut(&node) {
            if let Some(pos) = n.edges.iter().position(|e| *e == edge) {
                n.edges.remove(pos);
                removed += 1;
            }
        }
        debug_assert_eq!(removed, 2, "Bindung {edge} <-> {node} war einseitig");
    }

    /// Entfernt eine Kante samt aller Bindungen und gibt ihre Attribute zurück.
    pub fn remove_edge(&mut self, edge: EdgeId) -> Result<E, StructuralViolation> {
        let endpoints = self.require_edge(edge)?.nodes.clone();
        for node in endpoints {
            self.unlink(edge, node);
        }
        let removed = self
            .edges
            .shift_remove(&edge)
            .ok_or(StructuralViolation::UnknownEdge(edge))?;
        Ok(removed.data)
    }

    /// Entfernt einen Knoten; alle inzidenten Kanten werden vorher entfernt.
    pub fn remove_node(&mut self, node: NodeId) -> Result<N, StructuralViolation> {
        let incident = self.require_node(node)?.edges.clone();
        for edge in incident {
            self.remove_edge(edge)?;
        }
        let removed = self
            .nodes
            .shift_remove(&node)
            .ok_or(StructuralViolation::UnknownNode(node))?;
        debug_assert!(removed.edges.is_empty());
        Ok(removed.data)
    }

    /// Verschmilzt `source` in `target`.
    ///
    /// Jede Kante von `source` wird auf `target` umgehängt; Kanten, die dabei
    /// weniger als zwei Endpunkte behalten (direkte Verbindung source-target),
    /// werden gelöscht. Danach wird `source` entfernt und die Kanten von
    /// `target` werden dedupliziert, so dass keine zwei Kanten dieselben
    /// Endpunkte verbinden.
    pub fn merge_nodes(
        &mut self,
        source: NodeId,
        target: NodeId,
    ) -> Result<MergeResult, StructuralViolation> {
        if source == target {
            return Err(StructuralViolation::SelfMerge(source));
        }
        let incident = self.require_node(source)?.edges.clone();
        self.require_node(target)?;

        let mut result = MergeResult::default();
        for edge in incident {
            if !self.endpoints(edge).contains(&target) {
                self.link(edge, target);
            }
            self.unlink(edge, source);
            if self.endpoints(edge).len() < 2 {
                self.remove_edge(edge)?;
                result.collapsed_edges.push(edge);
            } else {
                result.rebound_edges.push(edge);
            }
        }

        self.remove_node(source)?;
        result.removed_duplicates = self.collapse_duplicate_edges(target)?;
        Ok(result)
    }

    /// Entfernt alle Kanten an `node`, die eine frühere Kante (in
    /// Bindungsreihenfolge) mit identischer Endpunktmenge duplizieren.
    pub fn collapse_duplicate_edges(
        &mut self,
        node: NodeId,
    ) -> Result<Vec<EdgeId>, StructuralViolation> {
        let incident = self.require_node(node)?.edges.clone();
        let mut seen: HashMap<Vec<NodeId>, EdgeId> = HashMap::new();
        let mut removed = Vec::new();

        for edge in incident {
            let mut key = self.endpoints(edge).to_vec();
            key.sort_unstable();
            if seen.contains_key(&key) {
                self.remove_edge(edge)?;
                removed.push(edge);
            } else {
                seen.insert(key, edge);
            }
        }
        Ok(removed)
    }
}

/// Listet Knoten und Kanten mit Positions-Labels (`N0`, `L3`).
impl<N, E> fmt::Display for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.values().enumerate() {
            let mut labels: Vec<String> = node
                .edges
                .iter()
                .filter_map(|e| self.edges.get_index_of(e))
                .map(|j| format!("L{j}"))
                .collect();
            labels.sort();
            writeln!(f, "Knoten N{i} → {}", labels.join(", "))?;
        }
        for (i, edge) in self.edges.values().enumerate() {
            let mut labels: Vec<String> = edge
                .nodes
                .iter()
                .filter_map(|n| self.nodes.get_index_of(n))
                .map(|j| format!("N{j}"))
                .collect();
            labels.sort();
            writeln!(f, "Kante L{i} → {}", labels.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
