//! Das Level: Straßennetz, Hindernisse und Verbindungsanforderungen.
//!
//! Jede Bearbeitung folgt demselben Ablauf: Vorschlag → Prüfung → Übernahme
//! nur bei Gültigkeit. Abgelehnte Vorschläge lassen das Level unverändert.

mod load;

use super::geometry::{
    edge_segment, nearest_edge, nearest_node, network_is_valid, obstacle_intersects_segment,
    segment_endpoints_intersect, EdgeMatch, NodeMatch,
};
use super::{
    Color, EdgeId, FlowRequirement, Graph, Junction, NodeId, Obstacle, Road, RouteRecord,
    StructuralViolation, Vector, TIERS,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashSet, VecDeque};

/// Straßennetz eines Levels.
pub type RoadNetwork = Graph<Junction, Road>;

/// Vollständiger Zustand eines Levels.
#[derive(Debug, Clone)]
pub struct Level {
    graph: RoadNetwork,
    obstacles: Vec<Obstacle>,
    requirements: Vec<FlowRequirement>,
    routes: Vec<RouteRecord>,
    rng: StdRng,
}

impl Default for Level {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Level {
    /// Erstellt ein leeres Level. Mit `color_seed` sind die Zufallsfarben reproduzierbar.
    pub fn new(color_seed: Option<u64>) -> Self {
        let rng = match color_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            graph: Graph::new(),
            obstacles: Vec::new(),
            requirements: Vec::new(),
            routes: Vec::new(),
            rng,
        }
    }

    pub fn graph(&self) -> &RoadNetwork {
        &self.graph
    }

    /// Direkter Graph-Zugriff für die Eingabeschicht (ohne Gültigkeitsprüfung).
    pub fn graph_mut(&mut self) -> &mut RoadNetwork {
        &mut self.graph
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn requirements(&self) -> &[FlowRequirement] {
        &self.requirements
    }

    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    pub fn junction(&self, node: NodeId) -> Option<&Junction> {
        self.graph.node(node).map(|n| &n.data)
    }

    pub fn road(&self, edge: EdgeId) -> Option<&Road> {
        self.graph.edge(edge).map(|e| &e.data)
    }

    /// Kanten sortiert nach Ebene (Zeichenreihenfolge für die Darstellung).
    pub fn roads_by_tier(&self) -> Vec<EdgeId> {
        let mut roads: Vec<(u8, EdgeId)> = self
            .graph
            .edges()
            .map(|edge| (edge.data.tier, edge.id()))
            .collect();
        roads.sort_by_key(|(tier, _)| *tier);
        roads.into_iter().map(|(_, edge)| edge).collect()
    }

    /// Zufallsfarbe im Helligkeitsband der Ebene.
    pub fn random_color(&mut self, tier: u8) -> Color {
        Color::random_for_tier(tier, &mut self.rng)
    }

    pub fn nearest_node(&self, position: Vector, excluded: &[NodeId]) -> Option<NodeMatch> {
        nearest_node(&self.graph, position, excluded)
    }

    pub fn nearest_edge(&self, position: Vector) -> Option<EdgeMatch> {
        nearest_edge(&self.graph, position)
    }

    /// Prüft, ob die Position in der (abgeschlossenen) Box eines Hindernisses liegt.
    pub fn point_in_obstacle(&self, position: Vector) -> bool {
        self.obstacles.iter().any(|o| o.contains(position))
    }

    /// Prüft eine hypothetische Strecke gegen Hindernisränder und gegen alle
    /// Kanten derselben Ebene, die keinen der `endpoints` berühren.
    fn segment_is_clear(
        &self,
        start: Vector,
        end: Vector,
        tier: u8,
        endpoints: &[NodeId],
        ignored_edge: Option<EdgeId>,
    ) -> bool {
        if self
            .obstacles
            .iter()
            .any(|obstacle| obstacle_intersects_segment(obstacle, start, end))
        {
            return false;
        }

        self.graph.edges().all(|other| {
            if Some(other.id()) == ignored_edge
                || other.data.tier != tier
                || other.nodes().iter().any(|n| endpoints.contains(n))
            {
                return true;
            }
            match edge_segment(&self.graph, other.id()) {
                Some((a, b)) => !segment_endpoints_intersect(start, end, a, b),
                None => true,
            }
        })
    }

    /// Prüft, ob `node` nach `new_position` verschoben werden dürfte.
    ///
    /// Reines Prädikat: das Level wird nicht verändert. Abgelehnt wird, wenn
    /// die Position in einem Hindernis liegt, eine inzidente Kante einen
    /// Hindernisrand schneidet oder eine Kante gleicher Ebene ohne gemeinsamen
    /// Knoten kreuzt.
    pub fn validate_move(
        &self,
        node: NodeId,
        new_position: Vector,
    ) -> Result<bool, StructuralViolation> {
        let entry = self
            .graph
            .node(node)
            .ok_or(StructuralViolation::UnknownNode(node))?;

        if self.point_in_obstacle(new_position) {
            log::debug!("Verschiebung von {} abgelehnt: Position in Hindernis", node);
            return Ok(false);
        }

        for edge in entry.edges() {
            let Some((a, b)) = self.graph.endpoint_pair(*edge) else {
                continue;
            };
            let other = if a == node { b } else { a };
            let Some(other_junction) = self.junction(other) else {
                continue;
            };
            let Some(road) = self.road(*edge) else {
                continue;
            };
            if !self.segment_is_clear(
                new_position,
                other_junction.position,
                road.tier,
                &[node, other],
                Some(*edge),
            ) {
                log::debug!(
                    "Verschiebung von {} abgelehnt: Kante {} wäre ungültig",
                    node,
                    edge
                );
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Verschiebt `node`, falls [`Level::validate_move`] zustimmt.
    ///
    /// Feste Routenknoten werden nie verschoben.
    pub fn commit_move(
        &mut self,
        node: NodeId,
        new_position: Vector,
    ) -> Result<bool, StructuralViolation> {
        if !self.validate_move(node, new_position)? {
            return Ok(false);
        }
        if self.junction(node).is_some_and(|junction| !junction.movable) {
            log::warn!("Knoten {} ist fest und kann nicht verschoben werden", node);
            return Ok(false);
        }
        if let Some(entry) = self.graph.node_mut(node) {
            entry.data.position = new_position;
        }
        Ok(true)
    }

    /// Ändert die Ebene einer Straße um `delta` Stufen.
    ///
    /// Abgelehnt, wenn die Zielebene außerhalb `[0, TIERS)` liegt oder das
    /// Netz danach eine Kreuzung enthält. Bei Erfolg wird die Farbe pro Stufe
    /// um `255 / TIERS` heller bzw. dunkler.
    pub fn change_tier(&mut self, edge: EdgeId, delta: i32) -> Result<bool, StructuralViolation> {
        let road = self
            .graph
            .edge_mut(edge)
            .ok_or(StructuralViolation::UnknownEdge(edge))?;
        let old_tier = road.data.tier;
        let Some(new_tier) = i32::from(old_tier)
            .checked_add(delta)
            .and_then(|tier| u8::try_from(tier).ok())
            .filter(|tier| delta != 0 && *tier < TIERS)
        else {
            return Ok(false);
        };

        road.data.tier = new_tier;
        if !network_is_valid(&self.graph) {
            if let Some(road) = self.graph.edge_mut(edge) {
                road.data.tier = old_tier;
            }
            log::debug!("Ebenenwechsel von {} abgelehnt: Kreuzung", edge);
            return Ok(false);
        }

        if let Some(road) = self.graph.edge_mut(edge) {
            road.data.color = road.data.color.shifted_by_tiers(delta);
        }
        log::info!("Straße {}: Ebene {} → {}", edge, old_tier, new_tier);
        Ok(true)
    }

    /// Breitensuche über Knoten → Kante → Knoten.
    pub fn is_connected(&self, a: NodeId, b: NodeId) -> bool {
        if !self.graph.contains_node(a) || !self.graph.contains_node(b) {
            return false;
        }
        let mut visited: HashSet<NodeId> = HashSet::from([a]);
        let mut queue = VecDeque::from([a]);
        while let Some(current) = queue.pop_front() {
            if current == b {
                return true;
            }
            for next in self.graph.neighbors(current) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        false
    }

    /// Alle Anforderungen sind erfüllt, wenn ihre Endpunkte verbunden sind.
    pub fn is_complete(&self) -> bool {
        self.requirements.iter().all(|requirement| {
            let connected = self.is_connected(requirement.source, requirement.target);
            log::debug!(
                "Anforderung {} → {} (Fluss {}): {}",
                requirement.source_route,
                requirement.target_route,
                requirement.flow,
                if connected { "verbunden" } else { "offen" }
            );
            connected
        })
    }

    /// Fügt einen beweglichen Knoten ein (abgelehnt innerhalb von Hindernissen).
    pub fn add_junction(&mut self, position: Vector, color: Color, tier: u8) -> Option<NodeId> {
        if self.point_in_obstacle(position) {
            log::debug!("Knoten bei ({:.1}, {:.1}) liegt in Hindernis", position.x, position.y);
            return None;
        }
        let node = self
            .graph
            .add_node(Junction::movable(position, color, tier.min(TIERS - 1)));
        log::info!(
            "Knoten {} an Position ({:.1}, {:.1}) hinzugefügt",
            node,
            position.x,
            position.y
        );
        Some(node)
    }

    /// Verbindet zwei Knoten mit einer Straße in Farbe und Ebene von `from`.
    ///
    /// Abgelehnt (`None`), wenn bereits eine Straße existiert oder die neue
    /// Straße ein Hindernis bzw. eine Straße gleicher Ebene kreuzen würde.
    pub fn connect(
        &mut self,
        from: NodeId,
        to: NodeId,
    ) -> Result<Option<EdgeId>, StructuralViolation> {
        if from == to {
            return Err(StructuralViolation::SelfLoop(from));
        }
        let start = self
            .junction(from)
            .ok_or(StructuralViolation::UnknownNode(from))?
            .clone();
        let end = self
            .junction(to)
            .ok_or(StructuralViolation::UnknownNode(to))?
            .position;

        if self.graph.find_edge_between(from, to).is_some() {
            log::warn!("Straße {}→{} existiert bereits", from, to);
            return Ok(None);
        }
        if !self.segment_is_clear(start.position, end, start.tier, &[from, to], None) {
            log::debug!("Straße {}→{} abgelehnt: Kreuzung", from, to);
            return Ok(None);
        }

        let edge = self.graph.add_edge(Road::new(start.color, start.tier));
        self.graph.bind(edge, &[from, to])?;
        log::info!("Straße {}: {}→{} (Ebene {})", edge, from, to, start.tier);
        Ok(Some(edge))
    }

    /// Teilt eine Straße an `position` durch einen neuen beweglichen Knoten.
    ///
    /// Beide Teilstraßen erben Farbe und Ebene. Gibt den neuen Knoten zurück
    /// oder `None`, wenn eine Teilstraße ungültig wäre.
    pub fn split_road(
        &mut self,
        edge: EdgeId,
        position: Vector,
    ) -> Result<Option<NodeId>, StructuralViolation> {
        let road = self
            .road(edge)
            .ok_or(StructuralViolation::UnknownEdge(edge))?
            .clone();
        let Some((a, b)) = self.graph.endpoint_pair(edge) else {
            return Ok(None);
        };
        let (Some(pos_a), Some(pos_b)) = (
            self.junction(a).map(|j| j.position),
            self.junction(b).map(|j| j.position),
        ) else {
            return Ok(None);
        };

        if self.point_in_obstacle(position)
            || !self.segment_is_clear(pos_a, position, road.tier, &[a], Some(edge))
            || !self.segment_is_clear(position, pos_b, road.tier, &[b], Some(edge))
        {
            log::debug!("Teilung von {} abgelehnt", edge);
            return Ok(None);
        }

        let node = self
            .graph
            .add_node(Junction::movable(position, road.color, road.tier));
        for end in [a, b] {
            let half = self.graph.add_edge(road.clone());
            self.graph.bind(half, &[node, end])?;
        }
        self.graph.remove_edge(edge)?;
        log::info!("Straße {} bei Knoten {} geteilt", edge, node);
        Ok(Some(node))
    }

    /// Entfernt einen beweglichen Knoten samt Straßen; feste Knoten bleiben.
    pub fn remove_junction(&mut self, node: NodeId) -> Result<bool, StructuralViolation> {
        let junction = self
            .junction(node)
            .ok_or(StructuralViolation::UnknownNode(node))?;
        if !junction.movable {
            log::warn!("Knoten {} ist fest und kann nicht gelöscht werden", node);
            return Ok(false);
        }
        self.graph.remove_node(node)?;
        log::info!("Knoten {} gelöscht", node);
        Ok(true)
    }

    pub fn remove_road(&mut self, edge: EdgeId) -> Result<(), StructuralViolation> {
        self.graph.remove_edge(edge)?;
        log::info!("Straße {} gelöscht", edge);
        Ok(())
    }

    /// Verschmilzt einen gezogenen Knoten mit einem anderen.
    ///
    /// Ist `other` beweglich, geht er in `dragged` auf, sonst geht `dragged`
    /// im festen `other` auf. Die Verschmelzung wird an einer Kopie geprüft
    /// und nur übernommen, wenn das Netz gültig bleibt. Gibt den
    /// überlebenden Knoten zurück.
    pub fn merge_junctions(
        &mut self,
        dragged: NodeId,
        other: NodeId,
    ) -> Result<Option<NodeId>, StructuralViolation> {
        let dragged_movable = self
            .junction(dragged)
            .ok_or(StructuralViolation::UnknownNode(dragged))?
            .movable;
        let other_movable = self
            .junction(other)
            .ok_or(StructuralViolation::UnknownNode(other))?
            .movable;

        let (source, target) = if other_movable {
            (other, dragged)
        } else if dragged_movable {
            (dragged, other)
        } else {
            log::warn!("Feste Knoten {} und {} sind nicht verschmelzbar", dragged, other);
            return Ok(None);
        };

        log::debug!("*** Vorher\n{}", self.graph);
        let mut candidate = self.graph.clone();
        let result = candidate.merge_nodes(source, target)?;

        let survivor_clear = candidate
            .incident_edges(target)
            .iter()
            .filter_map(|edge| edge_segment(&candidate, *edge))
            .all(|(start, end)| {
                !self
                    .obstacles
                    .iter()
                    .any(|obstacle| obstacle_intersects_segment(obstacle, start, end))
            });
        if !survivor_clear || !network_is_valid(&candidate) {
            log::debug!("Verschmelzung {} → {} abgelehnt", source, target);
            return Ok(None);
        }

        self.graph = candidate;
        log::info!(
            "Knoten {} in {} verschmolzen ({} umgehängt, {} entfallen, {} Duplikate)",
            source,
            target,
            result.rebound_edges.len(),
            result.collapsed_edges.len(),
            result.removed_duplicates.len()
        );
        log::debug!("*** Nachher\n{}", self.graph);
        Ok(Some(target))
    }
}

#[cfg(test)]
mod tests;
