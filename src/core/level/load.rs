//! Aufbau eines Levels aus einer Level-Datei.

use super::Level;
use crate::core::{
    network_is_valid, Biome, FlowRequirement, Junction, NodeId, Obstacle, Road, RouteRecord,
    TIERS,
};
use crate::level_file::{LevelFile, LoadError, NetworkDecl, NodeRef};
use std::collections::HashMap;

impl Level {
    /// Baut ein Level aus einer geparsten Level-Datei.
    ///
    /// Pro Route entstehen eine feste Einfahrt und/oder Ausfahrt in einer
    /// gemeinsamen Zufallsfarbe auf Ebene 0. Jede Liaison wird zu einer
    /// Anforderung von der Einfahrt der Quell-Route zur Ausfahrt der Ziel-Route.
    pub fn load(file: &LevelFile, color_seed: Option<u64>) -> Result<Level, LoadError> {
        let mut level = Level::new(color_seed);
        let mut routes: HashMap<&str, RouteRecord> = HashMap::new();

        for route in &file.routes {
            if route.entry.is_none() && route.exit.is_none() {
                return Err(LoadError::InvalidRoute(route.name.clone()));
            }
            if routes.contains_key(route.name.as_str()) {
                return Err(LoadError::DuplicateRoute(route.name.clone()));
            }

            let color = level.random_color(0);
            let entry = route.entry.map(|extent| {
                level
                    .graph
                    .add_node(Junction::fixed(extent.to_vector(), color, Biome::Entry))
            });
            let exit = route.exit.map(|extent| {
                level
                    .graph
                    .add_node(Junction::fixed(extent.to_vector(), color, Biome::Exit))
            });

            let record = RouteRecord {
                name: route.name.clone(),
                entry,
                exit,
            };
            level.routes.push(record.clone());
            routes.insert(route.name.as_str(), record);
        }

        for obstacle in &file.obstacles {
            level.obstacles.push(Obstacle::new(
                obstacle.position.inf.to_vector(),
                obstacle.position.sup.to_vector(),
                obstacle.role,
            ));
        }

        for liaison in &file.liaisons {
            let source_route = routes
                .get(liaison.source.as_str())
                .ok_or_else(|| LoadError::UnknownRoute(liaison.source.clone()))?;
            let target_route = routes
                .get(liaison.target.as_str())
                .ok_or_else(|| LoadError::UnknownRoute(liaison.target.clone()))?;

            let source = source_route.entry.ok_or_else(|| LoadError::MissingEndpoint {
                route: liaison.source.clone(),
                side: "Einfahrt",
            })?;
            let target = target_route.exit.ok_or_else(|| LoadError::MissingEndpoint {
                route: liaison.target.clone(),
                side: "Ausfahrt",
            })?;

            level.requirements.push(FlowRequirement {
                source,
                target,
                flow: liaison.flow,
                source_route: liaison.source.clone(),
                target_route: liaison.target.clone(),
            });
        }

        if let Some(network) = &file.network {
            level.load_network(network, &routes)?;
            if !network_is_valid(&level.graph) {
                log::warn!("Geladenes Netz enthält Kreuzungen");
            }
        }

        log::info!(
            "Level geladen: {} Routen, {} Hindernisse, {} Anforderungen, {} Knoten, {} Straßen",
            level.routes.len(),
            level.obstacles.len(),
            level.requirements.len(),
            level.graph.node_count(),
            level.graph.edge_count()
        );
        Ok(level)
    }

    /// Stellt gespeicherte Knoten und Straßen wieder her.
    fn load_network(
        &mut self,
        network: &NetworkDecl,
        routes: &HashMap<&str, RouteRecord>,
    ) -> Result<(), LoadError> {
        let mut junctions: Vec<NodeId> = Vec::with_capacity(network.junctions.len());
        for (index, decl) in network.junctions.iter().enumerate() {
            if decl.tier >= TIERS {
                return Err(LoadError::InvalidNetwork(format!(
                    "Knoten {} hat ungültige Ebene {}",
                    index, decl.tier
                )));
            }
            let color = self.random_color(decl.tier);
            let node = self.graph.add_node(Junction::movable(
                decl.position.to_vector(),
                color,
                decl.tier,
            ));
            junctions.push(node);
        }

        let resolve = |node_ref: &NodeRef| -> Result<NodeId, LoadError> {
            let resolved = match node_ref {
                NodeRef::Entry(name) => routes.get(name.as_str()).and_then(|r| r.entry),
                NodeRef::Exit(name) => routes.get(name.as_str()).and_then(|r| r.exit),
                NodeRef::Junction(index) => junctions.get(*index).copied(),
            };
            resolved.ok_or_else(|| {
                LoadError::InvalidNetwork(format!("Verweis {:?} nicht auflösbar", node_ref))
            })
        };

        for (index, decl) in network.roads.iter().enumerate() {
            if decl.tier >= TIERS {
                return Err(LoadError::InvalidNetwork(format!(
                    "Straße {} hat ungültige Ebene {}",
                    index, decl.tier
                )));
            }
            let a = resolve(&decl.ends[0])?;
            let b = resolve(&decl.ends[1])?;
            if a == b {
                return Err(LoadError::InvalidNetwork(format!(
                    "Straße {} verbindet einen Knoten mit sich selbst",
                    index
                )));
            }
            if self.graph.find_edge_between(a, b).is_some() {
                log::warn!("Doppelte Straße {} im Netz wird übersprungen", index);
                continue;
            }

            let color = self.random_color(decl.tier);
            let edge = self.graph.add_edge(Road::new(color, decl.tier));
            self.graph
                .bind(edge, &[a, b])
                .map_err(|violation| LoadError::InvalidNetwork(violation.to_string()))?;
        }
        Ok(())
    }
}
