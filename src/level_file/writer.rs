//! Writer für Level-Dokumente.

use super::format::{
    BoundsDecl, Extent, JunctionDecl, LevelFile, LiaisonDecl, NetworkDecl, NodeRef,
    ObstacleDecl, RoadDecl, RouteDecl,
};
use super::LoadError;
use crate::core::{Level, NodeId};
use std::collections::HashMap;
use std::path::Path;

/// Serialisiert ein Level als JSON (inklusive des gebauten Netzes).
pub fn write_level(level: &Level) -> Result<String, LoadError> {
    let file = to_level_file(level)?;
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Schreibt ein Level als JSON-Datei.
pub fn save_level_file(level: &Level, path: &Path) -> Result<(), LoadError> {
    let content = write_level(level)?;
    std::fs::write(path, content).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Level gespeichert nach: {}", path.display());
    Ok(())
}

/// Überführt den Level-Zustand in das Dateiformat.
pub fn to_level_file(level: &Level) -> Result<LevelFile, LoadError> {
    let position_of = |node: NodeId| -> Result<Extent, LoadError> {
        level
            .junction(node)
            .map(|j| Extent::from(j.position))
            .ok_or_else(|| LoadError::InvalidNetwork(format!("Routenknoten {} fehlt", node)))
    };

    let mut refs: HashMap<NodeId, NodeRef> = HashMap::new();
    let mut routes = Vec::with_capacity(level.routes().len());
    for route in level.routes() {
        let entry = route.entry.map(position_of).transpose()?;
        let exit = route.exit.map(position_of).transpose()?;
        if let Some(node) = route.entry {
            refs.insert(node, NodeRef::Entry(route.name.clone()));
        }
        if let Some(node) = route.exit {
            refs.insert(node, NodeRef::Exit(route.name.clone()));
        }
        routes.push(RouteDecl {
            name: route.name.clone(),
            entry,
            exit,
        });
    }

    let obstacles = level
        .obstacles()
        .iter()
        .map(|obstacle| ObstacleDecl {
            position: BoundsDecl {
                inf: obstacle.min.into(),
                sup: obstacle.max.into(),
            },
            role: obstacle.biome,
        })
        .collect();

    let liaisons = level
        .requirements()
        .iter()
        .map(|requirement| LiaisonDecl {
            source: requirement.source_route.clone(),
            target: requirement.target_route.clone(),
            flow: requirement.flow,
        })
        .collect();

    let mut network = NetworkDecl::default();
    for node in level.graph().nodes() {
        if refs.contains_key(&node.id()) {
            continue;
        }
        refs.insert(node.id(), NodeRef::Junction(network.junctions.len()));
        network.junctions.push(JunctionDecl {
            position: node.data.position.into(),
            tier: node.data.tier,
        });
    }

    for edge in level.graph().edges() {
        let Some((a, b)) = edge.endpoint_pair() else {
            log::warn!("Straße {} ohne zwei Endpunkte wird nicht exportiert", edge.id());
            continue;
        };
        let (Some(ref_a), Some(ref_b)) = (refs.get(&a), refs.get(&b)) else {
            return Err(LoadError::InvalidNetwork(format!(
                "Straße {} verweist auf unbekannten Knoten",
                edge.id()
            )));
        };
        network.roads.push(RoadDecl {
            ends: [ref_a.clone(), ref_b.clone()],
            tier: edge.data.tier,
        });
    }

    Ok(LevelFile {
        routes,
        obstacles,
        liaisons,
        network: (!network.is_empty()).then_some(network),
    })
}
