//! Freeway Interchange Editor.
//!
//! Lädt ein Level, prüft das gebaute Netz und meldet, welche geforderten
//! Verbindungen noch offen sind.

use anyhow::Context;
use freeway_interchange::core::{find_crossing, TIERS};
use freeway_interchange::{load_level, EngineOptions, Level};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Freeway Interchange Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let config_path = EngineOptions::config_path();
    let options = EngineOptions::load_from_file(&config_path);

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        log::error!("Aufruf: freeway-interchange LEVEL.json");
        return Ok(ExitCode::from(2));
    };

    let level = load_level(&path, &options)
        .with_context(|| format!("Level {} konnte nicht geladen werden", path.display()))?;

    report(&level);
    Ok(if level.is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Schreibt eine Zusammenfassung des Levels ins Log.
fn report(level: &Level) {
    let graph = level.graph();
    log::info!(
        "{} Knoten, {} Straßen, {} Hindernisse",
        graph.node_count(),
        graph.edge_count(),
        level.obstacles().len()
    );

    for tier in 0..TIERS {
        let roads = graph.edges().filter(|edge| edge.data.tier == tier).count();
        log::info!("Ebene {}: {} Straßen", tier, roads);
    }

    let loose = graph
        .nodes()
        .filter(|node| node.data.movable && node.degree() < 2)
        .count();
    if loose > 0 {
        log::warn!("{} Knoten mit weniger als zwei Straßen", loose);
    }

    if let Some((a, b)) = find_crossing(graph) {
        log::warn!("Straßen {} und {} kreuzen sich", a, b);
    }

    for requirement in level.requirements() {
        let state = if level.is_connected(requirement.source, requirement.target) {
            "verbunden"
        } else {
            "offen"
        };
        log::info!(
            "{} → {} (Fluss {}): {}",
            requirement.source_route,
            requirement.target_route,
            requirement.flow,
            state
        );
    }

    if level.is_complete() {
        log::info!("Alle Verbindungen hergestellt");
    } else {
        log::warn!("Level ist noch nicht vollständig");
    }
}
