use super::*;
use crate::core::network_is_valid;
use crate::level_file::{LevelFile, LoadError};
use serde_json::json;

fn level_from(document: serde_json::Value) -> Level {
    let file: LevelFile = serde_json::from_value(document).expect("Level-Datei erwartet");
    Level::load(&file, Some(42)).expect("Level erwartet")
}

/// Route A von (0,0) nach (100,0) mit Liaison A → A.
fn straight_level() -> Level {
    level_from(json!({
        "routes": [{"name": "A",
                    "entry": {"width": 0, "height": 0},
                    "exit": {"width": 100, "height": 0}}],
        "liaisons": [{"source": "A", "target": "A", "flow": 1}]
    }))
}

/// Zwei diagonale Routen, deren direkte Verbindungen sich bei (50,50) kreuzen.
fn crossed_level() -> Level {
    level_from(json!({
        "routes": [
            {"name": "A", "entry": {"width": 0, "height": 0},
                          "exit": {"width": 100, "height": 100}},
            {"name": "B", "entry": {"width": 0, "height": 100},
                          "exit": {"width": 100, "height": 0}}
        ],
        "liaisons": [
            {"source": "A", "target": "A", "flow": 1},
            {"source": "B", "target": "B", "flow": 1}
        ]
    }))
}

fn route_ends(level: &Level, index: usize) -> (NodeId, NodeId) {
    let route = &level.routes()[index];
    (
        route.entry.expect("Einfahrt erwartet"),
        route.exit.expect("Ausfahrt erwartet"),
    )
}

const GREY: Color = Color([10, 20, 30]);

#[test]
fn test_load_creates_fixed_route_nodes_and_requirements() {
    let level = straight_level();
    let (entry, exit) = route_ends(&level, 0);

    assert_eq!(level.graph().node_count(), 2);
    assert_eq!(level.graph().edge_count(), 0);

    let entry_junction = level.junction(entry).expect("Einfahrt erwartet");
    let exit_junction = level.junction(exit).expect("Ausfahrt erwartet");
    assert!(!entry_junction.movable);
    assert_eq!(entry_junction.tier, 0);
    assert_eq!(entry_junction.color, exit_junction.color);
    assert_eq!(exit_junction.position, Vector::new(100.0, 0.0));

    let requirement = &level.requirements()[0];
    assert_eq!((requirement.source, requirement.target), (entry, exit));
    assert_eq!(requirement.flow, 1);
}

#[test]
fn test_level_becomes_complete_once_route_is_connected() {
    let mut level = straight_level();
    let (entry, exit) = route_ends(&level, 0);
    assert!(!level.is_complete());

    let road = level.connect(entry, exit).expect("gültige Knoten");
    assert!(road.is_some());
    assert!(level.is_complete());
}

#[test]
fn test_load_rejects_route_without_endpoints() {
    let file: LevelFile = serde_json::from_value(json!({
        "routes": [{"name": "A"}]
    }))
    .expect("Level-Datei erwartet");

    assert!(matches!(
        Level::load(&file, None),
        Err(LoadError::InvalidRoute(name)) if name == "A"
    ));
}

#[test]
fn test_load_rejects_duplicate_routes() {
    let file: LevelFile = serde_json::from_value(json!({
        "routes": [
            {"name": "A", "entry": {"width": 0, "height": 0}},
            {"name": "A", "exit": {"width": 1, "height": 0}}
        ]
    }))
    .expect("Level-Datei erwartet");

    assert!(matches!(
        Level::load(&file, None),
        Err(LoadError::DuplicateRoute(_))
    ));
}

#[test]
fn test_load_rejects_unresolvable_liaisons() {
    let unknown: LevelFile = serde_json::from_value(json!({
        "routes": [{"name": "A", "entry": {"width": 0, "height": 0}}],
        "liaisons": [{"source": "A", "target": "Z", "flow": 1}]
    }))
    .expect("Level-Datei erwartet");
    assert!(matches!(
        Level::load(&unknown, None),
        Err(LoadError::UnknownRoute(name)) if name == "Z"
    ));

    let no_exit: LevelFile = serde_json::from_value(json!({
        "routes": [{"name": "A", "entry": {"width": 0, "height": 0}}],
        "liaisons": [{"source": "A", "target": "A", "flow": 1}]
    }))
    .expect("Level-Datei erwartet");
    assert!(matches!(
        Level::load(&no_exit, None),
        Err(LoadError::MissingEndpoint { side: "Ausfahrt", .. })
    ));
}

#[test]
fn test_load_rejects_dangling_network_reference() {
    let file: LevelFile = serde_json::from_value(json!({
        "routes": [{"name": "A", "entry": {"width": 0, "height": 0}}],
        "network": {"roads": [{"ends": [{"entry": "A"}, {"junction": 3}], "tier": 0}]}
    }))
    .expect("Level-Datei erwartet");

    assert!(matches!(
        Level::load(&file, None),
        Err(LoadError::InvalidNetwork(_))
    ));
}

#[test]
fn test_color_seed_makes_colors_reproducible() {
    let a = straight_level();
    let b = straight_level();
    let (entry_a, _) = route_ends(&a, 0);
    let (entry_b, _) = route_ends(&b, 0);

    assert_eq!(
        a.junction(entry_a).map(|j| j.color),
        b.junction(entry_b).map(|j| j.color)
    );
}

#[test]
fn test_move_into_obstacle_is_rejected_and_position_kept() {
    let mut level = level_from(json!({
        "routes": [{"name": "A", "entry": {"width": 0, "height": 0}}],
        "obstacles": [{"position": {"inf": {"width": 40, "height": 40},
                                    "sup": {"width": 60, "height": 60}},
                       "role": "factory"}]
    }));
    let node = level
        .add_junction(Vector::new(20.0, 20.0), GREY, 0)
        .expect("Knoten außerhalb des Hindernisses");

    assert_eq!(level.validate_move(node, Vector::new(50.0, 50.0)), Ok(false));
    assert_eq!(level.commit_move(node, Vector::new(50.0, 50.0)), Ok(false));
    assert_eq!(
        level.junction(node).map(|j| j.position),
        Some(Vector::new(20.0, 20.0))
    );

    assert_eq!(level.commit_move(node, Vector::new(20.0, 30.0)), Ok(true));
    assert_eq!(
        level.junction(node).map(|j| j.position),
        Some(Vector::new(20.0, 30.0))
    );
}

#[test]
fn test_move_rejected_when_incident_road_would_cross_obstacle() {
    let mut level = level_from(json!({
        "routes": [{"name": "A", "entry": {"width": 0, "height": 0}}],
        "obstacles": [{"position": {"inf": {"width": 40, "height": 40},
                                    "sup": {"width": 60, "height": 60}},
                       "role": "river"}]
    }));
    let entry = level.routes()[0].entry.expect("Einfahrt erwartet");
    let node = level
        .add_junction(Vector::new(20.0, 20.0), GREY, 0)
        .expect("Knoten erwartet");
    level
        .connect(entry, node)
        .expect("gültige Knoten")
        .expect("Straße erwartet");

    assert_eq!(level.validate_move(node, Vector::new(70.0, 50.0)), Ok(false));
    assert_eq!(level.validate_move(node, Vector::new(30.0, 0.0)), Ok(true));
}

#[test]
fn test_move_rejected_when_crossing_same_tier_road() {
    let mut level = crossed_level();
    let (a_entry, a_exit) = route_ends(&level, 0);
    let (b_entry, _) = route_ends(&level, 1);
    level
        .connect(a_entry, a_exit)
        .expect("gültige Knoten")
        .expect("Straße erwartet");

    let node = level
        .add_junction(Vector::new(10.0, 90.0), GREY, 0)
        .expect("Knoten erwartet");
    level
        .connect(b_entry, node)
        .expect("gültige Knoten")
        .expect("Straße erwartet");

    // (0,100) → (90,10) kreuzt die Diagonale (0,0) → (100,100)
    assert_eq!(level.validate_move(node, Vector::new(90.0, 10.0)), Ok(false));
    assert_eq!(level.validate_move(node, Vector::new(30.0, 80.0)), Ok(true));
}

#[test]
fn test_validate_move_of_unknown_node_is_structural_error() {
    let mut level = straight_level();
    let node = level
        .add_junction(Vector::new(5.0, 5.0), GREY, 0)
        .expect("Knoten erwartet");
    level.remove_junction(node).expect("bekannter Knoten");

    assert_eq!(
        level.validate_move(node, Vector::ZERO),
        Err(StructuralViolation::UnknownNode(node))
    );
}

#[test]
fn test_connect_rejects_crossing_existing_and_self_loop() {
    let mut level = crossed_level();
    let (a_entry, a_exit) = route_ends(&level, 0);
    let (b_entry, b_exit) = route_ends(&level, 1);

    let road = level.connect(a_entry, a_exit).expect("gültige Knoten");
    assert!(road.is_some());

    assert_eq!(level.connect(b_entry, b_exit), Ok(None));
    assert_eq!(level.connect(a_exit, a_entry), Ok(None));
    assert_eq!(
        level.connect(a_entry, a_entry),
        Err(StructuralViolation::SelfLoop(a_entry))
    );
    assert_eq!(level.graph().edge_count(), 1);
}

#[test]
fn test_change_tier_reverts_on_crossing_and_shifts_color_on_success() {
    let mut level = crossed_level();
    let (a_entry, a_exit) = route_ends(&level, 0);
    level
        .connect(a_entry, a_exit)
        .expect("gültige Knoten")
        .expect("Straße erwartet");

    let left = level
        .add_junction(Vector::new(0.0, 50.0), GREY, 1)
        .expect("Knoten erwartet");
    let right = level
        .add_junction(Vector::new(100.0, 50.0), GREY, 1)
        .expect("Knoten erwartet");
    let bridge = level
        .connect(left, right)
        .expect("gültige Knoten")
        .expect("Brücke über die Diagonale erwartet");

    assert_eq!(level.change_tier(bridge, -1), Ok(false));
    assert_eq!(level.road(bridge).map(|r| r.tier), Some(1));
    assert_eq!(level.road(bridge).map(|r| r.color), Some(GREY));

    assert_eq!(level.change_tier(bridge, 1), Ok(true));
    assert_eq!(level.road(bridge).map(|r| r.tier), Some(2));
    assert_eq!(level.road(bridge).map(|r| r.color), Some(Color([95, 105, 115])));

    assert_eq!(level.change_tier(bridge, 1), Ok(false));
    assert_eq!(level.change_tier(bridge, 0), Ok(false));
    assert!(network_is_valid(level.graph()));
}

#[test]
fn test_change_tier_with_extreme_delta_is_rejected() {
    let mut level = straight_level();
    let (entry, exit) = route_ends(&level, 0);
    let road = level
        .connect(entry, exit)
        .expect("gültige Knoten")
        .expect("Straße erwartet");
    assert_eq!(level.change_tier(road, 1), Ok(true));
    let color = level.road(road).map(|r| r.color);

    assert_eq!(level.change_tier(road, i32::MAX), Ok(false));
    assert_eq!(level.change_tier(road, i32::MIN), Ok(false));
    assert_eq!(level.change_tier(road, -2), Ok(false));
    assert_eq!(level.road(road).map(|r| r.tier), Some(1));
    assert_eq!(level.road(road).map(|r| r.color), color);
}

#[test]
fn test_fixed_route_node_is_never_moved() {
    let mut level = straight_level();
    let (entry, _) = route_ends(&level, 0);

    assert_eq!(level.validate_move(entry, Vector::new(0.0, 20.0)), Ok(true));
    assert_eq!(level.commit_move(entry, Vector::new(0.0, 20.0)), Ok(false));
    assert_eq!(level.junction(entry).map(|j| j.position), Some(Vector::ZERO));
}

#[test]
fn test_split_road_creates_two_roads_of_same_tier() {
    let mut level = straight_level();
    let (entry, exit) = route_ends(&level, 0);
    let road = level
        .connect(entry, exit)
        .expect("gültige Knoten")
        .expect("Straße erwartet");
    let color = level.road(road).map(|r| r.color);

    let node = level
        .split_road(road, Vector::new(50.0, 10.0))
        .expect("bekannte Straße")
        .expect("Teilung erwartet");

    assert!(!level.graph().contains_edge(road));
    assert_eq!(level.graph().edge_count(), 2);
    assert_eq!(level.graph().incident_edges(node).len(), 2);
    assert!(level.junction(node).is_some_and(|j| j.movable));
    for edge in level.graph().edges() {
        assert_eq!(edge.data.tier, 0);
        assert_eq!(Some(edge.data.color), color);
    }
    assert!(network_is_valid(level.graph()));
    assert!(level.is_complete());
}

#[test]
fn test_split_road_inside_obstacle_is_rejected() {
    let mut level = level_from(json!({
        "routes": [{"name": "A", "entry": {"width": 0, "height": 0},
                                 "exit": {"width": 100, "height": 0}}],
        "obstacles": [{"position": {"inf": {"width": 40, "height": 20},
                                    "sup": {"width": 60, "height": 40}},
                       "role": "forest"}]
    }));
    let (entry, exit) = route_ends(&level, 0);
    let road = level
        .connect(entry, exit)
        .expect("gültige Knoten")
        .expect("Straße erwartet");

    assert_eq!(level.split_road(road, Vector::new(50.0, 30.0)), Ok(None));
    assert!(level.graph().contains_edge(road));
    assert_eq!(level.graph().node_count(), 2);
}

#[test]
fn test_merge_movable_other_into_dragged() {
    let mut level = straight_level();
    let (entry, exit) = route_ends(&level, 0);
    let dragged = level
        .add_junction(Vector::new(40.0, 10.0), GREY, 0)
        .expect("Knoten erwartet");
    let other = level
        .add_junction(Vector::new(60.0, 10.0), GREY, 0)
        .expect("Knoten erwartet");
    level.connect(entry, dragged).expect("gültige Knoten");
    level.connect(other, exit).expect("gültige Knoten");
    assert!(!level.is_complete());

    assert_eq!(level.merge_junctions(dragged, other), Ok(Some(dragged)));
    assert!(!level.graph().contains_node(other));
    assert_eq!(level.graph().node_count(), 3);
    assert!(level.is_complete());
}

#[test]
fn test_merge_into_fixed_node_keeps_fixed_node() {
    let mut level = straight_level();
    let (entry, exit) = route_ends(&level, 0);
    let dragged = level
        .add_junction(Vector::new(90.0, 5.0), GREY, 0)
        .expect("Knoten erwartet");
    level.connect(entry, dragged).expect("gültige Knoten");

    assert_eq!(level.merge_junctions(dragged, exit), Ok(Some(exit)));
    assert!(!level.graph().contains_node(dragged));
    assert!(level.graph().find_edge_between(entry, exit).is_some());
    assert!(level.is_complete());
}

#[test]
fn test_merge_of_two_fixed_nodes_is_refused() {
    let mut level = straight_level();
    let (entry, exit) = route_ends(&level, 0);

    assert_eq!(level.merge_junctions(entry, exit), Ok(None));
    assert_eq!(level.graph().node_count(), 2);
}

#[test]
fn test_merge_creating_crossing_is_refused() {
    let mut level = crossed_level();
    let (a_entry, a_exit) = route_ends(&level, 0);
    let (b_entry, b_exit) = route_ends(&level, 1);
    level
        .connect(a_entry, a_exit)
        .expect("gültige Knoten")
        .expect("Diagonale erwartet");

    let dragged = level
        .add_junction(Vector::new(10.0, 80.0), GREY, 0)
        .expect("Knoten erwartet");
    level
        .connect(b_entry, dragged)
        .expect("gültige Knoten")
        .expect("Straße erwartet");

    // Nach dem Verschmelzen liefe (0,100) → (100,0) quer über die Diagonale
    assert_eq!(level.merge_junctions(dragged, b_exit), Ok(None));
    assert!(level.graph().contains_node(dragged));
    assert_eq!(level.graph().edge_count(), 2);
}

#[test]
fn test_fixed_nodes_cannot_be_removed() {
    let mut level = straight_level();
    let (entry, exit) = route_ends(&level, 0);
    level.connect(entry, exit).expect("gültige Knoten");

    assert_eq!(level.remove_junction(entry), Ok(false));
    assert!(level.graph().contains_node(entry));
    assert_eq!(level.graph().edge_count(), 1);
}

#[test]
fn test_removing_movable_junction_removes_its_roads() {
    let mut level = straight_level();
    let (entry, exit) = route_ends(&level, 0);
    let node = level
        .add_junction(Vector::new(50.0, 20.0), GREY, 0)
        .expect("Knoten erwartet");
    level.connect(entry, node).expect("gültige Knoten");
    level.connect(node, exit).expect("gültige Knoten");
    assert!(level.is_complete());

    assert_eq!(level.remove_junction(node), Ok(true));
    assert_eq!(level.graph().edge_count(), 0);
    assert!(!level.is_complete());
}

#[test]
fn test_add_junction_inside_obstacle_is_refused() {
    let mut level = level_from(json!({
        "routes": [{"name": "A", "entry": {"width": 0, "height": 0}}],
        "obstacles": [{"position": {"inf": {"width": 10, "height": 10},
                                    "sup": {"width": 20, "height": 20}},
                       "role": "forest"}]
    }));

    assert!(level.point_in_obstacle(Vector::new(10.0, 15.0)));
    assert_eq!(level.add_junction(Vector::new(15.0, 15.0), GREY, 0), None);
    assert_eq!(level.graph().node_count(), 1);
}

#[test]
fn test_roads_by_tier_lists_lower_tiers_first() {
    let mut level = crossed_level();
    let (a_entry, a_exit) = route_ends(&level, 0);
    let left = level
        .add_junction(Vector::new(0.0, 50.0), GREY, 2)
        .expect("Knoten erwartet");
    let right = level
        .add_junction(Vector::new(100.0, 50.0), GREY, 2)
        .expect("Knoten erwartet");
    let high = level
        .connect(left, right)
        .expect("gültige Knoten")
        .expect("Straße erwartet");
    let low = level
        .connect(a_entry, a_exit)
        .expect("gültige Knoten")
        .expect("Straße erwartet");

    assert_eq!(level.roads_by_tier(), vec![low, high]);
}
