use super::*;

type TestGraph = Graph<&'static str, u8>;

/// Erstellt eine Kante zwischen `a` und `b`.
fn connect(graph: &mut TestGraph, a: NodeId, b: NodeId) -> EdgeId {
    let edge = graph.add_edge(0);
    graph.bind(edge, &[a, b]).expect("Bindung erwartet");
    edge
}

fn assert_symmetric(graph: &TestGraph) {
    for node in graph.nodes() {
        for edge in node.edges() {
            assert!(graph.endpoints(*edge).contains(&node.id()));
        }
    }
    for edge in graph.edges() {
        for node in edge.nodes() {
            assert!(graph.incident_edges(*node).contains(&edge.id()));
        }
    }
}

#[test]
fn test_add_items_keeps_insertion_order() {
    let mut graph = TestGraph::new();
    let a = graph.add_node("a");
    let b = graph.add_node("b");
    let c = graph.add_node("c");

    let ids: Vec<NodeId> = graph.nodes().map(|n| n.id()).collect();
    assert_eq!(ids, vec![a, b, c]);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_bind_is_mutual() {
    let mut graph = TestGraph::new();
    let a = graph.add_node("a");
    let b = graph.add_node("b");
    let edge = connect(&mut graph, a, b);

    assert_eq!(graph.endpoints(edge), &[a, b]);
    assert_eq!(graph.incident_edges(a), &[edge]);
    assert_eq!(graph.incident_edges(b), &[edge]);
    assert_eq!(graph.endpoint_pair(edge), Some((a, b)));
    assert_symmetric(&graph);
}

#[test]
fn test_bind_rejects_third_endpoint_without_mutation() {
    let mut graph = TestGraph::new();
    let a = graph.add_node("a");
    let b = graph.add_node("b");
    let c = graph.add_node("c");
    let edge = connect(&mut graph, a, b);

    let err = graph.bind(edge, &[c]).expect_err("dritter Endpunkt muss scheitern");
    assert_eq!(err, StructuralViolation::EdgeOverbound { edge });
    assert_eq!(graph.endpoints(edge), &[a, b]);
    assert!(graph.incident_edges(c).is_empty());
}

#[test]
fn test_bind_rejects_duplicate_and_unknown_nodes() {
    let mut graph = TestGraph::new();
    let a = graph.add_node("a");
    let b = graph.add_node("b");
    let edge = graph.add_edge(0);

    assert_eq!(
        graph.bind(edge, &[a, a]),
        Err(StructuralViolation::AlreadyBound { edge, node: a })
    );

    graph.remove_node(b).expect("Knoten b vorhanden");
    assert_eq!(
        graph.bind(edge, &[a, b]),
        Err(StructuralViolation::UnknownNode(b))
    );
    assert!(graph.endpoints(edge).is_empty());
    assert!(graph.incident_edges(a).is_empty());
}

#[test]
fn test_unbind_missing_entry_fails_without_mutation() {
    let mut graph = TestGraph::new();
    let a = graph.add_node("a");
    let b = graph.add_node("b");
    let c = graph.add_node("c");
    let edge = connect(&mut graph, a, b);

    let err = graph.unbind(edge, &[a, c]).expect_err("c ist nicht gebunden");
    assert_eq!(err, StructuralViolation::MissingBinding { edge, node: c });
    assert_eq!(graph.endpoints(edge), &[a, b]);

    graph.unbind(edge, &[a]).expect("Bindung zu a vorhanden");
    assert_eq!(graph.endpoints(edge), &[b]);
    assert!(graph.incident_edges(a).is_empty());
    assert_symmetric(&graph);
}

#[test]
fn test_remove_isolated_node_leaves_rest_unchanged() {
    let mut graph = TestGraph::new();
    let a = graph.add_node("a");
    let b = graph.add_node("b");
    let lonely = graph.add_node("lonely");
    let edge = connect(&mut graph, a, b);

    assert_eq!(graph.remove_node(lonely), Ok("lonely"));

    let ids: Vec<NodeId> = graph.nodes().map(|n| n.id()).collect();
    assert_eq!(ids, vec![a, b]);
    let edges: Vec<EdgeId> = graph.edges().map(|e| e.id()).collect();
    assert_eq!(edges, vec![edge]);
    assert_eq!(graph.endpoints(edge), &[a, b]);
}

#[test]
fn test_remove_node_cascades_to_edges() {
    let mut graph = TestGraph::new();
    let hub = graph.add_node("hub");
    let a = graph.add_node("a");
    let b = graph.add_node("b");
    connect(&mut graph, hub, a);
    connect(&mut graph, hub, b);
    let keep = connect(&mut graph, a, b);

    graph.remove_node(hub).expect("hub vorhanden");

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.incident_edges(a), &[keep]);
    assert_eq!(graph.incident_edges(b), &[keep]);
    assert_symmetric(&graph);
}

#[test]
fn test_remove_edge_detaches_endpoints() {
    let mut graph = TestGraph::new();
    let a = graph.add_node("a");
    let b = graph.add_node("b");
    let edge = graph.add_edge(7);
    graph.bind(edge, &[a, b]).expect("Bindung erwartet");

    assert_eq!(graph.remove_edge(edge), Ok(7));
    assert!(graph.incident_edges(a).is_empty());
    assert!(graph.incident_edges(b).is_empty());
    assert_eq!(
        graph.remove_edge(edge),
        Err(StructuralViolation::UnknownEdge(edge))
    );
}

#[test]
fn test_merge_collapses_direct_edge_and_rebinds_others() {
    let mut graph = TestGraph::new();
    let source = graph.add_node("source");
    let target = graph.add_node("target");
    let x = graph.add_node("x");
    let y = graph.add_node("y");
    let direct = connect(&mut graph, source, target);
    let sx = connect(&mut graph, source, x);
    let sy = connect(&mut graph, source, y);

    let result = graph.merge_nodes(source, target).expect("Merge erwartet");

    assert!(!graph.contains_node(source));
    assert!(!graph.contains_edge(direct));
    assert_eq!(result.collapsed_edges, vec![direct]);
    assert_eq!(result.rebound_edges, vec![sx, sy]);
    assert!(result.removed_duplicates.is_empty());
    assert_eq!(graph.incident_edges(target), &[sx, sy]);
    assert!(graph.endpoints(sx).contains(&target));
    assert!(graph.endpoints(sy).contains(&target));
    assert_symmetric(&graph);
}

#[test]
fn test_merge_removes_duplicate_edges() {
    let mut graph = TestGraph::new();
    let source = graph.add_node("source");
    let target = graph.add_node("target");
    let x = graph.add_node("x");
    let tx = connect(&mut graph, target, x);
    let sx = connect(&mut graph, source, x);

    let result = graph.merge_nodes(source, target).expect("Merge erwartet");

    assert_eq!(result.removed_duplicates, vec![sx]);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.incident_edges(target), &[tx]);
    assert_eq!(graph.incident_edges(x), &[tx]);
    assert_symmetric(&graph);
}

#[test]
fn test_merge_leaves_no_similar_pair_at_target() {
    let mut graph = TestGraph::new();
    let source = graph.add_node("source");
    let target = graph.add_node("target");
    let others: Vec<NodeId> = (0..4).map(|_| graph.add_node("o")).collect();
    for other in &others {
        connect(&mut graph, source, *other);
        connect(&mut graph, target, *other);
    }
    connect(&mut graph, source, target);
    connect(&mut graph, target, others[0]);

    graph.merge_nodes(source, target).expect("Merge erwartet");

    let incident = graph.incident_edges(target).to_vec();
    assert_eq!(incident.len(), others.len());
    for (i, a) in incident.iter().enumerate() {
        for b in &incident[i + 1..] {
            assert!(!graph.is_similar(*a, *b));
        }
        assert_eq!(graph.endpoints(*a).len(), 2);
    }
    assert_symmetric(&graph);
}

#[test]
fn test_merge_with_itself_is_rejected() {
    let mut graph = TestGraph::new();
    let a = graph.add_node("a");

    assert_eq!(
        graph.merge_nodes(a, a),
        Err(StructuralViolation::SelfMerge(a))
    );
    assert!(graph.contains_node(a));
}

#[test]
fn test_merge_unknown_target_keeps_source() {
    let mut graph = TestGraph::new();
    let a = graph.add_node("a");
    let b = graph.add_node("b");
    let ghost = graph.add_node("ghost");
    connect(&mut graph, a, b);
    graph.remove_node(ghost).expect("ghost vorhanden");

    assert_eq!(
        graph.merge_nodes(a, ghost),
        Err(StructuralViolation::UnknownNode(ghost))
    );
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_shared_endpoints_and_neighbors() {
    let mut graph = TestGraph::new();
    let a = graph.add_node("a");
    let b = graph.add_node("b");
    let c = graph.add_node("c");
    let ab = connect(&mut graph, a, b);
    let bc = connect(&mut graph, b, c);

    assert_eq!(graph.shared_endpoints(ab, bc), vec![b]);
    let mut neighbors: Vec<NodeId> = graph.neighbors(b).collect();
    neighbors.sort_unstable();
    assert_eq!(neighbors, vec![a, c]);
    assert_eq!(graph.find_edge_between(c, b), Some(bc));
    assert_eq!(graph.find_edge_between(a, c), None);
}

#[test]
fn test_display_lists_positional_labels() {
    let mut graph = TestGraph::new();
    let a = graph.add_node("a");
    let b = graph.add_node("b");
    connect(&mut graph, a, b);

    let dump = graph.to_string();
    assert!(dump.contains("Knoten N0 → L0"));
    assert!(dump.contains("Kante L0 → N0, N1"));
}
