use routegraph::{Dijkstra, Error, PathFinder, PathResult};

// Test helper: assert a path only uses stored edges and its edge weights sum
// to the reported distance
fn assert_path_consistent(finder: &PathFinder, result: &PathResult<i64>) {
    let mut total = 0;
    for pair in result.nodes.windows(2) {
        let hop = finder
            .graph()
            .neighbors(&pair[0])
            .unwrap()
            .find(|&(neighbor, _)| neighbor == pair[1]);
        let (_, weight) = hop.unwrap_or_else(|| {
            panic!(
                "path should only use existing edges: {} - {}",
                pair[0], pair[1]
            )
        });
        total += weight;
    }
    assert_eq!(
        result.distance,
        Some(total),
        "distance should match path weights"
    );
}

#[test]
fn test_detour_beats_direct_edge() {
    let mut finder: PathFinder = PathFinder::new();
    finder.add_edge("A", "B", 1).unwrap();
    finder.add_edge("B", "C", 2).unwrap();
    finder.add_edge("A", "C", 5).unwrap();

    let result = finder.shortest_path("A", "C").unwrap();

    assert_eq!(result.nodes, vec!["A", "B", "C"]);
    assert_eq!(result.distance, Some(3));
    assert_path_consistent(&finder, &result);
}

#[test]
fn test_cheaper_branch_is_chosen() {
    let mut finder: PathFinder = PathFinder::new();
    finder.add_edge("A", "B", 4).unwrap();
    finder.add_edge("A", "C", 4).unwrap();
    finder.add_edge("B", "C", 1).unwrap();
    finder.add_edge("C", "D", 1).unwrap();

    let result = finder.shortest_path("A", "D").unwrap();

    assert_eq!(result.nodes, vec!["A", "C", "D"]);
    assert_eq!(result.distance, Some(5));
    assert_path_consistent(&finder, &result);
}

#[test]
fn test_path_to_self_is_single_node_at_zero() {
    let mut finder: PathFinder = PathFinder::new();
    finder.add_edge("A", "B", 1).unwrap();

    let result = finder.shortest_path("A", "A").unwrap();

    assert_eq!(result.nodes, vec!["A"]);
    assert_eq!(result.distance, Some(0));
    assert!(!result.is_unreachable());
}

#[test]
fn test_disconnected_components_yield_unreachable() {
    let mut finder: PathFinder = PathFinder::new();
    finder.add_edge("A", "B", 1).unwrap();
    finder.add_edge("C", "D", 2).unwrap();

    let result = finder.shortest_path("A", "D").unwrap();

    assert!(result.is_unreachable());
    assert!(result.nodes.is_empty());
    assert_eq!(result.distance, None);
}

#[test]
fn test_unknown_source_fails() {
    let mut finder: PathFinder = PathFinder::new();
    finder.add_edge("A", "B", 1).unwrap();

    let err = finder.shortest_path("X", "A").unwrap_err();
    assert_eq!(err, Error::UnknownNode("X".to_owned()));
}

#[test]
fn test_unknown_target_fails() {
    let mut finder: PathFinder = PathFinder::new();
    finder.add_edge("A", "B", 1).unwrap();

    let err = finder.shortest_path("A", "X").unwrap_err();
    assert_eq!(err, Error::UnknownNode("X".to_owned()));
}

#[test]
fn test_compute_is_deterministic_on_unmodified_store() {
    let mut finder: PathFinder = PathFinder::new();
    finder.add_edge("A", "B", 2).unwrap();
    finder.add_edge("B", "C", 2).unwrap();
    finder.add_edge("A", "C", 4).unwrap();
    finder.add_edge("C", "D", 1).unwrap();

    let engine = Dijkstra::new();
    let first = engine.compute(finder.graph(), "A").unwrap();
    let second = engine.compute(finder.graph(), "A").unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_compute_covers_whole_reachable_component() {
    let mut finder: PathFinder = PathFinder::new();
    finder.add_edge("A", "B", 1).unwrap();
    finder.add_edge("B", "C", 2).unwrap();
    finder.add_edge("C", "D", 3).unwrap();
    finder.add_edge("E", "F", 1).unwrap();

    let result = Dijkstra::new().compute(finder.graph(), "A").unwrap();
    let graph = finder.graph();

    for label in ["A", "B", "C", "D"] {
        let id = graph.node_id(label).unwrap();
        assert!(result.distances[id].is_some(), "{} should be reached", label);
    }
    for label in ["E", "F"] {
        let id = graph.node_id(label).unwrap();
        assert!(
            result.distances[id].is_none(),
            "{} should be unreachable",
            label
        );
        assert!(result.predecessors[id].is_none());
    }

    // The source carries distance zero and no predecessor
    let source = graph.node_id("A").unwrap();
    assert_eq!(result.distances[source], Some(0));
    assert_eq!(result.predecessors[source], None);
}

#[test]
fn test_longer_chain_with_shortcut() {
    let mut finder: PathFinder = PathFinder::new();
    finder.add_edge("A", "B", 7).unwrap();
    finder.add_edge("B", "C", 7).unwrap();
    finder.add_edge("C", "D", 7).unwrap();
    finder.add_edge("A", "E", 1).unwrap();
    finder.add_edge("E", "F", 1).unwrap();
    finder.add_edge("F", "D", 1).unwrap();

    let result = finder.shortest_path("A", "D").unwrap();

    assert_eq!(result.nodes, vec!["A", "E", "F", "D"]);
    assert_eq!(result.distance, Some(3));
    assert_path_consistent(&finder, &result);
}

#[test]
fn test_path_result_wire_shape() {
    let mut finder: PathFinder = PathFinder::new();
    finder.add_edge("A", "B", 1).unwrap();
    finder.add_edge("C", "D", 1).unwrap();

    let reachable = finder.shortest_path("A", "B").unwrap();
    let json = serde_json::to_value(&reachable).unwrap();
    assert_eq!(json, serde_json::json!({ "nodes": ["A", "B"], "distance": 1 }));

    // An unreachable target serializes with the distance field omitted
    let unreachable = finder.shortest_path("A", "C").unwrap();
    let json = serde_json::to_value(&unreachable).unwrap();
    assert_eq!(json, serde_json::json!({ "nodes": [] }));

    let parsed: PathResult<i64> = serde_json::from_value(json).unwrap();
    assert!(parsed.is_unreachable());
}
