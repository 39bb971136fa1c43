use adjgraph_core::command::{dispatch, Command, Outcome};
use adjgraph_core::{AdjacencyEntry, CommandError, Graph, GraphError};
use std::fs;

#[test]
fn test_directed_weighted_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("graph.txt");

    let mut graph = Graph::new(true, true);
    graph.add_edge("A", "B", 5);
    graph.add_edge("A", "C", -2);
    graph.add_edge("C", "A", 8);
    graph.add_vertex("D");
    graph.save_to_file(&path).unwrap();

    let restored = Graph::from_file(&path, true, true).unwrap();
    assert_eq!(restored, graph);
    assert_eq!(restored.vertices().collect::<Vec<_>>(), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_saved_listing_format() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("graph.txt");

    let mut graph = Graph::new(false, true);
    graph.add_edge("A", "B", 5);
    graph.add_vertex("Z");
    graph.save_to_file(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "A: (B, 5) \nB: (A, 5) \nZ: \n");
}

#[test]
fn test_undirected_save_load_does_not_double_edges() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("graph.txt");

    let mut graph = Graph::new(false, true);
    graph.add_edge("A", "B", 5);
    graph.save_to_file(&path).unwrap();

    let restored = Graph::from_file(&path, false, true).unwrap();
    assert_eq!(restored.neighbors("A").unwrap(), &[AdjacencyEntry::new("B", 5)]);
    assert_eq!(restored.neighbors("B").unwrap(), &[AdjacencyEntry::new("A", 5)]);
    assert_eq!(restored.edges().len(), 1);
}

#[test]
fn test_undirected_load_keeps_differing_weights() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("graph.txt");
    fs::write(&path, "A: (B, 5)\nB: (A, 7)\n").unwrap();

    let graph = Graph::from_file(&path, false, true).unwrap();
    assert_eq!(
        graph.neighbors("A").unwrap(),
        &[AdjacencyEntry::new("B", 5), AdjacencyEntry::new("B", 7)]
    );
    assert_eq!(
        graph.neighbors("B").unwrap(),
        &[AdjacencyEntry::new("A", 5), AdjacencyEntry::new("A", 7)]
    );
}

#[test]
fn test_unweighted_load_ignores_stored_weights() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("graph.txt");
    fs::write(&path, "A: (B, 99)\n").unwrap();

    let graph = Graph::from_file(&path, false, false).unwrap();
    assert_eq!(graph.neighbors("A").unwrap(), &[AdjacencyEntry::new("B", 1)]);
    assert_eq!(graph.neighbors("B").unwrap(), &[AdjacencyEntry::new("A", 1)]);
}

#[test]
fn test_load_failure_leaves_graph_untouched() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    let mut graph = Graph::new(false, false);
    graph.add_edge("A", "B", 1);
    let before = graph.clone();

    let err = graph.load_from_file(&missing).unwrap_err();
    assert!(matches!(err, GraphError::Io { ref path, .. } if *path == missing));
    assert_eq!(graph, before);
}

#[test]
fn test_save_to_unwritable_path_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("no-such-dir").join("graph.txt");

    let mut graph = Graph::new(false, false);
    let result = dispatch(&mut graph, Command::Save { path: Some(path) });
    assert!(matches!(result, Err(CommandError::Graph(GraphError::Io { .. }))));
}

#[test]
fn test_save_and_load_commands() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("graph.txt");

    let mut graph = Graph::new(true, false);
    graph.add_edge("A", "B", 1);
    let saved = dispatch(&mut graph, Command::Save { path: Some(path.clone()) }).unwrap();
    assert_eq!(saved, Outcome::Saved { path: path.clone() });

    let mut session = Graph::new(true, false);
    session.add_vertex("stale");
    let loaded = dispatch(&mut session, Command::Load { path: Some(path.clone()) }).unwrap();
    assert_eq!(loaded, Outcome::Loaded { path, vertices: 2 });
    assert!(!session.contains_vertex("stale"));
    assert_eq!(session.neighbors("A").unwrap(), &[AdjacencyEntry::new("B", 1)]);
}
