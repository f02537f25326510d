//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use parcelroute_lib::{load_graph, Graph, LoaderConfig};

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the uniform-weight flight network fixture.
pub fn fixture_graph_path() -> PathBuf {
    fixtures_dir().join("graph.txt")
}

/// Load the flight network fixture with default loader settings.
#[allow(dead_code)]
pub fn fixture_graph() -> Graph {
    load_graph(&fixture_graph_path(), &LoaderConfig::default()).expect("fixture graph loads")
}

/// Load the weighted fixture, reading the third column as the edge weight.
#[allow(dead_code)]
pub fn weighted_fixture_graph() -> Graph {
    let config = LoaderConfig {
        weights_from_record: true,
        ..LoaderConfig::default()
    };
    load_graph(&fixtures_dir().join("weighted_graph.txt"), &config)
        .expect("weighted fixture loads")
}

/// The three-node scenario: A->B, B->C, A->C (all 8) plus an isolated D.
#[allow(dead_code)]
pub fn triangle_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 8.0).expect("valid edge");
    graph.add_edge("B", "C", 8.0).expect("valid edge");
    graph.add_edge("A", "C", 8.0).expect("valid edge");
    graph.add_node("D");
    graph
}
