use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, Result};

/// Dense identifier assigned to a location when it is first added to a [`Graph`].
pub type NodeId = usize;

/// Minimum similarity score for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// A named location in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
}

/// Directed, weighted connection between two locations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

/// Static flight graph: locations plus directed routes between them.
///
/// Nodes keep the order in which they were first seen. Parallel edges and
/// self-loops are stored as given.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    name_to_id: HashMap<String, NodeId>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location, returning its identifier. Adding a known name is a no-op.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }

        let id = self.nodes.len();
        self.nodes.push(Node {
            id,
            name: name.to_string(),
        });
        self.name_to_id.insert(name.to_string(), id);
        self.outgoing.push(Vec::new());
        id
    }

    /// Append a directed edge, creating either endpoint when it is missing.
    ///
    /// The weight must be finite and non-negative; rejected edges leave the
    /// graph untouched.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidEdgeWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }

        let from_id = self.add_node(from);
        let to_id = self.add_node(to);
        self.outgoing[from_id].push(self.edges.len());
        self.edges.push(Edge {
            from: from_id,
            to: to_id,
            weight,
        });
        Ok(())
    }

    /// Outgoing edges of the named location in insertion order.
    pub fn edges_from(&self, name: &str) -> Result<impl Iterator<Item = &Edge> + '_> {
        let id = self.resolve(name)?;
        Ok(self.edges_from_id(id))
    }

    /// Outgoing edges of a node identifier. Unknown identifiers have no edges.
    pub fn edges_from_id(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.outgoing
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&index| &self.edges[index])
    }

    /// Lookup a node record by name.
    pub fn node(&self, name: &str) -> Result<&Node> {
        let id = self.resolve(name)?;
        Ok(&self.nodes[id])
    }

    /// Lookup a node identifier by its case-sensitive name.
    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.name_to_id.get(name).copied()
    }

    /// Lookup a location name by identifier.
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(|node| node.name.as_str())
    }

    pub fn contains_id(&self, id: NodeId) -> bool {
        id < self.nodes.len()
    }

    /// All nodes in the order they were first added.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Cheapest direct edge between two nodes, if any.
    pub fn min_edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.edges_from_id(from)
            .filter(|edge| edge.to == to)
            .map(|edge| edge.weight)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Resolve a name to its identifier, attaching close matches on failure.
    pub fn resolve(&self, name: &str) -> Result<NodeId> {
        self.id_of(name).ok_or_else(|| Error::UnknownLocation {
            name: name.to_string(),
            suggestions: self.suggest(name, 3),
        })
    }

    /// Names similar to `name`, best match first.
    pub fn suggest(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &str)> = self
            .nodes
            .iter()
            .map(|node| {
                let score = strsim::jaro_winkler(&needle, &node.name.to_lowercase());
                (score, node.name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 8.0).unwrap();
        graph.add_edge("B", "C", 8.0).unwrap();
        graph.add_edge("A", "C", 8.0).unwrap();
        graph
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = Graph::new();
        let first = graph.add_node("Oslo");
        let second = graph.add_node("Oslo");
        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn add_edge_creates_missing_endpoints() {
        let graph = triangle();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        let names: Vec<_> = graph.nodes().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn edges_from_keeps_insertion_order() {
        let graph = triangle();
        let targets: Vec<_> = graph
            .edges_from("A")
            .unwrap()
            .map(|edge| graph.name_of(edge.to).unwrap())
            .collect();
        assert_eq!(targets, vec!["B", "C"]);
        assert_eq!(graph.edges_from("C").unwrap().count(), 0);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 8.0).unwrap();
        graph.add_edge("A", "B", 3.0).unwrap();
        assert_eq!(graph.edge_count(), 2);
        let a = graph.id_of("A").unwrap();
        let b = graph.id_of("B").unwrap();
        assert_eq!(graph.min_edge_weight(a, b), Some(3.0));
        assert_eq!(graph.min_edge_weight(b, a), None);
    }

    #[test]
    fn negative_and_nan_weights_are_rejected() {
        let mut graph = Graph::new();
        assert!(matches!(
            graph.add_edge("A", "B", -1.0),
            Err(Error::InvalidEdgeWeight { .. })
        ));
        assert!(matches!(
            graph.add_edge("A", "B", f64::NAN),
            Err(Error::InvalidEdgeWeight { .. })
        ));
        assert!(graph.is_empty(), "rejected edges must not create nodes");
    }

    #[test]
    fn unknown_node_reports_suggestions() {
        let mut graph = Graph::new();
        graph.add_edge("Berlin", "Bern", 8.0).unwrap();
        graph.add_node("Tokyo");

        match graph.node("Berln") {
            Err(Error::UnknownLocation { name, suggestions }) => {
                assert_eq!(name, "Berln");
                assert_eq!(suggestions.first().map(String::as_str), Some("Berlin"));
                assert!(!suggestions.contains(&"Tokyo".to_string()));
            }
            other => panic!("expected unknown location, got {other:?}"),
        }
    }

    #[test]
    fn edges_from_unknown_name_fails() {
        let graph = triangle();
        assert!(matches!(
            graph.edges_from("Z"),
            Err(Error::UnknownLocation { .. })
        ));
        assert_eq!(graph.edges_from_id(42).count(), 0);
    }
}
