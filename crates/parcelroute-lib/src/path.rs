use tracing::{debug, instrument, trace};

use crate::error::{Error, Result};
use crate::frontier::Frontier;
use crate::graph::{Graph, NodeId};

/// Per-query result of a shortest-path run over a shared [`Graph`].
///
/// Distances and predecessors live here rather than on the graph's nodes, so
/// the graph can be reused read-only for any number of queries.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'g> {
    graph: &'g Graph,
    start: NodeId,
    distances: Vec<f64>,
    predecessors: Vec<Option<NodeId>>,
    settled: Vec<bool>,
    settled_order: Vec<NodeId>,
}

impl<'g> ShortestPathTree<'g> {
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Best known distance from the start; infinite when never reached.
    pub fn distance(&self, node: NodeId) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node).copied().flatten()
    }

    /// Whether the node's distance has been finalised.
    pub fn is_settled(&self, node: NodeId) -> bool {
        self.settled.get(node).copied().unwrap_or(false)
    }

    /// Nodes in the order their distances were finalised.
    pub fn settled_order(&self) -> &[NodeId] {
        &self.settled_order
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_finite()
    }

    /// Walk predecessor links back from `goal` and return the path start-first.
    ///
    /// An infinite distance or a broken predecessor chain is reported as
    /// [`Error::Unreachable`]. The walk never takes more steps than there are
    /// nodes in the graph.
    pub fn path_to(&self, goal: NodeId) -> Result<Vec<NodeId>> {
        if !self.graph.contains_id(goal) {
            return Err(Error::unknown_location(format!("#{goal}")));
        }
        if !self.is_reachable(goal) {
            return Err(self.unreachable(goal));
        }

        let mut path = vec![goal];
        let mut current = goal;
        while current != self.start {
            if path.len() > self.graph.node_count() {
                return Err(self.unreachable(goal));
            }
            let Some(previous) = self.predecessor(current) else {
                return Err(self.unreachable(goal));
            };
            path.push(previous);
            current = previous;
        }

        path.reverse();
        Ok(path)
    }

    fn unreachable(&self, goal: NodeId) -> Error {
        Error::Unreachable {
            start: self.display_name(self.start),
            goal: self.display_name(goal),
        }
    }

    fn display_name(&self, node: NodeId) -> String {
        self.graph
            .name_of(node)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{node}"))
    }
}

/// Compute shortest distances from `start` to every reachable node.
///
/// A relaxed path weight that leaves the finite `f64` range fails with
/// [`Error::DistanceOverflow`] instead of marking the target unreachable.
pub fn shortest_paths(graph: &Graph, start: NodeId) -> Result<ShortestPathTree<'_>> {
    run_dijkstra(graph, start, None)
}

/// Compute shortest distances from `start`, stopping once `goal` is finalised.
///
/// Only `goal` and the nodes settled before it carry final distances in the
/// returned tree.
pub fn shortest_paths_to(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
) -> Result<ShortestPathTree<'_>> {
    if !graph.contains_id(goal) {
        return Err(Error::unknown_location(format!("#{goal}")));
    }
    run_dijkstra(graph, start, Some(goal))
}

/// Find the lowest-cost route between `start` and `goal`.
pub fn find_route(graph: &Graph, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>> {
    shortest_paths_to(graph, start, goal)?.path_to(goal)
}

#[instrument(level = "debug", skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
fn run_dijkstra(
    graph: &Graph,
    start: NodeId,
    goal: Option<NodeId>,
) -> Result<ShortestPathTree<'_>> {
    if !graph.contains_id(start) {
        return Err(Error::unknown_location(format!("#{start}")));
    }

    let node_count = graph.node_count();
    let mut distances = vec![f64::INFINITY; node_count];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; node_count];
    let mut settled = vec![false; node_count];
    let mut settled_order = Vec::new();
    let mut frontier = Frontier::new();

    distances[start] = 0.0;
    frontier.insert(start, 0.0);

    while let Some(entry) = frontier.pop_min() {
        let current = entry.node;
        if settled[current] {
            continue;
        }
        settled[current] = true;
        settled_order.push(current);

        if Some(current) == goal {
            trace!(node = current, "goal settled, stopping early");
            break;
        }

        let current_distance = distances[current];
        for edge in graph.edges_from_id(current) {
            let next = edge.to;
            if settled[next] {
                continue;
            }

            let candidate = current_distance + edge.weight;
            if !candidate.is_finite() {
                return Err(Error::DistanceOverflow {
                    from: graph.name_of(current).unwrap_or_default().to_string(),
                    to: graph.name_of(next).unwrap_or_default().to_string(),
                });
            }
            if candidate < distances[next] {
                distances[next] = candidate;
                predecessors[next] = Some(current);
                if !frontier.insert(next, candidate) {
                    frontier.reorder(next, candidate);
                }
            }
        }
    }

    debug!(settled = settled_order.len(), "shortest path search finished");

    Ok(ShortestPathTree {
        graph,
        start,
        distances,
        predecessors,
        settled,
        settled_order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 8.0).unwrap();
        graph.add_edge("B", "C", 8.0).unwrap();
        graph.add_edge("A", "C", 8.0).unwrap();
        graph.add_node("D");
        graph
    }

    fn id(graph: &Graph, name: &str) -> NodeId {
        graph.id_of(name).unwrap()
    }

    #[test]
    fn direct_edge_beats_two_hop_path() {
        let graph = triangle();
        let tree = shortest_paths(&graph, id(&graph, "A")).unwrap();
        let c = id(&graph, "C");
        assert_eq!(tree.distance(c), 8.0);
        assert_eq!(tree.path_to(c).unwrap(), vec![id(&graph, "A"), c]);
    }

    #[test]
    fn isolated_destination_is_unreachable() {
        let graph = triangle();
        let tree = shortest_paths(&graph, id(&graph, "A")).unwrap();
        let d = id(&graph, "D");
        assert!(!tree.is_reachable(d));
        match tree.path_to(d) {
            Err(Error::Unreachable { start, goal }) => {
                assert_eq!(start, "A");
                assert_eq!(goal, "D");
            }
            other => panic!("expected unreachable, got {other:?}"),
        }
    }

    #[test]
    fn edge_direction_is_respected() {
        let graph = triangle();
        let result = find_route(&graph, id(&graph, "C"), id(&graph, "A"));
        assert!(matches!(result, Err(Error::Unreachable { .. })));
    }

    #[test]
    fn start_equals_goal_is_single_step() {
        let graph = triangle();
        let a = id(&graph, "A");
        assert_eq!(find_route(&graph, a, a).unwrap(), vec![a]);
    }

    #[test]
    fn decrease_key_updates_predecessor() {
        let mut graph = Graph::new();
        graph.add_edge("S", "X", 10.0).unwrap();
        graph.add_edge("S", "Y", 1.0).unwrap();
        graph.add_edge("Y", "X", 2.0).unwrap();
        let tree = shortest_paths(&graph, id(&graph, "S")).unwrap();
        let x = id(&graph, "X");
        assert_eq!(tree.distance(x), 3.0);
        assert_eq!(tree.predecessor(x), Some(id(&graph, "Y")));
    }

    #[test]
    fn early_stop_settles_goal() {
        let graph = triangle();
        let (a, b) = (id(&graph, "A"), id(&graph, "B"));
        let tree = shortest_paths_to(&graph, a, b).unwrap();
        assert!(tree.is_settled(b));
        assert_eq!(tree.settled_order().last(), Some(&b));
        assert!(!tree.is_settled(id(&graph, "C")));
    }

    #[test]
    fn unknown_start_is_rejected() {
        let graph = triangle();
        assert!(matches!(
            shortest_paths(&graph, 99),
            Err(Error::UnknownLocation { .. })
        ));
        assert!(matches!(
            shortest_paths_to(&graph, 0, 99),
            Err(Error::UnknownLocation { .. })
        ));
    }

    #[test]
    fn zero_weight_self_loop_is_harmless() {
        let mut graph = Graph::new();
        graph.add_edge("A", "A", 0.0).unwrap();
        graph.add_edge("A", "B", 1.0).unwrap();
        let a = id(&graph, "A");
        let b = id(&graph, "B");
        assert_eq!(find_route(&graph, a, b).unwrap(), vec![a, b]);
    }

    #[test]
    fn overflowing_distance_is_an_error_not_unreachable() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1e308).unwrap();
        graph.add_edge("B", "C", 1e308).unwrap();
        let a = id(&graph, "A");
        let c = id(&graph, "C");
        match find_route(&graph, a, c) {
            Err(Error::DistanceOverflow { from, to }) => {
                assert_eq!(from, "B");
                assert_eq!(to, "C");
            }
            other => panic!("expected overflow, got {other:?}"),
        }
    }
}
