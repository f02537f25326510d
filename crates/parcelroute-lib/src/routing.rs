use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::parcel::Parcel;
use crate::path::shortest_paths_to;
use crate::pricing::{quote_delivery, DeliveryQuote, PricingConfig};

/// High-level route planning request using location names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub start: NodeId,
    pub goal: NodeId,
    pub steps: Vec<NodeId>,
    pub total_distance: f64,
}

impl RoutePlan {
    /// Number of flights (edges) in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Location names along the route, start first.
    pub fn step_names<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.steps
            .iter()
            .map(|&id| graph.name_of(id).unwrap_or("<unknown>"))
            .collect()
    }

    /// Price carrying `parcel` along this route.
    pub fn quote(&self, parcel: &Parcel, config: &PricingConfig) -> Result<DeliveryQuote> {
        quote_delivery(self.total_distance, parcel, config)
    }
}

/// Resolve the request's names and compute the cheapest route between them.
///
/// Unknown names fail with [`Error::UnknownLocation`] (including close
/// matches) before any search runs; a destination with no path from the
/// start fails with [`Error::Unreachable`].
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let start = graph.resolve(&request.start)?;
    let goal = graph.resolve(&request.goal)?;

    let tree = shortest_paths_to(graph, start, goal)?;
    let steps = tree.path_to(goal)?;
    if steps.is_empty() {
        return Err(Error::EmptyRoutePlan);
    }

    let total_distance = tree.distance(goal);
    debug!(
        start = %request.start,
        goal = %request.goal,
        hops = steps.len() - 1,
        total_distance,
        "planned route"
    );

    Ok(RoutePlan {
        start,
        goal,
        steps,
        total_distance,
    })
}
