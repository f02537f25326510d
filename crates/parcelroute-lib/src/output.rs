use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::pricing::DeliveryQuote;
use crate::routing::RoutePlan;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Header line followed by one numbered line per stop.
    PlainText,
    /// Single `A -> B -> C` line.
    Arrow,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub id: NodeId,
    pub name: String,
}

/// Stop along a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: NodeId,
    pub name: String,
    /// Weight of the flight into this stop; absent for the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_distance: Option<f64>,
    pub cumulative_distance: f64,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub hops: usize,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub total_distance: f64,
    pub steps: Vec<RouteStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<DeliveryQuote>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a structured summary with resolved names.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        let (Some(&first), Some(&last)) = (plan.steps.first(), plan.steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let mut steps = Vec::with_capacity(plan.steps.len());
        let mut cumulative = 0.0;
        let mut previous: Option<NodeId> = None;
        for (index, &id) in plan.steps.iter().enumerate() {
            let leg_distance = previous.and_then(|from| graph.min_edge_weight(from, id));
            cumulative += leg_distance.unwrap_or(0.0);
            steps.push(RouteStep {
                index,
                id,
                name: display_name(graph, id),
                leg_distance,
                cumulative_distance: cumulative,
            });
            previous = Some(id);
        }

        Ok(Self {
            hops: plan.hop_count(),
            start: RouteEndpoint {
                id: first,
                name: display_name(graph, first),
            },
            goal: RouteEndpoint {
                id: last,
                name: display_name(graph, last),
            },
            total_distance: plan.total_distance,
            steps,
            quote: None,
        })
    }

    /// Attach a delivery quote to the summary.
    pub fn with_quote(mut self, quote: DeliveryQuote) -> Self {
        self.quote = Some(quote);
        self
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Arrow => self.render_arrow(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, distance {})",
            self.start.name,
            self.goal.name,
            self.hops,
            format_distance(self.total_distance)
        );
        for step in &self.steps {
            match step.leg_distance {
                Some(leg) => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} (+{}, total {})",
                        step.index,
                        step.name,
                        format_distance(leg),
                        format_distance(step.cumulative_distance)
                    );
                }
                None => {
                    let _ = writeln!(buffer, "{:>3}: {}", step.index, step.name);
                }
            }
        }
        if let Some(quote) = &self.quote {
            let _ = writeln!(
                buffer,
                "Parcel cost: ${} per flight x {} flights",
                format_amount(quote.parcel_cost),
                format_distance(quote.flights)
            );
            let _ = writeln!(buffer, "Overall cost: ${}", format_amount(quote.total));
        }
        buffer
    }

    fn render_arrow(&self) -> String {
        let mut buffer = self
            .steps
            .iter()
            .map(|step| step.name.as_str())
            .collect::<Vec<_>>()
            .join(" -> ");
        buffer.push('\n');
        if let Some(quote) = &self.quote {
            let _ = writeln!(buffer, "Overall cost: ${}", format_amount(quote.total));
        }
        buffer
    }
}

fn display_name(graph: &Graph, id: NodeId) -> String {
    graph.name_of(id).unwrap_or("<unknown>").to_string()
}

/// Format a monetary amount with two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Format a distance, dropping the fraction when it is whole.
pub fn format_distance(distance: f64) -> String {
    if distance.fract() == 0.0 && distance.abs() < 1e15 {
        format!("{distance:.0}")
    } else {
        format!("{distance:.2}")
    }
}
