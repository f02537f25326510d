//! Route command handler for computing paths between locations.

use std::io::{self, Write};

use anyhow::{Context, Result};

use parcelroute_lib::{
    plan_route, Error as RouteError, Graph, Parcel, RouteRequest, RouteSummary,
};

use crate::commands::{parcel_from_args, AppContext};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting location name.
    pub from: String,
    /// Destination location name.
    pub to: String,
    /// Parcel weight in kilograms.
    pub weight: Option<String>,
    /// Parcel size code.
    pub size: Option<String>,
    /// Parcel type.
    pub parcel_type: Option<String>,
}

impl RouteCommandArgs {
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from.trim(), self.to.trim())
    }

    pub fn parcel(&self) -> Result<Option<Parcel>> {
        parcel_from_args(
            self.weight.as_deref(),
            self.size.as_deref(),
            self.parcel_type.as_deref(),
        )
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(ctx: &AppContext, args: &RouteCommandArgs) -> Result<()> {
    // Validate parcel input before touching the graph file.
    let parcel = args.parcel()?;
    let graph = ctx.load_graph()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_route(ctx, &graph, &args.to_request(), parcel.as_ref(), &mut out)
}

/// Plan `request` and write the rendered route (and quote) to `out`.
pub fn write_route<W: Write>(
    ctx: &AppContext,
    graph: &Graph,
    request: &RouteRequest,
    parcel: Option<&Parcel>,
    out: &mut W,
) -> Result<()> {
    let plan = plan_route(graph, request).map_err(handle_route_failure)?;

    let mut summary = RouteSummary::from_plan(graph, &plan)
        .context("failed to build route summary for display")?;
    if let Some(parcel) = parcel {
        let quote = plan
            .quote(parcel, &ctx.pricing)
            .context("failed to price the delivery")?;
        summary = summary.with_quote(quote);
    }

    ctx.format
        .render_route(out, &summary, &ctx.palette)
        .context("failed to write route output")
}

pub(crate) fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownLocation { name, suggestions } => {
            anyhow::anyhow!(format_unknown_location_message(&name, &suggestions))
        }
        RouteError::Unreachable { start, goal } => {
            anyhow::anyhow!(format_unreachable_message(&start, &goal))
        }
        other => anyhow::Error::new(other),
    }
}

pub(crate) fn format_unknown_location_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown location '{}'.", name);
    match suggestions {
        [] => {}
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}

fn format_unreachable_message(start: &str, goal: &str) -> String {
    format!(
        "No route found between {} and {}. Routes are one-way; check the flights leaving {}.",
        start, goal, start
    )
}
