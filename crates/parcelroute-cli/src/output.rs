//! Output formatting for route, quote, and location rendering.
//!
//! Every renderer writes to an `impl Write` so commands can target stdout
//! while tests capture into a buffer.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use parcelroute_lib::output::{format_amount, format_distance};
use parcelroute_lib::{DeliveryQuote, Graph, Parcel, RouteRenderMode, RouteSummary};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly listing of each stop.
    #[default]
    Text,
    /// Single `A -> B -> C` line followed by the overall cost.
    Arrow,
    /// Machine-readable JSON.
    Json,
}

#[derive(Serialize)]
struct QuoteDocument<'a> {
    parcel: &'a Parcel,
    quote: &'a DeliveryQuote,
}

#[derive(Serialize)]
struct LocationsDocument<'a> {
    count: usize,
    locations: Vec<&'a str>,
}

impl OutputFormat {
    /// Render a route summary, with its quote when one is attached.
    pub fn render_route<W: Write>(
        self,
        out: &mut W,
        summary: &RouteSummary,
        palette: &ColorPalette,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Text if *palette == ColorPalette::plain() => {
                out.write_all(summary.render(RouteRenderMode::PlainText).as_bytes())
            }
            OutputFormat::Text => render_tagged(out, summary, palette),
            OutputFormat::Arrow => out.write_all(summary.render(RouteRenderMode::Arrow).as_bytes()),
            OutputFormat::Json => write_json(out, summary),
        }
    }

    /// Render a standalone delivery quote.
    pub fn render_quote<W: Write>(
        self,
        out: &mut W,
        parcel: &Parcel,
        quote: &DeliveryQuote,
        palette: &ColorPalette,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Json => write_json(out, &QuoteDocument { parcel, quote }),
            OutputFormat::Arrow => writeln!(out, "Overall cost: ${}", format_amount(quote.total)),
            OutputFormat::Text => {
                writeln!(
                    out,
                    "Parcel: {} kg, size {}, {}",
                    parcel.weight_kg(),
                    parcel.size(),
                    parcel.parcel_type()
                )?;
                writeln!(
                    out,
                    "  weight surcharge: ${}",
                    format_amount(quote.weight_surcharge)
                )?;
                writeln!(
                    out,
                    "  size surcharge:   ${}",
                    format_amount(quote.size_surcharge)
                )?;
                writeln!(out, "  type multiplier:  x{}", quote.type_multiplier)?;
                writeln!(
                    out,
                    "Parcel cost: ${} per flight x {} flights",
                    format_amount(quote.parcel_cost),
                    format_distance(quote.flights)
                )?;
                writeln!(
                    out,
                    "Overall cost: {}${}{}",
                    palette.green,
                    format_amount(quote.total),
                    palette.reset
                )
            }
        }
    }

    /// Render every location name in load order.
    pub fn render_locations<W: Write>(self, out: &mut W, graph: &Graph) -> io::Result<()> {
        let names: Vec<&str> = graph.nodes().iter().map(|node| node.name.as_str()).collect();
        match self {
            OutputFormat::Json => write_json(
                out,
                &LocationsDocument {
                    count: names.len(),
                    locations: names,
                },
            ),
            OutputFormat::Arrow => writeln!(out, "{}", names.join(", ")),
            OutputFormat::Text => {
                for name in names {
                    writeln!(out, "{name}")?;
                }
                Ok(())
            }
        }
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    writeln!(out)
}

/// Colored view with START/STOP/GOAL tags for each stop.
fn render_tagged<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    palette: &ColorPalette,
) -> io::Result<()> {
    writeln!(
        out,
        "Route from {}{}{} to {}{}{} ({} hops, distance {}):",
        palette.white_bold,
        summary.start.name,
        palette.reset,
        palette.white_bold,
        summary.goal.name,
        palette.reset,
        summary.hops,
        format_distance(summary.total_distance)
    )?;

    let last = summary.steps.len().saturating_sub(1);
    for step in &summary.steps {
        let (color, tag) = if step.index == 0 {
            (palette.tag_start, "START")
        } else if step.index == last {
            (palette.tag_goal, "GOAL ")
        } else {
            (palette.tag_stop, "STOP ")
        };
        write!(
            out,
            "{color} {tag} {} {}{}{}",
            palette.reset, palette.white_bold, step.name, palette.reset
        )?;
        match step.leg_distance {
            Some(leg) => writeln!(
                out,
                " {}(+{}, total {}){}",
                palette.gray,
                format_distance(leg),
                format_distance(step.cumulative_distance),
                palette.reset
            )?,
            None => writeln!(out)?,
        }
    }

    if let Some(quote) = &summary.quote {
        writeln!(
            out,
            "Parcel cost: ${} per flight x {} flights",
            format_amount(quote.parcel_cost),
            format_distance(quote.flights)
        )?;
        writeln!(
            out,
            "Overall cost: {}${}{}",
            palette.green,
            format_amount(quote.total),
            palette.reset
        )?;
    }
    Ok(())
}
