//! Quote command: price a delivery for a known path weight without a graph.

use std::io::{self, Write};

use anyhow::{Context, Result};

use parcelroute_lib::{quote_delivery, Parcel};

use crate::commands::AppContext;

#[derive(Debug, Clone)]
pub struct QuoteCommandArgs {
    /// Accumulated path weight (distance) to price.
    pub distance: f64,
    pub weight: String,
    pub size: String,
    pub parcel_type: String,
}

pub fn handle_quote_command(ctx: &AppContext, args: &QuoteCommandArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_quote(ctx, args, &mut out)
}

pub fn write_quote<W: Write>(ctx: &AppContext, args: &QuoteCommandArgs, out: &mut W) -> Result<()> {
    let parcel = Parcel::parse(&args.weight, &args.size, &args.parcel_type)?;
    let quote = quote_delivery(args.distance, &parcel, &ctx.pricing)?;
    ctx.format
        .render_quote(out, &parcel, &quote, &ctx.palette)
        .context("failed to write quote output")
}
