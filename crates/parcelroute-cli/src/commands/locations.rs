//! Locations command: list every node of the loaded graph.

use std::io;

use anyhow::{Context, Result};

use crate::commands::AppContext;

pub fn handle_locations_command(ctx: &AppContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ctx.format
        .render_locations(&mut out, &graph)
        .context("failed to write location list")
}
