// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments, builds an
// AppContext, and dispatches here.

pub mod interactive;
pub mod locations;
pub mod quote;
pub mod route;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use parcelroute_lib::{
    load_graph, resolve_graph_path, Graph, LoaderConfig, Parcel, PricingConfig,
};

use crate::output::OutputFormat;
use crate::terminal::ColorPalette;

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub graph_path: Option<PathBuf>,
    pub loader: LoaderConfig,
    pub pricing: PricingConfig,
    pub format: OutputFormat,
    pub palette: ColorPalette,
}

impl AppContext {
    /// Resolve and load the route graph.
    pub fn load_graph(&self) -> Result<Graph> {
        let path = resolve_graph_path(self.graph_path.as_deref())
            .context("failed to resolve the route graph location")?;
        debug!(path = %path.display(), "resolved graph path");
        load_graph_from(&path, &self.loader)
    }
}

fn load_graph_from(path: &Path, config: &LoaderConfig) -> Result<Graph> {
    load_graph(path, config)
        .with_context(|| format!("failed to load route graph from {}", path.display()))
}

/// Build a parcel from optional CLI values.
///
/// All three attributes must be supplied together; returns `None` when none are.
pub fn parcel_from_args(
    weight: Option<&str>,
    size: Option<&str>,
    parcel_type: Option<&str>,
) -> Result<Option<Parcel>> {
    match (weight, size, parcel_type) {
        (None, None, None) => Ok(None),
        (Some(weight), Some(size), Some(parcel_type)) => Parcel::parse(weight, size, parcel_type)
            .map(Some)
            .map_err(anyhow::Error::from),
        _ => Err(anyhow::anyhow!(
            "--weight, --size and --type must be given together to price a delivery"
        )),
    }
}
