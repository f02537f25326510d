use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Default filename for the route graph.
pub const GRAPH_FILENAME: &str = "graph.txt";

/// Environment variable that overrides the graph file location.
pub const GRAPH_ENV_VAR: &str = "PARCELROUTE_GRAPH";

/// Resolve the default graph location using platform-specific project directories.
pub fn default_graph_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "parcelroute", "parcelroute")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(GRAPH_FILENAME))
}

/// Resolve which graph file to load.
///
/// Precedence: the explicit path, then [`GRAPH_ENV_VAR`], then `graph.txt`
/// in the working directory, then the platform data directory. The returned
/// path is not required to exist; loading reports a missing file.
pub fn resolve_graph_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let working_dir = env::current_dir()?;
    resolve_graph_path_from(explicit, env::var_os(GRAPH_ENV_VAR), &working_dir)
}

fn resolve_graph_path_from(
    explicit: Option<&Path>,
    env_override: Option<OsString>,
    working_dir: &Path,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "using explicit graph path");
        return Ok(path.to_path_buf());
    }

    if let Some(value) = env_override.filter(|value| !value.is_empty()) {
        let path = PathBuf::from(value);
        debug!(path = %path.display(), var = GRAPH_ENV_VAR, "using graph path from environment");
        return Ok(path);
    }

    let local = working_dir.join(GRAPH_FILENAME);
    if local.is_file() {
        debug!(path = %local.display(), "using graph file in working directory");
        return Ok(local);
    }

    default_graph_path()
}
