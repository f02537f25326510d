use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the parcelroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location name is not present in the graph.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when the destination has no finite distance from the start.
    #[error("no route found between {start} and {goal}")]
    Unreachable { start: String, goal: String },

    /// Raised when a parcel attribute could not be validated.
    #[error("invalid parcel {attribute}: {value}")]
    InvalidParcelAttribute {
        attribute: &'static str,
        value: String,
    },

    /// Raised when an edge is added with a negative or non-finite weight.
    #[error("invalid weight {weight} for route {from} -> {to}; weights must be finite and non-negative")]
    InvalidEdgeWeight { from: String, to: String, weight: f64 },

    /// Raised when a line of the graph source cannot be turned into a route.
    #[error("malformed graph record on line {line}: {message}")]
    MalformedRecord { line: u64, message: String },

    /// Graph data file could not be located at the resolved path.
    #[error("graph file not found at {path}")]
    GraphFileNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the graph data file")]
    ProjectDirsUnavailable,

    /// Raised when the cost calculator receives inputs it cannot price.
    #[error("invalid pricing input: {message}")]
    InvalidPricing { message: String },

    /// Raised when a path weight exceeds the range of `f64`.
    #[error("accumulated distance overflowed on route {from} -> {to}")]
    DistanceOverflow { from: String, to: String },

    /// Raised when a computed route plan lacks any locations.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Build an [`Error::UnknownLocation`] without suggestions.
    pub fn unknown_location(name: impl Into<String>) -> Self {
        Error::UnknownLocation {
            name: name.into(),
            suggestions: Vec::new(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
