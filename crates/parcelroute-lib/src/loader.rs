//! Graph loading from the line-oriented route source.
//!
//! Each non-empty line names a route as `from,to`. Lines whose first
//! non-blank character is `#` are comments. Fields are split on `,` only;
//! quotes have no special meaning. Line numbers in errors are physical lines
//! of the source, counting blanks and comments. By default every route is given the same weight
//! ([`DEFAULT_EDGE_WEIGHT`]) and any further fields are ignored; with
//! [`LoaderConfig::weights_from_record`] a third field is read as the weight.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use crate::constants::DEFAULT_EDGE_WEIGHT;
use crate::error::{Error, Result};
use crate::graph::Graph;

/// Options controlling how route records become edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoaderConfig {
    /// Weight given to every route, and the fallback when a record has no
    /// weight field.
    pub edge_weight: f64,
    /// Read the weight from a third field when present.
    pub weights_from_record: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            edge_weight: DEFAULT_EDGE_WEIGHT,
            weights_from_record: false,
        }
    }
}

/// Load a graph from a file on disk.
pub fn load_graph(path: &Path, config: &LoaderConfig) -> Result<Graph> {
    if !path.is_file() {
        return Err(Error::GraphFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let graph = load_graph_from_reader(file, config)?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded route graph"
    );
    Ok(graph)
}

/// Load a graph from any reader (e.g., a file or an in-memory buffer).
pub fn load_graph_from_reader<R: Read>(reader: R, config: &LoaderConfig) -> Result<Graph> {
    let mut fields = ReaderBuilder::new();
    fields
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All);

    let mut graph = Graph::new();
    let mut ignored_fields = 0usize;
    let mut record = StringRecord::new();

    for (index, text) in BufReader::new(reader).lines().enumerate() {
        let text = text?;
        let line = index as u64 + 1;

        let trimmed = text.trim_start_matches('\u{feff}').trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            debug!(line, "skipping blank or comment line");
            continue;
        }

        if !fields.from_reader(trimmed.as_bytes()).read_record(&mut record)? {
            return Err(Error::MalformedRecord {
                line,
                message: "no fields found".to_string(),
            });
        }

        let (from, to) = endpoints(&record, line)?;
        let weight = if config.weights_from_record {
            record_weight(&record, line)?.unwrap_or(config.edge_weight)
        } else {
            if record.len() > 2 {
                ignored_fields += 1;
            }
            config.edge_weight
        };

        graph.add_edge(from, to, weight)?;
    }

    if ignored_fields > 0 {
        warn!(
            records = ignored_fields,
            "extra fields ignored; every route uses the uniform edge weight"
        );
    }

    Ok(graph)
}

fn endpoints(record: &StringRecord, line: u64) -> Result<(&str, &str)> {
    if record.len() < 2 {
        return Err(Error::MalformedRecord {
            line,
            message: format!("expected at least 2 fields, found {}", record.len()),
        });
    }

    let from = &record[0];
    let to = &record[1];
    if from.is_empty() || to.is_empty() {
        return Err(Error::MalformedRecord {
            line,
            message: "location names must not be empty".to_string(),
        });
    }
    Ok((from, to))
}

fn record_weight(record: &StringRecord, line: u64) -> Result<Option<f64>> {
    match record.get(2) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|err| Error::MalformedRecord {
                line,
                message: format!("invalid weight '{raw}': {err}"),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(text: &str, config: &LoaderConfig) -> Result<Graph> {
        load_graph_from_reader(Cursor::new(text), config)
    }

    #[test]
    fn uniform_weights_by_default() {
        let graph = load("Oslo,Berlin\nBerlin,Rome,99\n", &LoaderConfig::default()).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.edges().iter().all(|edge| edge.weight == 8.0));
    }

    #[test]
    fn fields_are_trimmed_and_comments_skipped() {
        let text = "# flights\n Oslo , Berlin \n\nBerlin,Rome\n";
        let graph = load(text, &LoaderConfig::default()).unwrap();
        let names: Vec<_> = graph.nodes().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Oslo", "Berlin", "Rome"]);
    }

    #[test]
    fn short_record_is_malformed() {
        let err = load("Oslo,Berlin\nRome\n", &LoaderConfig::default()).unwrap_err();
        match err {
            Error::MalformedRecord { line, .. } => assert_eq!(line, 2),
            other => panic!("expected malformed record, got {other:?}"),
        }
    }

    #[test]
    fn empty_name_is_malformed() {
        let err = load("Oslo,\n", &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn line_numbers_count_blank_and_comment_lines() {
        let err = load("# c\nOslo\n", &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 2, .. }));

        let err = load("A,B\n\nOslo\n", &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 3, .. }));
    }

    #[test]
    fn quotes_are_plain_characters() {
        let graph = load("\"Oslo,Berlin\nA,B\n", &LoaderConfig::default()).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.id_of("\"Oslo").is_some());
        assert!(graph.id_of("A").is_some());
    }

    #[test]
    fn indented_comment_is_skipped() {
        let graph = load("  # note\nA,B\n", &LoaderConfig::default()).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn record_of_empty_fields_is_malformed() {
        let err = load(",\nA,B\n", &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 1, .. }));

        let graph = load("   \nA,B\n", &LoaderConfig::default()).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn weights_from_record_reads_third_field() {
        let config = LoaderConfig {
            weights_from_record: true,
            ..LoaderConfig::default()
        };
        let graph = load("A,B,3\nB,C\n", &config).unwrap();
        let weights: Vec<_> = graph.edges().iter().map(|edge| edge.weight).collect();
        assert_eq!(weights, vec![3.0, 8.0]);
    }

    #[test]
    fn negative_record_weight_is_rejected() {
        let config = LoaderConfig {
            weights_from_record: true,
            ..LoaderConfig::default()
        };
        assert!(matches!(
            load("A,B,-1\n", &config),
            Err(Error::InvalidEdgeWeight { .. })
        ));
        assert!(matches!(
            load("A,B,far\n", &config),
            Err(Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_graph(Path::new("/definitely/not/here/graph.txt"), &LoaderConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::GraphFileNotFound { .. }));
    }
}
