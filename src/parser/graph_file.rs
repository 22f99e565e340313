//! Parser for graph input files.
//!
//! This module reads graph requests from JSON documents and plain edge
//! lists, and validates them against a [`ValidationPolicy`] before they are
//! handed to the analysis core.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::types::{GraphFormat, GraphRequest, ValidationPolicy};
use crate::graph::{GraphError, UndirectedGraph};

/// Errors that can occur while reading or validating graph input.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse JSON content.
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// An edge-list line could not be parsed.
    #[error("Syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// The request violates the validation policy.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The file extension is not a known graph format.
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// The graph was rejected by the core.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl ParseError {
    /// Returns true if the error is the client's fault rather than an
    /// I/O or internal failure.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::IoError(_) => false,
            Self::Graph(err) => err.is_invalid_graph(),
            _ => true,
        }
    }
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a graph file, detecting the format from its extension.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use cutscope::parser::graph_file::parse_file;
///
/// let request = parse_file(Path::new("network.json")).unwrap();
/// println!("{} vertices", request.vertex_count);
/// ```
pub fn parse_file(path: &Path) -> ParseResult<GraphRequest> {
    let format = GraphFormat::from_path(path)
        .ok_or_else(|| ParseError::UnsupportedFormat(path.display().to_string()))?;
    log::debug!("parsing {} as {}", path.display(), format);
    let content = fs::read_to_string(path)?;
    parse_str(&content, format)
}

/// Parses a graph request from a string in the given format.
///
/// # Example
///
/// ```
/// use cutscope::parser::graph_file::parse_str;
/// use cutscope::parser::types::GraphFormat;
///
/// let request = parse_str("3\n0 1\n1 2\n", GraphFormat::EdgeList).unwrap();
/// assert_eq!(request.vertex_count, 3);
/// assert_eq!(request.edges, vec![(0, 1), (1, 2)]);
/// ```
pub fn parse_str(content: &str, format: GraphFormat) -> ParseResult<GraphRequest> {
    match format {
        GraphFormat::Json => Ok(serde_json::from_str(content)?),
        GraphFormat::EdgeList => parse_edge_list(content),
    }
}

/// Parses the plain edge-list format.
///
/// Blank lines and anything after `#` are ignored. The first remaining line
/// holds the vertex count; each following line holds two endpoints.
fn parse_edge_list(content: &str) -> ParseResult<GraphRequest> {
    let mut vertex_count = None;
    let mut edges = Vec::new();

    for (number, raw) in content.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let line_number = number + 1;

        if vertex_count.is_none() {
            if fields.len() != 1 {
                return Err(syntax(line_number, "expected the vertex count"));
            }
            vertex_count = Some(parse_int(fields[0], line_number)?);
            continue;
        }

        if fields.len() != 2 {
            return Err(syntax(
                line_number,
                format!("expected two endpoints, found {} fields", fields.len()),
            ));
        }
        edges.push((
            parse_int(fields[0], line_number)?,
            parse_int(fields[1], line_number)?,
        ));
    }

    let vertex_count = vertex_count.ok_or_else(|| syntax(1, "missing vertex count"))?;
    Ok(GraphRequest::new(vertex_count, edges))
}

fn parse_int(field: &str, line: usize) -> ParseResult<i64> {
    field
        .parse()
        .map_err(|_| syntax(line, format!("'{}' is not an integer", field)))
}

fn syntax(line: usize, message: impl Into<String>) -> ParseError {
    ParseError::Syntax {
        line,
        message: message.into(),
    }
}

/// Validates a request against a boundary policy.
///
/// Checks that the vertex count is at least 1, that every endpoint is in
/// `0..vertex_count`, and that the edge list satisfies the policy.
pub fn validate(request: &GraphRequest, policy: &ValidationPolicy) -> ParseResult<()> {
    if request.vertex_count < 1 {
        return Err(ParseError::Validation(format!(
            "vertexCount must be at least 1, got {}",
            request.vertex_count
        )));
    }

    if request.edges.is_empty() && !policy.allow_empty_edges {
        return Err(ParseError::Validation(
            "edges must not be empty".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(request.edges.len());
    for (index, &(u, v)) in request.edges.iter().enumerate() {
        for endpoint in [u, v] {
            if endpoint < 0 || endpoint >= request.vertex_count {
                return Err(ParseError::Validation(format!(
                    "edge #{} ({}, {}): vertex {} is outside [0, {}]",
                    index,
                    u,
                    v,
                    endpoint,
                    request.vertex_count - 1
                )));
            }
        }

        if u == v && !policy.allow_self_loops {
            return Err(ParseError::Validation(format!(
                "edge #{} is a self-loop on vertex {}",
                index, u
            )));
        }

        if !policy.allow_parallel_edges && !seen.insert((u.min(v), u.max(v))) {
            return Err(ParseError::Validation(format!(
                "edge #{} ({}, {}) duplicates an earlier edge",
                index, u, v
            )));
        }
    }

    Ok(())
}

/// Validates a request and converts it into a graph.
pub fn load_graph(request: GraphRequest, policy: &ValidationPolicy) -> ParseResult<UndirectedGraph> {
    validate(&request, policy)?;
    Ok(request.into_graph()?)
}

/// Finds all graph files below `root`, sorted by path.
///
/// Hidden directories and build output are skipped.
pub fn discover_graph_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_ignored_dir(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| GraphFormat::from_path(path).is_some())
        .collect();

    files.sort();
    log::debug!("found {} graph files under {}", files.len(), root.display());
    files
}

fn is_ignored_dir(entry: &walkdir::DirEntry) -> bool {
    if !entry.file_type().is_dir() || entry.depth() == 0 {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || matches!(name.as_ref(), "target" | "node_modules")
}
