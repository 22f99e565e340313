//! Shared types for graph input parsing.
//!
//! This module defines the request document accepted at the boundary and
//! the policy used to validate it before analysis.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::graph::{GraphResult, UndirectedGraph};

/// A graph analysis request as supplied by a client.
///
/// Values are kept signed so negative input can be reported instead of
/// silently wrapping.
///
/// # Example
///
/// ```
/// use cutscope::parser::types::GraphRequest;
///
/// let json = r#"{"vertexCount": 3, "edges": [[0, 1], [1, 2]]}"#;
/// let request: GraphRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(request.vertex_count, 3);
/// assert_eq!(request.edges, vec![(0, 1), (1, 2)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphRequest {
    /// Number of vertices; vertices are `0..vertex_count`.
    pub vertex_count: i64,

    /// Edges as `[u, v]` pairs, in input order.
    #[serde(default)]
    pub edges: Vec<(i64, i64)>,
}

impl GraphRequest {
    /// Creates a new request.
    pub fn new(vertex_count: i64, edges: Vec<(i64, i64)>) -> Self {
        Self {
            vertex_count,
            edges,
        }
    }

    /// Converts the request into a validated graph.
    ///
    /// This applies the core's own range checks only; boundary policy is
    /// enforced by [`crate::parser::validate`].
    pub fn into_graph(self) -> GraphResult<UndirectedGraph> {
        UndirectedGraph::from_signed(self.vertex_count, &self.edges)
    }
}

/// Input formats understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    /// JSON request document: `{"vertexCount": n, "edges": [[u, v], ...]}`
    Json,
    /// Plain text: vertex count on the first line, then one `u v` per line
    EdgeList,
}

impl GraphFormat {
    /// Detects the format from a file extension.
    ///
    /// Returns `None` for extensions that are not graph files.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "txt" | "edges" | "graph" => Some(Self::EdgeList),
            _ => None,
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::EdgeList => write!(f, "edge-list"),
        }
    }
}

/// Boundary validation rules applied before a request reaches the core.
///
/// The core itself accepts empty edge lists, self-loops and parallel edges;
/// the policy lets a caller narrow what it admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Accept a request with no edges.
    pub allow_empty_edges: bool,
    /// Accept edges whose endpoints are equal.
    pub allow_self_loops: bool,
    /// Accept the same unordered vertex pair more than once.
    pub allow_parallel_edges: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            allow_empty_edges: false,
            allow_self_loops: true,
            allow_parallel_edges: true,
        }
    }
}

impl ValidationPolicy {
    /// A policy that admits everything the core can analyze.
    pub fn permissive() -> Self {
        Self {
            allow_empty_edges: true,
            allow_self_loops: true,
            allow_parallel_edges: true,
        }
    }

    /// A policy that admits only simple graphs with at least one edge.
    pub fn strict() -> Self {
        Self {
            allow_empty_edges: false,
            allow_self_loops: false,
            allow_parallel_edges: false,
        }
    }
}
