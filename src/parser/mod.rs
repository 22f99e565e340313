//! Parser module for CutScope.
//!
//! This module reads graph analysis requests and applies boundary
//! validation before a graph reaches the analysis core.
//!
//! # Supported Formats
//!
//! - **JSON** (`.json`) - `{"vertexCount": 5, "edges": [[0, 1], [1, 2]]}`
//! - **Edge list** (`.txt`, `.edges`, `.graph`) - vertex count, then `u v` per line
//!
//! # Example
//!
//! ```
//! use cutscope::parser::{load_graph, parse_str, GraphFormat, ValidationPolicy};
//!
//! let request = parse_str(r#"{"vertexCount": 2, "edges": [[0, 1]]}"#, GraphFormat::Json).unwrap();
//! let graph = load_graph(request, &ValidationPolicy::default()).unwrap();
//!
//! assert_eq!(graph.vertex_count(), 2);
//! ```

pub mod graph_file;
pub mod types;

// Re-export commonly used types for convenience
pub use graph_file::{
    discover_graph_files, load_graph, parse_file, parse_str, validate, ParseError, ParseResult,
};

pub use types::{GraphFormat, GraphRequest, ValidationPolicy};
