//! Graph module for undirected connectivity input.
//!
//! This module provides the [`UndirectedGraph`] input model, the [`Edge`]
//! type used in results, and the [`AdjacencyIndex`] the traversal runs on.
//!
//! # Example
//!
//! ```rust
//! use cutscope::graph::{AdjacencyIndex, UndirectedGraph};
//!
//! let graph = UndirectedGraph::new(4, vec![(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
//! let index = AdjacencyIndex::build(&graph).unwrap();
//!
//! assert_eq!(graph.edge_count(), 4);
//! assert_eq!(index.degree(2), 3);
//! ```

mod adjacency;
mod undirected;

pub use adjacency::{AdjacencyIndex, Neighbor};
pub use undirected::{Edge, GraphError, GraphResult, UndirectedGraph};

pub(crate) use undirected::try_filled;
