//! Connectivity analysis for undirected graphs.
//!
//! This module finds the structural weak points of a graph:
//!
//! - **Bridges**: edges whose removal increases the number of connected
//!   components.
//! - **Articulation points**: vertices whose removal does the same.
//!
//! Both are computed with a linear-time depth-first low-link traversal that
//! walks every component. All traversal state lives in the call, so
//! analyses can run concurrently from any number of threads.
//!
//! # Example
//!
//! ```rust
//! use cutscope::analysis::{analyze, find_articulation_points, find_bridges};
//! use cutscope::graph::{Edge, UndirectedGraph};
//!
//! let edges = [(0, 1), (1, 2), (2, 0), (1, 3), (3, 4)];
//!
//! let mut bridges = find_bridges(5, &edges).unwrap();
//! bridges.sort();
//! assert_eq!(bridges, vec![Edge::new(1, 3), Edge::new(3, 4)]);
//! assert_eq!(find_articulation_points(5, &edges).unwrap(), vec![1, 3]);
//!
//! let graph = UndirectedGraph::new(5, edges.to_vec()).unwrap();
//! let report = analyze(&graph).unwrap();
//! assert_eq!(report.articulation_points, vec![1, 3]);
//! assert_eq!(report.component_count, 1);
//! ```

pub mod articulation;
pub mod bridges;
pub mod lowlink;

pub use articulation::{articulation_points, find_articulation_points, ArticulationDetector};
pub use bridges::{bridges, find_bridges, BridgeDetector};
pub use lowlink::{traverse, LowLinkVisitor, TraversalState};

use crate::graph::{AdjacencyIndex, Edge, GraphResult, UndirectedGraph};

/// Bridges and articulation points of one graph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConnectivityReport {
    /// Bridges as (DFS parent, DFS child), in discovery order
    pub bridges: Vec<Edge>,
    /// Cut vertices in ascending order
    pub articulation_points: Vec<usize>,
    /// Number of connected components (DFS trees)
    pub component_count: usize,
}

impl ConnectivityReport {
    /// Returns true if the graph has neither bridges nor cut vertices.
    pub fn is_biconnected_everywhere(&self) -> bool {
        self.bridges.is_empty() && self.articulation_points.is_empty()
    }

    /// Returns true if the given edge is a bridge, in either orientation.
    pub fn is_bridge(&self, edge: Edge) -> bool {
        let edge = edge.normalized();
        self.bridges.iter().any(|b| b.normalized() == edge)
    }

    /// Returns true if `vertex` is an articulation point.
    pub fn is_articulation_point(&self, vertex: usize) -> bool {
        self.articulation_points.binary_search(&vertex).is_ok()
    }
}

/// Finds bridges and articulation points in a single traversal.
///
/// The result is identical to calling [`bridges`] and
/// [`articulation_points`] separately.
pub fn analyze(graph: &UndirectedGraph) -> GraphResult<ConnectivityReport> {
    let mut detectors = (
        BridgeDetector::new(),
        ArticulationDetector::new(graph.vertex_count())?,
    );
    let index = AdjacencyIndex::build(graph)?;
    let state = traverse(&index, &mut detectors)?;

    let (bridge_detector, articulation_detector) = detectors;
    let report = ConnectivityReport {
        bridges: bridge_detector.into_bridges(),
        articulation_points: articulation_detector.into_points(),
        component_count: state.tree_count(),
    };

    log::debug!(
        "connectivity analysis: {} vertices, {} edges, {} components, {} bridges, {} cut vertices",
        graph.vertex_count(),
        graph.edge_count(),
        report.component_count,
        report.bridges.len(),
        report.articulation_points.len()
    );
    Ok(report)
}
