//! Bridge detection.
//!
//! A tree edge `(u, v)` is a bridge when nothing in `v`'s DFS subtree has a
//! back edge reaching `u` or one of its ancestors, i.e. when
//! `low_link(v) > discovery_time(u)`.

use super::lowlink::{traverse, LowLinkVisitor, TraversalState};
use crate::graph::{AdjacencyIndex, Edge, GraphResult, UndirectedGraph};

/// Collects bridges as tree edges finish.
#[derive(Debug, Default)]
pub struct BridgeDetector {
    bridges: Vec<Edge>,
}

impl BridgeDetector {
    /// Creates an empty detector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the detector, returning bridges in the order found.
    pub fn into_bridges(self) -> Vec<Edge> {
        self.bridges
    }
}

impl LowLinkVisitor for BridgeDetector {
    fn tree_edge_finished(&mut self, state: &TraversalState, parent: usize, child: usize) {
        if state.low_link(child) > state.discovery(parent) {
            self.bridges.push(Edge::new(parent, child));
        }
    }
}

/// Finds every bridge of `graph`.
///
/// Each bridge is reported as (DFS parent, DFS child). Bridges appear in the
/// order their subtrees finish, component by component.
///
/// # Example
///
/// ```rust
/// use cutscope::analysis::bridges;
/// use cutscope::graph::{Edge, UndirectedGraph};
///
/// let graph = UndirectedGraph::new(4, vec![(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
/// assert_eq!(bridges(&graph).unwrap(), vec![Edge::new(2, 3)]);
/// ```
pub fn bridges(graph: &UndirectedGraph) -> GraphResult<Vec<Edge>> {
    let index = AdjacencyIndex::build(graph)?;
    let mut detector = BridgeDetector::new();
    let state = traverse(&index, &mut detector)?;

    let found = detector.into_bridges();
    log::debug!(
        "bridge search: {} vertices, {} edges, {} trees, {} bridges",
        graph.vertex_count(),
        graph.edge_count(),
        state.tree_count(),
        found.len()
    );
    Ok(found)
}

/// Finds every bridge of the graph given by `vertex_count` and `edges`.
///
/// # Errors
///
/// Returns an invalid-graph error for a zero vertex count or an endpoint
/// outside `0..vertex_count`, and [`GraphError::Internal`] when the
/// per-vertex storage for `vertex_count` vertices cannot be allocated.
///
/// [`GraphError::Internal`]: crate::graph::GraphError::Internal
///
/// # Example
///
/// ```rust
/// use cutscope::analysis::find_bridges;
/// use cutscope::graph::Edge;
///
/// let found = find_bridges(5, &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 4)]).unwrap();
/// assert_eq!(found, vec![Edge::new(3, 4), Edge::new(1, 3)]);
/// ```
pub fn find_bridges(vertex_count: usize, edges: &[(usize, usize)]) -> GraphResult<Vec<Edge>> {
    let graph = UndirectedGraph::new(vertex_count, edges.to_vec())?;
    bridges(&graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphError;

    fn sorted(edges: Vec<Edge>) -> Vec<Edge> {
        let mut normalized: Vec<Edge> = edges.into_iter().map(Edge::normalized).collect();
        normalized.sort();
        normalized
    }

    #[test]
    fn test_reference_graph() {
        let found = find_bridges(5, &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 4)]).unwrap();
        assert_eq!(sorted(found), vec![Edge::new(1, 3), Edge::new(3, 4)]);
    }

    #[test]
    fn test_bridges_oriented_parent_to_child() {
        let found = find_bridges(5, &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 4)]).unwrap();
        assert_eq!(found, vec![Edge::new(3, 4), Edge::new(1, 3)]);
    }

    #[test]
    fn test_single_edge() {
        assert_eq!(find_bridges(2, &[(0, 1)]).unwrap(), vec![Edge::new(0, 1)]);
    }

    #[test]
    fn test_reversed_single_edge_keeps_traversal_orientation() {
        assert_eq!(find_bridges(2, &[(1, 0)]).unwrap(), vec![Edge::new(0, 1)]);
    }

    #[test]
    fn test_triangle_has_no_bridges() {
        assert!(find_bridges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap().is_empty());
    }

    #[test]
    fn test_no_edges() {
        assert!(find_bridges(3, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_single_vertex() {
        assert!(find_bridges(1, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_path_every_edge_is_bridge() {
        let edges: Vec<(usize, usize)> = (0..9).map(|i| (i, i + 1)).collect();
        let found = find_bridges(10, &edges).unwrap();
        assert_eq!(sorted(found), edges.into_iter().map(Edge::from).collect::<Vec<_>>());
    }

    #[test]
    fn test_two_cycles_joined_by_bridge() {
        let edges = [(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)];
        assert_eq!(find_bridges(6, &edges).unwrap(), vec![Edge::new(1, 3)]);
    }

    #[test]
    fn test_disconnected_components() {
        // Triangle 0-1-2, isolated 3, path 4-5-6
        let edges = [(0, 1), (1, 2), (2, 0), (4, 5), (5, 6)];
        let found = find_bridges(7, &edges).unwrap();
        assert_eq!(sorted(found), vec![Edge::new(4, 5), Edge::new(5, 6)]);
    }

    #[test]
    fn test_parallel_edges_are_not_bridges() {
        assert!(find_bridges(2, &[(0, 1), (0, 1)]).unwrap().is_empty());

        let found = find_bridges(3, &[(0, 1), (1, 0), (1, 2)]).unwrap();
        assert_eq!(found, vec![Edge::new(1, 2)]);
    }

    #[test]
    fn test_self_loop_never_bridge() {
        let found = find_bridges(2, &[(0, 0), (0, 1), (1, 1)]).unwrap();
        assert_eq!(found, vec![Edge::new(0, 1)]);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = find_bridges(2, &[(0, 2)]).unwrap_err();
        assert!(matches!(err, GraphError::VertexOutOfRange { index: 0, .. }));
    }

    #[test]
    fn test_zero_vertices_rejected() {
        assert_eq!(find_bridges(0, &[]).unwrap_err(), GraphError::EmptyVertexSet);
    }

    #[test]
    fn test_unallocatable_vertex_count_is_internal_error() {
        let err = find_bridges(usize::MAX / 4, &[(0, 1)]).unwrap_err();
        assert!(matches!(err, GraphError::Internal(_)));
        assert!(!err.is_invalid_graph());
    }

    #[test]
    fn test_late_discovered_parent_keeps_bridge() {
        // Vertex 3 is discovered late and hangs off a cycle; 3-4 is a bridge
        let found = find_bridges(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]).unwrap();
        assert_eq!(found, vec![Edge::new(3, 4), Edge::new(2, 3)]);
    }
}
