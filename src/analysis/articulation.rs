//! Articulation point (cut vertex) detection.
//!
//! A DFS-tree root is a cut vertex when it has two or more tree children.
//! Any other vertex `u` is one when some child `v` satisfies
//! `low_link(v) >= discovery_time(u)`: `v`'s subtree cannot reach above `u`
//! without passing through it.

use super::lowlink::{traverse, LowLinkVisitor, TraversalState};
use crate::graph::{try_filled, AdjacencyIndex, GraphResult, UndirectedGraph};

/// Marks cut vertices as tree edges finish.
///
/// Marking is idempotent; a vertex split off by several children is
/// reported once.
#[derive(Debug)]
pub struct ArticulationDetector {
    marked: Vec<bool>,
}

impl ArticulationDetector {
    /// Creates a detector for `vertex_count` vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Internal`](crate::graph::GraphError::Internal)
    /// if the marker array cannot be allocated.
    pub fn new(vertex_count: usize) -> GraphResult<Self> {
        Ok(Self {
            marked: try_filled(vertex_count, false, "articulation markers")?,
        })
    }

    /// Consumes the detector, returning cut vertices in ascending order.
    pub fn into_points(self) -> Vec<usize> {
        self.marked
            .iter()
            .enumerate()
            .filter_map(|(vertex, &is_cut)| is_cut.then_some(vertex))
            .collect()
    }
}

impl LowLinkVisitor for ArticulationDetector {
    fn tree_edge_finished(&mut self, state: &TraversalState, parent: usize, child: usize) {
        let is_cut = match state.parent(parent) {
            None => state.child_count(parent) > 1,
            Some(_) => state.low_link(child) >= state.discovery(parent),
        };

        if is_cut {
            self.marked[parent] = true;
        }
    }
}

/// Finds every articulation point of `graph`, in ascending vertex order.
///
/// # Example
///
/// ```rust
/// use cutscope::analysis::articulation_points;
/// use cutscope::graph::UndirectedGraph;
///
/// let graph = UndirectedGraph::new(3, vec![(0, 1), (1, 2)]).unwrap();
/// assert_eq!(articulation_points(&graph).unwrap(), vec![1]);
/// ```
pub fn articulation_points(graph: &UndirectedGraph) -> GraphResult<Vec<usize>> {
    let mut detector = ArticulationDetector::new(graph.vertex_count())?;
    let index = AdjacencyIndex::build(graph)?;
    let state = traverse(&index, &mut detector)?;

    let points = detector.into_points();
    log::debug!(
        "articulation search: {} vertices, {} edges, {} trees, {} cut vertices",
        graph.vertex_count(),
        graph.edge_count(),
        state.tree_count(),
        points.len()
    );
    Ok(points)
}

/// Finds every articulation point of the graph given by `vertex_count` and
/// `edges`.
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
/// use cutscope::analysis::find_articulation_points;
///
/// let points = find_articulation_points(5, &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 4)]).unwrap();
/// assert_eq!(points, vec![1, 3]);
/// ```
pub fn find_articulation_points(
    vertex_count: usize,
    edges: &[(usize, usize)],
) -> GraphResult<Vec<usize>> {
    let graph = UndirectedGraph::new(vertex_count, edges.to_vec())?;
    articulation_points(&graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_graph() {
        let points =
            find_articulation_points(5, &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 4)]).unwrap();
        assert_eq!(points, vec![1, 3]);
    }

    #[test]
    fn test_single_edge_has_none() {
        assert!(find_articulation_points(2, &[(0, 1)]).unwrap().is_empty());
    }

    #[test]
    fn test_triangle_has_none() {
        assert!(find_articulation_points(3, &[(0, 1), (1, 2), (2, 0)])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_no_edges() {
        assert!(find_articulation_points(3, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_root_with_two_children() {
        // Star centred at the DFS root
        let points = find_articulation_points(4, &[(0, 1), (0, 2), (0, 3)]).unwrap();
        assert_eq!(points, vec![0]);
    }

    #[test]
    fn test_root_with_one_child_is_not_cut() {
        // Path rooted at an endpoint
        let points = find_articulation_points(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(points, vec![1, 2]);
    }

    #[test]
    fn test_root_in_cycle_is_not_cut() {
        // Square: root 0 gets one tree child
        let points =
            find_articulation_points(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_vertex_marked_once_for_many_children() {
        // Vertex 1 separates 0, 2 and 3 from each other
        let points = find_articulation_points(4, &[(0, 1), (1, 2), (1, 3)]).unwrap();
        assert_eq!(points, vec![1]);
    }

    #[test]
    fn test_bowtie() {
        // Two triangles sharing vertex 2
        let edges = [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)];
        assert_eq!(find_articulation_points(5, &edges).unwrap(), vec![2]);
    }

    #[test]
    fn test_disconnected_components() {
        // Path 0-1-2, isolated 3, star 4-{5,6}
        let edges = [(0, 1), (1, 2), (4, 5), (4, 6)];
        assert_eq!(find_articulation_points(7, &edges).unwrap(), vec![1, 4]);
    }

    #[test]
    fn test_results_ascending() {
        // Path 0-..-5 with shuffled edges; cut vertices are marked 4, 3, 2, 1
        let edges = [(2, 3), (3, 4), (2, 1), (1, 0), (4, 5)];
        assert_eq!(find_articulation_points(6, &edges).unwrap(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_self_loops_ignored() {
        let edges = [(0, 0), (0, 1), (1, 1), (1, 2)];
        assert_eq!(find_articulation_points(3, &edges).unwrap(), vec![1]);
    }

    #[test]
    fn test_parallel_edges() {
        // Doubling the only edge into 2 keeps 1 as the sole link
        let edges = [(0, 1), (1, 2), (1, 2)];
        assert_eq!(find_articulation_points(3, &edges).unwrap(), vec![1]);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = find_articulation_points(3, &[(0, 1), (5, 1)]).unwrap_err();
        assert!(err.is_invalid_graph());
    }

    #[test]
    fn test_unallocatable_vertex_count_is_internal_error() {
        let err = find_articulation_points(usize::MAX / 4, &[(0, 1)]).unwrap_err();
        assert!(!err.is_invalid_graph());
    }

    #[test]
    fn test_deep_vertex_compared_against_its_own_discovery_time() {
        // 3 sits below a cycle; its child 4 climbs back to 3 and no further
        let edges = [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 3)];
        assert_eq!(find_articulation_points(5, &edges).unwrap(), vec![2, 3]);
    }
}
