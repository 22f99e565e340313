//! Adjacency lists for undirected graphs.

use super::undirected::{try_filled, GraphResult, UndirectedGraph};

/// One entry of a vertex's neighbor list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// The vertex at the other end of the edge
    pub vertex: usize,
    /// Position of the edge in the graph's input edge list
    pub edge_id: usize,
}

/// Per-vertex neighbor lists built from an edge list.
///
/// Each edge `(u, v)` contributes `v` to the list of `u` and `u` to the list
/// of `v`, in input order. Parallel edges are kept and a self-loop adds two
/// entries to its vertex's list.
///
/// # Example
///
/// ```rust
/// use cutscope::graph::{AdjacencyIndex, UndirectedGraph};
///
/// let graph = UndirectedGraph::new(3, vec![(0, 1), (0, 2)]).unwrap();
/// let index = AdjacencyIndex::build(&graph).unwrap();
///
/// let neighbors: Vec<usize> = index.neighbors(0).iter().map(|n| n.vertex).collect();
/// assert_eq!(neighbors, vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyIndex {
    lists: Vec<Vec<Neighbor>>,
}

impl AdjacencyIndex {
    /// Builds the index in O(V + E).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Internal`](super::GraphError::Internal) if the
    /// per-vertex lists cannot be allocated.
    pub fn build(graph: &UndirectedGraph) -> GraphResult<Self> {
        let mut lists: Vec<Vec<Neighbor>> =
            try_filled(graph.vertex_count(), Vec::new(), "adjacency lists")?;

        for (edge_id, edge) in graph.edges().iter().enumerate() {
            lists[edge.from].push(Neighbor {
                vertex: edge.to,
                edge_id,
            });
            lists[edge.to].push(Neighbor {
                vertex: edge.from,
                edge_id,
            });
        }

        Ok(Self { lists })
    }

    /// Returns the neighbors of `vertex` in edge input order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a vertex of the indexed graph.
    pub fn neighbors(&self, vertex: usize) -> &[Neighbor] {
        &self.lists[vertex]
    }

    /// Returns the number of adjacency entries of `vertex`.
    pub fn degree(&self, vertex: usize) -> usize {
        self.lists[vertex].len()
    }

    /// Returns the number of indexed vertices.
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertices(index: &AdjacencyIndex, vertex: usize) -> Vec<usize> {
        index.neighbors(vertex).iter().map(|n| n.vertex).collect()
    }

    #[test]
    fn test_build_preserves_input_order() {
        let graph = UndirectedGraph::new(4, vec![(0, 3), (0, 1), (2, 0)]).unwrap();
        let index = AdjacencyIndex::build(&graph).unwrap();

        assert_eq!(vertices(&index, 0), vec![3, 1, 2]);
        assert_eq!(vertices(&index, 2), vec![0]);
        assert_eq!(index.vertex_count(), 4);
    }

    #[test]
    fn test_both_endpoints_share_edge_id() {
        let graph = UndirectedGraph::new(3, vec![(0, 1), (1, 2)]).unwrap();
        let index = AdjacencyIndex::build(&graph).unwrap();

        assert_eq!(index.neighbors(1)[1], Neighbor { vertex: 2, edge_id: 1 });
        assert_eq!(index.neighbors(2)[0], Neighbor { vertex: 1, edge_id: 1 });
    }

    #[test]
    fn test_parallel_edges_kept() {
        let graph = UndirectedGraph::new(2, vec![(0, 1), (0, 1)]).unwrap();
        let index = AdjacencyIndex::build(&graph).unwrap();

        assert_eq!(vertices(&index, 0), vec![1, 1]);
        assert_eq!(index.neighbors(0)[1].edge_id, 1);
    }

    #[test]
    fn test_self_loop_listed_twice() {
        let graph = UndirectedGraph::new(2, vec![(1, 1)]).unwrap();
        let index = AdjacencyIndex::build(&graph).unwrap();

        assert_eq!(vertices(&index, 1), vec![1, 1]);
        assert_eq!(index.degree(0), 0);
    }

    #[test]
    fn test_unallocatable_index_is_internal_error() {
        let graph = UndirectedGraph::new(usize::MAX / 4, vec![(0, 1)]).unwrap();
        let err = AdjacencyIndex::build(&graph).unwrap_err();
        assert!(!err.is_invalid_graph());
    }
}
