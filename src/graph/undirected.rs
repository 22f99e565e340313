//! Undirected graph model used as input to connectivity analysis.
//!
//! An [`UndirectedGraph`] is a vertex count plus an ordered edge list. It is
//! validated once on construction and immutable afterwards, so every
//! analysis can index vertices without re-checking bounds.

use petgraph::algo::connected_components;
use petgraph::graph::{IndexType, NodeIndex, UnGraph};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Errors raised when a graph cannot be analyzed.
///
/// The first three variants describe malformed input and map to a client
/// error at the boundary. [`GraphError::Internal`] covers everything else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The graph has no vertices.
    #[error("Invalid graph: vertex count must be at least 1")]
    EmptyVertexSet,

    /// The vertex count is negative.
    #[error("Invalid graph: negative vertex count {0}")]
    NegativeVertexCount(i64),

    /// An edge endpoint lies outside `0..vertex_count`.
    #[error("Invalid graph: edge #{index} ({u}, {v}) references a vertex outside 0..{vertex_count}")]
    VertexOutOfRange {
        /// Position of the offending edge in the input list
        index: usize,
        /// First endpoint as supplied
        u: i64,
        /// Second endpoint as supplied
        v: i64,
        /// Number of vertices in the graph
        vertex_count: usize,
    },

    /// Unexpected failure during analysis, such as failing to allocate
    /// traversal storage.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GraphError {
    /// Returns true if the error was caused by malformed input.
    pub fn is_invalid_graph(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Allocates a vector of `len` copies of `value`, reporting allocation
/// failure as [`GraphError::Internal`] instead of aborting.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T, what: &str) -> GraphResult<Vec<T>> {
    let mut values = Vec::new();
    values.try_reserve_exact(len).map_err(|e| {
        GraphError::Internal(format!("cannot allocate {what} for {len} vertices: {e}"))
    })?;
    values.resize(len, value);
    Ok(values)
}

/// An undirected edge between two vertex indices.
///
/// The endpoint order is meaningful for results: bridges are reported as
/// (DFS parent, DFS child).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    /// First endpoint
    pub from: usize,
    /// Second endpoint
    pub to: usize,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Returns the edge with the smaller endpoint first.
    ///
    /// Useful for comparing edge sets regardless of traversal direction.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cutscope::graph::Edge;
    ///
    /// assert_eq!(Edge::new(3, 1).normalized(), Edge::new(1, 3));
    /// ```
    pub fn normalized(self) -> Self {
        if self.from <= self.to {
            self
        } else {
            Self::new(self.to, self.from)
        }
    }

    /// Returns true if both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl From<(usize, usize)> for Edge {
    fn from((from, to): (usize, usize)) -> Self {
        Self::new(from, to)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// A validated, immutable undirected graph.
///
/// Self-loops and parallel edges are accepted; the analysis treats every
/// edge by its position in the input list.
///
/// # Example
///
/// ```rust
/// use cutscope::graph::UndirectedGraph;
///
/// let graph = UndirectedGraph::new(3, vec![(0, 1), (1, 2)]).unwrap();
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.component_count().unwrap(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl UndirectedGraph {
    /// Creates a graph from a vertex count and an edge list.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyVertexSet`] when `vertex_count` is zero and
    /// [`GraphError::VertexOutOfRange`] for the first edge with an endpoint
    /// `>= vertex_count`.
    pub fn new(vertex_count: usize, edges: Vec<(usize, usize)>) -> GraphResult<Self> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyVertexSet);
        }

        let edges: Vec<Edge> = edges.into_iter().map(Edge::from).collect();
        for (index, edge) in edges.iter().enumerate() {
            if edge.from >= vertex_count || edge.to >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    index,
                    u: i64::try_from(edge.from).unwrap_or(i64::MAX),
                    v: i64::try_from(edge.to).unwrap_or(i64::MAX),
                    vertex_count,
                });
            }
        }

        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Creates a graph from signed values as they arrive from external input.
    ///
    /// Negative counts and negative endpoints are rejected instead of being
    /// wrapped into large unsigned values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cutscope::graph::{GraphError, UndirectedGraph};
    ///
    /// let err = UndirectedGraph::from_signed(-1, &[]).unwrap_err();
    /// assert_eq!(err, GraphError::NegativeVertexCount(-1));
    /// ```
    pub fn from_signed(vertex_count: i64, edges: &[(i64, i64)]) -> GraphResult<Self> {
        let count = usize::try_from(vertex_count)
            .map_err(|_| GraphError::NegativeVertexCount(vertex_count))?;
        if count == 0 {
            return Err(GraphError::EmptyVertexSet);
        }

        let mut converted = Vec::with_capacity(edges.len());
        for (index, &(u, v)) in edges.iter().enumerate() {
            let endpoints = usize::try_from(u).ok().zip(usize::try_from(v).ok());
            match endpoints {
                Some(pair) => converted.push(pair),
                None => {
                    return Err(GraphError::VertexOutOfRange {
                        index,
                        u,
                        v,
                        vertex_count: count,
                    })
                }
            }
        }

        Self::new(count, converted)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges in input order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns true if any edge connects a vertex to itself.
    pub fn has_self_loops(&self) -> bool {
        self.edges.iter().any(Edge::is_self_loop)
    }

    /// Returns true if the same unordered vertex pair appears more than once.
    pub fn has_parallel_edges(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.edges.len());
        self.edges.iter().any(|edge| !seen.insert(edge.normalized()))
    }

    /// Builds a petgraph view of this graph.
    ///
    /// Node `i` of the result corresponds to vertex `i`; edge weights hold
    /// the edge's position in the input list.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Internal`] if the graph does not fit petgraph's
    /// `u32` index space or its node and edge storage cannot be allocated.
    pub fn to_petgraph(&self) -> GraphResult<UnGraph<(), usize>> {
        let limit = <u32 as IndexType>::max().index();
        if self.vertex_count >= limit || self.edges.len() >= limit {
            return Err(GraphError::Internal(format!(
                "graph with {} vertices and {} edges exceeds the petgraph index space",
                self.vertex_count,
                self.edges.len()
            )));
        }
        // petgraph only offers infallible reservation; check the same
        // amount of memory can be had first.
        let bytes = self
            .vertex_count
            .saturating_mul(std::mem::size_of::<petgraph::graph::Node<()>>())
            .saturating_add(
                self.edges
                    .len()
                    .saturating_mul(std::mem::size_of::<petgraph::graph::Edge<usize>>()),
            );
        Vec::<u8>::new().try_reserve_exact(bytes).map_err(|e| {
            GraphError::Internal(format!(
                "cannot allocate petgraph view for {} vertices: {e}",
                self.vertex_count
            ))
        })?;

        let mut graph = UnGraph::with_capacity(self.vertex_count, self.edges.len());
        for _ in 0..self.vertex_count {
            graph.add_node(());
        }
        for (id, edge) in self.edges.iter().enumerate() {
            graph.add_edge(NodeIndex::new(edge.from), NodeIndex::new(edge.to), id);
        }
        Ok(graph)
    }

    /// Returns the number of connected components, counting isolated
    /// vertices as their own component.
    ///
    /// # Errors
    ///
    /// Fails like [`UndirectedGraph::to_petgraph`] on graphs too large to view.
    pub fn component_count(&self) -> GraphResult<usize> {
        Ok(connected_components(&self.to_petgraph()?))
    }
}
