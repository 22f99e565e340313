//! Depth-first low-link traversal shared by the connectivity detectors.
//!
//! The walk assigns every vertex a discovery time in DFS pre-order and a
//! low-link value: the smallest discovery time reachable from the vertex's
//! DFS subtree through at most one back edge. Detectors plug in through
//! [`LowLinkVisitor`], which is called each time a tree edge is finished.
//!
//! The traversal uses an explicit stack, so long paths cannot overflow the
//! call stack. Visiting order, discovery times and the order of low-link
//! updates match the textbook recursive formulation exactly.

use crate::graph::{try_filled, AdjacencyIndex, GraphResult};

const UNVISITED: usize = usize::MAX;

/// Per-call traversal state.
///
/// A fresh value is created for every analysis and dropped afterwards, so
/// concurrent analyses never share a clock or any per-vertex array.
#[derive(Debug)]
pub struct TraversalState {
    clock: usize,
    discovery: Vec<usize>,
    low_link: Vec<usize>,
    parent: Vec<Option<usize>>,
    child_count: Vec<usize>,
    trees: usize,
}

impl TraversalState {
    /// Allocates state for `vertex_count` vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Internal`](crate::graph::GraphError::Internal)
    /// if the per-vertex arrays cannot be allocated.
    pub fn new(vertex_count: usize) -> GraphResult<Self> {
        Ok(Self {
            clock: 0,
            discovery: try_filled(vertex_count, UNVISITED, "traversal state")?,
            low_link: try_filled(vertex_count, 0, "traversal state")?,
            parent: try_filled(vertex_count, None, "traversal state")?,
            child_count: try_filled(vertex_count, 0, "traversal state")?,
            trees: 0,
        })
    }

    /// Returns true once `vertex` has been discovered.
    pub fn is_visited(&self, vertex: usize) -> bool {
        self.discovery[vertex] != UNVISITED
    }

    /// Returns the discovery time of `vertex`, if visited.
    pub fn discovery_time(&self, vertex: usize) -> Option<usize> {
        Some(self.discovery[vertex]).filter(|&time| time != UNVISITED)
    }

    /// Returns the discovery time of a visited vertex, such as either
    /// endpoint of a finished tree edge.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `vertex` has not been discovered.
    pub fn discovery(&self, vertex: usize) -> usize {
        let time = self.discovery[vertex];
        debug_assert_ne!(time, UNVISITED, "vertex {vertex} read before discovery");
        time
    }

    /// Returns the current low-link value of `vertex`.
    ///
    /// Only meaningful for visited vertices.
    pub fn low_link(&self, vertex: usize) -> usize {
        self.low_link[vertex]
    }

    /// Returns the DFS parent of `vertex`; `None` for tree roots and
    /// unvisited vertices.
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parent[vertex]
    }

    /// Returns true if `vertex` was visited as the root of a DFS tree.
    pub fn is_root(&self, vertex: usize) -> bool {
        self.is_visited(vertex) && self.parent[vertex].is_none()
    }

    /// Returns the number of tree edges descending from `vertex` so far.
    pub fn child_count(&self, vertex: usize) -> usize {
        self.child_count[vertex]
    }

    /// Returns the number of DFS trees started, one per connected component.
    pub fn tree_count(&self) -> usize {
        self.trees
    }

    /// Returns the number of vertices visited so far.
    pub fn visited_count(&self) -> usize {
        self.clock
    }

    fn discover(&mut self, vertex: usize, parent: Option<usize>) {
        let time = self.clock;
        self.clock += 1;
        self.discovery[vertex] = time;
        self.low_link[vertex] = time;
        self.parent[vertex] = parent;
        if let Some(p) = parent {
            self.child_count[p] += 1;
        }
    }

    fn lower(&mut self, vertex: usize, value: usize) {
        if value < self.low_link[vertex] {
            self.low_link[vertex] = value;
        }
    }
}

/// Detector hook invoked during a low-link traversal.
pub trait LowLinkVisitor {
    /// Called after the subtree rooted at `child` has been fully explored
    /// and `parent`'s low-link has absorbed `child`'s.
    fn tree_edge_finished(&mut self, state: &TraversalState, parent: usize, child: usize);
}

impl<A, B> LowLinkVisitor for (A, B)
where
    A: LowLinkVisitor,
    B: LowLinkVisitor,
{
    fn tree_edge_finished(&mut self, state: &TraversalState, parent: usize, child: usize) {
        self.0.tree_edge_finished(state, parent, child);
        self.1.tree_edge_finished(state, parent, child);
    }
}

/// A vertex on the explicit DFS stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: usize,
    /// Edge used to reach this vertex; `None` for tree roots
    via: Option<usize>,
    /// Next position in the vertex's neighbor list
    next: usize,
}

/// Runs a full DFS forest over `index`, starting a new tree at every
/// still-unvisited vertex in ascending order.
///
/// An already-visited neighbor is treated as a back edge unless it is
/// reached through the very edge the current vertex was entered by. Edges
/// are told apart by identity, so a second parallel edge to the parent is a
/// genuine back edge and a self-loop never lowers anything.
///
/// Returns the final state so callers can inspect discovery and low-link
/// values.
pub fn traverse<V: LowLinkVisitor>(
    index: &AdjacencyIndex,
    visitor: &mut V,
) -> GraphResult<TraversalState> {
    let vertex_count = index.vertex_count();
    let mut state = TraversalState::new(vertex_count)?;
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..vertex_count {
        if state.is_visited(root) {
            continue;
        }

        state.trees += 1;
        state.discover(root, None);
        stack.push(Frame {
            vertex: root,
            via: None,
            next: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;

            if let Some(&neighbor) = index.neighbors(u).get(frame.next) {
                frame.next += 1;
                let via = frame.via;

                match state.discovery_time(neighbor.vertex) {
                    None => {
                        state.discover(neighbor.vertex, Some(u));
                        stack.push(Frame {
                            vertex: neighbor.vertex,
                            via: Some(neighbor.edge_id),
                            next: 0,
                        });
                    }
                    Some(time) if via != Some(neighbor.edge_id) => state.lower(u, time),
                    Some(_) => {}
                }
                continue;
            }

            stack.pop();
            if let Some(parent_frame) = stack.last() {
                let p = parent_frame.vertex;
                let child_low = state.low_link(u);
                state.lower(p, child_low);
                visitor.tree_edge_finished(&state, p, u);
            }
        }
    }

    Ok(state)
}
