/*!
Generic frontier-based graph traversal.

The traversal iterator is parameterized by the frontier container
(queue = BFS, stack = DFS) and follows either outgoing or incoming edges,
which lets reverse reachability reuse the same machinery. Visited nodes are
tracked in a hash set keyed by node id, so traversals work on any id space.
*/

use std::collections::VecDeque;

use fxhash::FxHashSet;

use crate::prelude::*;

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` stores the "to be visited" nodes during a traversal.
/// The implementation determines the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer {
    /// Creates a new sequencer initialized with a single node
    fn init(u: NodeId) -> Self;

    /// Creates a sequencer with no nodes
    fn empty() -> Self;

    /// Pushes a node into the frontier
    fn push(&mut self, u: NodeId);

    /// Removes and returns the next node from the frontier
    fn pop(&mut self) -> Option<NodeId>;

    /// Returns the number of items currently in the frontier
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<NodeId> {
    fn init(u: NodeId) -> Self {
        Self::from(vec![u])
    }
    fn empty() -> Self {
        Self::new()
    }
    fn push(&mut self, u: NodeId) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<NodeId> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<NodeId> {
    fn init(u: NodeId) -> Self {
        vec![u]
    }
    fn empty() -> Self {
        Self::new()
    }
    fn push(&mut self, u: NodeId) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<NodeId> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier of nodes to visit and a set of visited
/// nodes; every reachable node is yielded exactly once, the start node first.
pub struct TraversalSearch<'a, G, S>
where
    G: WeightedAdjacency,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: FxHashSet<NodeId>,
    sequencer: S,
    direction: Direction,
}

/// A traversal iterator visiting nodes in **breadth-first search order**
pub type Bfs<'a, G> = TraversalSearch<'a, G, VecDeque<NodeId>>;

/// A traversal iterator visiting nodes in **depth-first search order**
pub type Dfs<'a, G> = TraversalSearch<'a, G, Vec<NodeId>>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: WeightedAdjacency,
    S: NodeSequencer,
{
    /// Creates a traversal along outgoing edges starting from `start`
    pub fn new(graph: &'a G, start: NodeId) -> Self {
        Self::new_directed(graph, start, Direction::Outgoing)
    }

    /// Creates a traversal following edges in direction `direction` starting
    /// from `start`. A start id that is not in the graph yields an empty
    /// traversal
    pub fn new_directed(graph: &'a G, start: NodeId, direction: Direction) -> Self {
        let mut visited = FxHashSet::default();
        let sequencer = if graph.has_node(start) {
            visited.insert(start);
            S::init(start)
        } else {
            S::empty()
        };

        Self {
            graph,
            visited,
            sequencer,
            direction,
        }
    }

    /// Checks if a given node `u` has already been visited
    pub fn did_visit_node(&self, u: NodeId) -> bool {
        self.visited.contains(&u)
    }

    /// Consumes the traversal and returns *true* iff there is a path from the
    /// start node to `target` along the configured edge direction.
    /// The start node is always reachable from itself
    pub fn is_node_reachable(mut self, target: NodeId) -> bool {
        self.any(|v| v == target)
    }
}

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: WeightedAdjacency,
    S: NodeSequencer,
{
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        for v in self.graph.neighbors_directed(u, self.direction) {
            if self.visited.insert(v) {
                self.sequencer.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let queued = self.sequencer.cardinality();
        (
            queued,
            Some(queued + self.graph.len() - self.visited.len()),
        )
    }
}

/// Provides convenient traversal methods directly on graphs
pub trait Traversal: WeightedAdjacency + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search order** along outgoing edges.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges([(0, 1.0, 1), (1, 1.0, 2)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: NodeId) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search order** along outgoing edges.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges([(0, 1.0, 1), (1, 1.0, 2)]);
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn dfs(&self, start: NodeId) -> Dfs<'_, Self> {
        Dfs::new(self, start)
    }

    /// Returns a BFS iterator following edges in direction `direction`.
    /// With [`Direction::Incoming`] this computes reverse reachability.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges([(0, 1.0, 1), (1, 1.0, 2)]);
    ///
    /// let order: Vec<_> = g.bfs_directed(2, Direction::Incoming).collect();
    /// assert_eq!(order, vec![2, 1, 0]);
    /// ```
    fn bfs_directed(&self, start: NodeId, direction: Direction) -> Bfs<'_, Self> {
        Bfs::new_directed(self, start, direction)
    }
}

impl<G> Traversal for G where G: WeightedAdjacency + Sized {}
