/*!
# Directed Graph Representation

This module defines the concrete **weighted directed graph** shipped by this
crate.

## Design

- All node records live in a single id-keyed table exclusively owned by the
  graph. Adjacency maps store neighbor *ids*, never references, so removals
  can never leave anything dangling.
- Every node keeps **both** adjacency directions. The out-map and the in-map
  are updated together by each editing operation; neither is ever derived
  from the other.
- Next to the adjacency maps the graph maintains a flat list of
  [`WeightedEdge`] records as a secondary index over all live edges, plus a
  monotonic counter of successful modifications that external callers can use
  for cache invalidation.
*/

use std::collections::hash_map;

use fxhash::FxHashMap;

use crate::prelude::*;

/// A single vertex record owned by [`DirectedGraph`].
///
/// Stores the spatial position plus both adjacency directions. The owning
/// graph keeps the maps in lock-step: `u.edges_out[v] == w` holds exactly if
/// `v.edges_in[u] == w` does.
#[derive(Debug, Clone)]
pub struct Node {
    position: Position,
    edges_out: FxHashMap<NodeId, Weight>,
    edges_in: FxHashMap<NodeId, Weight>,
}

impl Node {
    fn new(position: Position) -> Self {
        Node {
            position,
            edges_out: FxHashMap::default(),
            edges_in: FxHashMap::default(),
        }
    }

    /// The position the node was created with
    pub fn position(&self) -> Position {
        self.position
    }

    /// Iterator over `(v, w)` for all edges `(u, v)` of this node `u`
    pub fn out_neighbors(&self) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.edges_out.iter().map(|(&v, &w)| (v, w))
    }

    /// Iterator over `(v, w)` for all edges `(v, u)` of this node `u`
    pub fn in_neighbors(&self) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.edges_in.iter().map(|(&v, &w)| (v, w))
    }

    /// Number of outgoing edges
    pub fn out_degree(&self) -> NumNodes {
        self.edges_out.len() as NumNodes
    }

    /// Number of incoming edges
    pub fn in_degree(&self) -> NumNodes {
        self.edges_in.len() as NumNodes
    }

    /// Weight of the edge to `v` if it exists
    pub fn weight_to(&self, v: NodeId) -> Option<Weight> {
        self.edges_out.get(&v).copied()
    }

    /// Weight of the edge from `v` if it exists
    pub fn weight_from(&self, v: NodeId) -> Option<Weight> {
        self.edges_in.get(&v).copied()
    }
}

/// A mutable directed graph with arbitrary integer node keys and weighted
/// edges.
///
/// Nodes are created and removed individually; ids do not need to be
/// contiguous. Edges are unique per ordered pair, loop-free and carry a
/// finite non-negative weight.
///
/// ```
/// use wgraphs::prelude::*;
///
/// let mut graph = DirectedGraph::new();
/// assert!(graph.add_node(3, None));
/// assert!(graph.add_node(7, None));
/// assert!(graph.add_edge(3, 7, 1.5));
///
/// assert_eq!(graph.number_of_nodes(), 2);
/// assert_eq!(graph.edge_weight(3, 7), Some(1.5));
/// assert!(!graph.add_edge(3, 7, 2.0)); // already present, weight kept
/// assert_eq!(graph.edge_weight(3, 7), Some(1.5));
/// ```
#[derive(Clone, Default)]
pub struct DirectedGraph {
    nodes: FxHashMap<NodeId, Node>,
    edges: Vec<WeightedEdge>,
    num_edges: NumEdges,
    mod_count: u64,
}

impl DirectedGraph {
    /// Looks up the record of node `id`
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Iterator over all `(id, record)` pairs in unspecified order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().map(|(&id, node)| (id, node))
    }

    /// All live edges as structural records.
    /// Every edge appears exactly once; the order is unspecified
    pub fn edge_records(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Number of successful modifications since construction.
    /// Reads and rejected operations never change this counter
    pub fn modification_count(&self) -> u64 {
        self.mod_count
    }
}

/// Iterator over the neighbor ids of one node.
/// Yields nothing for ids that are not in the graph.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: Option<hash_map::Keys<'a, NodeId, Weight>>,
}

impl Iterator for Neighbors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), |it| it.size_hint())
    }
}

/// Iterator over `(neighbor, weight)` pairs of one node.
/// Yields nothing for ids that are not in the graph.
#[derive(Debug, Clone)]
pub struct NeighborWeights<'a> {
    inner: Option<hash_map::Iter<'a, NodeId, Weight>>,
}

impl Iterator for NeighborWeights<'_> {
    type Item = (NodeId, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next().map(|(&v, &w)| (v, w))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), |it| it.size_hint())
    }
}

impl GraphNodeOrder for DirectedGraph {
    type NodeIter<'a>
        = std::iter::Copied<hash_map::Keys<'a, NodeId, Node>>
    where
        Self: 'a;

    fn number_of_nodes(&self) -> NumNodes {
        self.nodes.len() as NumNodes
    }

    fn vertices(&self) -> Self::NodeIter<'_> {
        self.nodes.keys().copied()
    }

    fn has_node(&self, u: NodeId) -> bool {
        self.nodes.contains_key(&u)
    }
}

impl GraphEdgeOrder for DirectedGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl WeightedAdjacency for DirectedGraph {
    type NeighborIter<'a>
        = Neighbors<'a>
    where
        Self: 'a;

    type WeightedNeighborIter<'a>
        = NeighborWeights<'a>
    where
        Self: 'a;

    fn out_edges_of(&self, u: NodeId) -> Self::WeightedNeighborIter<'_> {
        NeighborWeights {
            inner: self.nodes.get(&u).map(|n| n.edges_out.iter()),
        }
    }

    fn in_edges_of(&self, u: NodeId) -> Self::WeightedNeighborIter<'_> {
        NeighborWeights {
            inner: self.nodes.get(&u).map(|n| n.edges_in.iter()),
        }
    }

    fn out_neighbors_of(&self, u: NodeId) -> Self::NeighborIter<'_> {
        Neighbors {
            inner: self.nodes.get(&u).map(|n| n.edges_out.keys()),
        }
    }

    fn in_neighbors_of(&self, u: NodeId) -> Self::NeighborIter<'_> {
        Neighbors {
            inner: self.nodes.get(&u).map(|n| n.edges_in.keys()),
        }
    }

    fn out_degree_of(&self, u: NodeId) -> NumNodes {
        self.nodes.get(&u).map_or(0, Node::out_degree)
    }

    fn in_degree_of(&self, u: NodeId) -> NumNodes {
        self.nodes.get(&u).map_or(0, Node::in_degree)
    }
}

impl AdjacencyTest for DirectedGraph {
    fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.nodes
            .get(&u)
            .is_some_and(|n| n.edges_out.contains_key(&v))
    }

    fn edge_weight(&self, u: NodeId, v: NodeId) -> Option<Weight> {
        self.nodes.get(&u)?.weight_to(v)
    }
}

impl NodePositions for DirectedGraph {
    fn position_of(&self, u: NodeId) -> Option<Position> {
        self.nodes.get(&u).map(Node::position)
    }
}

impl GraphNew for DirectedGraph {
    fn new() -> Self {
        Default::default()
    }
}

impl GraphEditing for DirectedGraph {
    fn add_node(&mut self, id: NodeId, position: Option<Position>) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }

        let position = position.unwrap_or_else(|| Position::random(&mut rand::rng()));
        self.nodes.insert(id, Node::new(position));
        self.mod_count += 1;
        true
    }

    fn add_edge(&mut self, src: NodeId, dest: NodeId, weight: Weight) -> bool {
        if src == dest || !weight.is_finite() || weight < 0.0 {
            return false;
        }
        if !self.nodes.contains_key(&dest) || self.has_edge(src, dest) {
            return false;
        }
        let Some(src_node) = self.nodes.get_mut(&src) else {
            return false;
        };

        src_node.edges_out.insert(dest, weight);
        // `dest` is live and distinct from `src`, so the mirror entry must follow
        let dest_node = self.nodes.get_mut(&dest);
        debug_assert!(dest_node.is_some());
        if let Some(dest_node) = dest_node {
            dest_node.edges_in.insert(src, weight);
        }

        self.edges.push(WeightedEdge(src, weight, dest));
        self.num_edges += 1;
        self.mod_count += 1;
        true
    }

    fn remove_node(&mut self, id: NodeId) -> bool {
        let Some(node) = self.nodes.remove(&id) else {
            return false;
        };

        for &src in node.edges_in.keys() {
            let nb = self.nodes.get_mut(&src);
            debug_assert!(nb.is_some());
            if let Some(nb) = nb {
                let removed = nb.edges_out.remove(&id);
                debug_assert!(removed.is_some());
            }
        }
        for &dest in node.edges_out.keys() {
            let nb = self.nodes.get_mut(&dest);
            debug_assert!(nb.is_some());
            if let Some(nb) = nb {
                let removed = nb.edges_in.remove(&id);
                debug_assert!(removed.is_some());
            }
        }

        let degree = node.in_degree() + node.out_degree();
        let edges_before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        debug_assert_eq!(edges_before - self.edges.len(), degree as usize);

        self.num_edges -= degree as NumEdges;
        self.mod_count += 1;
        true
    }

    fn remove_edge(&mut self, src: NodeId, dest: NodeId) -> bool {
        let Some(src_node) = self.nodes.get_mut(&src) else {
            return false;
        };
        if src_node.edges_out.remove(&dest).is_none() {
            return false;
        }

        let dest_node = self.nodes.get_mut(&dest);
        debug_assert!(dest_node.is_some());
        if let Some(dest_node) = dest_node {
            let removed = dest_node.edges_in.remove(&src);
            debug_assert!(removed.is_some());
        }

        let idx = self.edges.iter().position(|e| e.endpoints() == (src, dest));
        debug_assert!(idx.is_some());
        if let Some(idx) = idx {
            self.edges.swap_remove(idx);
        }

        self.num_edges -= 1;
        self.mod_count += 1;
        true
    }
}
