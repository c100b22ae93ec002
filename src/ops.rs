use crate::prelude::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Iterator over all node ids of the graph
    type NodeIter<'a>: Iterator<Item = NodeId> + 'a
    where
        Self: 'a;

    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    /// Ids are keys; the iteration order is unspecified
    fn vertices(&self) -> Self::NodeIter<'_>;

    /// Returns *true* if `u` is a node of the graph
    fn has_node(&self, u: NodeId) -> bool;

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Selects which edge direction a query or traversal follows
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Follow edges `(u, v)` from `u` to `v`
    Outgoing,
    /// Follow edges `(v, u)` from `u` to `v`
    Incoming,
}

/// Traits pertaining getters for weighted neighborhoods & edges.
///
/// All accessors are total: querying an id that is not in the graph yields
/// an empty iterator respectively a zero degree rather than a panic.
pub trait WeightedAdjacency: GraphNodeOrder + Sized {
    /// Iterator over the ids of adjacent nodes
    type NeighborIter<'a>: Iterator<Item = NodeId> + 'a
    where
        Self: 'a;

    /// Iterator over adjacent nodes paired with the connecting edge weight
    type WeightedNeighborIter<'a>: Iterator<Item = (NodeId, Weight)> + 'a
    where
        Self: 'a;

    /// Returns an iterator over `(v, w)` for all edges `(u, v)` with weight `w`
    fn out_edges_of(&self, u: NodeId) -> Self::WeightedNeighborIter<'_>;

    /// Returns an iterator over `(v, w)` for all edges `(v, u)` with weight `w`
    fn in_edges_of(&self, u: NodeId) -> Self::WeightedNeighborIter<'_>;

    /// Returns an iterator over nodes `v` with edges `(u, v)`
    fn out_neighbors_of(&self, u: NodeId) -> Self::NeighborIter<'_>;

    /// Returns an iterator over nodes `v` with edges `(v, u)`
    fn in_neighbors_of(&self, u: NodeId) -> Self::NeighborIter<'_>;

    /// Returns the number of outgoing neighbors of `u`
    fn out_degree_of(&self, u: NodeId) -> NumNodes;

    /// Returns the number of incoming neighbors of `u`
    fn in_degree_of(&self, u: NodeId) -> NumNodes;

    /// Returns the out-degree plus the in-degree of a given vertex
    #[inline]
    fn total_degree_of(&self, u: NodeId) -> NumNodes {
        self.out_degree_of(u) + self.in_degree_of(u)
    }

    /// Returns an iterator over the neighbors along edges in direction `dir`
    fn neighbors_directed(&self, u: NodeId, dir: Direction) -> Self::NeighborIter<'_> {
        match dir {
            Direction::Outgoing => self.out_neighbors_of(u),
            Direction::Incoming => self.in_neighbors_of(u),
        }
    }

    /// Returns an iterator over all edges in the graph.
    /// Every edge appears exactly once; the order is unspecified
    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |u| {
            self.out_edges_of(u)
                .map(move |(v, w)| WeightedEdge(u, w, v))
        })
    }
}

/// Trait to test existence of certain structures in a graph
pub trait AdjacencyTest {
    /// Returns *true* if the edge (u,v) exists in the graph
    fn has_edge(&self, u: NodeId, v: NodeId) -> bool;

    /// Returns the weight of the edge (u,v) if it exists
    fn edge_weight(&self, u: NodeId, v: NodeId) -> Option<Weight>;

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph
    fn has_bidirected_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }
}

/// Read access to the spatial positions nodes are created with
pub trait NodePositions {
    /// Returns the position of a given vertex, `None` for absent ids
    fn position_of(&self, u: NodeId) -> Option<Position>;
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates a graph with no nodes and no edges
    fn new() -> Self;
}

/// Provides functions to insert/delete nodes and edges.
///
/// Every operation is all-or-nothing: it returns *true* and counts as one
/// modification exactly if the graph changed, and leaves the graph untouched
/// otherwise.
pub trait GraphEditing: GraphNew {
    /// Adds the node `id` to the graph. When no position is given, one is
    /// sampled from the default placement box.
    /// Returns *false* exactly if `id` is already present
    fn add_node(&mut self, id: NodeId, position: Option<Position>) -> bool;

    /// Adds the edge `(src, dest)` with weight `weight` to the graph.
    /// Returns *false* if `src == dest`, if the weight is negative or not
    /// finite, if either endpoint is missing, or if the edge already exists
    fn add_edge(&mut self, src: NodeId, dest: NodeId, weight: Weight) -> bool;

    /// Removes the node `id` along with every edge into and out of it.
    /// Returns *false* exactly if `id` is not present
    fn remove_node(&mut self, id: NodeId) -> bool;

    /// Removes the edge `(src, dest)` from the graph.
    /// Returns *false* exactly if the edge does not exist
    fn remove_edge(&mut self, src: NodeId, dest: NodeId) -> bool;

    /// Adds all edges in the collection, creating missing endpoints with
    /// default positions. Edges the graph rejects are skipped
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge(src, weight, dest) in edges.into_iter().map(|e| e.into()) {
            self.add_node(src, None);
            self.add_node(dest, None);
            self.add_edge(src, dest, weight);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromScratch {
    /// Create a graph from an iterator over weighted edges.
    /// Endpoints become nodes on first sight, placed at default positions
    fn from_edges(edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self;
}

impl<G: GraphNew + GraphEditing> GraphFromScratch for G {
    fn from_edges(edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        let mut graph = Self::new();
        graph.add_edges(edges);
        graph
    }
}
