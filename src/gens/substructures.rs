/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph.

It allows adding common motifs such as:

- **Paths**
- **Cycles**

Edge weights are supplied through a callback that receives both endpoints, so
motifs can carry constant, positional, or randomized weights. Nodes named by a
motif that are not yet part of the graph are created on the fly.

These methods are useful when enriching a graph with specific structures for
testing algorithms, generating benchmark instances, or modeling networks with
known sub-components.
*/

use itertools::Itertools;

use crate::prelude::*;

/// Trait for creating additional **substructures** (paths, cycles) inside an
/// already existing graph.
///
/// Implemented for all graphs that support editing.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge whose
    /// weight is taken from `weight`. Missing nodes are created without a
    /// position; edges the graph rejects are skipped.
    ///
    /// # Example
    /// ```rust
    /// use wgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = DirectedGraph::new();
    /// g.connect_path([0, 1, 2, 3], |_, _| 1.0);
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(1, 2));
    /// assert!(g.has_edge(2, 3));
    /// ```
    fn connect_path<P, W>(&mut self, nodes_on_path: P, weight: W)
    where
        P: IntoIterator<Item = NodeId>,
        W: FnMut(NodeId, NodeId) -> Weight;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first.
    ///
    /// A single-node cycle would require a self-loop, which the graph
    /// rejects, so it only creates the node.
    ///
    /// # Example
    /// ```rust
    /// use wgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = DirectedGraph::new();
    /// g.connect_cycle([0, 1, 2], |u, v| (u + v) as Weight);
    ///
    /// assert_eq!(g.edge_weight(2, 0), Some(2.0));
    /// ```
    fn connect_cycle<C, W>(&mut self, nodes_in_cycle: C, weight: W)
    where
        C: IntoIterator<Item = NodeId>,
        W: FnMut(NodeId, NodeId) -> Weight;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEditing,
{
    fn connect_path<P, W>(&mut self, nodes_on_path: P, mut weight: W)
    where
        P: IntoIterator<Item = NodeId>,
        W: FnMut(NodeId, NodeId) -> Weight,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_node(u, None);
            self.add_node(v, None);
            self.add_edge(u, v, weight(u, v));
        }
    }

    fn connect_cycle<C, W>(&mut self, nodes_in_cycle: C, mut weight: W)
    where
        C: IntoIterator<Item = NodeId>,
        W: FnMut(NodeId, NodeId) -> Weight,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            self.add_node(first, None);

            let mut prev = first;
            for cur in iter {
                self.add_node(cur, None);
                self.add_edge(prev, cur, weight(prev, cur));
                prev = cur;
            }

            self.add_edge(prev, first, weight(prev, first));
        }
    }
}
