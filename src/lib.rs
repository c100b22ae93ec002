/*!
`wgraphs` is a graph data structure & algorithms library designed for graphs that are
- **w**eighted : Every edge carries a non-negative `f64` weight
- directed : Edges have an orientation, so `(u, v)` and `(v, u)` are distinct
- dynamic : Nodes and edges can be added and removed at any time under stable integer keys

# Representation

We represent **nodes** as arbitrary `u32` keys chosen by the caller. Keys are never recycled or
shifted: removing a node leaves all other keys untouched, which makes the graph suitable for
long-lived, mutating workloads. Every node stores a spatial [`Position`](crate::node::Position);
edges are exposed as the simple tuple-struct `WeightedEdge(NodeId, Weight, NodeId)`.

The storage backend is [`DirectedGraph`](crate::repr::DirectedGraph), which keeps adjacency
hashed per node in both directions, so out- and in-neighborhoods are equally cheap to enumerate.

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs
using either the *Builder* / *Setter* pattern before calling the configured algorithm on a
provided graph.
Alternatively, most important and commonly used functionalities should already be implemented via
traits on the graph itself, making them usable without configuring the algorithm beforehand.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and the graph representation,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS (`graph.bfs(start_node)`), single-pair shortest paths, and an iterator over strongly connected components,
- [`gens`] includes random graph generation as well as deterministic substructures such as paths/cycles,
- [`io`] includes handlers for reading and writing graphs as JSON documents and for exporting to the GraphViz DOT format.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

# When to use
You should only use this library if the following apply:
- Your graphs are directed, weighted, and keyed by integers that must stay stable across removals
- You want to work in *Rust*
- You require only basic functionality for graphs.

In all other cases, it might make sense for you to check out
[petgraph](https://crates.io/crates/petgraph) who provide a more extensive library for general
graphs in *Rust*.
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;

#[cfg(test)]
pub(crate) mod testing;

/// `wgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
