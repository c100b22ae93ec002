/*!
Strong connectivity of weighted digraphs.

The central piece is an iterative Tarjan variant that keeps one provisional
bucket of nodes per open component candidate. When a node settles, its bucket
either merges into the bucket its low link points to or, if the node turns out
to be a component root, is emitted as a finished strongly connected component.
All bookkeeping is keyed by node id and lives in hash maps, so the algorithm
works directly on sparse, arbitrarily keyed graphs.
*/

use std::iter::FusedIterator;

use fxhash::{FxHashMap, FxHashSet};

use crate::prelude::*;

use super::traversal::Traversal;

/// Provides algorithms around strong connectivity
pub trait Connectivity: WeightedAdjacency + Sized {
    /// Returns an iterator over the strongly connected components of the
    /// graph, one component per item.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = DirectedGraph::from_edges([(0, 1.0, 1), (1, 1.0, 0), (1, 1.0, 2)]);
    ///
    /// let sccs = sort_components(g.strongly_connected_components().collect());
    /// assert_eq!(sccs, vec![vec![0, 1], vec![2]]);
    /// ```
    fn strongly_connected_components(&self) -> StronglyConnectedComponents<'_, Self> {
        StronglyConnectedComponents::new(self)
    }

    /// Returns the strongly connected component containing `u`, i.e. all
    /// nodes that can reach `u` and are reachable from `u`. The node `u`
    /// itself comes first; an absent id yields an empty component
    fn strongly_connected_component_of(&self, u: NodeId) -> Vec<NodeId> {
        if !self.has_node(u) {
            return Vec::new();
        }

        let ancestors: FxHashSet<NodeId> = self.bfs_directed(u, Direction::Incoming).collect();
        self.bfs(u).filter(|v| ancestors.contains(v)).collect()
    }
}

impl<G> Connectivity for G where G: WeightedAdjacency + Sized {}

/// Implementation of Tarjan's algorithm for strongly connected components.
/// It is designed as an iterator that emits one strongly connected component
/// at a time. The first node of each component is the root at which the
/// component settled, the order of the remaining nodes is non-deterministic;
/// the components themselves are emitted in reverse topological order of the
/// condensation (i.e. if each SCC were contracted into a single node).
pub struct StronglyConnectedComponents<'a, G>
where
    G: WeightedAdjacency,
{
    graph: &'a G,
    idx: NumNodes,

    /// All node ids at construction time, scanned left to right for restarts
    snapshot: Vec<NodeId>,
    cursor: usize,

    indices: FxHashMap<NodeId, NumNodes>,
    low_links: FxHashMap<NodeId, NumNodes>,

    /// Open component candidates, keyed by the discovery index of their root
    buckets: FxHashMap<NumNodes, Vec<NodeId>>,
    closed: FxHashSet<NodeId>,

    call_stack: Vec<StackFrame<'a, G>>,
}

impl<'a, G> StronglyConnectedComponents<'a, G>
where
    G: WeightedAdjacency,
{
    /// Construct the iterator for some graph
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            idx: 0,

            snapshot: graph.vertices().collect(),
            cursor: 0,

            indices: FxHashMap::default(),
            low_links: FxHashMap::default(),

            buckets: FxHashMap::default(),
            closed: FxHashSet::default(),

            call_stack: Vec::with_capacity(32),
        }
    }

    /// Just like in a classic DFS where we want to compute a spanning-forest,
    /// we will need to visit each node at least once. We start with any node,
    /// cover all nodes reachable from there in `search`, then look for an
    /// untouched node here and start over.
    fn next_unvisited_node(&mut self) -> Option<NodeId> {
        while self.cursor < self.snapshot.len() {
            let v = self.snapshot[self.cursor];
            if !self.indices.contains_key(&v) {
                self.push_node(v);
                return Some(v);
            }

            self.cursor += 1;
        }
        None
    }

    /// Assigns the next discovery index to `node`, opens its provisional
    /// bucket and puts a pristine stack frame on the call stack. Roughly
    /// speaking, this is the first step of a recursive call of search.
    fn push_node(&mut self, node: NodeId) {
        debug_assert!(!self.indices.contains_key(&node));

        let index = self.idx;
        self.idx += 1;

        self.indices.insert(node, index);
        self.low_links.insert(node, index);
        self.buckets.insert(index, vec![node]);

        self.call_stack.push(StackFrame {
            node,
            neighbors: self.graph.out_neighbors_of(node),
        });
    }

    fn search(&mut self) -> Option<Vec<NodeId>> {
        /*
        Tarjan's algorithm is typically described in a recursive fashion
        similarly to DFS with some extra steps. This design has two issues:
         1.) We cannot easily build an iterator from it
         2.) For large graphs we get stack overflows

        To overcome these issues, we use the explicit call stack
        `self.call_stack` that simulates recursive calls. On first visit a
        node is assigned a "DFS rank"ish discovery index, the same value as
        its provisional low link, and a fresh bucket holding just that node.

        A node settles once all of its out-neighbors are processed. Its low
        link then becomes the minimum of its own index and the current low
        links of all out-neighbors whose component is not closed yet; for
        every merged node the low link names the bucket it currently sits in,
        so this minimum always points at a live bucket. A non-root node pours
        its bucket into that bucket and repoints all poured nodes. Once a node
        settles as root (low link equal to its own index), its bucket holds a
        complete strongly connected component and is emitted.

        All resumable state (including the neighbor iterators) lives in
        `self.call_stack`, so we can pause processing, return a component and
        resume by reentering the function.
        */

        'recurse: while let Some(frame) = self.call_stack.last_mut() {
            for w in frame.neighbors.by_ref() {
                if !self.indices.contains_key(&w) {
                    self.push_node(w);
                    continue 'recurse;
                }
            }

            let settled = frame.node;
            self.call_stack.pop();

            let own = self.indices[&settled];
            let mut low = own;
            for w in self.graph.out_neighbors_of(settled) {
                if !self.closed.contains(&w) {
                    low = low.min(self.low_links[&w]);
                }
            }
            self.low_links.insert(settled, low);

            let members = self.buckets.remove(&own).unwrap();
            debug_assert_eq!(members.first(), Some(&settled));

            if low == own {
                for &w in &members {
                    self.closed.insert(w);
                }
                return Some(members);
            }

            for &w in &members {
                self.low_links.insert(w, low);
            }
            debug_assert!(self.buckets.contains_key(&low));
            self.buckets.entry(low).or_default().extend(members);
        }

        None
    }
}

impl<G> Iterator for StronglyConnectedComponents<'_, G>
where
    G: WeightedAdjacency,
{
    type Item = Vec<NodeId>;

    /// Returns either a vector of node ids that form an SCC or None if no further SCC was found
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(component) = self.search() {
                return Some(component);
            }

            self.next_unvisited_node()?;
        }
    }
}

impl<G> FusedIterator for StronglyConnectedComponents<'_, G> where G: WeightedAdjacency {}

struct StackFrame<'a, G>
where
    G: WeightedAdjacency + 'a,
{
    node: NodeId,
    neighbors: G::NeighborIter<'a>,
}

/// Sorts the nodes within each component increasingly and then the components
/// themselves lexicographically.
pub fn sort_components(mut components: Vec<Vec<NodeId>>) -> Vec<Vec<NodeId>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a[0].cmp(&b[0]));
    components
}
