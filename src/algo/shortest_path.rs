/*!
Single-pair shortest paths on weighted digraphs.

Distances are computed with a FIFO label-correcting scheme: a queue of nodes
whose tentative distance recently improved is drained, relaxing all outgoing
edges of each popped node and re-queueing every target whose label improves.
Since edge weights are non-negative, every label stabilizes after finitely
many improvements and the final labels are the true distances.

State lives in hash maps keyed by node id, so the algorithm only pays for
nodes it actually reaches.
*/

use std::collections::VecDeque;

use fxhash::FxHashMap;

use crate::prelude::*;

/// Provides single-pair shortest path queries on weighted digraphs
pub trait ShortestPaths: WeightedAdjacency {
    /// Computes a minimum-weight path from `src` to `dest`.
    ///
    /// Returns the total weight of the path together with the visited nodes
    /// in order, starting at `src` and ending at `dest`. Special cases:
    ///
    /// - if either endpoint is not in the graph, returns `(Weight::INFINITY, vec![])`
    /// - if `src == dest` (and present), returns `(0.0, vec![src])`
    /// - if `dest` is unreachable from `src`, returns `(Weight::INFINITY, vec![])`
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = DirectedGraph::from_edges([(0, 1.0, 1), (1, 2.0, 2), (0, 4.0, 2)]);
    /// assert_eq!(g.shortest_path(0, 2), (3.0, vec![0, 1, 2]));
    ///
    /// g.remove_edge(1, 2);
    /// assert_eq!(g.shortest_path(0, 2), (4.0, vec![0, 2]));
    /// ```
    fn shortest_path(&self, src: NodeId, dest: NodeId) -> (Weight, Vec<NodeId>) {
        if !self.has_node(src) || !self.has_node(dest) {
            return (Weight::INFINITY, Vec::new());
        }

        if src == dest {
            return (0.0, vec![src]);
        }

        let mut dists: FxHashMap<NodeId, Weight> = FxHashMap::default();
        let mut parents: FxHashMap<NodeId, NodeId> = FxHashMap::default();
        let mut queue = VecDeque::new();

        dists.insert(src, 0.0);
        queue.push_back(src);

        while let Some(u) = queue.pop_front() {
            let dist_u = dists[&u];

            for (v, weight) in self.out_edges_of(u) {
                let candidate = dist_u + weight;
                if dists.get(&v).map_or(true, |&d| candidate < d) {
                    dists.insert(v, candidate);
                    parents.insert(v, u);
                    queue.push_back(v);
                }
            }
        }

        let Some(&total) = dists.get(&dest) else {
            return (Weight::INFINITY, Vec::new());
        };

        // Parent links form a tree rooted at `src`, so this walk terminates
        let mut path = vec![dest];
        let mut cursor = dest;
        while let Some(&parent) = parents.get(&cursor) {
            path.push(parent);
            cursor = parent;
        }
        path.reverse();

        debug_assert_eq!(path.first(), Some(&src));
        debug_assert_eq!(path.last(), Some(&dest));

        (total, path)
    }

    /// Computes only the distance from `src` to `dest`, i.e. the weight of a
    /// minimum-weight path or [`Weight::INFINITY`] if no path exists
    fn distance_between(&self, src: NodeId, dest: NodeId) -> Weight {
        self.shortest_path(src, dest).0
    }
}

impl<G> ShortestPaths for G where G: WeightedAdjacency {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::prelude::*;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::algo::traversal::Traversal;

    #[test]
    fn trivial_and_absent_endpoints() {
        let mut graph = DirectedGraph::new();
        assert_eq!(graph.shortest_path(42, 42), (Weight::INFINITY, vec![]));

        graph.add_node(42, None);
        assert_eq!(graph.shortest_path(42, 42), (0.0, vec![42]));
        assert_eq!(graph.shortest_path(42, 7), (Weight::INFINITY, vec![]));
        assert_eq!(graph.shortest_path(7, 42), (Weight::INFINITY, vec![]));
    }

    #[test]
    fn unreachable_is_infinite() {
        let graph = DirectedGraph::from_edges([(0, 1.0, 1), (2, 1.0, 3)]);

        assert_eq!(graph.shortest_path(0, 3), (Weight::INFINITY, vec![]));
        assert_eq!(graph.shortest_path(1, 0), (Weight::INFINITY, vec![]));
        assert_eq!(graph.distance_between(0, 1), 1.0);
    }

    #[test]
    fn detour_beats_direct_edge() {
        let graph = DirectedGraph::from_edges([
            (0, 4.0, 3),
            (0, 1.0, 1),
            (1, 1.0, 2),
            (2, 1.0, 3),
        ]);

        assert_eq!(graph.shortest_path(0, 3), (3.0, vec![0, 1, 2, 3]));
    }

    #[test]
    fn zero_weight_edges_are_free() {
        let graph = DirectedGraph::from_edges([(0, 0.0, 1), (1, 0.0, 2), (0, 0.5, 2)]);

        assert_eq!(graph.shortest_path(0, 2), (0.0, vec![0, 1, 2]));
    }

    #[test]
    fn long_chain_and_shortcut() {
        const N: NodeId = 1000;

        let mut graph = DirectedGraph::new();
        graph.add_edges((1..N).map(|i| (i - 1, i as Weight, i)));

        let (weight, path) = graph.shortest_path(0, N - 1);
        assert_eq!(weight, 499_500.0);
        assert_eq!(path, (0..N).collect_vec());

        assert!(graph.add_edge(0, N - 1, 5.0));
        assert_eq!(graph.shortest_path(0, N - 1), (5.0, vec![0, N - 1]));
    }

    #[test]
    fn agrees_with_floyd_warshall() {
        const N: NodeId = 40;

        let mut rng = Pcg64Mcg::seed_from_u64(0x5e9);
        let mut graph = DirectedGraph::new();
        for u in 0..N {
            graph.add_node(u, Some(Position::default()));
        }

        // Integer-valued weights keep all distance sums exact
        let mut reference = vec![vec![Weight::INFINITY; N as usize]; N as usize];
        for (u, row) in reference.iter_mut().enumerate() {
            row[u] = 0.0;
        }
        for u in 0..N {
            for v in 0..N {
                if u != v && rng.random_bool(0.08) {
                    let weight = rng.random_range(0..10) as Weight;
                    assert!(graph.add_edge(u, v, weight));
                    reference[u as usize][v as usize] = weight;
                }
            }
        }

        for k in 0..N as usize {
            for i in 0..N as usize {
                for j in 0..N as usize {
                    let via = reference[i][k] + reference[k][j];
                    if via < reference[i][j] {
                        reference[i][j] = via;
                    }
                }
            }
        }

        for u in 0..N {
            for v in 0..N {
                let (weight, path) = graph.shortest_path(u, v);
                assert_eq!(weight, reference[u as usize][v as usize]);

                if weight.is_finite() {
                    assert_eq!(path.first(), Some(&u));
                    assert_eq!(path.last(), Some(&v));

                    let path_weight: Weight = path
                        .iter()
                        .tuple_windows()
                        .map(|(&a, &b)| graph.edge_weight(a, b).unwrap())
                        .sum();
                    assert_eq!(path_weight, weight);
                } else {
                    assert!(path.is_empty());
                }
            }
        }
    }

    #[test]
    fn finite_distance_matches_reachability() {
        let mut rng = Pcg64Mcg::seed_from_u64(0xbf5);
        let mut graph = DirectedGraph::new();
        for u in 0..60 {
            graph.add_node(u, Some(Position::default()));
        }
        for u in 0..60 {
            for v in 0..60 {
                if u != v && rng.random_bool(0.04) {
                    graph.add_edge(u, v, rng.random_range(0.0..8.0));
                }
            }
        }

        for u in 0..60 {
            for v in 0..60 {
                assert_eq!(
                    graph.distance_between(u, v).is_finite(),
                    graph.bfs(u).is_node_reachable(v),
                );
            }
        }
    }
}
