/*!
# Random Digraphs

Generator for random weighted digraphs in the **G(n, p)** spirit: every
ordered pair of distinct nodes becomes an edge independently with a fixed
probability. Weights are drawn uniformly from a configurable range and node
positions are sampled from the passed random generator, so a seeded generator
reproduces the exact same graph.
*/

use std::ops::Range;

use rand::Rng;

use crate::prelude::*;

/// Builder for random weighted digraphs with nodes `0..n`.
///
/// Self-loops are never sampled. The weight range must be non-empty and
/// should be non-negative since the graph rejects negative weights.
///
/// # Example
/// ```rust
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64;
/// use wgraphs::{prelude::*, gens::*};
///
/// let mut rng = Pcg64::seed_from_u64(123);
/// let g = RandomDigraph::new(50)
///     .edge_probability(0.1)
///     .weight_range(1.0..4.0)
///     .generate(&mut rng);
///
/// assert_eq!(g.number_of_nodes(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct RandomDigraph {
    nodes: NumNodes,
    prob: f64,
    weights: Range<Weight>,
}

impl RandomDigraph {
    /// Creates a generator for graphs with nodes `0..nodes`, no edges yet
    /// (probability `0.0`) and weights drawn from `0.0..1.0`
    pub fn new(nodes: NumNodes) -> Self {
        Self {
            nodes,
            prob: 0.0,
            weights: 0.0..1.0,
        }
    }

    /// Sets the probability with which each ordered pair `(u, v)` of distinct
    /// nodes becomes an edge.
    ///
    /// # Panics
    /// Panics if `prob` is not a probability, i.e. not in `[0, 1]`
    pub fn set_edge_probability(&mut self, prob: f64) {
        assert!((0.0..=1.0).contains(&prob));
        self.prob = prob;
    }

    pub fn edge_probability(mut self, prob: f64) -> Self {
        self.set_edge_probability(prob);
        self
    }

    /// Sets the half-open range edge weights are drawn from uniformly
    pub fn set_weight_range(&mut self, weights: Range<Weight>) {
        assert!(!weights.is_empty());
        self.weights = weights;
    }

    pub fn weight_range(mut self, weights: Range<Weight>) -> Self {
        self.set_weight_range(weights);
        self
    }

    /// Samples a graph according to the configured parameters
    pub fn generate<R>(&self, rng: &mut R) -> DirectedGraph
    where
        R: Rng,
    {
        let mut graph = DirectedGraph::new();

        for u in 0..self.nodes {
            graph.add_node(u, Some(Position::random(rng)));
        }

        for u in 0..self.nodes {
            for v in 0..self.nodes {
                if u != v && rng.random_bool(self.prob) {
                    graph.add_edge(u, v, rng.random_range(self.weights.clone()));
                }
            }
        }

        graph
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn probability_extremes() {
        let mut rng = Pcg64::seed_from_u64(31);

        let empty = RandomDigraph::new(30).generate(&mut rng);
        assert_eq!(empty.number_of_nodes(), 30);
        assert!(empty.is_edgeless());

        let complete = RandomDigraph::new(30)
            .edge_probability(1.0)
            .generate(&mut rng);
        assert_eq!(complete.number_of_edges(), 30 * 29);
    }

    #[test]
    fn weights_stay_in_range() {
        let mut rng = Pcg64::seed_from_u64(32);

        let graph = RandomDigraph::new(25)
            .edge_probability(0.3)
            .weight_range(2.0..5.0)
            .generate(&mut rng);

        assert!(!graph.is_edgeless());
        for edge in graph.edge_records() {
            assert!((2.0..5.0).contains(&edge.weight()));
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let build = || {
            let mut rng = Pcg64::seed_from_u64(99);
            RandomDigraph::new(40)
                .edge_probability(0.2)
                .generate(&mut rng)
        };

        let a = build();
        let b = build();

        assert_eq!(a.number_of_nodes(), b.number_of_nodes());
        assert_eq!(a.edge_records(), b.edge_records());
        for u in a.vertices() {
            assert_eq!(a.position_of(u), b.position_of(u));
        }
    }

    #[test]
    fn sampled_positions_lie_in_placement_box() {
        let mut rng = Pcg64::seed_from_u64(33);
        let graph = RandomDigraph::new(20).generate(&mut rng);

        for u in graph.vertices() {
            let pos = graph.position_of(u).unwrap();
            assert!((Position::BOX_MIN.0..Position::BOX_MAX.0).contains(&pos.x()));
            assert!((Position::BOX_MIN.1..Position::BOX_MAX.1).contains(&pos.y()));
            assert_eq!(pos.z(), 0.0);
        }
    }
}
