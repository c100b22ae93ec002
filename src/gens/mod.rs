/*!
# Graph Generators

This module provides builders for constructing random graphs and for planting
structured motifs inside existing graphs.

Generators follow a builder-style pattern for fluent configuration. The
typical usage workflow is:

1. Create a generator instance (e.g., `RandomDigraph::new(n)`).
2. Set parameters using its methods (e.g., `.edge_probability(p)`).
3. Generate the graph via `generate()` with a random generator of your choice.

All randomness is drawn from the passed [`rand::Rng`], so seeded generators
produce reproducible graphs.

In addition, the [`GeneratorSubstructures`] trait plants paths and cycles with
caller-controlled weights inside any editable graph.
*/

mod random;
mod substructures;

pub use random::*;
pub use substructures::*;
