/*!
# Graph Representations

The crate ships a single representation, [`DirectedGraph`]: an id-keyed node
table with dual adjacency maps per node and a flat edge-record index. All
accessor and editing traits from [`crate::ops`] are implemented on it.
*/

mod directed;

pub use directed::*;
