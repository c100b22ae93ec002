/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph
representation in this crate. All algorithms are re-exported at the top level
of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, shortest path, and strong connectivity routines.
If possible, algorithms are provided as **iterators**, making it easy to
consume results lazily.
*/

mod connectivity;
mod shortest_path;
mod traversal;

pub use connectivity::*;
pub use shortest_path::*;
pub use traversal::*;
