/*!
# Graph Algorithms

This module provides the algorithms built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversals, cycle detection, shortest paths and maximum flow.
Each algorithm is available as a configurable struct and, for the common use-cases, as a trait
method implemented on every graph that supports the required operations.
*/

mod cycle;
mod network_flow;
mod shortest_path;
mod traversal;

use crate::prelude::*;
use itertools::Itertools;

pub use cycle::*;
pub use network_flow::*;
pub use shortest_path::*;
pub use traversal::*;
