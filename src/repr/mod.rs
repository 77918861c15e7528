/*!
# Graph Representations

[`KeyedGraph`] is the graph store: a directed, weighted adjacency list over arbitrary node keys.
[`SuperSource`] is a borrowed view that adds one node with zero-weight edges to every node of
the underlying graph.
*/

use crate::{edge::*, node::*, ops::*, weight::*};

mod keyed;
mod super_source;

pub use keyed::*;
pub use super_source::*;
