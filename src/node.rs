/*!
# Node Representation

Internally, every node is a dense id `Node = u32` in the range `0..n`. Ids are handed out in the
order in which node keys are inserted into a graph, so `0` is always the first inserted key.

Externally, nodes are identified by arbitrary keys implementing [`NodeKey`]. Integers, strings,
coordinate pairs and tagged enums can all be used interchangeably; the graph store maps them to
dense ids and back.
*/

use std::{fmt::Debug, hash::Hash};

/// Nodes are dense ids from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Opaque identity of a node as seen by the user of a graph.
///
/// Everything that can be hashed, compared and cloned qualifies, e.g. `u32`, `String`,
/// `(i64, i64)` or a custom enum tagging rows and columns.
pub trait NodeKey: Clone + Eq + Hash + Debug {}

impl<K> NodeKey for K where K: Clone + Eq + Hash + Debug {}
