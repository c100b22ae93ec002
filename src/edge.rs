use std::fmt::{Debug, Display};

use crate::node::NodeId;

/// Edge weights are floats.
/// The graph only ever stores finite, non-negative weights; `f64::INFINITY`
/// is reserved as the unreachable-distance sentinel of path queries.
pub type Weight = f64;

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

/// A directed edge given as `(source, weight, target)`.
///
/// Two edges are equal exactly if all three fields are, which makes the
/// record usable as a structural existence token in edge lists.
#[derive(Copy, Clone, PartialEq, PartialOrd)]
pub struct WeightedEdge(pub NodeId, pub Weight, pub NodeId);

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl WeightedEdge {
    /// The node the edge points away from
    pub fn source(&self) -> NodeId {
        self.0
    }

    /// The weight of the edge
    pub fn weight(&self) -> Weight {
        self.1
    }

    /// The node the edge points to
    pub fn target(&self) -> NodeId {
        self.2
    }

    /// Both endpoints as a `(source, target)` pair
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.0, self.2)
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.2
    }

    /// Returns true if `u` is either endpoint
    pub fn touches(&self, u: NodeId) -> bool {
        self.0 == u || self.2 == u
    }

    /// Reverses the edge by switching the endpoints, keeping the weight
    pub fn reverse(&self) -> Self {
        WeightedEdge(self.2, self.1, self.0)
    }
}

impl From<(NodeId, Weight, NodeId)> for WeightedEdge {
    fn from(value: (NodeId, Weight, NodeId)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&(NodeId, Weight, NodeId)> for WeightedEdge {
    fn from(value: &(NodeId, Weight, NodeId)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl From<&WeightedEdge> for WeightedEdge {
    fn from(value: &WeightedEdge) -> Self {
        *value
    }
}
