//! External network node model.

use crate::QuorumSet;

/// A node in the external network topology, as supplied by the caller.
///
/// The surrounding application resolves the source topology and computes
/// each node's graph distance from the home node before handing the
/// collection to the analysis. This type is read-only input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkNode {
    /// Globally unique node identifier.
    pub id: String,
    /// The quorum requirement this node needs satisfied to stay live.
    pub quorum_set: QuorumSet,
    /// Pre-computed graph distance from the home node.
    /// Exactly one node in a valid input has distance 0.
    pub distance: u32,
}

impl NetworkNode {
    /// Create a new network node.
    pub fn new(id: impl Into<String>, quorum_set: QuorumSet, distance: u32) -> Self {
        Self {
            id: id.into(),
            quorum_set,
            distance,
        }
    }

    /// Whether this is the home node (distance 0).
    pub fn is_home(&self) -> bool {
        self.distance == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_distance_zero() {
        let home = NetworkNode::new("home", QuorumSet::empty(), 0);
        let peer = NetworkNode::new("peer", QuorumSet::empty(), 3);

        assert!(home.is_home());
        assert!(!peer.is_home());
    }
}
