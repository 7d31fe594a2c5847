//! Redoubt Network Topology
//!
//! Data model and analysis graph for federated quorum-based agreement
//! networks.
//!
//! # Model
//!
//! The external input is a flat collection of [`NetworkNode`]s. Each node
//! carries a [`QuorumSet`]: a threshold plus an ordered list of entries,
//! where every entry is either a direct validator reference or a nested
//! quorum set. A node stays trustworthy only while at least `threshold`
//! of its entries are satisfied.
//!
//! Exactly one node in the input has `distance == 0`: the *home node*,
//! the node from whose perspective resilience is analyzed. Distances are
//! pre-computed by the caller; this crate treats them as opaque except
//! for locating the home node.
//!
//! # Analysis Graph
//!
//! [`AnalysisGraph::build`] normalizes the input into one [`AnalysisNode`]
//! per distinct node id, with resolved requirement trees and inverse
//! (dependent) edges. Quorum references may be mutually cyclic; the
//! builder registers every node before recursing into its quorum tree,
//! so construction always terminates.

mod error;
mod graph;
mod node;
mod quorum;

pub use error::GraphError;
pub use graph::{AnalysisGraph, AnalysisNode, Requirement, RequirementMember};
pub use node::NetworkNode;
pub use quorum::{QuorumMember, QuorumSet};
