//! Error types for redoubt-topology.

use thiserror::Error;

/// Configuration errors raised while normalizing the input topology.
///
/// All of these are permanent for a given input: the graph is unusable
/// and there is no meaningful partial analysis.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// No input node has distance 0, so there is no home node to
    /// analyze from.
    #[error("no home node: no input node has distance 0")]
    NoHomeNode,

    /// More than one input node claims distance 0.
    #[error("multiple home nodes: {first} and {second} both have distance 0")]
    MultipleHomeNodes { first: String, second: String },

    /// A quorum set references a node id that is not in the input.
    #[error("quorum set of {referenced_by} references unknown node {id}")]
    UnknownValidator { referenced_by: String, id: String },
}
