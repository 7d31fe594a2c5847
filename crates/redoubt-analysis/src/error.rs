//! Error types for redoubt-analysis.

use thiserror::Error;

/// Result type for redoubt-analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort an analysis call with no partial result.
///
/// Both kinds are permanent for the given input; nothing is retried
/// internally and callers should not retry either.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input topology cannot be normalized into an analysis graph.
    #[error("invalid network configuration: {0}")]
    Graph(#[from] redoubt_topology::GraphError),

    /// Only single-node fault injection is implemented. Larger fault
    /// sets are a documented extension point, not a transient condition.
    #[error("unsupported fault set size {0}: only single-node failures are implemented")]
    UnsupportedFaultSetSize(usize),
}
