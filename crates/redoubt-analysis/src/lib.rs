//! Redoubt Halting Analysis
//!
//! Static resilience analysis for federated quorum-based agreement
//! networks: which single node, if it failed in isolation, would drag
//! the home node down with it?
//!
//! # How It Works
//!
//! The external topology is normalized once into an
//! [`AnalysisGraph`](redoubt_topology::AnalysisGraph). Then, for every
//! node other than the home node, one simulation pass runs:
//!
//! 1. Start with every node live and an empty casualty record.
//! 2. Mark the candidate dead.
//! 3. Propagate: any live dependent whose quorum requirement is no
//!    longer satisfied dies too, recursively.
//! 4. If the home node ended the pass dead, the candidate is
//!    *vulnerable* and the pass's casualties are the *affected* nodes.
//!
//! Passes are fully independent; liveness is pass-local state, never
//! stored in the shared graph. Everything is synchronous and in-memory:
//! this is structural analysis, not a running protocol.
//!
//! # Example
//!
//! ```
//! use redoubt_analysis::halting_analysis;
//! use redoubt_topology::{NetworkNode, QuorumSet};
//!
//! // Home trusts a single relay; the relay is a single point of failure.
//! let nodes = vec![
//!     NetworkNode::new("home", QuorumSet::of_validators(1, ["relay"]), 0),
//!     NetworkNode::new("relay", QuorumSet::empty(), 1),
//! ];
//!
//! let failures = halting_analysis(&nodes, 1)?;
//! assert_eq!(failures.len(), 1);
//! assert_eq!(failures[0].vulnerable.id, "relay");
//! assert_eq!(failures[0].affected.len(), 1);
//! assert_eq!(failures[0].affected[0].id, "home");
//! # Ok::<(), redoubt_analysis::Error>(())
//! ```

mod cascade;
mod error;
mod evaluate;
mod halting;
mod state;

pub use cascade::propagate_failure;
pub use error::{Error, Result};
pub use evaluate::requirement_satisfied;
pub use halting::{halting_analysis, HaltingFailure};
pub use state::CascadeState;
