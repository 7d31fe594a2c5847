//! Quorum set specification.
//!
//! A quorum set expresses "I trust a decision once at least `threshold`
//! of these entries agree". Entries are either direct validator
//! references or nested quorum sets, so organizations can be grouped:
//! a nested set that reaches its own threshold counts as exactly one
//! unit toward the parent, regardless of how many validators it holds.

/// A single entry in a quorum set.
///
/// The two cases are discriminated by construction, never by runtime
/// inspection of shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuorumMember {
    /// A direct reference to another node by id.
    Validator(String),
    /// A nested quorum set, satisfied by its own threshold.
    Inner(QuorumSet),
}

/// A quorum requirement: at least `threshold` of `members` must be
/// individually satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuorumSet {
    /// Minimum number of satisfied entries.
    pub threshold: usize,
    /// Ordered entries; order is preserved through the analysis.
    pub members: Vec<QuorumMember>,
}

impl QuorumSet {
    /// Create a quorum set from explicit members.
    pub fn new(threshold: usize, members: Vec<QuorumMember>) -> Self {
        Self { threshold, members }
    }

    /// The trivially satisfied quorum set: threshold 0 over no members.
    pub fn empty() -> Self {
        Self {
            threshold: 0,
            members: Vec::new(),
        }
    }

    /// Convenience constructor for a flat set of validator references.
    pub fn of_validators<I, S>(threshold: usize, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            threshold,
            members: ids
                .into_iter()
                .map(|id| QuorumMember::Validator(id.into()))
                .collect(),
        }
    }

    /// Count validator references across the whole tree, nested sets
    /// included.
    pub fn validator_count(&self) -> usize {
        self.members
            .iter()
            .map(|member| match member {
                QuorumMember::Validator(_) => 1,
                QuorumMember::Inner(inner) => inner.validator_count(),
            })
            .sum()
    }
}
