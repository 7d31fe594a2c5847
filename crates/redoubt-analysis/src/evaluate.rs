//! Quorum threshold evaluation.

use redoubt_topology::{Requirement, RequirementMember};

use crate::CascadeState;

/// Decide whether a requirement is satisfied under the pass's current
/// liveness, recording every dead direct reference as a casualty.
///
/// A requirement is satisfied when at least `threshold` of its members
/// are individually satisfied: a direct reference counts iff the node is
/// live, and a nested requirement counts as exactly one unit iff its own
/// threshold holds, regardless of how many leaves it contains.
///
/// Every member is visited unconditionally (no early exit once the
/// threshold is reached), so the casualty record is complete wherever
/// satisfaction is decided. A failed nested subtree records nothing for
/// itself; its dead leaves were already recorded while it was walked.
pub fn requirement_satisfied(requirement: &Requirement, state: &mut CascadeState) -> bool {
    let mut satisfied = 0;
    for member in &requirement.members {
        match member {
            RequirementMember::Node(name) => {
                if state.is_live(name) {
                    satisfied += 1;
                } else {
                    state.record_casualty(name);
                }
            }
            RequirementMember::Nested(inner) => {
                if requirement_satisfied(inner, state) {
                    satisfied += 1;
                }
            }
        }
    }
    satisfied >= requirement.threshold
}
