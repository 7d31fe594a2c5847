//! Cascading failure propagation.

use redoubt_topology::AnalysisGraph;
use tracing::trace;

use crate::{evaluate::requirement_satisfied, CascadeState};

/// Propagate the failure of `name` through its dependents.
///
/// `name` must already be marked dead in `state`. Every live dependent
/// whose requirement is no longer satisfied is marked dead, recorded as
/// a casualty, and recursed into. Already-dead dependents are skipped,
/// which bounds the recursion by the number of nodes even when the
/// dependents relation is cyclic: liveness only ever decreases within a
/// pass.
pub fn propagate_failure(graph: &AnalysisGraph, name: &str, state: &mut CascadeState) {
    let Some(node) = graph.get(name) else {
        return;
    };
    for dependent in node.dependents() {
        if !state.is_live(dependent) {
            continue;
        }
        let Some(dep) = graph.get(dependent) else {
            continue;
        };
        if !requirement_satisfied(dep.requirement(), state) {
            state.mark_dead(dependent);
            state.record_casualty(dependent);
            trace!(node = dependent.as_str(), cause = name, "quorum requirement unmet, node fails");
            propagate_failure(graph, dependent, state);
        }
    }
}
