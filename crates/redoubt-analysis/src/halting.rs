//! Analysis driver: one failure simulation per candidate node.

use std::collections::HashSet;

use redoubt_topology::{AnalysisGraph, NetworkNode};
use tracing::{debug, trace};

use crate::{cascade::propagate_failure, error::Error, CascadeState, Result};

/// One failure case: a vulnerable node and the nodes its failure kills.
///
/// Both sides borrow the caller's original node objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HaltingFailure<'a> {
    /// The node whose isolated failure halts the home node.
    pub vulnerable: &'a NetworkNode,
    /// Every node that dies as a consequence, the home node included,
    /// deduplicated and in cascade order. The vulnerable node itself is
    /// not listed here.
    pub affected: Vec<&'a NetworkNode>,
}

/// Simulate the isolated failure of every non-home node and report the
/// ones that cascade all the way to the home node.
///
/// `fault_set_size` must be 1; any other value fails with
/// [`Error::UnsupportedFaultSetSize`]. Testing all N-node fault subsets
/// is an extension point that is deliberately not implemented.
///
/// Case order follows the graph's construction order, so identical input
/// yields identical, identically ordered output. Passes are fully
/// independent: each one starts from all-live state and shares nothing
/// but the read-only graph.
pub fn halting_analysis(nodes: &[NetworkNode], fault_set_size: usize) -> Result<Vec<HaltingFailure<'_>>> {
    if fault_set_size != 1 {
        return Err(Error::UnsupportedFaultSetSize(fault_set_size));
    }

    let graph = AnalysisGraph::build(nodes)?;
    let mut failures = Vec::new();

    for name in graph.names() {
        if name == graph.home() {
            continue;
        }
        let Some(candidate) = graph.get(name) else {
            continue;
        };

        trace!(candidate = name, "simulating isolated failure");
        let mut state = CascadeState::new();
        state.mark_dead(name);
        propagate_failure(&graph, name, &mut state);

        if state.is_live(graph.home()) {
            continue;
        }

        let affected = collect_affected(&graph, nodes, &state, name);
        debug!(
            candidate = name,
            affected = affected.len(),
            "home node halts if this node fails"
        );
        failures.push(HaltingFailure {
            vulnerable: &nodes[candidate.external_index()],
            affected,
        });
    }

    Ok(failures)
}

/// Deduplicate the casualty record by node name, keeping first-appearance
/// order and dropping the candidate itself.
fn collect_affected<'a>(
    graph: &AnalysisGraph,
    nodes: &'a [NetworkNode],
    state: &CascadeState,
    candidate: &str,
) -> Vec<&'a NetworkNode> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut affected = Vec::new();
    for name in state.casualties() {
        if name == candidate || !seen.insert(name.as_str()) {
            continue;
        }
        if let Some(node) = graph.get(name) {
            affected.push(&nodes[node.external_index()]);
        }
    }
    affected
}
