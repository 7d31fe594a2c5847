//! Pass-local simulation state.

use std::collections::HashSet;

/// Liveness and casualty state for one simulation pass.
///
/// Every node starts live; a pass only ever moves nodes from live to
/// dead, never back. That monotonicity is what bounds the cascade
/// recursion even when the dependents relation contains cycles.
///
/// The state is threaded explicitly through the evaluator and the
/// propagator rather than stored in the shared graph, so passes stay
/// independent and composable.
#[derive(Debug, Default)]
pub struct CascadeState {
    dead: HashSet<String>,
    casualties: Vec<String>,
}

impl CascadeState {
    /// Fresh state: everything live, no casualties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the named node is still live in this pass.
    pub fn is_live(&self, name: &str) -> bool {
        !self.dead.contains(name)
    }

    /// Mark a node dead. Returns `true` if it was live until now.
    pub fn mark_dead(&mut self, name: &str) -> bool {
        self.dead.insert(name.to_owned())
    }

    /// Append a name to the casualty record.
    ///
    /// The record keeps encounter order and may contain duplicates; the
    /// driver deduplicates before reporting.
    pub fn record_casualty(&mut self, name: &str) {
        self.casualties.push(name.to_owned());
    }

    /// The casualty record, in encounter order.
    pub fn casualties(&self) -> &[String] {
        &self.casualties
    }
}
