//! Analysis graph construction.
//!
//! Normalizes the external node collection into one [`AnalysisNode`] per
//! distinct node id, with two edge directions:
//!
//! - forward: each node's [`Requirement`] tree, a resolved copy of its
//!   quorum set where every validator reference is known to exist
//! - backward: each node's `dependents` list, the names of nodes whose
//!   requirement references it (directly or via a nested set)
//!
//! # Cycle-Safe Construction
//!
//! Quorum references are routinely mutually cyclic (A requires B, B
//! requires A). The builder keeps an explicit per-node build state and
//! registers a node *before* walking its quorum tree; a cyclic reference
//! finds the partially built node already registered and terminates
//! instead of recursing forever. This ordering is an invariant, not an
//! accident; `BuildState` makes it explicit.

use std::collections::HashMap;

use crate::{GraphError, NetworkNode, QuorumMember, QuorumSet};

/// A resolved quorum requirement.
///
/// Mirrors [`QuorumSet`], except every referenced name is guaranteed to
/// have a matching [`AnalysisNode`] in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Minimum number of satisfied members.
    pub threshold: usize,
    /// Ordered members, preserving the input quorum set's order.
    pub members: Vec<RequirementMember>,
}

/// A single member of a [`Requirement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementMember {
    /// A resolved reference to another analysis node, by name.
    Node(String),
    /// A nested requirement, satisfied by its own threshold.
    Nested(Requirement),
}

impl Requirement {
    fn unresolved() -> Self {
        Self {
            threshold: 0,
            members: Vec::new(),
        }
    }
}

/// One node of the analysis graph.
#[derive(Debug, Clone)]
pub struct AnalysisNode {
    name: String,
    requirement: Requirement,
    dependents: Vec<String>,
    external: usize,
}

impl AnalysisNode {
    /// The node's name; matches the external node's id.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved quorum requirement.
    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    /// Names of nodes whose requirement references this node.
    ///
    /// May contain the same name more than once when an owner references
    /// this node through several entries; consumers must tolerate that.
    pub fn dependents(&self) -> &[String] {
        &self.dependents
    }

    /// Index of the matching [`NetworkNode`] in the caller's input slice.
    pub fn external_index(&self) -> usize {
        self.external
    }
}

/// The normalized analysis graph: home node, name-keyed lookup, and a
/// deterministic construction order.
///
/// Immutable after [`build`](AnalysisGraph::build); per-pass liveness
/// lives outside the graph so independent simulation passes can share it
/// read-only.
#[derive(Debug, Clone)]
pub struct AnalysisGraph {
    nodes: HashMap<String, AnalysisNode>,
    order: Vec<String>,
    home: String,
}

impl AnalysisGraph {
    /// Build the analysis graph from the external node collection.
    ///
    /// Fails with a [`GraphError`] when the input has no distance-0 home
    /// node, more than one, or a quorum set that references an unknown
    /// node id.
    pub fn build(input: &[NetworkNode]) -> Result<Self, GraphError> {
        let home_idx = find_home(input)?;

        let mut builder = GraphBuilder::new(input);
        builder.ensure_node(home_idx)?;
        // Nodes unreachable from the home node still belong to the
        // graph; walk the remaining input in order so the overall order
        // stays deterministic.
        for idx in 0..input.len() {
            builder.ensure_node(idx)?;
        }

        Ok(builder.finish(input[home_idx].id.clone()))
    }

    /// Name of the home node.
    pub fn home(&self) -> &str {
        &self.home
    }

    /// Look up a node by name.
    pub fn get(&self, name: &str) -> Option<&AnalysisNode> {
        self.nodes.get(name)
    }

    /// Node names in construction order: the home node first, then its
    /// quorum tree depth-first, then any remaining input nodes in input
    /// order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn find_home(input: &[NetworkNode]) -> Result<usize, GraphError> {
    let mut home = None;
    for (idx, node) in input.iter().enumerate() {
        if node.is_home() {
            match home {
                None => home = Some(idx),
                Some(first) => {
                    return Err(GraphError::MultipleHomeNodes {
                        first: input[first].id.clone(),
                        second: node.id.clone(),
                    })
                }
            }
        }
    }
    home.ok_or(GraphError::NoHomeNode)
}

/// Per-node build state.
///
/// `Registered` means the node is in the lookup table but its quorum
/// tree is still being walked; cyclic references land here and stop.
/// Registration must always precede the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuildState {
    Registered,
    Complete,
}

struct GraphBuilder<'a> {
    input: &'a [NetworkNode],
    index: HashMap<&'a str, usize>,
    nodes: HashMap<String, AnalysisNode>,
    order: Vec<String>,
    state: HashMap<String, BuildState>,
}

impl<'a> GraphBuilder<'a> {
    fn new(input: &'a [NetworkNode]) -> Self {
        let mut index = HashMap::with_capacity(input.len());
        for (idx, node) in input.iter().enumerate() {
            // First occurrence wins; ids are expected to be unique.
            index.entry(node.id.as_str()).or_insert(idx);
        }
        Self {
            input,
            index,
            nodes: HashMap::with_capacity(input.len()),
            order: Vec::with_capacity(input.len()),
            state: HashMap::with_capacity(input.len()),
        }
    }

    /// Ensure the analysis node for `input[idx]` exists, building it and
    /// everything its quorum tree references if needed.
    fn ensure_node(&mut self, idx: usize) -> Result<(), GraphError> {
        let input = self.input;
        let external = &input[idx];
        let name = external.id.as_str();

        if self.state.contains_key(name) {
            // Registered or complete; a cyclic reference ends up here.
            return Ok(());
        }

        // Register before recursing into the quorum tree.
        self.state.insert(name.to_owned(), BuildState::Registered);
        self.nodes.insert(
            name.to_owned(),
            AnalysisNode {
                name: name.to_owned(),
                requirement: Requirement::unresolved(),
                dependents: Vec::new(),
                external: idx,
            },
        );
        self.order.push(name.to_owned());

        let requirement = self.resolve(name, &external.quorum_set)?;
        if let Some(node) = self.nodes.get_mut(name) {
            node.requirement = requirement;
        }
        self.state.insert(name.to_owned(), BuildState::Complete);
        Ok(())
    }

    /// Walk a quorum set, resolving validator references and recording
    /// both edge directions. Nested sets are walked in place; only their
    /// leaves create edges.
    fn resolve(&mut self, owner: &str, set: &QuorumSet) -> Result<Requirement, GraphError> {
        let mut members = Vec::with_capacity(set.members.len());
        for member in &set.members {
            match member {
                QuorumMember::Validator(id) => {
                    let Some(&idx) = self.index.get(id.as_str()) else {
                        return Err(GraphError::UnknownValidator {
                            referenced_by: owner.to_owned(),
                            id: id.clone(),
                        });
                    };
                    self.ensure_node(idx)?;
                    if let Some(node) = self.nodes.get_mut(id.as_str()) {
                        node.dependents.push(owner.to_owned());
                    }
                    members.push(RequirementMember::Node(id.clone()));
                }
                QuorumMember::Inner(inner) => {
                    members.push(RequirementMember::Nested(self.resolve(owner, inner)?));
                }
            }
        }
        Ok(Requirement {
            threshold: set.threshold,
            members,
        })
    }

    fn finish(self, home: String) -> AnalysisGraph {
        debug_assert!(
            self.state.values().all(|s| *s == BuildState::Complete),
            "every registered node must be complete after construction"
        );
        AnalysisGraph {
            nodes: self.nodes,
            order: self.order,
            home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuorumSet;

    fn node(id: &str, set: QuorumSet, distance: u32) -> NetworkNode {
        NetworkNode::new(id, set, distance)
    }

    #[test]
    fn no_home_node_is_rejected() {
        let input = vec![
            node("a", QuorumSet::empty(), 1),
            node("b", QuorumSet::empty(), 2),
        ];
        assert_eq!(AnalysisGraph::build(&input).unwrap_err(), GraphError::NoHomeNode);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(AnalysisGraph::build(&[]).unwrap_err(), GraphError::NoHomeNode);
    }

    #[test]
    fn multiple_home_nodes_are_rejected() {
        let input = vec![
            node("a", QuorumSet::empty(), 0),
            node("b", QuorumSet::empty(), 0),
        ];
        assert_eq!(
            AnalysisGraph::build(&input).unwrap_err(),
            GraphError::MultipleHomeNodes {
                first: "a".into(),
                second: "b".into(),
            }
        );
    }

    #[test]
    fn unknown_validator_reference_is_rejected() {
        let input = vec![node("home", QuorumSet::of_validators(1, ["ghost"]), 0)];
        assert_eq!(
            AnalysisGraph::build(&input).unwrap_err(),
            GraphError::UnknownValidator {
                referenced_by: "home".into(),
                id: "ghost".into(),
            }
        );
    }

    #[test]
    fn unknown_reference_inside_nested_set_is_rejected() {
        let set = QuorumSet::new(
            1,
            vec![QuorumMember::Inner(QuorumSet::of_validators(1, ["ghost"]))],
        );
        let input = vec![node("home", set, 0)];
        assert_eq!(
            AnalysisGraph::build(&input).unwrap_err(),
            GraphError::UnknownValidator {
                referenced_by: "home".into(),
                id: "ghost".into(),
            }
        );
    }

    #[test]
    fn one_analysis_node_per_input_id() {
        let input = vec![
            node("home", QuorumSet::of_validators(2, ["a", "b"]), 0),
            node("a", QuorumSet::empty(), 1),
            node("b", QuorumSet::of_validators(1, ["a"]), 1),
        ];
        let graph = AnalysisGraph::build(&input).unwrap();

        assert_eq!(graph.len(), 3);
        for id in ["home", "a", "b"] {
            assert!(graph.get(id).is_some(), "missing node {id}");
        }
    }

    #[test]
    fn unreachable_nodes_are_still_built() {
        let input = vec![
            node("home", QuorumSet::of_validators(1, ["a"]), 0),
            node("a", QuorumSet::empty(), 1),
            node("island", QuorumSet::empty(), 5),
        ];
        let graph = AnalysisGraph::build(&input).unwrap();

        assert_eq!(graph.len(), 3);
        assert!(graph.get("island").is_some());
    }

    #[test]
    fn cyclic_references_terminate() {
        let input = vec![
            node("home", QuorumSet::of_validators(1, ["a"]), 0),
            node("a", QuorumSet::of_validators(1, ["b"]), 1),
            node("b", QuorumSet::of_validators(1, ["a"]), 2),
        ];
        let graph = AnalysisGraph::build(&input).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.get("a").unwrap().dependents(), ["b", "home"]);
        assert_eq!(graph.get("b").unwrap().dependents(), ["a"]);
    }

    #[test]
    fn self_reference_terminates() {
        let input = vec![
            node("home", QuorumSet::of_validators(1, ["a"]), 0),
            node("a", QuorumSet::of_validators(1, ["a"]), 1),
        ];
        let graph = AnalysisGraph::build(&input).unwrap();

        assert_eq!(graph.get("a").unwrap().dependents(), ["a", "home"]);
    }

    #[test]
    fn nested_leaves_attach_edges_to_the_owner() {
        let set = QuorumSet::new(
            2,
            vec![
                QuorumMember::Validator("a".into()),
                QuorumMember::Inner(QuorumSet::of_validators(1, ["b", "c"])),
            ],
        );
        let input = vec![
            node("home", set, 0),
            node("a", QuorumSet::empty(), 1),
            node("b", QuorumSet::empty(), 1),
            node("c", QuorumSet::empty(), 1),
        ];
        let graph = AnalysisGraph::build(&input).unwrap();

        // Leaves of the nested set point back at the owning node, not at
        // some intermediate entity.
        assert_eq!(graph.get("b").unwrap().dependents(), ["home"]);
        assert_eq!(graph.get("c").unwrap().dependents(), ["home"]);

        // The requirement tree keeps the nesting.
        let req = graph.get("home").unwrap().requirement();
        assert_eq!(req.threshold, 2);
        assert_eq!(req.members.len(), 2);
        assert!(matches!(req.members[0], RequirementMember::Node(ref n) if n == "a"));
        assert!(matches!(req.members[1], RequirementMember::Nested(_)));
    }

    #[test]
    fn order_is_home_first_then_depth_first_then_input_order() {
        let input = vec![
            node("x", QuorumSet::empty(), 2),
            node("home", QuorumSet::of_validators(1, ["a"]), 0),
            node("a", QuorumSet::of_validators(1, ["x"]), 1),
        ];
        let graph = AnalysisGraph::build(&input).unwrap();

        let order: Vec<&str> = graph.names().collect();
        assert_eq!(order, ["home", "a", "x"]);
    }

    #[test]
    fn repeated_builds_produce_identical_order() {
        let input = vec![
            node("home", QuorumSet::of_validators(2, ["a", "b"]), 0),
            node("a", QuorumSet::of_validators(1, ["b"]), 1),
            node("b", QuorumSet::of_validators(1, ["a"]), 1),
        ];
        let first: Vec<String> = AnalysisGraph::build(&input)
            .unwrap()
            .names()
            .map(str::to_owned)
            .collect();
        let second: Vec<String> = AnalysisGraph::build(&input)
            .unwrap()
            .names()
            .map(str::to_owned)
            .collect();
        assert_eq!(first, second);
    }
}
