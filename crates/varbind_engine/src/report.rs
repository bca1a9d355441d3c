//! Link run results
//!
//! Each walk returns its own [`LinkReport`]; callers fold subtree reports
//! together with [`LinkReport::merge`]. Nothing is shared between runs.

use serde::{Deserialize, Serialize};
use varbind_core::{BindableProperty, NodeId, VariableId};

/// One property rewritten to a variable reference
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingRecord {
    pub node_id: NodeId,
    pub node_name: String,
    pub property: BindableProperty,
    pub variable_id: VariableId,
    pub variable_name: String,
}

/// A library variable that could not be imported
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportFailure {
    pub key: String,
    pub name: String,
    pub reason: String,
}

/// Aggregate result of linking one or more subtrees
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkReport {
    pub nodes_visited: usize,
    /// Instance children left untouched
    pub instances_skipped: usize,
    /// (node, variable) pairs skipped because no mode resolved
    pub resolution_gaps: usize,
    /// Variable ids that no longer resolve
    pub lookup_misses: usize,
    /// Host rejected a binding
    pub bind_failures: usize,
    pub import_failures: Vec<ImportFailure>,
    pub bindings: Vec<BindingRecord>,
}

impl LinkReport {
    /// Whether any property on any visited node was bound
    pub fn any_bound(&self) -> bool {
        !self.bindings.is_empty()
    }

    pub fn merge(&mut self, other: LinkReport) {
        self.nodes_visited += other.nodes_visited;
        self.instances_skipped += other.instances_skipped;
        self.resolution_gaps += other.resolution_gaps;
        self.lookup_misses += other.lookup_misses;
        self.bind_failures += other.bind_failures;
        self.import_failures.extend(other.import_failures);
        self.bindings.extend(other.bindings);
    }

    /// Bindings recorded for one node
    pub fn bindings_for<'a>(&'a self, node: &'a NodeId) -> impl Iterator<Item = &'a BindingRecord> {
        self.bindings.iter().filter(move |b| &b.node_id == node)
    }
}
