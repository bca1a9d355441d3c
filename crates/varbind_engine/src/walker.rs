//! Subtree walking
//!
//! The walk is depth-first and pre-order: a node is matched before its
//! children are visited, and children are visited one at a time in document
//! order. Component instances below a root are neither matched nor entered;
//! a selected root is always processed, whatever its type.

use futures::future::BoxFuture;
use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};
use varbind_core::{
    BindableProperty, CollectionRef, DocumentHost, NodeId, SceneNode, Variable, VariableHost,
};

use crate::binder::Binder;
use crate::error::Result;
use crate::inferred::link_inferred;
use crate::matcher::propose_matches;
use crate::mode::ModeSelector;
use crate::report::LinkReport;
use crate::source::source_for;
use crate::{LinkOptions, LinkStrategy};

/// Walks node subtrees against one collection.
///
/// Candidates are listed once when the walker is prepared and reused for
/// every node it visits.
pub struct SubtreeWalker<'h> {
    variables: &'h dyn VariableHost,
    document: &'h dyn DocumentHost,
    collection: CollectionRef,
    strategy: LinkStrategy,
    modes: ModeSelector,
    candidates: Vec<Variable>,
    listing: LinkReport,
}

impl<'h> SubtreeWalker<'h> {
    pub async fn prepare(
        variables: &'h dyn VariableHost,
        document: &'h dyn DocumentHost,
        collection: &CollectionRef,
        options: LinkOptions,
    ) -> Result<Self> {
        let mut listing = LinkReport::default();
        let mut candidates = Vec::new();
        let mut default_mode = None;

        if options.strategy == LinkStrategy::Value {
            let set = source_for(collection).candidates(variables).await?;
            listing.lookup_misses = set.lookup_misses;
            listing.import_failures = set.import_failures;
            default_mode = set.default_mode;
            candidates = set.variables;
        }

        Ok(Self {
            variables,
            document,
            collection: collection.clone(),
            strategy: options.strategy,
            modes: ModeSelector::new(collection.clone(), default_mode),
            candidates,
            listing,
        })
    }

    pub fn candidates(&self) -> &[Variable] {
        &self.candidates
    }

    /// Failures collected while listing candidates
    pub fn listing_report(&self) -> LinkReport {
        self.listing.clone()
    }

    /// Link the subtree rooted at `root`
    pub fn walk<'a>(&'a self, root: &'a NodeId) -> BoxFuture<'a, LinkReport> {
        Box::pin(async move {
            match self.document.node(root) {
                Some(node) => self.walk_node(node).await,
                None => {
                    warn!("Selected node {} not found, skipping", root);
                    LinkReport::default()
                }
            }
        })
    }

    fn walk_node(&self, node: SceneNode) -> BoxFuture<'_, LinkReport> {
        Box::pin(async move {
            let mut report = LinkReport {
                nodes_visited: 1,
                ..Default::default()
            };

            let binder = Binder::new(self.document);
            match self.strategy {
                LinkStrategy::Value => self.link_by_value(&binder, &node, &mut report),
                LinkStrategy::Inferred => {
                    link_inferred(self.variables, &binder, &self.collection, &node, &mut report)
                        .await
                }
            }

            for child_id in &node.children {
                let Some(child) = self.document.node(child_id) else {
                    debug!("Child {} of {} vanished, skipping", child_id, node.name);
                    continue;
                };
                if child.kind.is_instance() {
                    debug!("Skipping instance {}", child.name);
                    report.instances_skipped += 1;
                    continue;
                }
                let child_report = self.walk_node(child).await;
                report.merge(child_report);
            }

            report
        })
    }

    fn link_by_value(&self, binder: &Binder<'_>, node: &SceneNode, report: &mut LinkReport) {
        // Properties already bound on this node during this walk.
        let mut claimed: FxHashSet<BindableProperty> = FxHashSet::default();

        for variable in &self.candidates {
            let proposals = propose_matches(node, variable);
            if proposals.is_empty() {
                continue;
            }

            let Some((mode, value)) = self.modes.resolve(node, variable) else {
                debug!(
                    "No mode resolves for {} on {}, skipping",
                    variable.name, node.name
                );
                report.resolution_gaps += 1;
                continue;
            };

            for proposal in proposals {
                let properties = proposal.target.properties();
                if properties.iter().any(|p| claimed.contains(p)) {
                    continue;
                }
                if !value.equals_literal(proposal.literal) {
                    continue;
                }
                debug!(
                    "{} = {} matches {} in mode {}",
                    properties[0], proposal.literal, variable.name, mode
                );
                claimed.extend(binder.bind(node, proposal.target, variable, report));
            }
        }
    }
}

/// Link every root subtree against `collection` and merge the results
pub async fn link_nodes(
    variables: &dyn VariableHost,
    document: &dyn DocumentHost,
    roots: &[NodeId],
    collection: &CollectionRef,
    options: LinkOptions,
) -> Result<LinkReport> {
    let walker = SubtreeWalker::prepare(variables, document, collection, options).await?;
    let mut report = walker.listing_report();

    for root in roots {
        let subtree = walker.walk(root).await;
        report.merge(subtree);
    }

    info!(
        "Linked {} properties across {} nodes against {} ({} strategy)",
        report.bindings.len(),
        report.nodes_visited,
        collection,
        options.strategy
    );
    Ok(report)
}
