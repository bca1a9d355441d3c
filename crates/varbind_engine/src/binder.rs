//! Property binding

use smallvec::SmallVec;
use tracing::{debug, warn};
use varbind_core::{BindableProperty, DocumentHost, SceneNode, Variable};

use crate::matcher::MatchTarget;
use crate::report::{BindingRecord, LinkReport};

/// Rewrites node properties into variable references.
///
/// Binding the same property twice simply replaces the reference.
pub struct Binder<'h> {
    document: &'h dyn DocumentHost,
}

impl<'h> Binder<'h> {
    pub fn new(document: &'h dyn DocumentHost) -> Self {
        Self { document }
    }

    /// Bind every property of `target` to `variable`, recording each
    /// binding in `report`. Returns the properties that were bound.
    pub fn bind(
        &self,
        node: &SceneNode,
        target: MatchTarget,
        variable: &Variable,
        report: &mut LinkReport,
    ) -> SmallVec<[BindableProperty; 4]> {
        let mut bound = SmallVec::new();

        for property in target.properties() {
            match self.document.set_bound_variable(&node.id, property, variable) {
                Ok(()) => {
                    debug!(
                        "Set variable {} to property {} on {}",
                        variable.name, property, node.name
                    );
                    report.bindings.push(BindingRecord {
                        node_id: node.id.clone(),
                        node_name: node.name.clone(),
                        property,
                        variable_id: variable.id.clone(),
                        variable_name: variable.name.clone(),
                    });
                    bound.push(property);
                }
                Err(error) => {
                    warn!(
                        "Failed to bind {} on {} to {}: {}",
                        property, node.name, variable.name, error
                    );
                    report.bind_failures += 1;
                }
            }
        }

        bound
    }
}
