//! Host-inferred linking
//!
//! Some hosts precompute, per node property, the variables whose values
//! match it. This strategy trusts that table: it keeps the inferred
//! variables that belong to the chosen collection and binds the first one
//! holding the node's literal in any mode. Scopes and mode resolution are
//! left to the host's inference.

use tracing::{debug, warn};
use varbind_core::{BindableProperty, CollectionRef, SceneNode, VariableHost};

use crate::binder::Binder;
use crate::matcher::MatchTarget;
use crate::report::LinkReport;

pub async fn link_inferred(
    variables: &dyn VariableHost,
    binder: &Binder<'_>,
    collection: &CollectionRef,
    node: &SceneNode,
    report: &mut LinkReport,
) {
    for property in BindableProperty::ALL {
        let Some(inferred) = node.inferred_variables.get(&property) else {
            continue;
        };

        for id in inferred {
            let variable = match variables.variable_by_id(id).await {
                Ok(Some(variable)) => variable,
                Ok(None) => {
                    debug!("Inferred variable {} no longer exists", id);
                    report.lookup_misses += 1;
                    continue;
                }
                Err(error) => {
                    warn!("Failed to resolve inferred variable {}: {}", id, error);
                    report.lookup_misses += 1;
                    continue;
                }
            };

            if !collection.matches_collection_id(&variable.variable_collection_id) {
                continue;
            }

            let Some(literal) = node.literal(property) else {
                debug!("Property {} is undefined on {}, skipping", property, node.name);
                break;
            };

            if variable.has_value(literal) {
                binder.bind(node, MatchTarget::Property(property), &variable, report);
                break;
            }
        }
    }
}
