//! Mode selection
//!
//! A node resolves one mode per collection. Selection order:
//!
//! 1. the node's explicit mode for the collection
//! 2. the collection's default mode (local collections only)
//! 3. the candidate variable's first mode, applied by
//!    [`resolve_value`](crate::resolve::resolve_value)
//!
//! Library collections appear in a node's mode table under a composite id
//! that merely contains the library key, so the table lookup goes through
//! [`CollectionRef::matches_collection_id`]. The exact composite format is
//! not documented by the host.

use varbind_core::{CollectionRef, ModeId, SceneNode, Variable, VariableValue};

use crate::resolve::resolve_value;

/// Mode selection for one collection
#[derive(Clone, Debug)]
pub struct ModeSelector {
    collection: CollectionRef,
    default_mode: Option<ModeId>,
}

impl ModeSelector {
    pub fn new(collection: CollectionRef, default_mode: Option<ModeId>) -> Self {
        Self {
            collection,
            default_mode,
        }
    }

    pub fn collection(&self) -> &CollectionRef {
        &self.collection
    }

    /// Mode from the node or the collection, before per-variable fallback
    pub fn preferred_mode<'a>(&'a self, node: &'a SceneNode) -> Option<&'a ModeId> {
        node.explicit_mode(|collection_id| self.collection.matches_collection_id(collection_id))
            .or(self.default_mode.as_ref())
    }

    /// Mode and value to compare for `variable` on `node`.
    ///
    /// `None` means no mode can be resolved and the candidate is skipped.
    pub fn resolve<'v>(
        &self,
        node: &SceneNode,
        variable: &'v Variable,
    ) -> Option<(&'v ModeId, &'v VariableValue)> {
        resolve_value(variable, self.preferred_mode(node))
    }
}
