//! Library collections and variable import

use rustc_hash::{FxHashMap, FxHashSet};
use varbind_core::{HostError, HostResult, LibraryCollection, Variable, VariableId};

use crate::document::{LibrarySpec, LibraryVariableSpec};

/// Published libraries plus the session's import state
#[derive(Default)]
pub struct LibraryStore {
    libraries: Vec<LibrarySpec>,
    imported: FxHashMap<String, Variable>,
    import_attempts: FxHashMap<String, usize>,
    failing: FxHashSet<String>,
}

impl LibraryStore {
    pub fn new(libraries: Vec<LibrarySpec>) -> Self {
        let failing = libraries
            .iter()
            .flat_map(|library| library.variables.iter())
            .filter(|variable| variable.fail_import)
            .map(|variable| variable.key.clone())
            .collect();
        Self {
            libraries,
            failing,
            ..Default::default()
        }
    }

    pub fn add(&mut self, library: LibrarySpec) {
        for variable in library.variables.iter().filter(|v| v.fail_import) {
            self.failing.insert(variable.key.clone());
        }
        self.libraries.push(library);
    }

    pub fn libraries(&self) -> &[LibrarySpec] {
        &self.libraries
    }

    pub fn collections(&self) -> Vec<LibraryCollection> {
        self.libraries
            .iter()
            .map(|library| library.collection.clone())
            .collect()
    }

    pub fn library(&self, collection_key: &str) -> Option<&LibrarySpec> {
        self.libraries
            .iter()
            .find(|library| library.collection.key == collection_key)
    }

    pub fn set_failing(&mut self, key: &str, failing: bool) {
        if failing {
            self.failing.insert(key.to_string());
        } else {
            self.failing.remove(key);
        }
    }

    pub fn import_attempts(&self, key: &str) -> usize {
        self.import_attempts.get(key).copied().unwrap_or(0)
    }

    /// Shadow variable for `key`, if already imported
    pub fn imported(&self, key: &str) -> Option<&Variable> {
        self.imported.get(key)
    }

    /// Import `key`, returning its shadow variable.
    ///
    /// Re-importing returns the existing shadow. The caller stores the
    /// returned variable so it resolves by id.
    pub fn import(&mut self, key: &str) -> HostResult<Variable> {
        *self.import_attempts.entry(key.to_string()).or_default() += 1;

        if self.failing.contains(key) {
            return Err(HostError::Import {
                key: key.to_string(),
                reason: "library unavailable".to_string(),
            });
        }

        if let Some(existing) = self.imported.get(key) {
            return Ok(existing.clone());
        }

        let (library, spec) = self
            .libraries
            .iter()
            .find_map(|library| {
                library
                    .variables
                    .iter()
                    .find(|variable| variable.key == key)
                    .map(|variable| (library, variable))
            })
            .ok_or_else(|| HostError::Import {
                key: key.to_string(),
                reason: "no published variable with this key".to_string(),
            })?;

        let variable = shadow_variable(&library.collection, spec);
        self.imported.insert(key.to_string(), variable.clone());
        Ok(variable)
    }
}

/// Session-local copy of a published variable.
///
/// The shadow's collection id embeds the library key inside a composite id,
/// the way hosts report imported collections.
fn shadow_variable(collection: &LibraryCollection, spec: &LibraryVariableSpec) -> Variable {
    Variable {
        id: VariableId::new(format!("VariableID:{}/0:0", spec.key)),
        name: spec.name.clone(),
        key: spec.key.clone(),
        variable_collection_id: format!("VariableCollectionId:{}/0:0", collection.key),
        resolved_type: spec.resolved_type,
        scopes: spec.scopes.clone(),
        values_by_mode: spec.values_by_mode.clone(),
        remote: true,
    }
}
