//! Candidate variable sources
//!
//! A source lists the variables of the chosen collection in the
//! collection's own order. Local collections are dereferenced id by id;
//! library collections are imported key by key. A stale id or a failed
//! import drops that one variable and never the whole listing.

use async_trait::async_trait;
use tracing::{debug, warn};
use varbind_core::{CollectionId, CollectionRef, ModeId, Variable, VariableHost};

use crate::error::{EngineError, Result};
use crate::report::ImportFailure;

/// Variables available for matching during one run
#[derive(Clone, Debug, Default)]
pub struct CandidateSet {
    pub variables: Vec<Variable>,
    /// Collection default mode (local collections)
    pub default_mode: Option<ModeId>,
    /// Variable ids that no longer resolve
    pub lookup_misses: usize,
    pub import_failures: Vec<ImportFailure>,
}

#[async_trait]
pub trait VariableSource: Send + Sync {
    async fn candidates(&self, host: &dyn VariableHost) -> Result<CandidateSet>;
}

/// Variables of a collection owned by the document
pub struct LocalSource {
    pub collection_id: CollectionId,
}

#[async_trait]
impl VariableSource for LocalSource {
    async fn candidates(&self, host: &dyn VariableHost) -> Result<CandidateSet> {
        let collection = host
            .local_collection(&self.collection_id)
            .await?
            .ok_or_else(|| EngineError::CollectionNotFound(self.collection_id.to_string()))?;

        let mut set = CandidateSet {
            default_mode: Some(collection.default_mode_id.clone()),
            ..Default::default()
        };

        for id in &collection.variable_ids {
            match host.variable_by_id(id).await {
                Ok(Some(variable)) => set.variables.push(variable),
                Ok(None) => {
                    debug!("Variable {} no longer exists, skipping", id);
                    set.lookup_misses += 1;
                }
                Err(error) => {
                    warn!("Failed to resolve variable {}: {}", id, error);
                    set.lookup_misses += 1;
                }
            }
        }

        debug!(
            "Local collection {} ({}) yields {} candidates",
            collection.name,
            collection.id,
            set.variables.len()
        );
        Ok(set)
    }
}

/// Variables of a library collection, imported on demand
pub struct LibrarySource {
    pub collection_key: String,
}

#[async_trait]
impl VariableSource for LibrarySource {
    async fn candidates(&self, host: &dyn VariableHost) -> Result<CandidateSet> {
        let advertised = host.library_variables(&self.collection_key).await?;
        let mut set = CandidateSet::default();

        for library_variable in advertised {
            match host.import_variable_by_key(&library_variable.key).await {
                Ok(variable) => set.variables.push(variable),
                Err(error) => {
                    warn!(
                        "Skipping library variable {} ({}): {}",
                        library_variable.name, library_variable.key, error
                    );
                    set.import_failures.push(ImportFailure {
                        key: library_variable.key,
                        name: library_variable.name,
                        reason: error.to_string(),
                    });
                }
            }
        }

        debug!(
            "Library collection {} yields {} candidates ({} failed imports)",
            self.collection_key,
            set.variables.len(),
            set.import_failures.len()
        );
        Ok(set)
    }
}

/// Source matching the collection kind
pub fn source_for(collection: &CollectionRef) -> Box<dyn VariableSource> {
    match collection {
        CollectionRef::Local { id } => Box::new(LocalSource {
            collection_id: id.clone(),
        }),
        CollectionRef::Library { key, .. } => Box::new(LibrarySource {
            collection_key: key.clone(),
        }),
    }
}
