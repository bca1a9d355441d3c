//! Collection catalog for the picker
//!
//! Local collections come first, labeled by name, followed by library
//! collections labeled `"name (library)"`. Option values are collection
//! tokens.

use tracing::debug;
use varbind_core::{CollectionRef, CollectionToken, DropdownOption, VariableHost};

use crate::error::Result;

/// A collection the user can pick
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub collection: CollectionRef,
    pub label: String,
    pub token: String,
}

/// Every collection available to the document, in picker order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionCatalog {
    entries: Vec<CatalogEntry>,
}

impl CollectionCatalog {
    pub async fn load(host: &dyn VariableHost) -> Result<Self> {
        let mut entries = Vec::new();

        for collection in host.local_collections().await? {
            let reference = CollectionRef::Local { id: collection.id };
            entries.push(CatalogEntry {
                token: reference.token().to_token_string(),
                label: collection.name,
                collection: reference,
            });
        }

        for collection in host.library_collections().await? {
            let label = format!("{} ({})", collection.name, collection.library_name);
            let reference = CollectionRef::Library {
                key: collection.key,
                library_name: collection.library_name,
            };
            entries.push(CatalogEntry {
                token: reference.token().to_token_string(),
                label,
                collection: reference,
            });
        }

        debug!("Collection catalog has {} entries", entries.len());
        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn options(&self) -> Vec<DropdownOption> {
        self.entries
            .iter()
            .map(|entry| DropdownOption {
                value: entry.token.clone(),
                text: entry.label.clone(),
            })
            .collect()
    }

    /// Catalog entry for a parsed token
    pub fn find(&self, token: &CollectionToken) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|entry| entry.collection.token() == *token)
    }
}

/// Dropdown options for every available collection
pub async fn collection_options(host: &dyn VariableHost) -> Result<Vec<DropdownOption>> {
    Ok(CollectionCatalog::load(host).await?.options())
}
