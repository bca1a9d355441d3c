//! Saved collection choice
//!
//! The chosen collection lives in document plugin data under
//! [`COLLECTION_KEY`] as a collection token. A bare collection id (as
//! written by older versions) is read as a local collection. A saved value
//! only counts while its collection is still available.

use tracing::{debug, warn};
use varbind_core::{CollectionRef, CollectionToken, DocumentHost};

use crate::options::{CatalogEntry, CollectionCatalog};

pub const COLLECTION_KEY: &str = "collection";

/// Persist a token exactly as the panel sent it
pub fn save_token(document: &dyn DocumentHost, token: &str) {
    document.set_plugin_data(COLLECTION_KEY, token);
}

/// Token of the saved collection, or empty when unset or unavailable
pub fn saved_token(document: &dyn DocumentHost, catalog: &CollectionCatalog) -> String {
    saved_entry(document, catalog)
        .map(|entry| entry.token.clone())
        .unwrap_or_default()
}

/// Saved collection, when it is set, parses, and is still available
pub fn saved_collection(
    document: &dyn DocumentHost,
    catalog: &CollectionCatalog,
) -> Option<CollectionRef> {
    saved_entry(document, catalog).map(|entry| entry.collection.clone())
}

fn saved_entry<'c>(
    document: &dyn DocumentHost,
    catalog: &'c CollectionCatalog,
) -> Option<&'c CatalogEntry> {
    let raw = document.plugin_data(COLLECTION_KEY);
    if raw.is_empty() {
        debug!("No collection saved");
        return None;
    }

    let token = match CollectionToken::parse(&raw) {
        Ok(token) => token,
        Err(error) => {
            warn!("Ignoring saved collection {:?}: {}", raw, error);
            return None;
        }
    };

    let entry = catalog.find(&token);
    if entry.is_none() {
        debug!("Saved collection {} is no longer available", token);
    }
    entry
}
