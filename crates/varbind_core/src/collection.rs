//! Variable collections and the persisted collection token

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TokenError;
use crate::ids::{CollectionId, ModeId, VariableId};
use crate::value::VariableType;

/// One axis value of a collection (e.g. "Light", "Dark", "Compact")
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    pub mode_id: ModeId,
    pub name: String,
}

/// Collection owned by the current document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalCollection {
    pub id: CollectionId,
    pub name: String,
    pub default_mode_id: ModeId,
    #[serde(default)]
    pub modes: Vec<Mode>,
    #[serde(default)]
    pub variable_ids: Vec<VariableId>,
}

/// Collection published by a shared library
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryCollection {
    pub key: String,
    pub name: String,
    pub library_name: String,
}

/// Variable advertised by a library collection (not yet imported)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryVariable {
    pub key: String,
    pub name: String,
    pub resolved_type: VariableType,
}

/// Collection kind carried in the persisted token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Local,
    Library,
}

/// The collection a link run targets
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CollectionRef {
    Local { id: CollectionId },
    Library { key: String, library_name: String },
}

impl CollectionRef {
    pub fn local(id: impl Into<CollectionId>) -> Self {
        CollectionRef::Local { id: id.into() }
    }

    pub fn library(key: impl Into<String>, library_name: impl Into<String>) -> Self {
        CollectionRef::Library {
            key: key.into(),
            library_name: library_name.into(),
        }
    }

    pub fn kind(&self) -> CollectionKind {
        match self {
            CollectionRef::Local { .. } => CollectionKind::Local,
            CollectionRef::Library { .. } => CollectionKind::Library,
        }
    }

    /// Collection id for local collections, collection key for libraries
    pub fn identifier(&self) -> &str {
        match self {
            CollectionRef::Local { id } => id.as_str(),
            CollectionRef::Library { key, .. } => key,
        }
    }

    /// Whether a host collection id (as found on variables and in node mode
    /// tables) designates this collection.
    ///
    /// Library collections show up under a composite id that embeds the
    /// library key, so they are matched by containment rather than equality.
    pub fn matches_collection_id(&self, collection_id: &str) -> bool {
        match self {
            CollectionRef::Local { id } => collection_id == id.as_str(),
            CollectionRef::Library { key, .. } => collection_id.contains(key.as_str()),
        }
    }

    pub fn token(&self) -> CollectionToken {
        CollectionToken {
            kind: self.kind(),
            id: self.identifier().to_string(),
        }
    }
}

impl fmt::Display for CollectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionRef::Local { id } => write!(f, "local collection {id}"),
            CollectionRef::Library { key, library_name } => {
                write!(f, "library collection {key} ({library_name})")
            }
        }
    }
}

/// Serialized form of a [`CollectionRef`], as stored in plugin data and
/// used as dropdown option values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionToken {
    #[serde(rename = "type")]
    pub kind: CollectionKind,
    pub id: String,
}

impl CollectionToken {
    /// Compact JSON with all whitespace removed
    pub fn to_token_string(&self) -> String {
        // Serializing a two-field struct of strings cannot fail.
        let json = serde_json::to_string(self).unwrap_or_default();
        json.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Parse a stored token.
    ///
    /// Anything that does not look like a JSON object is a bare local
    /// collection id written by older versions.
    pub fn parse(raw: &str) -> Result<Self, TokenError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TokenError::Empty);
        }
        if !trimmed.starts_with('{') {
            return Ok(CollectionToken {
                kind: CollectionKind::Local,
                id: trimmed.to_string(),
            });
        }
        let token: CollectionToken = serde_json::from_str(trimmed)?;
        if token.id.is_empty() {
            return Err(TokenError::MissingId);
        }
        Ok(token)
    }
}

impl fmt::Display for CollectionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_token_string())
    }
}
