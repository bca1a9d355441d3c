//! JSON document format
//!
//! A document file captures everything the in-memory host serves: the node
//! tree (nested), the selection, local collections and variables, library
//! collections with their publishable variables, and plugin data.
//!
//! ```json
//! {
//!   "selection": ["1:2"],
//!   "collections": [{ "id": "VariableCollectionId:1:0", "name": "Spacing",
//!                     "defaultModeId": "1:0", "variableIds": ["VariableID:1:1"] }],
//!   "variables": [{ "id": "VariableID:1:1", "name": "space/2",
//!                   "variableCollectionId": "VariableCollectionId:1:0",
//!                   "resolvedType": "FLOAT", "scopes": ["GAP"],
//!                   "valuesByMode": { "1:0": 8 } }],
//!   "nodes": [{ "id": "1:2", "name": "Card", "type": "FRAME",
//!               "layout": { "layoutMode": "VERTICAL", "paddingLeft": 8 } }]
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use varbind_core::{
    AutoLayout, BindableProperty, CornerRadius, LibraryCollection, LibraryVariable,
    LocalCollection, ModeId, NodeId, NodeKind, SceneNode, Size, Variable, VariableId,
    VariableScope, VariableType, VariableValue,
};

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Node {0} appears more than once in the document")]
    DuplicateNode(NodeId),
}

/// Top-level document file
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFile {
    #[serde(default)]
    pub selection: Vec<NodeId>,
    #[serde(default)]
    pub plugin_data: IndexMap<String, String>,
    #[serde(default)]
    pub collections: Vec<LocalCollection>,
    #[serde(default)]
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub libraries: Vec<LibrarySpec>,
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
}

impl DocumentFile {
    pub fn from_json(input: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let raw = fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to_path(&self, path: &Path) -> Result<(), DocumentError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// A library collection and the variables it publishes
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySpec {
    #[serde(flatten)]
    pub collection: LibraryCollection,
    #[serde(default)]
    pub variables: Vec<LibraryVariableSpec>,
}

/// A published library variable, with the values its import yields
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryVariableSpec {
    pub key: String,
    pub name: String,
    pub resolved_type: VariableType,
    #[serde(default)]
    pub scopes: Vec<VariableScope>,
    #[serde(default)]
    pub values_by_mode: IndexMap<ModeId, VariableValue>,
    /// Simulate an import failure for this key
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fail_import: bool,
}

impl LibraryVariableSpec {
    pub fn advertised(&self) -> LibraryVariable {
        LibraryVariable {
            key: self.key.clone(),
            name: self.name.clone(),
            resolved_type: self.resolved_type,
        }
    }
}

/// A node with its children nested
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSpec {
    pub id: NodeId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<AutoLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<CornerRadius>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub resolved_modes: IndexMap<String, ModeId>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub inferred_variables: IndexMap<BindableProperty, Vec<VariableId>>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub bound_variables: IndexMap<BindableProperty, VariableId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    /// The node itself, without children links
    pub fn to_scene_node(&self) -> SceneNode {
        SceneNode {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind,
            layout: self.layout.clone(),
            size: self.size,
            corner_radius: self.corner_radius,
            resolved_modes: self.resolved_modes.clone(),
            inferred_variables: self.inferred_variables.clone(),
            bound_variables: self.bound_variables.clone(),
            children: Vec::new(),
        }
    }

    pub fn from_scene_node(node: &SceneNode, children: Vec<NodeSpec>) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
            kind: node.kind,
            layout: node.layout.clone(),
            size: node.size,
            corner_radius: node.corner_radius,
            resolved_modes: node.resolved_modes.clone(),
            inferred_variables: node.inferred_variables.clone(),
            bound_variables: node.bound_variables.clone(),
            children,
        }
    }
}
