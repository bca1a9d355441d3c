//! In-memory varbind host
//!
//! [`MemoryHost`] implements every host interface of `varbind_core` on top
//! of plain data: a slot-map node tree, local collections and variables,
//! library collections whose variables are imported on demand, plugin data,
//! and a recorder for toasts and the settings panel.
//!
//! It backs the `varbind` CLI (documents are JSON files, see [`document`])
//! and the integration tests of the engine and app crates.
//!
//! # Example
//!
//! ```rust
//! use varbind_core::{DocumentHost, NodeKind, SceneNode};
//! use varbind_memory::MemoryHost;
//!
//! let host = MemoryHost::new();
//! host.add_root(SceneNode::new("1:1", "Card", NodeKind::Frame));
//! host.set_selection(["1:1"]);
//! assert_eq!(host.selection().len(), 1);
//! ```

pub mod document;
pub mod library;
pub mod tree;
pub mod ui;

use async_trait::async_trait;
use indexmap::IndexMap;
use std::path::Path;
use std::sync::{Mutex, RwLock};
use tracing::{debug, info};
use varbind_core::{
    BindableProperty, CollectionId, DocumentHost, HostError, HostResult, LibraryCollection,
    LibraryVariable, LocalCollection, NodeId, NotifyOptions, PluginUi, SceneNode, UiInit,
    UiOptions, Variable, VariableHost, VariableId,
};

pub use document::{DocumentError, DocumentFile, LibrarySpec, LibraryVariableSpec, NodeSpec};
pub use library::LibraryStore;
pub use tree::{NodeKey, NodeTree};
pub use ui::{Notice, Panel, UiRecorder};

/// Host backed by in-process data
pub struct MemoryHost {
    tree: RwLock<NodeTree>,
    selection: RwLock<Vec<NodeId>>,
    collections: RwLock<Vec<LocalCollection>>,
    variables: RwLock<IndexMap<VariableId, Variable>>,
    library: RwLock<LibraryStore>,
    plugin_data: RwLock<IndexMap<String, String>>,
    ui: Mutex<UiRecorder>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    pub fn new() -> Self {
        Self {
            tree: RwLock::new(NodeTree::new()),
            selection: RwLock::new(Vec::new()),
            collections: RwLock::new(Vec::new()),
            variables: RwLock::new(IndexMap::new()),
            library: RwLock::new(LibraryStore::default()),
            plugin_data: RwLock::new(IndexMap::new()),
            ui: Mutex::new(UiRecorder::default()),
        }
    }

    /// Build a host from a document file.
    ///
    /// Node ids must be unique across the whole tree.
    pub fn from_document(document: DocumentFile) -> Result<Self, DocumentError> {
        let host = Self::new();

        {
            let mut tree = host.tree.write().unwrap();
            for spec in &document.nodes {
                if tree.contains(&spec.id) {
                    return Err(DocumentError::DuplicateNode(spec.id.clone()));
                }
                tree.insert_root(spec.to_scene_node());
                insert_children(&mut tree, spec)?;
            }
        }

        *host.selection.write().unwrap() = document.selection;
        *host.collections.write().unwrap() = document.collections;
        *host.variables.write().unwrap() = document
            .variables
            .into_iter()
            .map(|variable| (variable.id.clone(), variable))
            .collect();
        *host.library.write().unwrap() = LibraryStore::new(document.libraries);
        *host.plugin_data.write().unwrap() = document.plugin_data;
        Ok(host)
    }

    pub fn from_json(input: &str) -> Result<Self, DocumentError> {
        Self::from_document(DocumentFile::from_json(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let document = DocumentFile::from_path(path)?;
        info!(
            "Loaded document {} ({} top-level nodes)",
            path.display(),
            document.nodes.len()
        );
        Self::from_document(document)
    }

    /// Snapshot the current state, bindings and imported variables included
    pub fn to_document(&self) -> DocumentFile {
        let tree = self.tree.read().unwrap();
        let nodes = tree
            .roots()
            .iter()
            .filter_map(|root| export_node(&tree, root))
            .collect();

        DocumentFile {
            selection: self.selection.read().unwrap().clone(),
            plugin_data: self.plugin_data.read().unwrap().clone(),
            collections: self.collections.read().unwrap().clone(),
            variables: self.variables.read().unwrap().values().cloned().collect(),
            libraries: self.library.read().unwrap().libraries().to_vec(),
            nodes,
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        self.to_document().write_to_path(path)?;
        info!("Saved document {}", path.display());
        Ok(())
    }

    // ========== Building ==========

    pub fn add_root(&self, node: SceneNode) {
        self.tree.write().unwrap().insert_root(node);
    }

    /// Insert `node` as the last child of `parent`
    pub fn add_child(&self, parent: impl Into<NodeId>, node: SceneNode) {
        let parent = parent.into();
        let child = node.id.clone();
        let mut tree = self.tree.write().unwrap();
        tree.insert(node);
        tree.add_child(&parent, &child);
    }

    pub fn remove_node(&self, id: impl Into<NodeId>) {
        self.tree.write().unwrap().remove_node(&id.into());
    }

    pub fn set_selection<I, T>(&self, ids: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        *self.selection.write().unwrap() = ids.into_iter().map(Into::into).collect();
    }

    pub fn add_collection(&self, collection: LocalCollection) {
        self.collections.write().unwrap().push(collection);
    }

    pub fn add_variable(&self, variable: Variable) {
        self.variables
            .write()
            .unwrap()
            .insert(variable.id.clone(), variable);
    }

    /// Delete a variable while leaving its id in its collection
    pub fn remove_variable(&self, id: impl Into<VariableId>) {
        self.variables.write().unwrap().shift_remove(&id.into());
    }

    pub fn add_library(&self, library: LibrarySpec) {
        self.library.write().unwrap().add(library);
    }

    /// Make imports of `key` fail (or succeed again)
    pub fn set_import_failing(&self, key: &str, failing: bool) {
        self.library.write().unwrap().set_failing(key, failing);
    }

    // ========== Inspection ==========

    pub fn node_snapshot(&self, id: impl Into<NodeId>) -> Option<SceneNode> {
        self.tree.read().unwrap().get(&id.into()).cloned()
    }

    pub fn import_attempts(&self, key: &str) -> usize {
        self.library.read().unwrap().import_attempts(key)
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.ui.lock().unwrap().notices.clone()
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.ui.lock().unwrap().notices.last().cloned()
    }

    pub fn panel(&self) -> Option<Panel> {
        self.ui.lock().unwrap().panel.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.ui.lock().unwrap().closed
    }
}

fn insert_children(tree: &mut NodeTree, spec: &NodeSpec) -> Result<(), DocumentError> {
    for child in &spec.children {
        if tree.contains(&child.id) {
            return Err(DocumentError::DuplicateNode(child.id.clone()));
        }
        tree.insert(child.to_scene_node());
        tree.add_child(&spec.id, &child.id);
        insert_children(tree, child)?;
    }
    Ok(())
}

fn export_node(tree: &NodeTree, id: &NodeId) -> Option<NodeSpec> {
    let node = tree.get(id)?;
    let children = node
        .children
        .iter()
        .filter_map(|child| export_node(tree, child))
        .collect();
    Some(NodeSpec::from_scene_node(node, children))
}

#[async_trait]
impl VariableHost for MemoryHost {
    async fn local_collections(&self) -> HostResult<Vec<LocalCollection>> {
        Ok(self.collections.read().unwrap().clone())
    }

    async fn local_collection(&self, id: &CollectionId) -> HostResult<Option<LocalCollection>> {
        Ok(self
            .collections
            .read()
            .unwrap()
            .iter()
            .find(|collection| &collection.id == id)
            .cloned())
    }

    async fn variable_by_id(&self, id: &VariableId) -> HostResult<Option<Variable>> {
        Ok(self.variables.read().unwrap().get(id).cloned())
    }

    async fn library_collections(&self) -> HostResult<Vec<LibraryCollection>> {
        Ok(self.library.read().unwrap().collections())
    }

    async fn library_variables(&self, collection_key: &str) -> HostResult<Vec<LibraryVariable>> {
        let library = self.library.read().unwrap();
        let spec = library
            .library(collection_key)
            .ok_or_else(|| HostError::LibraryNotFound(collection_key.to_string()))?;
        Ok(spec
            .variables
            .iter()
            .map(LibraryVariableSpec::advertised)
            .collect())
    }

    async fn import_variable_by_key(&self, key: &str) -> HostResult<Variable> {
        let variable = self.library.write().unwrap().import(key)?;
        debug!("Imported library variable {} as {}", key, variable.id);
        self.variables
            .write()
            .unwrap()
            .insert(variable.id.clone(), variable.clone());
        Ok(variable)
    }
}

impl DocumentHost for MemoryHost {
    fn selection(&self) -> Vec<NodeId> {
        self.selection.read().unwrap().clone()
    }

    fn node(&self, id: &NodeId) -> Option<SceneNode> {
        self.tree.read().unwrap().get(id).cloned()
    }

    fn set_bound_variable(
        &self,
        node: &NodeId,
        property: BindableProperty,
        variable: &Variable,
    ) -> HostResult<()> {
        let mut tree = self.tree.write().unwrap();
        let scene_node = tree
            .get_mut(node)
            .ok_or_else(|| HostError::NodeNotFound(node.clone()))?;

        if scene_node.literal(property).is_none() {
            return Err(HostError::Unbindable {
                node: node.clone(),
                property,
            });
        }

        scene_node
            .bound_variables
            .insert(property, variable.id.clone());
        Ok(())
    }

    fn plugin_data(&self, key: &str) -> String {
        self.plugin_data
            .read()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    fn set_plugin_data(&self, key: &str, value: &str) {
        self.plugin_data
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

impl PluginUi for MemoryHost {
    fn notify(&self, message: &str, options: NotifyOptions) {
        info!("notify: {}", message);
        self.ui.lock().unwrap().notices.push(Notice {
            message: message.to_string(),
            options,
        });
    }

    fn show_ui(&self, options: UiOptions, init: UiInit) {
        debug!(
            "show_ui: {}x{} visible={} ({} collections)",
            options.width,
            options.height,
            options.visible,
            init.collections.len()
        );
        self.ui.lock().unwrap().panel = Some(Panel {
            options,
            init,
            revealed: false,
        });
    }

    fn reveal_ui(&self) {
        if let Some(panel) = self.ui.lock().unwrap().panel.as_mut() {
            panel.revealed = true;
        }
    }

    fn close_plugin(&self) {
        debug!("close_plugin");
        self.ui.lock().unwrap().closed = true;
    }
}
