//! Host interfaces
//!
//! The design tool owns the document, the variable store and the plugin UI.
//! The engine only talks to it through these traits:
//!
//! - [`VariableHost`]: asynchronous variable and collection access, including
//!   importing library variables into the session
//! - [`DocumentHost`]: synchronous node reads, property binding, selection
//!   and document-scoped plugin data
//! - [`PluginUi`]: toasts and the settings panel

use async_trait::async_trait;

use crate::collection::{LibraryCollection, LibraryVariable, LocalCollection};
use crate::error::HostResult;
use crate::ids::{CollectionId, NodeId, VariableId};
use crate::node::SceneNode;
use crate::property::BindableProperty;
use crate::ui::{NotifyOptions, UiInit, UiOptions};
use crate::variable::Variable;

#[async_trait]
pub trait VariableHost: Send + Sync {
    async fn local_collections(&self) -> HostResult<Vec<LocalCollection>>;

    async fn local_collection(&self, id: &CollectionId) -> HostResult<Option<LocalCollection>>;

    /// Dereference a variable id. `Ok(None)` when the id is stale.
    async fn variable_by_id(&self, id: &VariableId) -> HostResult<Option<Variable>>;

    async fn library_collections(&self) -> HostResult<Vec<LibraryCollection>>;

    /// Variables advertised by a library collection, in library order
    async fn library_variables(&self, collection_key: &str) -> HostResult<Vec<LibraryVariable>>;

    /// Import a library variable into the session.
    ///
    /// Importing an already imported key returns the existing variable.
    async fn import_variable_by_key(&self, key: &str) -> HostResult<Variable>;
}

pub trait DocumentHost: Send + Sync {
    /// Top-level selected nodes, in selection order
    fn selection(&self) -> Vec<NodeId>;

    fn node(&self, id: &NodeId) -> Option<SceneNode>;

    /// Replace the property's literal with a reference to `variable`
    fn set_bound_variable(
        &self,
        node: &NodeId,
        property: BindableProperty,
        variable: &Variable,
    ) -> HostResult<()>;

    /// Document-scoped plugin data; empty string when unset
    fn plugin_data(&self, key: &str) -> String;

    fn set_plugin_data(&self, key: &str, value: &str);
}

pub trait PluginUi: Send + Sync {
    fn notify(&self, message: &str, options: NotifyOptions);

    fn show_ui(&self, options: UiOptions, init: UiInit);

    /// Make a hidden panel visible
    fn reveal_ui(&self);

    fn close_plugin(&self);
}

/// Everything a plugin session needs from the host
pub trait Host: VariableHost + DocumentHost + PluginUi {}

impl<T> Host for T where T: VariableHost + DocumentHost + PluginUi {}
