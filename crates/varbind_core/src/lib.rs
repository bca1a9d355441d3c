//! varbind core model
//!
//! This crate provides the shared vocabulary of the varbind workspace:
//!
//! - **Collections**: local and library variable collections, and the
//!   [`CollectionRef`] the user picks to link against
//! - **Variables**: scoped values keyed by mode
//! - **Scene nodes**: owned snapshots of the host's layout nodes
//! - **Host interfaces**: the traits a design-tool host implements so the
//!   linking engine can read nodes, import variables, and bind properties
//!
//! # Example
//!
//! ```rust
//! use varbind_core::{CollectionRef, CollectionToken};
//!
//! let collection = CollectionRef::local("VariableCollectionId:1:2");
//! let token = collection.token().to_token_string();
//! assert_eq!(token, r#"{"type":"local","id":"VariableCollectionId:1:2"}"#);
//!
//! let parsed = CollectionToken::parse(&token).unwrap();
//! assert_eq!(parsed, collection.token());
//! ```

pub mod collection;
pub mod error;
pub mod host;
pub mod ids;
pub mod node;
pub mod property;
pub mod scope;
pub mod ui;
pub mod value;
pub mod variable;

pub use collection::{
    CollectionKind, CollectionRef, CollectionToken, LibraryCollection, LibraryVariable,
    LocalCollection, Mode,
};
pub use error::{HostError, HostResult, TokenError};
pub use host::{DocumentHost, Host, PluginUi, VariableHost};
pub use ids::{CollectionId, ModeId, NodeId, VariableId};
pub use node::{
    AutoLayout, CornerRadii, CornerRadius, CounterAxisAlignContent, LayoutMode, LayoutWrap,
    NodeKind, PrimaryAxisAlign, SceneNode, Size,
};
pub use property::{BindableProperty, PropertyGroup};
pub use scope::VariableScope;
pub use ui::{DropdownOption, NotifyOptions, UiInit, UiOptions};
pub use value::{VariableAlias, VariableType, VariableValue};
pub use variable::Variable;
