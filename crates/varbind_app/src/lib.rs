//! varbind plugin layer
//!
//! Glue between the host's plugin surface and the linking engine:
//!
//! - [`Plugin`]: runs the `link` and `settings` commands and handles panel
//!   messages
//! - [`CollectionCatalog`]: local and library collections offered in the
//!   picker
//! - [`saved`]: the chosen collection, persisted in document plugin data
//!
//! # Example
//!
//! ```rust,ignore
//! use varbind_app::{Command, Plugin, PluginConfig, UiMessage};
//!
//! let mut plugin = Plugin::new(&host, PluginConfig::default());
//! plugin.run(Command::Settings).await?;
//! plugin.handle(UiMessage::SetCollection { collection: token }).await?;
//! plugin.handle(UiMessage::LinkSpacing).await?;
//! ```

pub mod controller;
pub mod error;
pub mod messages;
pub mod options;
pub mod saved;

pub use controller::{CommandOutcome, Plugin, PluginConfig, UserInputError};
pub use error::{AppError, Result};
pub use messages::{Command, UiMessage};
pub use options::{collection_options, CatalogEntry, CollectionCatalog};
