//! Plugin session controller
//!
//! A [`Plugin`] lives for one plugin session: it runs the entry command and
//! then handles messages from the settings panel until the host closes it.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use varbind_core::{CollectionRef, Host, NodeId, NotifyOptions, UiInit, UiOptions};
use varbind_engine::{link_nodes, LinkOptions, LinkReport, LinkStrategy};

use crate::error::Result;
use crate::messages::{Command, UiMessage};
use crate::options::CollectionCatalog;
use crate::saved::{save_token, saved_collection, saved_token};

pub const MSG_LINKED: &str = "Linked all selected layers to variables.";
pub const MSG_NOTHING_LINKED: &str = "No variables linked in selected layers.";
pub const MSG_SELECT_NODE: &str = "Please select at least one node.";
pub const MSG_CREATE_COLLECTION: &str = "Please create a variable collection first.";
pub const MSG_CREATE_OR_ADD_COLLECTION: &str = "Please create or add a variable collection first.";

/// Plugin behavior settings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    pub strategy: LinkStrategy,
    /// How long toasts stay up
    pub notify_timeout_ms: u64,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            strategy: LinkStrategy::Value,
            notify_timeout_ms: 2000,
        }
    }
}

/// Why a command stopped before doing anything
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserInputError {
    NoSelection,
    NoCollections,
}

/// What a command or message did
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    /// Stopped on a user input problem; the plugin was closed
    Aborted(UserInputError),
    /// A link run completed
    Linked(LinkReport),
    /// The collection picker was opened
    PickerShown,
    /// A message was handled without linking
    Handled,
}

impl CommandOutcome {
    pub fn report(&self) -> Option<&LinkReport> {
        match self {
            CommandOutcome::Linked(report) => Some(report),
            _ => None,
        }
    }
}

/// One plugin session against a host
pub struct Plugin<'h, H: Host> {
    host: &'h H,
    config: PluginConfig,
    revealed: bool,
}

impl<'h, H: Host> Plugin<'h, H> {
    pub fn new(host: &'h H, config: PluginConfig) -> Self {
        Self {
            host,
            config,
            revealed: false,
        }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Run an entry command
    pub async fn run(&mut self, command: Command) -> Result<CommandOutcome> {
        info!("Command: {}", command);
        match command {
            Command::Link => self.run_link().await,
            Command::Settings => self.run_settings().await,
        }
    }

    /// Handle a message from the settings panel
    pub async fn handle(&mut self, message: UiMessage) -> Result<CommandOutcome> {
        info!("Message: {}", message.name());
        match message {
            UiMessage::SetCollection { collection } => {
                info!("Set collection to: {}", collection);
                save_token(self.host, &collection);
                Ok(CommandOutcome::Handled)
            }
            UiMessage::LinkSpacing => self.link_spacing().await,
            UiMessage::ShowUi => {
                if !self.revealed {
                    self.revealed = true;
                    self.host.reveal_ui();
                }
                Ok(CommandOutcome::Handled)
            }
        }
    }

    async fn run_link(&mut self) -> Result<CommandOutcome> {
        let selection = self.host.selection();
        if selection.is_empty() {
            return Ok(self.abort(UserInputError::NoSelection, MSG_SELECT_NODE));
        }

        let catalog = CollectionCatalog::load(self.host).await?;
        if catalog.is_empty() {
            return Ok(self.abort(UserInputError::NoCollections, MSG_CREATE_COLLECTION));
        }

        match saved_collection(self.host, &catalog) {
            Some(collection) => {
                let report = self.link(&selection, &collection).await;
                self.host.close_plugin();
                Ok(CommandOutcome::Linked(report))
            }
            None => {
                // The panel reveals itself with SHOW_UI once it has rendered.
                self.show_picker(&catalog, false);
                Ok(CommandOutcome::PickerShown)
            }
        }
    }

    async fn run_settings(&mut self) -> Result<CommandOutcome> {
        let catalog = CollectionCatalog::load(self.host).await?;
        if catalog.is_empty() {
            return Ok(self.abort(UserInputError::NoCollections, MSG_CREATE_OR_ADD_COLLECTION));
        }
        self.show_picker(&catalog, true);
        Ok(CommandOutcome::PickerShown)
    }

    async fn link_spacing(&mut self) -> Result<CommandOutcome> {
        let selection = self.host.selection();
        if selection.is_empty() {
            self.host
                .notify(MSG_SELECT_NODE, NotifyOptions::error(self.config.notify_timeout_ms));
            return Ok(CommandOutcome::Handled);
        }

        let catalog = CollectionCatalog::load(self.host).await?;
        let Some(collection) = saved_collection(self.host, &catalog) else {
            warn!("No valid collection saved, nothing to link against");
            self.notify_outcome(false);
            return Ok(CommandOutcome::Handled);
        };

        let report = self.link(&selection, &collection).await;
        Ok(CommandOutcome::Linked(report))
    }

    /// Link the selection and tell the user how it went
    async fn link(&self, selection: &[NodeId], collection: &CollectionRef) -> LinkReport {
        let options = LinkOptions {
            strategy: self.config.strategy,
        };
        let report = match link_nodes(self.host, self.host, selection, collection, options).await
        {
            Ok(report) => report,
            Err(error) => {
                warn!("Linking against {} failed: {}", collection, error);
                LinkReport::default()
            }
        };
        self.notify_outcome(report.any_bound());
        report
    }

    fn notify_outcome(&self, any_bound: bool) {
        let timeout = self.config.notify_timeout_ms;
        if any_bound {
            self.host.notify(MSG_LINKED, NotifyOptions::info(timeout));
        } else {
            self.host
                .notify(MSG_NOTHING_LINKED, NotifyOptions::error(timeout));
        }
    }

    fn show_picker(&self, catalog: &CollectionCatalog, visible: bool) {
        let init = UiInit {
            collections: catalog.options(),
            selected_collection: saved_token(self.host, catalog),
        };
        self.host.show_ui(
            UiOptions {
                visible,
                ..UiOptions::default()
            },
            init,
        );
    }

    fn abort(&self, reason: UserInputError, message: &str) -> CommandOutcome {
        warn!("Aborting: {:?}", reason);
        self.host
            .notify(message, NotifyOptions::error(self.config.notify_timeout_ms));
        self.host.close_plugin();
        CommandOutcome::Aborted(reason)
    }
}
