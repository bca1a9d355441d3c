//! Plugin commands and UI messages
//!
//! The settings panel talks to the plugin through three messages:
//!
//! - `SET_COLLECTION`: persist the collection picked in the dropdown
//! - `LINK_SPACING`: run the link over the current selection
//! - `SHOW_UI`: reveal a panel that was opened hidden (handled once)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Message sent from the panel to the plugin
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UiMessage {
    SetCollection { collection: String },
    LinkSpacing,
    ShowUi,
}

impl UiMessage {
    pub fn from_json(input: &str) -> Result<Self, AppError> {
        serde_json::from_str(input).map_err(AppError::InvalidMessage)
    }

    pub fn name(&self) -> &'static str {
        match self {
            UiMessage::SetCollection { .. } => "SET_COLLECTION",
            UiMessage::LinkSpacing => "LINK_SPACING",
            UiMessage::ShowUi => "SHOW_UI",
        }
    }
}

/// Plugin entry command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Link right away when a collection is saved, otherwise open the picker
    Link,
    /// Always open the picker
    Settings,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Link => f.write_str("link"),
            Command::Settings => f.write_str("settings"),
        }
    }
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "link" => Ok(Command::Link),
            "settings" => Ok(Command::Settings),
            other => Err(AppError::UnknownCommand(other.to_string())),
        }
    }
}
