//! Payloads exchanged with the host's plugin UI

use serde::{Deserialize, Serialize};

/// Toast options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyOptions {
    pub timeout_ms: u64,
    pub error: bool,
}

impl NotifyOptions {
    pub fn info(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            error: false,
        }
    }

    pub fn error(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            error: true,
        }
    }
}

/// Plugin window options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiOptions {
    pub width: u32,
    pub height: u32,
    pub visible: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            width: 240,
            height: 140,
            visible: true,
        }
    }
}

/// One entry of the collection dropdown
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    /// Collection token string
    pub value: String,
    pub text: String,
}

/// Data handed to the UI when the panel opens
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiInit {
    pub collections: Vec<DropdownOption>,
    /// Saved token, or empty when unset or no longer available
    pub selected_collection: String,
}
