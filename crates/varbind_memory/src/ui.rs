//! Recorded plugin UI activity

use serde::Serialize;
use varbind_core::{NotifyOptions, UiInit, UiOptions};

/// A toast shown to the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    pub options: NotifyOptions,
}

/// The settings panel as last shown
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub options: UiOptions,
    pub init: UiInit,
    pub revealed: bool,
}

impl Panel {
    pub fn is_visible(&self) -> bool {
        self.options.visible || self.revealed
    }
}

#[derive(Debug, Default)]
pub struct UiRecorder {
    pub notices: Vec<Notice>,
    pub panel: Option<Panel>,
    pub closed: bool,
}
