//! Variable scopes
//!
//! A scope declares which property categories a variable may be bound to.

use serde::{Deserialize, Serialize};

use crate::property::PropertyGroup;

/// Scope tag declared on a variable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableScope {
    AllScopes,
    TextContent,
    CornerRadius,
    WidthHeight,
    Gap,
    AllFills,
    FrameFill,
    ShapeFill,
    TextFill,
    StrokeColor,
    StrokeFloat,
    EffectFloat,
    EffectColor,
    Opacity,
    FontFamily,
    FontStyle,
    FontWeight,
    FontSize,
    LineHeight,
    LetterSpacing,
    ParagraphSpacing,
    ParagraphIndent,
    /// Any scope this build does not know about
    #[serde(other)]
    Other,
}

impl VariableScope {
    /// Whether a variable carrying this scope may be bound to `group`
    pub fn admits(self, group: PropertyGroup) -> bool {
        match self {
            VariableScope::AllScopes => true,
            VariableScope::Gap => group == PropertyGroup::Gap,
            VariableScope::WidthHeight => group == PropertyGroup::Size,
            VariableScope::CornerRadius => group == PropertyGroup::CornerRadius,
            _ => false,
        }
    }
}

/// Whether any scope in `scopes` admits `group`
pub fn scopes_admit(scopes: &[VariableScope], group: PropertyGroup) -> bool {
    scopes.iter().any(|scope| scope.admits(group))
}
