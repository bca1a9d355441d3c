//! Variable values

use serde::{Deserialize, Serialize};

use crate::ids::VariableId;

/// Resolved type of a variable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableType {
    Boolean,
    Float,
    String,
    Color,
}

/// Reference from one variable's mode value to another variable
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableAlias {
    #[serde(rename = "type")]
    pub kind: AliasKind,
    pub id: VariableId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AliasKind {
    VariableAlias,
}

/// Literal value a variable holds for one mode
///
/// Equality is strict: `Float(8.0)` only equals `Float(8.0)`, and an alias
/// never equals a literal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Boolean(bool),
    Float(f64),
    String(String),
    Alias(VariableAlias),
}

impl VariableValue {
    pub fn as_float(&self) -> Option<f64> {
        match self {
            VariableValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_alias(&self) -> bool {
        matches!(self, VariableValue::Alias(_))
    }

    /// Exact comparison against a node's numeric literal
    pub fn equals_literal(&self, literal: f64) -> bool {
        matches!(self, VariableValue::Float(value) if *value == literal)
    }
}

impl From<f64> for VariableValue {
    fn from(value: f64) -> Self {
        VariableValue::Float(value)
    }
}

impl From<bool> for VariableValue {
    fn from(value: bool) -> Self {
        VariableValue::Boolean(value)
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        VariableValue::String(value.to_string())
    }
}
