//! Variables

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ids::{ModeId, VariableId};
use crate::property::PropertyGroup;
use crate::scope::{scopes_admit, VariableScope};
use crate::value::{VariableType, VariableValue};

/// A variable resolvable in the current session.
///
/// Library variables become `Variable`s once imported; the imported shadow
/// keeps the library's value mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: VariableId,
    pub name: String,
    #[serde(default)]
    pub key: String,
    pub variable_collection_id: String,
    pub resolved_type: VariableType,
    #[serde(default)]
    pub scopes: Vec<VariableScope>,
    /// Values in the host's mode order
    #[serde(default)]
    pub values_by_mode: IndexMap<ModeId, VariableValue>,
    #[serde(default)]
    pub remote: bool,
}

impl Variable {
    pub fn value_for_mode(&self, mode: &ModeId) -> Option<&VariableValue> {
        self.values_by_mode.get(mode)
    }

    /// First mode in the variable's own value mapping
    pub fn first_mode(&self) -> Option<&ModeId> {
        self.values_by_mode.keys().next()
    }

    pub fn admits(&self, group: PropertyGroup) -> bool {
        scopes_admit(&self.scopes, group)
    }

    /// Whether any mode holds exactly `literal`
    pub fn has_value(&self, literal: f64) -> bool {
        self.values_by_mode
            .values()
            .any(|value| value.equals_literal(literal))
    }
}
