//! Value resolution

use varbind_core::{ModeId, Variable, VariableValue};

/// Value of `variable` under `mode`.
///
/// When no mode was selected, or the selected mode has no value on this
/// variable, the variable's first mode is used instead. Returns `None` only
/// for a variable without any modes.
pub fn resolve_value<'v>(
    variable: &'v Variable,
    mode: Option<&ModeId>,
) -> Option<(&'v ModeId, &'v VariableValue)> {
    if let Some(mode) = mode {
        if let Some(entry) = variable.values_by_mode.get_key_value(mode) {
            return Some(entry);
        }
    }
    variable.values_by_mode.first()
}
