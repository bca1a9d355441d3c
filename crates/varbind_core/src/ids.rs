//! Host identifiers
//!
//! The host hands out opaque string identifiers (`"1:23"`,
//! `"VariableID:4:56"`, ...). They are wrapped in newtypes so a node id can
//! never be passed where a variable id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of a scene node in the host document
    NodeId
);

string_id!(
    /// Identifier of a variable resolvable in the current session
    VariableId
);

string_id!(
    /// Identifier of a local variable collection
    CollectionId
);

string_id!(
    /// Identifier of one mode (axis value) of a collection
    ModeId
);
