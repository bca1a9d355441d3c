//! varbind linking engine
//!
//! Walks a node subtree and rewrites layout literals (gaps, paddings, sizes,
//! corner radii) into references to variables of one collection, matching
//! purely on value equality under the node's mode.
//!
//! # Pipeline
//!
//! For every visited node:
//!
//! 1. [`source`] lists the collection's candidate variables (once per run;
//!    library variables are imported, failures are skipped)
//! 2. [`mode`] picks the mode the node resolves for the collection
//! 3. [`matcher`] proposes the node properties the variable's scopes admit
//! 4. [`resolve`] supplies the variable's value under that mode
//! 5. [`binder`] rewrites every exactly-equal property, first match wins
//!
//! [`walker`] drives the recursion, skipping component instances below the
//! selected roots, and folds everything into a [`LinkReport`].
//!
//! # Example
//!
//! ```rust,ignore
//! use varbind_engine::{link_nodes, LinkOptions};
//!
//! let report = link_nodes(&host, &host, &host.selection(), &collection, LinkOptions::default())
//!     .await?;
//! if report.any_bound() {
//!     println!("bound {} properties", report.bindings.len());
//! }
//! ```

pub mod binder;
pub mod error;
pub mod inferred;
pub mod matcher;
pub mod mode;
pub mod report;
pub mod resolve;
pub mod source;
pub mod walker;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use binder::Binder;
pub use error::{EngineError, Result};
pub use matcher::{propose_matches, MatchTarget, Proposal};
pub use mode::ModeSelector;
pub use report::{BindingRecord, ImportFailure, LinkReport};
pub use resolve::resolve_value;
pub use source::{source_for, CandidateSet, LibrarySource, LocalSource, VariableSource};
pub use walker::{link_nodes, SubtreeWalker};

/// How candidate variables are found for a node
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStrategy {
    /// Scope-gated value matching against every collection variable
    #[default]
    Value,
    /// Trust the host's per-property variable inference
    Inferred,
}

impl fmt::Display for LinkStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkStrategy::Value => f.write_str("value"),
            LinkStrategy::Inferred => f.write_str("inferred"),
        }
    }
}

impl FromStr for LinkStrategy {
    type Err = EngineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "value" => Ok(LinkStrategy::Value),
            "inferred" => Ok(LinkStrategy::Inferred),
            other => Err(EngineError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Options for one link run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkOptions {
    pub strategy: LinkStrategy,
}
