//! Faults that abort a walk.
//!
//! Each of these means the tree and the grammar disagree (or the tree is
//! deeper than allowed). None of them is recoverable mid-walk: the walker
//! stops at the first one, so a visitor never sees a partial subtree that
//! looks complete.

use thiserror::Error;

use crate::String;
use crate::grammar::Arity;
use crate::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// The grammar has no entry for the node's kind.
    #[error("unexpected node kind `{kind}` at {}", location(.path))]
    UnknownKind { kind: String, path: Path },

    /// A required slot is unset.
    #[error("{kind} is missing required field `{slot}` at {}", location(.path))]
    MissingSlot {
        kind: &'static str,
        slot: &'static str,
        path: Path,
    },

    /// A slot's runtime shape disagrees with the grammar.
    #[error("{kind}.{slot} holds a {found} where a {expected} is declared, at {}", location(.path))]
    MalformedSlot {
        kind: &'static str,
        slot: &'static str,
        expected: Arity,
        found: &'static str,
        path: Path,
    },

    #[error("tree is deeper than the maximum depth of {max_depth}, at {}", location(.path))]
    DepthExceeded { max_depth: usize, path: Path },
}

impl WalkError {
    /// Path of the node where the walk stopped.
    pub fn path(&self) -> &Path {
        match self {
            WalkError::UnknownKind { path, .. }
            | WalkError::MissingSlot { path, .. }
            | WalkError::MalformedSlot { path, .. }
            | WalkError::DepthExceeded { path, .. } => path,
        }
    }
}

fn location(path: &Path) -> String {
    if path.is_empty() {
        "the root".into()
    } else {
        format!("`{}`", path)
    }
}
