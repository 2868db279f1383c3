//! Path-tracking traversal of syntax trees.
//!
//! - [`path`]: immutable, append-only addresses such as
//!   `Decls[0].(*ast.GenDecl).Specs[0]`.
//! - [`visitor`]: the node access trait and the enter/exit visitor contract.
//! - [`grammar`]: per-kind child layouts, including the Go table.
//! - [`walker`]: the pre-order walk that computes a path for every node.
//! - [`node`]: a generic tree node that loads from a JSON dump.
//! - [`query`]: exact-path, regex and kind searches on top of the walk.

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

pub mod grammar;
pub mod node;
pub mod path;
pub mod query;
pub mod visitor;
pub mod walker;

pub use grammar::Grammar;
pub use node::Node;
pub use path::{Path, Segment};
pub use visitor::{Decision, SyntaxNode, Visitor};
pub use walker::{WalkError, WalkOptions, Walker};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_unknown_kind() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
