//! Configuration options for a walk.

/// Limits applied while walking a tree.
///
/// # Example
///
/// ```
/// use ast_walker_core::walker::WalkOptions;
///
/// let options = WalkOptions { max_depth: 256 };
/// assert_eq!(WalkOptions::default().max_depth, 4096);
/// # let _ = options;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOptions {
    /// Deepest node the walker will enter, counting the root as depth 0.
    ///
    /// The walk recurses once per level and grows its stack on demand, so
    /// this bounds the memory a walk holds rather than the thread's stack.
    ///
    /// Default: 4096
    pub max_depth: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self { max_depth: 4096 }
    }
}
