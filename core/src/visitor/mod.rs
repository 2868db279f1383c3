//! Node access and the visitor contract used by the walker.
//!
//! The walker never sees a concrete tree type. Anything that can report its
//! kind tag and hand out its children by slot name can be walked, whether it
//! is the JSON-loaded [`Node`](crate::node::Node) or a front end's own AST.

use crate::Vec;
use crate::path::Path;

/// Read-only view of one syntax tree node.
pub trait SyntaxNode: Sized {
    /// The kind tag used to look the node up in a [`Grammar`](crate::grammar::Grammar),
    /// e.g. `"IfStmt"`.
    fn kind(&self) -> &str;

    /// The current contents of the child slot `name`.
    ///
    /// Slots the node does not have, or that are unset, report
    /// [`SlotValue::Absent`].
    fn slot(&self, name: &str) -> SlotValue<'_, Self>;
}

/// Runtime contents of a child slot.
#[derive(Debug, PartialEq)]
pub enum SlotValue<'a, N> {
    Absent,
    Node(&'a N),
    List(Vec<&'a N>),
    /// Keyed entries in any order; the walker visits them sorted by key.
    Keyed(Vec<(&'a str, &'a N)>),
    /// A leaf value (a name, a literal, a token) where a child was expected.
    Scalar,
}

impl<'a, N> SlotValue<'a, N> {
    /// Short description of the runtime shape, used in diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            SlotValue::Absent => "absent",
            SlotValue::Node(_) => "node",
            SlotValue::List(_) => "list",
            SlotValue::Keyed(_) => "keyed map",
            SlotValue::Scalar => "scalar value",
        }
    }
}

/// What the walker should do after [`Visitor::enter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Visit the node's children, then call [`Visitor::exit`].
    Descend,
    /// Do not visit any child. [`Visitor::exit`] is still called.
    Skip,
}

/// Caller logic invoked at every node of a tree borrowed for `'t`.
///
/// Every `enter` is matched by exactly one `exit`, delivered after all of the
/// node's visited children have exited.
pub trait Visitor<'t, N> {
    fn enter(&mut self, node: &'t N, path: &Path) -> Decision;

    /// The subtree entered last (and not yet exited) is finished.
    fn exit(&mut self) {}
}

impl<'t, N, V: Visitor<'t, N> + ?Sized> Visitor<'t, N> for &mut V {
    fn enter(&mut self, node: &'t N, path: &Path) -> Decision {
        (**self).enter(node, path)
    }

    fn exit(&mut self) {
        (**self).exit()
    }
}

/// Adapts a `FnMut(&N, &Path) -> bool` closure into a [`Visitor`].
///
/// Returning `true` descends, `false` skips the subtree.
pub struct Inspector<F>(pub F);

impl<'t, N, F> Visitor<'t, N> for Inspector<F>
where
    F: FnMut(&'t N, &Path) -> bool,
{
    fn enter(&mut self, node: &'t N, path: &Path) -> Decision {
        if (self.0)(node, path) {
            Decision::Descend
        } else {
            Decision::Skip
        }
    }
}
