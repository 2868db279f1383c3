//! Pre-order, path-tracking traversal of a syntax tree.
//!
//! The walker reads each node's child layout from a [`Grammar`] and visits
//! every present child in declaration order, computing the child's [`Path`]
//! before descending:
//!
//! - singular slots append the field name (`Body`),
//! - list slots append the field name and index (`List[2]`),
//! - keyed slots append the field name and key (`Files[main.go]`),
//! - a node sitting in an interface-typed slot adds the segment
//!   `(type_name)` in front of its own children's segments.
//!
//! The visitor sees `enter(node, path)` before a node's children and `exit()`
//! after them. If `enter` returns [`Decision::Skip`] the children are not
//! visited and `exit()` follows immediately.
//!
//! ```
//! use ast_walker_core::{node::Node, walker};
//!
//! let file = Node::new("File")
//!     .with_node("Name", Node::ident("main"))
//!     .with_list("Decls", vec![Node::new("BadDecl")]);
//!
//! let mut paths = Vec::new();
//! walker::inspect(&file, |_, path| {
//!     paths.push(path.to_string());
//!     true
//! })
//! .unwrap();
//!
//! assert_eq!(paths, ["", "Name", "Decls[0]"]);
//! ```

mod error;
mod options;


pub use error::WalkError;
pub use options::WalkOptions;

use tracing::{debug, trace, warn};

use crate::grammar::{self, Arity, Grammar, KindDescriptor, SlotDescriptor};
use crate::path::Path;
use crate::visitor::{Decision, Inspector, SlotValue, SyntaxNode, Visitor};

// Stack kept free before each descent, and the size of each new segment
// allocated once it runs out.
const RED_ZONE: usize = 64 * 1024;
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Walks trees described by one grammar.
///
/// A walker holds no per-walk state; the same walker can run any number of
/// independent walks.
#[derive(Debug, Clone)]
pub struct Walker<'g> {
    grammar: &'g Grammar,
    options: WalkOptions,
}

impl<'g> Walker<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self::with_options(grammar, WalkOptions::default())
    }

    pub fn with_options(grammar: &'g Grammar, options: WalkOptions) -> Self {
        Self { grammar, options }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn options(&self) -> &WalkOptions {
        &self.options
    }

    /// Walk `root` with the empty path.
    ///
    /// The root is never annotated with its kind, since no slot holds it.
    pub fn walk<'t, N, V>(&self, visitor: &mut V, root: &'t N) -> Result<(), WalkError>
    where
        N: SyntaxNode,
        V: Visitor<'t, N> + ?Sized,
    {
        debug!(kind = root.kind(), "walk started");
        let result = self.walk_from(visitor, root, &Path::empty(), false);
        match &result {
            Ok(()) => debug!("walk finished"),
            Err(e) => warn!(error = %e, "walk aborted"),
        }
        result
    }

    /// Walk the subtree at `node`, which is addressed by `path`.
    ///
    /// `polymorphic` tells whether the slot holding `node` is declared with an
    /// interface type; if so, `node`'s children are addressed below an extra
    /// kind segment. Depth limits count from `node`.
    pub fn walk_from<'t, N, V>(
        &self,
        visitor: &mut V,
        node: &'t N,
        path: &Path,
        polymorphic: bool,
    ) -> Result<(), WalkError>
    where
        N: SyntaxNode,
        V: Visitor<'t, N> + ?Sized,
    {
        self.walk_node(visitor, node, path, polymorphic, 0)
    }

    /// Recurse into a child, growing the stack first if it is nearly used up.
    fn descend<'t, N, V>(
        &self,
        visitor: &mut V,
        node: &'t N,
        path: &Path,
        polymorphic: bool,
        depth: usize,
    ) -> Result<(), WalkError>
    where
        N: SyntaxNode,
        V: Visitor<'t, N> + ?Sized,
    {
        stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, || {
            self.walk_node(visitor, node, path, polymorphic, depth)
        })
    }

    fn walk_node<'t, N, V>(
        &self,
        visitor: &mut V,
        node: &'t N,
        path: &Path,
        polymorphic: bool,
        depth: usize,
    ) -> Result<(), WalkError>
    where
        N: SyntaxNode,
        V: Visitor<'t, N> + ?Sized,
    {
        if depth > self.options.max_depth {
            return Err(WalkError::DepthExceeded {
                max_depth: self.options.max_depth,
                path: path.clone(),
            });
        }

        if visitor.enter(node, path) == Decision::Skip {
            visitor.exit();
            return Ok(());
        }

        let descriptor = self
            .grammar
            .lookup(node.kind())
            .ok_or_else(|| WalkError::UnknownKind {
                kind: node.kind().into(),
                path: path.clone(),
            })?;
        trace!(kind = descriptor.kind, %path, "dispatch");

        let base = if polymorphic {
            path.append_kind(descriptor.type_name)
        } else {
            path.clone()
        };

        for slot in descriptor.slots {
            self.walk_slot(visitor, descriptor, slot, node.slot(slot.name), &base, depth + 1)?;
        }

        visitor.exit();
        Ok(())
    }

    fn walk_slot<'t, N, V>(
        &self,
        visitor: &mut V,
        descriptor: &KindDescriptor,
        slot: &SlotDescriptor,
        value: SlotValue<'t, N>,
        base: &Path,
        depth: usize,
    ) -> Result<(), WalkError>
    where
        N: SyntaxNode,
        V: Visitor<'t, N> + ?Sized,
    {
        let polymorphic = slot.is_polymorphic();
        match (slot.arity, value) {
            (Arity::Required | Arity::Optional, SlotValue::Node(child)) => {
                self.descend(visitor, child, &base.append(slot.name), polymorphic, depth)
            }
            (Arity::Optional | Arity::List | Arity::Keyed, SlotValue::Absent) => Ok(()),
            (Arity::Required, SlotValue::Absent) => Err(WalkError::MissingSlot {
                kind: descriptor.kind,
                slot: slot.name,
                path: base.clone(),
            }),
            (Arity::List, SlotValue::List(items)) => {
                for (i, item) in items.into_iter().enumerate() {
                    let path = base.append_indexed(slot.name, i);
                    self.descend(visitor, item, &path, polymorphic, depth)?;
                }
                Ok(())
            }
            (Arity::Keyed, SlotValue::Keyed(mut entries)) => {
                entries.sort_by(|a, b| a.0.cmp(b.0));
                for (key, item) in entries {
                    let path = base.append_keyed(slot.name, key);
                    self.descend(visitor, item, &path, polymorphic, depth)?;
                }
                Ok(())
            }
            (expected, found) => Err(WalkError::MalformedSlot {
                kind: descriptor.kind,
                slot: slot.name,
                expected,
                found: found.shape(),
                path: base.append(slot.name),
            }),
        }
    }
}

/// Walk `root` as a Go syntax tree.
pub fn walk<'t, N, V>(visitor: &mut V, root: &'t N) -> Result<(), WalkError>
where
    N: SyntaxNode,
    V: Visitor<'t, N> + ?Sized,
{
    Walker::new(grammar::go()).walk(visitor, root)
}

/// Walk `root` as a Go syntax tree, calling `f` at every node.
///
/// `f` returns whether to descend into the node's children.
pub fn inspect<'t, N, F>(root: &'t N, f: F) -> Result<(), WalkError>
where
    N: SyntaxNode,
    F: FnMut(&'t N, &Path) -> bool,
{
    walk(&mut Inspector(f), root)
}
