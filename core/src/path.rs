//! Structural addresses for nodes in a syntax tree.
//!
//! A [`Path`] records how a node is reached from the tree root: field names,
//! list indices and map keys. Slots whose declared type is an interface also
//! get a segment naming the concrete kind that occupies the slot.
//!
//! Paths are persistent. Extending a path returns a new value that shares
//! the parent's prefix; the parent is never touched, so every path a visitor
//! has already seen stays valid and unchanged for as long as it is held.
//!
//! ```
//! use ast_walker_core::path::Path;
//!
//! let decl = Path::empty().append_indexed("Decls", 0).append_kind("*ast.GenDecl");
//! let spec = decl.append_indexed("Specs", 0);
//!
//! assert_eq!(decl.render("."), "Decls[0].(*ast.GenDecl)");
//! assert_eq!(spec.to_string(), "Decls[0].(*ast.GenDecl).Specs[0]");
//! ```

use alloc::borrow::Cow;
use alloc::sync::Arc;
use core::fmt::{self, Write};

use regex::Regex;

use crate::{String, Vec};

/// Separator used for matching and for the default rendering.
pub const DEFAULT_SEPARATOR: &str = ".";

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A singular field, rendered as `Body`.
    Field(Cow<'static, str>),
    /// An element of a list field, rendered as `List[3]`.
    Index(Cow<'static, str>, usize),
    /// An entry of a keyed field, rendered as `Files[main.go]`.
    Key(Cow<'static, str>, String),
    /// The concrete kind occupying an interface-typed slot, rendered as `(*ast.IfStmt)`.
    Kind(Cow<'static, str>),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => f.write_str(name),
            Segment::Index(name, index) => write!(f, "{}[{}]", name, index),
            Segment::Key(name, key) => write!(f, "{}[{}]", name, key),
            Segment::Kind(type_name) => write!(f, "({})", type_name),
        }
    }
}

impl From<&'static str> for Segment {
    fn from(name: &'static str) -> Self {
        Segment::Field(Cow::Borrowed(name))
    }
}

impl From<String> for Segment {
    fn from(name: String) -> Self {
        Segment::Field(Cow::Owned(name))
    }
}

struct Link {
    segment: Segment,
    parent: Option<Arc<Link>>,
}

/// An immutable, ordered sequence of [`Segment`]s from the root to a node.
///
/// The root itself has the empty path. `Clone` is O(1).
#[derive(Clone, Default)]
pub struct Path {
    tail: Option<Arc<Link>>,
    len: usize,
}

impl Path {
    /// The path of the tree root.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a new path with `segment` appended. `self` is left unchanged.
    pub fn append(&self, segment: impl Into<Segment>) -> Path {
        Path {
            tail: Some(Arc::new(Link {
                segment: segment.into(),
                parent: self.tail.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Appends `name[index]`, where `index` is the zero-based list position.
    pub fn append_indexed(&self, name: impl Into<Cow<'static, str>>, index: usize) -> Path {
        self.append(Segment::Index(name.into(), index))
    }

    /// Appends `name[key]` for an entry of a keyed field.
    pub fn append_keyed(&self, name: impl Into<Cow<'static, str>>, key: impl Into<String>) -> Path {
        self.append(Segment::Key(name.into(), key.into()))
    }

    /// Appends the dynamic-kind annotation `(type_name)`.
    pub fn append_kind(&self, type_name: impl Into<Cow<'static, str>>) -> Path {
        self.append(Segment::Kind(type_name.into()))
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The final segment, if any.
    pub fn last(&self) -> Option<&Segment> {
        self.tail.as_deref().map(|link| &link.segment)
    }

    /// Segments in root-to-node order.
    pub fn segments(&self) -> Vec<&Segment> {
        let mut segments = Vec::with_capacity(self.len);
        let mut cursor = self.tail.as_deref();
        while let Some(link) = cursor {
            segments.push(&link.segment);
            cursor = link.parent.as_deref();
        }
        segments.reverse();
        segments
    }

    /// Joins the segments with `separator`. The empty path renders as `""`.
    pub fn render(&self, separator: &str) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments().into_iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            // Writing into a String cannot fail.
            let _ = write!(out, "{}", segment);
        }
        out
    }

    /// Renders a path that may be absent; `None` renders as `""`.
    pub fn render_opt(path: Option<&Path>, separator: &str) -> String {
        path.map(|p| p.render(separator)).unwrap_or_default()
    }

    /// True iff the `.`-rendering equals `candidate` exactly.
    pub fn matches_exact(&self, candidate: &str) -> bool {
        self.render(DEFAULT_SEPARATOR) == candidate
    }

    /// Regex search (not anchored) against the `.`-rendering.
    pub fn matches_pattern(&self, pattern: &Regex) -> bool {
        pattern.is_match(&self.render(DEFAULT_SEPARATOR))
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.segments() == other.segments()
    }
}

impl Eq for Path {}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_SEPARATOR))
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({:?})", self.render(DEFAULT_SEPARATOR))
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Path::empty(), |path, segment| path.append(segment))
    }
}

impl Drop for Path {
    // Unlink uniquely owned links iteratively so that dropping a long path
    // does not recurse once per segment.
    fn drop(&mut self) {
        let mut cursor = self.tail.take();
        while let Some(link) = cursor {
            match Arc::try_unwrap(link) {
                Ok(mut owned) => cursor = owned.parent.take(),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;
