//! Child-slot layout of every node kind in a tree grammar.
//!
//! A [`Grammar`] maps a kind tag to its [`KindDescriptor`]: the ordered list
//! of child slots the walker visits. The order of `slots` is the order in
//! which children are visited, and therefore part of the path contract.
//!
//! The Go layout lives in [`go`]; other front ends can build their own table
//! with [`Grammar::new`].

mod go;


pub use go::{GO_KINDS, go};

use core::fmt;

use hashbrown::HashMap;
use thiserror::Error;

use crate::String;

/// How many children a slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one child; absence is an integration fault.
    Required,
    /// Zero or one child.
    Optional,
    /// An ordered list, addressed as `Name[i]`.
    List,
    /// A map, addressed as `Name[key]` in key order.
    Keyed,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Arity::Required => "required node",
            Arity::Optional => "optional node",
            Arity::List => "list",
            Arity::Keyed => "keyed map",
        };
        f.write_str(text)
    }
}

/// Declared type of a slot (or of a list slot's elements).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotType {
    /// A single concrete kind; the field name identifies the occupant.
    Concrete,
    /// An interface type; paths below the occupant carry a kind segment.
    Interface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotDescriptor {
    pub name: &'static str,
    pub arity: Arity,
    pub ty: SlotType,
}

impl SlotDescriptor {
    pub const fn new(name: &'static str, arity: Arity, ty: SlotType) -> Self {
        Self { name, arity, ty }
    }

    pub const fn is_polymorphic(&self) -> bool {
        matches!(self.ty, SlotType::Interface)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDescriptor {
    /// Kind tag as reported by [`SyntaxNode::kind`](crate::visitor::SyntaxNode::kind).
    pub kind: &'static str,
    /// Runtime type label used in kind segments and kind searches, e.g. `*ast.IfStmt`.
    pub type_name: &'static str,
    /// Child slots in visiting order.
    pub slots: &'static [SlotDescriptor],
}

impl KindDescriptor {
    pub const fn new(
        kind: &'static str,
        type_name: &'static str,
        slots: &'static [SlotDescriptor],
    ) -> Self {
        Self {
            kind,
            type_name,
            slots,
        }
    }

    pub fn slot(&self, name: &str) -> Option<&SlotDescriptor> {
        self.slots.iter().find(|slot| slot.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("kind `{0}` is described more than once")]
    DuplicateKind(String),
    #[error("kind `{kind}` declares slot `{slot}` more than once")]
    DuplicateSlot { kind: String, slot: String },
}

/// Lookup table from kind tag to descriptor, built once.
#[derive(Debug, Clone)]
pub struct Grammar {
    kinds: &'static [KindDescriptor],
    index: HashMap<&'static str, usize>,
}

impl Grammar {
    /// Build the index for `kinds`.
    ///
    /// Returns an error if a kind or a slot within a kind is listed twice.
    pub fn new(kinds: &'static [KindDescriptor]) -> Result<Self, GrammarError> {
        let mut index = HashMap::with_capacity(kinds.len());
        for (position, descriptor) in kinds.iter().enumerate() {
            for (i, slot) in descriptor.slots.iter().enumerate() {
                if descriptor.slots[..i].iter().any(|s| s.name == slot.name) {
                    return Err(GrammarError::DuplicateSlot {
                        kind: descriptor.kind.into(),
                        slot: slot.name.into(),
                    });
                }
            }
            if index.insert(descriptor.kind, position).is_some() {
                return Err(GrammarError::DuplicateKind(descriptor.kind.into()));
            }
        }
        Ok(Self { kinds, index })
    }

    pub fn lookup(&self, kind: &str) -> Option<&KindDescriptor> {
        self.index.get(kind).map(|&position| &self.kinds[position])
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.index.contains_key(kind)
    }

    /// All descriptors, in table order.
    pub fn kinds(&self) -> &'static [KindDescriptor] {
        self.kinds
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
