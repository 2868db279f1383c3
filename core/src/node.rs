//! A generic syntax tree node, loadable from a JSON dump.
//!
//! A node is a JSON object with a `"kind"` tag and one key per field:
//!
//! ```json
//! {
//!   "kind": "SelectorExpr",
//!   "X": { "kind": "Ident", "Name": "fmt" },
//!   "Sel": { "kind": "Ident", "Name": "Println" }
//! }
//! ```
//!
//! A field is a child node if its value is an object with a `"kind"`, a list
//! if it is an array of such objects, and a keyed map if it is an object of
//! such objects. `null` means unset. Everything else is a leaf attribute
//! (identifier names, literal values, operator tokens). A walker that finds
//! one in a slot its grammar declares as a child reports it as malformed.
//!
//! Loading has no nesting limit: parsing grows the stack as it goes, and
//! dropping a tree releases it level by level.

use std::collections::BTreeMap;
use std::io::Read;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::visitor::{SlotValue, SyntaxNode};
use crate::{Box, String, Vec};

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("failed to read syntax tree: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid syntax tree JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// Stack kept free before each nested value, and the size of each new segment.
const RED_ZONE: usize = 64 * 1024;
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub kind: String,
    #[serde(flatten)]
    pub members: BTreeMap<String, Member>,
}

/// The value of one field of a [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Node(Box<Node>),
    List(Vec<Node>),
    Map(BTreeMap<String, Node>),
    Attr(Value),
}

impl Node {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            members: BTreeMap::new(),
        }
    }

    /// An `Ident` node with the given name.
    pub fn ident(name: &str) -> Self {
        Node::new("Ident").with_attr("Name", name)
    }

    pub fn with_node(mut self, field: impl Into<String>, child: Node) -> Self {
        self.members
            .insert(field.into(), Member::Node(Box::new(child)));
        self
    }

    pub fn with_list(mut self, field: impl Into<String>, children: Vec<Node>) -> Self {
        self.members.insert(field.into(), Member::List(children));
        self
    }

    pub fn with_keyed<K, I>(mut self, field: impl Into<String>, entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        let map = entries.into_iter().map(|(k, n)| (k.into(), n)).collect();
        self.members.insert(field.into(), Member::Map(map));
        self
    }

    pub fn with_attr(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members
            .insert(field.into(), Member::Attr(value.into()));
        self
    }

    /// A leaf attribute, if `field` holds one.
    pub fn attr(&self, field: &str) -> Option<&Value> {
        match self.members.get(field) {
            Some(Member::Attr(value)) => Some(value),
            _ => None,
        }
    }

    pub fn from_json_str(source: &str) -> Result<Self, NodeError> {
        parse(serde_json::Deserializer::from_str(source))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, NodeError> {
        parse(serde_json::Deserializer::from_reader(reader))
    }

    /// Indented JSON rendering, used to display matched nodes.
    pub fn to_json_pretty(&self) -> Result<String, NodeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn parse<'de, R: serde_json::de::Read<'de>>(
    mut json: serde_json::Deserializer<R>,
) -> Result<Node, NodeError> {
    json.disable_recursion_limit();
    let node = Node::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(node)
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(object) => node_from_object(object).map_err(|_| {
                de::Error::custom("expected a syntax tree node with a string `kind` field")
            }),
            _ => Err(de::Error::custom("expected a syntax tree node object")),
        }
    }
}

fn is_node(value: &Value) -> bool {
    matches!(value, Value::Object(object) if matches!(object.get("kind"), Some(Value::String(_))))
}

/// Splits the `kind` tag off `object`, or gives the object back untouched.
fn node_from_object(mut object: Map<String, Value>) -> Result<Node, Map<String, Value>> {
    match object.remove("kind") {
        Some(Value::String(kind)) => {
            let members = object
                .into_iter()
                .map(|(field, value)| (field, member_from_value(value)))
                .collect();
            Ok(Node { kind, members })
        }
        other => {
            if let Some(tag) = other {
                object.insert("kind".into(), tag);
            }
            Err(object)
        }
    }
}

fn into_node(value: Value) -> Option<Node> {
    match value {
        Value::Object(object) => node_from_object(object).ok(),
        _ => None,
    }
}

// Node, then list of nodes, then map of nodes, then anything else.
fn member_from_value(value: Value) -> Member {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, || match value {
        Value::Object(object) => match node_from_object(object) {
            Ok(node) => Member::Node(Box::new(node)),
            Err(object) if object.values().all(is_node) => Member::Map(
                object
                    .into_iter()
                    .filter_map(|(key, value)| into_node(value).map(|node| (key, node)))
                    .collect(),
            ),
            Err(object) => Member::Attr(Value::Object(object)),
        },
        Value::Array(items) if items.iter().all(is_node) => {
            Member::List(items.into_iter().filter_map(into_node).collect())
        }
        other => Member::Attr(other),
    })
}

impl Serialize for Member {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, || match self {
            Member::Node(node) => node.serialize(serializer),
            Member::List(nodes) => nodes.serialize(serializer),
            Member::Map(nodes) => nodes.serialize(serializer),
            Member::Attr(value) => value.serialize(serializer),
        })
    }
}

impl Drop for Node {
    // Detach children into a work list so that dropping a deep tree does not
    // recurse once per level.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(&mut self.members, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node.members, &mut pending);
        }
    }
}

fn detach_children(members: &mut BTreeMap<String, Member>, pending: &mut Vec<Node>) {
    for (_, member) in core::mem::take(members) {
        match member {
            Member::Node(node) => pending.push(*node),
            Member::List(nodes) => pending.extend(nodes),
            Member::Map(nodes) => pending.extend(nodes.into_values()),
            Member::Attr(_) => {}
        }
    }
}

impl SyntaxNode for Node {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn slot(&self, name: &str) -> SlotValue<'_, Self> {
        match self.members.get(name) {
            None | Some(Member::Attr(Value::Null)) => SlotValue::Absent,
            Some(Member::Node(child)) => SlotValue::Node(child),
            Some(Member::List(children)) => SlotValue::List(children.iter().collect()),
            Some(Member::Map(entries)) => {
                SlotValue::Keyed(entries.iter().map(|(k, n)| (k.as_str(), n)).collect())
            }
            Some(Member::Attr(_)) => SlotValue::Scalar,
        }
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
