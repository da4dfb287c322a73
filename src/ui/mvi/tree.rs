//! Persistent value tree for state that is not a Rust struct.
//!
//! Every map and list node is reference counted, so [`Node::set`] copies only
//! the nodes on the written path. All other nodes of the result are the very
//! same allocations as in the input, which [`Node::ptr_eq`] can check.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::error::StateError;
use super::path::{Path, Seg};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Leaf(Arc<Value>),
    Map(Arc<BTreeMap<String, Node>>),
    List(Arc<Vec<Node>>),
}

impl Node {
    pub fn leaf(value: impl Into<Value>) -> Self {
        Node::Leaf(Arc::new(value.into()))
    }

    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => Node::Map(Arc::new(
                map.into_iter()
                    .map(|(key, value)| (key, Node::from_json(value)))
                    .collect(),
            )),
            Value::Array(items) => {
                Node::List(Arc::new(items.into_iter().map(Node::from_json).collect()))
            }
            other => Node::Leaf(Arc::new(other)),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Node::Leaf(value) => Value::clone(value),
            Node::Map(map) => Value::Object(
                map.iter()
                    .map(|(key, node)| (key.clone(), node.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
            Node::List(items) => Value::Array(items.iter().map(Node::to_json).collect()),
        }
    }

    /// Reference identity of the node's allocation.
    pub fn ptr_eq(a: &Node, b: &Node) -> bool {
        match (a, b) {
            (Node::Leaf(x), Node::Leaf(y)) => Arc::ptr_eq(x, y),
            (Node::Map(x), Node::Map(y)) => Arc::ptr_eq(x, y),
            (Node::List(x), Node::List(y)) => Arc::ptr_eq(x, y),
            _ => false,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Node::Leaf(value) => Some(value),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Node::Leaf(_) => "leaf",
            Node::Map(_) => "map",
            Node::List(_) => "list",
        }
    }

    fn child(&self, seg: &Seg) -> Option<&Node> {
        match (self, seg) {
            (Node::Map(map), Seg::Key(key)) => map.get(key),
            (Node::List(items), Seg::Index(index)) => items.get(*index),
            _ => None,
        }
    }

    pub fn get(&self, path: &Path) -> Option<&Node> {
        path.segments()
            .iter()
            .try_fold(self, |node, seg| node.child(seg))
    }

    /// Return a tree with `value` at `path`.
    ///
    /// A missing final key in a map is inserted. Missing intermediate keys,
    /// out-of-range indices and descending into a leaf are errors.
    pub fn set(&self, path: &Path, value: Node) -> Result<Node, StateError> {
        self.set_at(path.segments(), value, path)
    }

    fn set_at(&self, segs: &[Seg], value: Node, full: &Path) -> Result<Node, StateError> {
        let Some((head, rest)) = segs.split_first() else {
            return Ok(value);
        };

        match (self, head) {
            (Node::Map(map), Seg::Key(key)) => {
                let child = match map.get(key) {
                    Some(child) => child.set_at(rest, value, full)?,
                    None if rest.is_empty() => value,
                    None => {
                        return Err(StateError::PathNotFound { path: full.clone() });
                    }
                };
                let mut next = BTreeMap::clone(map);
                next.insert(key.clone(), child);
                Ok(Node::Map(Arc::new(next)))
            }
            (Node::List(items), Seg::Index(index)) => {
                let Some(child) = items.get(*index) else {
                    return Err(StateError::IndexOutOfBounds {
                        path: full.clone(),
                        index: *index,
                        len: items.len(),
                    });
                };
                let child = child.set_at(rest, value, full)?;
                let mut next = Vec::clone(items);
                next[*index] = child;
                Ok(Node::List(Arc::new(next)))
            }
            (node, seg) => Err(StateError::TypeMismatch {
                path: full.clone(),
                expected: seg.kind(),
                found: node.kind(),
            }),
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node::from_json(value)
    }
}
