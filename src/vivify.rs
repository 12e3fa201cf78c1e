//! Auto-vivifying nested mappings.
//!
//! A [`Vivified`] node creates an empty child node the first time an absent
//! key is accessed mutably, so deep chains can be assigned without declaring
//! the intermediate levels:
//!
//! ```
//! use ocio_common::vivify::Vivified;
//! let mut vivified = Vivified::new();
//! vivified["my"].set("attribute", 1);
//! let plain = vivified.materialize();
//! assert_eq!(plain.to_string(), r#"{"my": {"attribute": 1}}"#);
//! ```
//!
//! Reads through [`Vivified::get`] or `Index` never create anything.
//! [`Vivified::materialize`] turns the tree into an immutable [`Materialized`]
//! copy holding only the keys present.

// used to keep children sorted by key, which gives a stable display order
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::ops::{Index, IndexMut};

use serde::Serialize;

use crate::error::{Result, ToolkitError};

// ------------- Node -------------
#[derive(Debug, Clone, PartialEq)]
pub enum Node<V> {
    Leaf(V),
    Branch(Vivified<V>),
}

impl<V> Node<V> {
    pub fn as_leaf(&self) -> Option<&V> {
        match self {
            Node::Leaf(value) => Some(value),
            Node::Branch(_) => None,
        }
    }
    pub fn as_branch(&self) -> Option<&Vivified<V>> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch(branch) => Some(branch),
        }
    }
}

// ------------- Vivified -------------
#[derive(Debug, Clone, PartialEq)]
pub struct Vivified<V> {
    children: BTreeMap<String, Node<V>>,
}

impl<V> Default for Vivified<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Vivified<V> {
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
        }
    }

    /// Returns the branch at `key`, creating an empty one if the key is absent.
    ///
    /// Fails with [`ToolkitError::LeafCollision`] when `key` already holds a value.
    pub fn child(&mut self, key: &str) -> Result<&mut Vivified<V>> {
        let node = match self.children.entry(key.to_owned()) {
            Entry::Vacant(e) => e.insert(Node::Branch(Vivified::new())),
            Entry::Occupied(e) => e.into_mut(),
        };
        match node {
            Node::Branch(branch) => Ok(branch),
            Node::Leaf(_) => Err(ToolkitError::LeafCollision(key.to_owned())),
        }
    }

    /// Stores `value` at `key`, replacing whatever was there.
    pub fn set(&mut self, key: &str, value: V) -> Option<Node<V>> {
        self.children.insert(key.to_owned(), Node::Leaf(value))
    }

    /// Vivifies every segment but the last and stores `value` under the last one.
    pub fn set_path(&mut self, path: &[&str], value: V) -> Result<Option<Node<V>>> {
        let (last, intermediate) = path.split_last().ok_or_else(|| {
            ToolkitError::InvalidArgument(String::from("cannot set a value at an empty path"))
        })?;
        let mut node = self;
        for key in intermediate {
            node = node.child(key)?;
        }
        Ok(node.set(last, value))
    }

    pub fn get(&self, key: &str) -> Option<&Node<V>> {
        self.children.get(key)
    }
    pub fn remove(&mut self, key: &str) -> Option<Node<V>> {
        self.children.remove(key)
    }
    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }
    pub fn len(&self) -> usize {
        self.children.len()
    }
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<V: Clone> Vivified<V> {
    /// Converts the tree into a plain nested mapping. The tree itself is left untouched.
    pub fn materialize(&self) -> Materialized<V> {
        materialize(self)
    }
}

/// Recursively copies `vivified` into a [`Materialized`] mapping.
pub fn materialize<V: Clone>(vivified: &Vivified<V>) -> Materialized<V> {
    Materialized::Mapping(
        vivified
            .children
            .iter()
            .map(|(key, node)| {
                let plain = match node {
                    Node::Leaf(value) => Materialized::Scalar(value.clone()),
                    Node::Branch(branch) => materialize(branch),
                };
                (key.clone(), plain)
            })
            .collect(),
    )
}

impl<V> Index<&str> for Vivified<V> {
    type Output = Node<V>;

    /// # Panics
    ///
    /// Panics if `key` is absent. Reading never vivifies.
    fn index(&self, key: &str) -> &Node<V> {
        match self.children.get(key) {
            Some(node) => node,
            None => panic!("no entry found for key \"{key}\""),
        }
    }
}

impl<V> IndexMut<&str> for Vivified<V> {
    /// # Panics
    ///
    /// Panics if `key` holds a value rather than a branch. Use
    /// [`Vivified::child`] for the fallible form.
    fn index_mut(&mut self, key: &str) -> &mut Node<V> {
        if let Err(e) = self.child(key) {
            panic!("{e}");
        }
        match self.children.get_mut(key) {
            Some(node) => node,
            None => unreachable!("child() inserts missing keys"),
        }
    }
}

// Chained vivification: node["a"]["b"] keeps vivifying through branches.
impl<V> Index<&str> for Node<V> {
    type Output = Node<V>;

    fn index(&self, key: &str) -> &Node<V> {
        match self {
            Node::Branch(branch) => &branch[key],
            Node::Leaf(_) => panic!("cannot index into a value with key \"{key}\""),
        }
    }
}

impl<V> IndexMut<&str> for Node<V> {
    fn index_mut(&mut self, key: &str) -> &mut Node<V> {
        match self {
            Node::Branch(branch) => &mut branch[key],
            Node::Leaf(_) => panic!("cannot vivify key \"{key}\" inside a value"),
        }
    }
}

impl<V> Node<V> {
    /// Stores `value` at `key` of this branch.
    ///
    /// # Panics
    ///
    /// Panics if this node is a value.
    pub fn set(&mut self, key: &str, value: V) -> Option<Node<V>> {
        match self {
            Node::Branch(branch) => branch.set(key, value),
            Node::Leaf(_) => panic!("cannot set key \"{key}\" inside a value"),
        }
    }
}

// ------------- Materialized -------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Materialized<V> {
    Scalar(V),
    Mapping(BTreeMap<String, Materialized<V>>),
}

impl<V> Materialized<V> {
    pub fn get(&self, key: &str) -> Option<&Materialized<V>> {
        match self {
            Materialized::Mapping(map) => map.get(key),
            Materialized::Scalar(_) => None,
        }
    }
    pub fn as_scalar(&self) -> Option<&V> {
        match self {
            Materialized::Scalar(value) => Some(value),
            Materialized::Mapping(_) => None,
        }
    }
}

impl<V: Serialize> Materialized<V> {
    /// Fails with [`ToolkitError::Serialization`] when a value refuses to serialize.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

// Minimal structural formatter used for diagnostics. Scalars print like keys,
// so strings come out quoted.
impl<V: fmt::Debug> fmt::Display for Materialized<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Materialized::Scalar(value) => write!(f, "{value:?}"),
            Materialized::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
