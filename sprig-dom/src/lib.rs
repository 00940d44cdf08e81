//! Virtual-DOM node construction.
//!
//! [`h`], [`h_string`] and [`h_fragment`] build [`VNode`] trees. Child lists
//! go through [`arrays::without_nulls`] first, so absent entries never reach
//! the tree, and raw strings are turned into text nodes.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

pub mod arrays;
pub mod load;

pub use arrays::without_nulls;

/// Type tag of a [`VNode`]. The string forms are what renderers branch on
/// and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Element,
    Text,
    Fragment,
}

impl NodeType {
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeType::Element => "element",
            NodeType::Text => "text",
            NodeType::Fragment => "fragment",
        }
    }

    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "element" => Some(NodeType::Element),
            "text" => Some(NodeType::Text),
            "fragment" => Some(NodeType::Fragment),
            _ => None,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VNode {
    Element {
        tag: String,
        props: Props,
        children: Vec<VNode>,
    },
    Text {
        value: String,
    },
    Fragment {
        children: Vec<VNode>,
    },
}

impl VNode {
    pub fn node_type(&self) -> NodeType {
        match self {
            VNode::Element { .. } => NodeType::Element,
            VNode::Text { .. } => NodeType::Text,
            VNode::Fragment { .. } => NodeType::Fragment,
        }
    }

    /// Child nodes; always empty for text nodes.
    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } | VNode::Fragment { children } => children,
            VNode::Text { .. } => &[],
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn props(&self) -> Option<&Props> {
        match self {
            VNode::Element { props, .. } => Some(props),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            VNode::Text { value } => Some(value),
            _ => None,
        }
    }
}

/// Element properties: attributes and binding tables, stored verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Props {
    pub attrs: BTreeMap<String, Value>,
}

impl Props {
    pub fn new() -> Self {
        Self {
            attrs: BTreeMap::new(),
        }
    }
    pub fn set(mut self, k: impl Into<String>, v: impl Into<Value>) -> Self {
        self.attrs.insert(k.into(), v.into());
        self
    }
    pub fn get(&self, k: &str) -> Option<&Value> {
        self.attrs.get(k)
    }
    pub fn len(&self) -> usize {
        self.attrs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// Allow concise props creation
impl From<()> for Props {
    fn from(_: ()) -> Self {
        Props::default()
    }
}
impl<'a, V: Into<Value>> From<Vec<(&'a str, V)>> for Props {
    fn from(v: Vec<(&'a str, V)>) -> Self {
        v.into_iter().fold(Props::new(), |p, (k, v)| p.set(k, v))
    }
}
impl<'a, V: Into<Value>, const N: usize> From<[(&'a str, V); N]> for Props {
    fn from(v: [(&'a str, V); N]) -> Self {
        v.into_iter().fold(Props::new(), |p, (k, v)| p.set(k, v))
    }
}
impl From<Map<String, Value>> for Props {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            attrs: map.into_iter().collect(),
        }
    }
}

/// A present child entry, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// Raw string; becomes a text node.
    Text(String),
    Node(VNode),
}

impl Child {
    fn into_vnode(self) -> VNode {
        match self {
            Child::Text(value) => h_string(value),
            Child::Node(node) => node,
        }
    }
}

impl From<&str> for Child {
    fn from(s: &str) -> Self {
        Child::Text(s.to_owned())
    }
}
impl From<String> for Child {
    fn from(s: String) -> Self {
        Child::Text(s)
    }
}
impl From<VNode> for Child {
    fn from(node: VNode) -> Self {
        Child::Node(node)
    }
}

/// Anything that can sit in a child list. `None` is the absent entry.
pub trait IntoChild {
    fn into_child(self) -> Option<Child>;
}

impl IntoChild for Child {
    fn into_child(self) -> Option<Child> {
        Some(self)
    }
}
impl IntoChild for VNode {
    fn into_child(self) -> Option<Child> {
        Some(Child::Node(self))
    }
}
impl IntoChild for &str {
    fn into_child(self) -> Option<Child> {
        Some(self.into())
    }
}
impl IntoChild for String {
    fn into_child(self) -> Option<Child> {
        Some(self.into())
    }
}
impl IntoChild for &String {
    fn into_child(self) -> Option<Child> {
        Some(self.as_str().into())
    }
}
impl<T: IntoChild> IntoChild for Option<T> {
    fn into_child(self) -> Option<Child> {
        self.and_then(IntoChild::into_child)
    }
}

/// Child list as supplied by the caller, absent entries included.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Children(Vec<Option<Child>>);

impl Children {
    pub fn into_inner(self) -> Vec<Option<Child>> {
        self.0
    }

    /// Drop absent entries and turn raw strings into text nodes.
    fn normalize(self) -> Vec<VNode> {
        without_nulls(self.0)
            .into_iter()
            .map(Child::into_vnode)
            .collect()
    }
}

impl From<()> for Children {
    fn from(_: ()) -> Self {
        Children::default()
    }
}
impl<T: IntoChild> From<Vec<T>> for Children {
    fn from(v: Vec<T>) -> Self {
        v.into_iter().collect()
    }
}
impl<T: IntoChild, const N: usize> From<[T; N]> for Children {
    fn from(v: [T; N]) -> Self {
        v.into_iter().collect()
    }
}
impl<T: IntoChild> FromIterator<T> for Children {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Children(iter.into_iter().map(IntoChild::into_child).collect())
    }
}

/// Build an element node. Pass `()` for empty props or no children.
pub fn h(tag: impl Into<String>, props: impl Into<Props>, children: impl Into<Children>) -> VNode {
    VNode::Element {
        tag: tag.into(),
        props: props.into(),
        children: children.into().normalize(),
    }
}

/// Build a text node. The value is stored as given.
pub fn h_string(value: impl Into<String>) -> VNode {
    VNode::Text {
        value: value.into(),
    }
}

pub fn h_fragment(children: impl Into<Children>) -> VNode {
    VNode::Fragment {
        children: children.into().normalize(),
    }
}
