//! Load [`VNode`] trees from JSON hyperscript documents.
//!
//! Every child list is routed through the node factory, so documents get
//! the same treatment as code: `null` children vanish and bare strings
//! become text nodes. A top-level array loads as a fragment.
//!
//! ```json
//! { "tag": "ul", "props": { "class": "todos" },
//!   "children": ["first", null, { "type": "text", "value": "second" }] }
//! ```

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::{Child, Children, NodeType, Props, VNode, h, h_fragment, h_string};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document is null")]
    EmptyDocument,

    /// Numbers, booleans and nested arrays are never coerced into nodes.
    #[error("{path}: unsupported child of kind {kind}; expected a string, a node or null")]
    UnsupportedChild { path: String, kind: &'static str },

    #[error("{path}: missing field '{field}'")]
    MissingField { path: String, field: &'static str },

    #[error("{path}: field '{field}' must be {expected}")]
    InvalidField {
        path: String,
        field: &'static str,
        expected: &'static str,
    },

    #[error("{path}: unknown node type '{found}'")]
    UnknownType { path: String, found: String },
}

impl LoadError {
    /// JSON path of the offending value, when the error has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            LoadError::UnsupportedChild { path, .. }
            | LoadError::MissingField { path, .. }
            | LoadError::InvalidField { path, .. }
            | LoadError::UnknownType { path, .. } => Some(path),
            LoadError::Json(_) | LoadError::EmptyDocument => None,
        }
    }
}

pub fn from_str(src: &str) -> Result<VNode, LoadError> {
    let value: Value = serde_json::from_str(src)?;
    from_value(&value)
}

pub fn from_value(value: &Value) -> Result<VNode, LoadError> {
    let root = match value {
        Value::Array(items) => h_fragment(children_at(items, "$")?),
        _ => match child_at(value, "$")? {
            Some(Child::Node(node)) => node,
            Some(Child::Text(s)) => h_string(s),
            None => return Err(LoadError::EmptyDocument),
        },
    };
    debug!(root = %root.node_type(), "loaded document");
    Ok(root)
}

fn child_at(value: &Value, path: &str) -> Result<Option<Child>, LoadError> {
    let kind = match value {
        Value::Null => return Ok(None),
        Value::String(s) => return Ok(Some(Child::Text(s.clone()))),
        Value::Object(map) => return node_at(map, path).map(|n| Some(Child::Node(n))),
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::Array(_) => "array",
    };
    Err(LoadError::UnsupportedChild {
        path: path.to_owned(),
        kind,
    })
}

fn children_at(items: &[Value], path: &str) -> Result<Children, LoadError> {
    items
        .iter()
        .enumerate()
        .map(|(i, v)| child_at(v, &format!("{path}[{i}]")))
        .collect::<Result<Vec<_>, _>>()
        .map(Children::from)
}

fn node_at(map: &Map<String, Value>, path: &str) -> Result<VNode, LoadError> {
    let node_type = match map.get("type") {
        Some(Value::String(t)) => {
            NodeType::from_tag(t).ok_or_else(|| LoadError::UnknownType {
                path: path.to_owned(),
                found: t.clone(),
            })?
        }
        // shorthand: `{ "tag": "div" }` is an element
        None | Some(Value::Null) if map.contains_key("tag") => NodeType::Element,
        None | Some(Value::Null) => {
            return Err(LoadError::MissingField {
                path: path.to_owned(),
                field: "type",
            });
        }
        Some(_) => return Err(invalid(path, "type", "a string")),
    };

    match node_type {
        NodeType::Element => {
            let tag = string_field(map, path, "tag")?;
            let props = match map.get("props") {
                None | Some(Value::Null) => Props::default(),
                Some(Value::Object(m)) => Props::from(m.clone()),
                Some(_) => return Err(invalid(path, "props", "an object")),
            };
            Ok(h(tag, props, children_field(map, path)?))
        }
        NodeType::Text => Ok(h_string(string_field(map, path, "value")?)),
        NodeType::Fragment => Ok(h_fragment(children_field(map, path)?)),
    }
}

fn string_field(map: &Map<String, Value>, path: &str, field: &'static str) -> Result<String, LoadError> {
    match map.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        None => Err(LoadError::MissingField {
            path: path.to_owned(),
            field,
        }),
        Some(_) => Err(invalid(path, field, "a string")),
    }
}

fn children_field(map: &Map<String, Value>, path: &str) -> Result<Children, LoadError> {
    match map.get("children") {
        None | Some(Value::Null) => Ok(Children::default()),
        Some(Value::Array(items)) => children_at(items, &format!("{path}.children")),
        Some(_) => Err(invalid(path, "children", "an array")),
    }
}

fn invalid(path: &str, field: &'static str, expected: &'static str) -> LoadError {
    LoadError::InvalidField {
        path: path.to_owned(),
        field,
        expected,
    }
}
