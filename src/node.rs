//! In-memory configuration tree.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// A string-keyed mapping that remembers insertion order.
pub type Mapping = IndexMap<String, ConfigNode>;

/// A node of a parsed configuration document.
///
/// Serializes untagged, so a tree renders back to the same shape it was
/// parsed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigNode {
    Scalar(Scalar),
    Mapping(Mapping),
    Sequence(Vec<ConfigNode>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_yaml::Number),
    String(String),
}

/// The shape of a node, without its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Scalar,
    Mapping,
    Sequence,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeKind::Scalar => "scalar",
            NodeKind::Mapping => "mapping",
            NodeKind::Sequence => "sequence",
        })
    }
}

impl ConfigNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            ConfigNode::Scalar(_) => NodeKind::Scalar,
            ConfigNode::Mapping(_) => NodeKind::Mapping,
            ConfigNode::Sequence(_) => NodeKind::Sequence,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            ConfigNode::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigNode::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for ConfigNode {
    fn from(value: &str) -> Self {
        ConfigNode::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<String> for ConfigNode {
    fn from(value: String) -> Self {
        ConfigNode::Scalar(Scalar::String(value))
    }
}

impl From<bool> for ConfigNode {
    fn from(value: bool) -> Self {
        ConfigNode::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for ConfigNode {
    fn from(value: i64) -> Self {
        ConfigNode::Scalar(Scalar::Number(value.into()))
    }
}

impl From<f64> for ConfigNode {
    fn from(value: f64) -> Self {
        ConfigNode::Scalar(Scalar::Number(value.into()))
    }
}

impl From<Mapping> for ConfigNode {
    fn from(value: Mapping) -> Self {
        ConfigNode::Mapping(value)
    }
}

impl From<Vec<ConfigNode>> for ConfigNode {
    fn from(value: Vec<ConfigNode>) -> Self {
        ConfigNode::Sequence(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(ConfigNode::from("x").kind().to_string(), "scalar");
        assert_eq!(ConfigNode::from(Mapping::new()).kind().to_string(), "mapping");
        assert_eq!(ConfigNode::from(Vec::<ConfigNode>::new()).kind().to_string(), "sequence");
    }

    #[test]
    fn test_serializes_untagged() {
        let mut inner = Mapping::new();
        inner.insert("port".into(), ConfigNode::from(8080i64));
        inner.insert("debug".into(), ConfigNode::Scalar(Scalar::Null));

        let mut root = Mapping::new();
        root.insert("server".into(), ConfigNode::from(inner));
        root.insert(
            "hosts".into(),
            ConfigNode::from(vec![ConfigNode::from("a"), ConfigNode::from("b")]),
        );

        let yaml = serde_yaml::to_string(&root).unwrap();
        assert_eq!(
            yaml,
            "server:\n  port: 8080\n  debug: null\nhosts:\n- a\n- b\n"
        );
    }
}
