//! Parsed configuration documents.
//!
//! A document is a top-level mapping whose entries are named roots. Each
//! root holds one role's configuration tree. Documents are read from YAML
//! or TOML and converted into [`ConfigNode`] trees; nested mapping keys must
//! be strings, which is checked here so the merge never sees anything else.

mod error;
mod file;
mod format;

use std::fmt;

use serde_yaml::Value as YamlValue;
use tracing::debug;

use crate::node::{ConfigNode, Mapping, NodeKind, Scalar};

pub use error::DocumentError;
pub use format::Format;

/// Key of a top-level entry.
///
/// Only string keys name a role. Other scalar keys are kept, rendered as
/// text, so the document can still be merged; listing roots rejects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootKey {
    Name(String),
    Other(String),
}

impl RootKey {
    pub fn as_name(&self) -> Option<&str> {
        match self {
            RootKey::Name(name) => Some(name),
            RootKey::Other(_) => None,
        }
    }
}

impl fmt::Display for RootKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootKey::Name(name) => f.write_str(name),
            RootKey::Other(text) => f.write_str(text),
        }
    }
}

/// A top-level mapping of root name to configuration tree, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    roots: Vec<(RootKey, ConfigNode)>,
}

impl Document {
    /// Parses a YAML document.
    ///
    /// Aliases are expanded and `<<` merge keys applied before conversion.
    /// Empty input yields an empty document.
    pub fn from_yaml_str(contents: &str) -> Result<Self, DocumentError> {
        let mut value: YamlValue = serde_yaml::from_str(contents)?;
        value.apply_merge()?;

        let map = match untag(value) {
            YamlValue::Null => return Ok(Self::default()),
            YamlValue::Mapping(map) => map,
            other => {
                return Err(DocumentError::NotAMapping {
                    found: yaml_kind(&other),
                })
            }
        };

        let mut roots = Vec::with_capacity(map.len());
        for (key, value) in map {
            let key = match untag(key) {
                YamlValue::String(name) => RootKey::Name(name),
                other => RootKey::Other(render_key(&other)),
            };
            let node = yaml_to_node(value, &key.to_string())?;
            roots.push((key, node));
        }

        debug!(roots = roots.len(), "parsed YAML document");
        Ok(Self { roots })
    }

    /// Parses a TOML document. Datetimes become string scalars.
    pub fn from_toml_str(contents: &str) -> Result<Self, DocumentError> {
        let table: toml::Table = toml::from_str(contents)?;
        let roots: Vec<_> = table
            .into_iter()
            .map(|(key, value)| (RootKey::Name(key), toml_to_node(value)))
            .collect();

        debug!(roots = roots.len(), "parsed TOML document");
        Ok(Self { roots })
    }

    /// Iterates over the top-level entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&RootKey, &ConfigNode)> {
        self.roots.iter().map(|(key, node)| (key, node))
    }

    /// Looks up a root by name.
    pub fn get(&self, name: &str) -> Option<&ConfigNode> {
        self.roots
            .iter()
            .find(|(key, _)| key.as_name() == Some(name))
            .map(|(_, node)| node)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl FromIterator<(String, ConfigNode)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, ConfigNode)>>(iter: I) -> Self {
        Self {
            roots: iter
                .into_iter()
                .map(|(name, node)| (RootKey::Name(name), node))
                .collect(),
        }
    }
}

fn yaml_to_node(value: YamlValue, path: &str) -> Result<ConfigNode, DocumentError> {
    let node = match value {
        YamlValue::Null => ConfigNode::Scalar(Scalar::Null),
        YamlValue::Bool(b) => ConfigNode::Scalar(Scalar::Bool(b)),
        YamlValue::Number(n) => ConfigNode::Scalar(Scalar::Number(n)),
        YamlValue::String(s) => ConfigNode::Scalar(Scalar::String(s)),
        YamlValue::Sequence(items) => ConfigNode::Sequence(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| yaml_to_node(item, &format!("{path}[{i}]")))
                .collect::<Result<_, _>>()?,
        ),
        YamlValue::Mapping(map) => {
            let mut out = Mapping::with_capacity(map.len());
            for (key, value) in map {
                let key = match untag(key) {
                    YamlValue::String(key) => key,
                    other => {
                        return Err(DocumentError::NonStringKey {
                            path: path.to_string(),
                            key: render_key(&other),
                        })
                    }
                };
                let node = yaml_to_node(value, &format!("{path}.{key}"))?;
                out.insert(key, node);
            }
            ConfigNode::Mapping(out)
        }
        YamlValue::Tagged(tagged) => {
            debug!(tag = %tagged.tag, path, "dropping YAML tag");
            yaml_to_node(tagged.value, path)?
        }
    };
    Ok(node)
}

fn toml_to_node(value: toml::Value) -> ConfigNode {
    match value {
        toml::Value::String(s) => ConfigNode::Scalar(Scalar::String(s)),
        toml::Value::Integer(i) => ConfigNode::Scalar(Scalar::Number(i.into())),
        toml::Value::Float(f) => ConfigNode::Scalar(Scalar::Number(f.into())),
        toml::Value::Boolean(b) => ConfigNode::Scalar(Scalar::Bool(b)),
        toml::Value::Datetime(dt) => ConfigNode::Scalar(Scalar::String(dt.to_string())),
        toml::Value::Array(items) => {
            ConfigNode::Sequence(items.into_iter().map(toml_to_node).collect())
        }
        toml::Value::Table(table) => ConfigNode::Mapping(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_node(value)))
                .collect(),
        ),
    }
}

fn untag(value: YamlValue) -> YamlValue {
    match value {
        YamlValue::Tagged(tagged) => untag(tagged.value),
        other => other,
    }
}

fn yaml_kind(value: &YamlValue) -> NodeKind {
    match value {
        YamlValue::Mapping(_) => NodeKind::Mapping,
        YamlValue::Sequence(_) => NodeKind::Sequence,
        YamlValue::Tagged(tagged) => yaml_kind(&tagged.value),
        _ => NodeKind::Scalar,
    }
}

/// Renders a non-string key the way it appears in YAML, for messages.
fn render_key(key: &YamlValue) -> String {
    match serde_yaml::to_string(key) {
        Ok(text) => text.trim_end().to_string(),
        Err(_) => format!("{key:?}"),
    }
}
