use std::path::Path;

use super::{Document, DocumentError};
use crate::node::Mapping;

/// Serialized form of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Yaml,
    Toml,
}

impl Format {
    /// Picks TOML for a `.toml` extension and YAML for anything else.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Yaml,
        }
    }

    pub fn parse(self, contents: &str) -> Result<Document, DocumentError> {
        match self {
            Format::Yaml => Document::from_yaml_str(contents),
            Format::Toml => Document::from_toml_str(contents),
        }
    }

    /// Serializes a merged mapping.
    ///
    /// TOML has no null, so a tree carrying YAML nulls cannot be rendered as TOML.
    pub fn render(self, mapping: &Mapping) -> Result<String, DocumentError> {
        match self {
            Format::Yaml => serde_yaml::to_string(mapping).map_err(DocumentError::RenderYaml),
            Format::Toml => toml::to_string(mapping).map_err(DocumentError::RenderToml),
        }
    }
}
