use std::path::PathBuf;
use thiserror::Error;

use crate::node::NodeKind;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentError {
    #[error("no file found at: {0}")]
    FileNotFound(PathBuf),

    #[error("unable to load file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to deserialize file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: Box<DocumentError>,
    },

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("document root must be a mapping, found a {found}")]
    NotAMapping { found: NodeKind },

    #[error("mapping key {key} at '{path}' is not a string")]
    NonStringKey { path: String, key: String },

    #[error("failed to render merged output as YAML: {0}")]
    RenderYaml(#[source] serde_yaml::Error),

    #[error("failed to render merged output as TOML: {0}")]
    RenderToml(#[source] toml::ser::Error),
}
