pub mod document;
pub mod merge;
pub mod node;
mod error;

pub use document::{Document, DocumentError, Format, RootKey};
pub use error::Error;
pub use merge::{list_roots, merge, merge_roles, resolve_roles, MergeError};
pub use node::{ConfigNode, Mapping, NodeKind, Scalar};
