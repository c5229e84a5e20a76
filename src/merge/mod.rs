//! Role resolution and recursive merging.

mod engine;
mod error;
mod roles;

pub use engine::merge;
pub use error::MergeError;
pub use roles::{find_root, list_roots, merge_roles, resolve_roles};
