use crate::document::DocumentError;
use crate::merge::MergeError;
use thiserror::Error;

/// Top-level error type for the yamlmerge library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Merge(#[from] MergeError),
}
