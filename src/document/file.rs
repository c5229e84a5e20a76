//! File-based document loading.

use std::path::Path;

use tracing::debug;

use super::{Document, DocumentError, Format};

impl Document {
    /// Loads and parses a document file.
    ///
    /// A missing file is reported as [`DocumentError::FileNotFound`]; parse
    /// failures are wrapped with the offending path.
    pub fn load(path: impl AsRef<Path>, format: Format) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DocumentError::FileNotFound(path.to_path_buf()))
            }
            Err(e) => {
                return Err(DocumentError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        debug!(path = %path.display(), ?format, bytes = contents.len(), "loading document");
        format
            .parse(&contents)
            .map_err(|e| DocumentError::ParseError {
                path: path.to_path_buf(),
                source: Box::new(e),
            })
    }
}
