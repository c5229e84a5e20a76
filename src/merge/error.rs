use thiserror::Error;

use crate::node::NodeKind;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MergeError {
    #[error("root '{0}' was not found in the document")]
    RootNotFound(String),

    #[error("root '{0}' is not a mapping")]
    InvalidRootType(String),

    #[error(
        "cannot merge key '{}': base is a {base} but role is a {role}",
        display_path(.path)
    )]
    TypeMismatch {
        /// Key segments from the role root down to the offending key.
        path: Vec<String>,
        base: NodeKind,
        role: NodeKind,
    },

    #[error("top-level key {0} is not a string")]
    NonStringRootKey(String),
}

/// Joins key segments with `.`, quoting segments that contain a dot.
pub(crate) fn display_path(path: &[String]) -> String {
    path.iter()
        .map(|segment| {
            if segment.contains('.') {
                format!("\"{segment}\"")
            } else {
                segment.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_display_quotes_dotted_segments() {
        let err = MergeError::TypeMismatch {
            path: vec!["outer".into(), "a.b".into()],
            base: NodeKind::Mapping,
            role: NodeKind::Scalar,
        };
        assert_eq!(
            err.to_string(),
            "cannot merge key 'outer.\"a.b\"': base is a mapping but role is a scalar"
        );
    }
}
