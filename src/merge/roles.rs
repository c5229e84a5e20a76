//! Role lookup over a parsed document.

use tracing::debug;

use super::{merge, MergeError};
use crate::document::{Document, RootKey};
use crate::node::{ConfigNode, Mapping};

/// Lists every root name in document order.
///
/// Fails with [`MergeError::NonStringRootKey`] on the first top-level key
/// that is not a string.
pub fn list_roots(document: &Document) -> Result<Vec<&str>, MergeError> {
    document
        .entries()
        .map(|(key, _)| match key {
            RootKey::Name(name) => Ok(name.as_str()),
            RootKey::Other(text) => Err(MergeError::NonStringRootKey(text.clone())),
        })
        .collect()
}

/// Looks up a single root, which must be a mapping.
pub fn find_root<'a>(document: &'a Document, name: &str) -> Result<&'a Mapping, MergeError> {
    match document.get(name) {
        Some(ConfigNode::Mapping(map)) => Ok(map),
        Some(_) => Err(MergeError::InvalidRootType(name.to_string())),
        None => Err(MergeError::RootNotFound(name.to_string())),
    }
}

/// Resolves the base and role trees by name. The base is checked first.
pub fn resolve_roles<'a>(
    document: &'a Document,
    base: &str,
    role: &str,
) -> Result<(&'a Mapping, &'a Mapping), MergeError> {
    let base_tree = find_root(document, base)?;
    let role_tree = find_root(document, role)?;
    Ok((base_tree, role_tree))
}

/// Resolves both roots and merges `role` over `base`.
pub fn merge_roles(document: &Document, base: &str, role: &str) -> Result<Mapping, MergeError> {
    let (base_tree, role_tree) = resolve_roles(document, base, role)?;
    debug!(base, role, "merging roles");
    merge(base_tree, role_tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Document {
        Document::from_yaml_str(
            r#"
base:
  app:
    name: shop
    replicas: 1
  hosts: [a, b]
staging:
  app:
    replicas: 2
prod:
  app:
    replicas: 5
  hosts: [c]
  tls: true
broken: just-a-string
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_list_roots() {
        let doc = document();
        assert_eq!(
            list_roots(&doc).unwrap(),
            ["base", "staging", "prod", "broken"]
        );
    }

    #[test]
    fn test_list_roots_empty_document() {
        assert!(list_roots(&Document::default()).unwrap().is_empty());
    }

    #[test]
    fn test_list_roots_rejects_non_string_key() {
        let doc = Document::from_yaml_str("base: {}\n7: {}\n").unwrap();
        assert_eq!(
            list_roots(&doc),
            Err(MergeError::NonStringRootKey("7".into()))
        );
    }

    #[test]
    fn test_resolve_roles() {
        let doc = document();
        let (base, role) = resolve_roles(&doc, "base", "staging").unwrap();

        assert!(base.contains_key("hosts"));
        assert!(!role.contains_key("hosts"));
    }

    #[test]
    fn test_missing_role() {
        let doc = document();
        assert_eq!(
            resolve_roles(&doc, "base", "qa"),
            Err(MergeError::RootNotFound("qa".into()))
        );
    }

    #[test]
    fn test_missing_base_reported_first() {
        let doc = document();
        assert_eq!(
            resolve_roles(&doc, "defaults", "qa"),
            Err(MergeError::RootNotFound("defaults".into()))
        );
    }

    #[test]
    fn test_non_mapping_root() {
        let doc = document();
        assert_eq!(
            resolve_roles(&doc, "base", "broken"),
            Err(MergeError::InvalidRootType("broken".into()))
        );
        assert_eq!(
            resolve_roles(&doc, "broken", "base"),
            Err(MergeError::InvalidRootType("broken".into()))
        );
    }

    #[test]
    fn test_merge_roles() {
        let doc = document();
        let merged = merge_roles(&doc, "base", "prod").unwrap();

        let expected = Document::from_yaml_str(
            "m:\n  app:\n    name: shop\n    replicas: 5\n  hosts: [c]\n  tls: true\n",
        )
        .unwrap();
        assert_eq!(&merged, find_root(&expected, "m").unwrap());
    }

    #[test]
    fn test_document_built_in_memory() {
        let mut base = Mapping::new();
        base.insert("port".into(), ConfigNode::from(80i64));
        base.insert("host".into(), ConfigNode::from("localhost"));
        let mut prod = Mapping::new();
        prod.insert("port".into(), ConfigNode::from(443i64));

        let doc: Document = [
            ("base".to_string(), ConfigNode::from(base)),
            ("prod".to_string(), ConfigNode::from(prod)),
            ("release".to_string(), ConfigNode::from("2024.1")),
        ]
        .into_iter()
        .collect();

        assert_eq!(list_roots(&doc).unwrap(), ["base", "prod", "release"]);
        let merged = merge_roles(&doc, "base", "prod").unwrap();
        assert_eq!(merged["port"], ConfigNode::from(443i64));
        assert_eq!(merged["host"], ConfigNode::from("localhost"));
        assert_eq!(
            merge_roles(&doc, "base", "release"),
            Err(MergeError::InvalidRootType("release".into()))
        );
    }

    #[test]
    fn test_merge_role_with_itself() {
        let doc = document();
        let merged = merge_roles(&doc, "staging", "staging").unwrap();
        assert_eq!(&merged, find_root(&doc, "staging").unwrap());
    }
}
