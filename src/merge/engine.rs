use tracing::trace;

use super::error::display_path;
use super::MergeError;
use crate::node::{ConfigNode, Mapping, NodeKind};

/// Merges `role` over `base` into a new mapping.
///
/// For a key present in both trees, mappings are merged recursively and any
/// other value from `role` replaces the base value wholesale (sequences are
/// never combined element-wise). Keys present in only one tree are copied
/// unchanged. Base keys come first in the output, in base order, followed by
/// role-only keys in role order.
///
/// A base mapping met by a role scalar or sequence at the same key is a
/// [`MergeError::TypeMismatch`]. Neither input is modified.
pub fn merge(base: &Mapping, role: &Mapping) -> Result<Mapping, MergeError> {
    let mut path = Vec::new();
    merge_level(base, role, &mut path)
}

fn merge_level<'a>(
    base: &'a Mapping,
    role: &'a Mapping,
    path: &mut Vec<&'a str>,
) -> Result<Mapping, MergeError> {
    let mut merged = Mapping::with_capacity(base.len() + role.len());

    for (key, base_value) in base {
        let value = match (base_value, role.get(key)) {
            (_, None) => base_value.clone(),
            (ConfigNode::Mapping(base_map), Some(ConfigNode::Mapping(role_map))) => {
                path.push(key);
                let nested = merge_level(base_map, role_map, path)?;
                path.pop();
                ConfigNode::Mapping(nested)
            }
            (ConfigNode::Mapping(_), Some(role_value)) => {
                return Err(MergeError::TypeMismatch {
                    path: key_path(path, key),
                    base: NodeKind::Mapping,
                    role: role_value.kind(),
                });
            }
            (_, Some(role_value)) => {
                trace!(key = %display_path(&key_path(path, key)), "role value replaces base");
                role_value.clone()
            }
        };
        merged.insert(key.clone(), value);
    }

    for (key, role_value) in role {
        if !base.contains_key(key) {
            merged.insert(key.clone(), role_value.clone());
        }
    }

    Ok(merged)
}

fn key_path(path: &[&str], key: &str) -> Vec<String> {
    path.iter()
        .copied()
        .chain(std::iter::once(key))
        .map(str::to_string)
        .collect()
}
