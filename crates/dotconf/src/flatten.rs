//! Transform between a nested tree and a flat dotted-key mapping.

use crate::path::set;
use crate::types::{ConfigError, ConfigValue};
use indexmap::IndexMap;
use yaml_rust2::Yaml;

/// Flatten a tree into a single-level mapping keyed by full dotted paths.
///
/// Depth-first walk: containers recurse with `prefix + key + "."`, scalars
/// emit `prefix + key -> leaf`. List indices stringify and join exactly like
/// map keys (`a.b.0`, `a.b.1`). The result's order is the depth-first
/// visitation order: each sibling group is emitted in full before the walk
/// moves on. Empty containers contribute nothing, and a scalar root flattens
/// to an empty mapping.
pub fn flatten(tree: &ConfigValue) -> IndexMap<String, Yaml> {
    let mut flat = IndexMap::new();
    flatten_into(tree, "", &mut flat);
    flat
}

fn flatten_into(tree: &ConfigValue, prefix: &str, flat: &mut IndexMap<String, Yaml>) {
    match tree {
        ConfigValue::Map(entries) => {
            for (key, value) in entries {
                flatten_entry(key, value, prefix, flat);
            }
        }
        ConfigValue::List(items) => {
            for (index, value) in items.iter().enumerate() {
                flatten_entry(&index.to_string(), value, prefix, flat);
            }
        }
        ConfigValue::Scalar(_) => {}
    }
}

fn flatten_entry(key: &str, value: &ConfigValue, prefix: &str, flat: &mut IndexMap<String, Yaml>) {
    match value {
        ConfigValue::Scalar(leaf) => {
            flat.insert(format!("{prefix}{key}"), leaf.clone());
        }
        _ => flatten_into(value, &format!("{prefix}{key}."), flat),
    }
}

/// Expand a flat dotted-key mapping back into a nested tree.
///
/// Keys are first sorted ascending in lexicographic byte order, and that
/// ordering is observable: containers are built by single-pass insertion as
/// the sorted keys are processed, so it fixes the insertion order of every
/// freshly created map. Each pair is then assigned with [`set`], inheriting
/// its semantics, including overwrite-on-mismatch for intermediate segments
/// and [`ConfigError::EmptyPath`] for an empty key.
///
/// Containers are always rebuilt as maps: a path segment that was a list
/// index under [`flatten`] comes back as a stringified-integer map key, never
/// re-promoted to a list. Round-trips are exact only for trees without lists.
pub fn expand(flat: IndexMap<String, Yaml>) -> Result<ConfigValue, ConfigError> {
    let mut pairs: Vec<(String, Yaml)> = flat.into_iter().collect();
    pairs.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut tree = ConfigValue::empty_map();
    for (path, leaf) in pairs {
        set(&mut tree, &path, ConfigValue::Scalar(leaf))?;
    }
    Ok(tree)
}
