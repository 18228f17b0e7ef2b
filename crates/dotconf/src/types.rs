//! Core type definitions for configuration trees.

use indexmap::IndexMap;
use thiserror::Error;
use yaml_rust2::Yaml;

/// A node in a configuration tree.
///
/// This is the shape produced by decoding JSON/YAML/INI-like sources: maps
/// whose values may themselves be maps, ordered sequences, or scalars. The
/// source data's native representation is one container kind with two use
/// patterns (positional and keyed), so the keyed accessors on this type
/// accept decimal index strings against lists and ordinary string keys
/// against maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// An opaque leaf value (string, number, boolean, null).
    ///
    /// Never inspected by any operation, only cloned and compared.
    Scalar(Yaml),

    /// An ordered sequence, indexed `0..n-1`.
    List(Vec<ConfigValue>),

    /// An ordered mapping with unique string keys.
    ///
    /// Keys keep their first-insert position; re-inserting an existing key
    /// updates the value in place.
    Map(IndexMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Create an empty map container.
    pub fn empty_map() -> Self {
        ConfigValue::Map(IndexMap::new())
    }

    /// Check if this is a scalar value.
    pub fn is_scalar(&self) -> bool {
        matches!(self, ConfigValue::Scalar(_))
    }

    /// Check if this is a list value.
    pub fn is_list(&self) -> bool {
        matches!(self, ConfigValue::List(_))
    }

    /// Check if this is a map value.
    pub fn is_map(&self) -> bool {
        matches!(self, ConfigValue::Map(_))
    }

    /// Check if this is a container (list or map).
    pub fn is_container(&self) -> bool {
        matches!(self, ConfigValue::List(_) | ConfigValue::Map(_))
    }

    /// Check whether this container is used positionally: does a value exist
    /// at the key/index `0`?
    ///
    /// A non-empty list is list-shaped. A map is list-shaped iff it contains
    /// the key `"0"` (which is how a list looks after positional keys have
    /// been stringified, e.g. by [`crate::flatten`] or by a gap-leaving
    /// removal). Scalars and empty containers are not list-shaped.
    ///
    /// The merge policy decides replace-vs-merge with this predicate; it is
    /// evaluated explicitly, never inferred from the underlying
    /// representation.
    pub fn is_list_shaped(&self) -> bool {
        match self {
            ConfigValue::List(items) => !items.is_empty(),
            ConfigValue::Map(entries) => entries.contains_key("0"),
            ConfigValue::Scalar(_) => false,
        }
    }

    /// Check if this is a container with no entries.
    pub fn is_empty_container(&self) -> bool {
        match self {
            ConfigValue::List(items) => items.is_empty(),
            ConfigValue::Map(entries) => entries.is_empty(),
            ConfigValue::Scalar(_) => false,
        }
    }

    /// Get the leaf value if this is a scalar.
    pub fn as_yaml(&self) -> Option<&Yaml> {
        match self {
            ConfigValue::Scalar(yaml) => Some(yaml),
            _ => None,
        }
    }

    /// Get the items if this is a list.
    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the entries if this is a map.
    pub fn as_map(&self) -> Option<&IndexMap<String, ConfigValue>> {
        match self {
            ConfigValue::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a direct child by key.
    ///
    /// Maps look up the key as-is; numeric-looking keys against a map are
    /// ordinary string keys. Lists accept only a canonical decimal index
    /// (`"0"`, `"17"`; not `"01"` or `"+1"`). Scalars have no children.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        match self {
            ConfigValue::Map(entries) => entries.get(key),
            ConfigValue::List(items) => parse_index(key).and_then(|index| items.get(index)),
            ConfigValue::Scalar(_) => None,
        }
    }

    /// Mutable variant of [`ConfigValue::get`].
    pub fn get_mut(&mut self, key: &str) -> Option<&mut ConfigValue> {
        match self {
            ConfigValue::Map(entries) => entries.get_mut(key),
            ConfigValue::List(items) => match parse_index(key) {
                Some(index) => items.get_mut(index),
                None => None,
            },
            ConfigValue::Scalar(_) => None,
        }
    }

    /// Assign a direct child, overwriting whatever was there.
    ///
    /// Maps insert in order (existing keys keep their position). Lists accept
    /// an in-range index (overwrite) or the one-past-the-end index (append);
    /// any other key first demotes the list to a map keyed by stringified
    /// indices, then inserts. A scalar receiver is replaced by an empty map
    /// before the child is assigned.
    pub fn insert(&mut self, key: &str, value: ConfigValue) {
        if !self.is_container() {
            *self = ConfigValue::empty_map();
        }
        let demote = match &*self {
            ConfigValue::List(items) => list_slot(key, items.len()).is_none(),
            _ => false,
        };
        if demote {
            self.demote_to_map();
        }
        match self {
            ConfigValue::Map(entries) => {
                entries.insert(key.to_string(), value);
            }
            ConfigValue::List(items) => {
                let index = list_slot(key, items.len()).expect("checked before demotion");
                if index == items.len() {
                    items.push(value);
                } else {
                    items[index] = value;
                }
            }
            ConfigValue::Scalar(_) => unreachable!("coerced to a container above"),
        }
    }

    /// Remove a direct child, if present.
    ///
    /// Maps remove the key, keeping the order of the remaining entries.
    /// Removing the tail index of a list pops it; removing an interior index
    /// leaves a hole, so the list demotes to a map keyed by stringified
    /// indices with the survivors keeping their positions and no re-indexing.
    /// Anything else is a no-op.
    pub fn remove(&mut self, key: &str) {
        if let ConfigValue::Map(entries) = self {
            entries.shift_remove(key);
            return;
        }
        let len = match &*self {
            ConfigValue::List(items) => items.len(),
            _ => return,
        };
        let Some(index) = parse_index(key) else {
            return;
        };
        if index >= len {
            return;
        }
        if index + 1 == len {
            if let ConfigValue::List(items) = self {
                items.pop();
            }
        } else {
            self.demote_to_map();
            if let ConfigValue::Map(entries) = self {
                entries.shift_remove(key);
            }
        }
    }

    /// Consume the value, yielding its `(key, child)` pairs in order.
    ///
    /// List entries carry their stringified decimal index as the key.
    /// Scalars yield no pairs.
    pub fn into_entries(self) -> Vec<(String, ConfigValue)> {
        match self {
            ConfigValue::Map(entries) => entries.into_iter().collect(),
            ConfigValue::List(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect(),
            ConfigValue::Scalar(_) => Vec::new(),
        }
    }

    /// Rebuild a list as a map keyed by stringified indices.
    fn demote_to_map(&mut self) {
        let ConfigValue::List(items) = self else {
            return;
        };
        let entries = items
            .drain(..)
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect();
        *self = ConfigValue::Map(entries);
    }
}

/// Parse a canonical decimal index: all ASCII digits, no leading zero unless
/// the key is exactly `"0"`.
fn parse_index(key: &str) -> Option<usize> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

/// A valid assignment slot in a list of length `len`: an in-range index, or
/// the one-past-the-end index for appending.
fn list_slot(key: &str, len: usize) -> Option<usize> {
    parse_index(key).filter(|index| *index <= len)
}

/// Errors that can occur during configuration operations.
///
/// Everything else is a non-error: lookups on missing paths yield `None`,
/// removals of missing paths are silent no-ops, and type mismatches during
/// traversal behave as "not found". Both errors here are raised before any
/// mutation begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A path operation was given an empty path string.
    #[error("config path must not be empty")]
    EmptyPath,

    /// [`crate::overlay`] was called with zero override layers.
    #[error("overlay requires at least one override layer")]
    NoLayers,
}
