//! Deep override merging of configuration trees.
//!
//! Layers apply left to right onto a base tree: map-shaped substructures
//! merge key by key recursively, while scalars and list-shaped substructures
//! replace wholesale. A list in a later layer always supersedes whatever sits
//! at the same key; there is no concatenation or element-wise merge.

use crate::types::{ConfigError, ConfigValue};
use yaml_rust2::Yaml;

/// Merge override layers onto a base tree, first layer = lowest priority.
///
/// For each `(key, value)` pair of a layer, the pair *merges* into the
/// accumulator when all of the following hold, and *replaces* the value at
/// `key` otherwise:
///
/// 1. `key` already exists in the accumulator;
/// 2. the layer's value is a container;
/// 3. the layer's value is not list-shaped (see
///    [`ConfigValue::is_list_shaped`]);
/// 4. the layer's value is non-empty, or the existing value is not
///    list-shaped.
///
/// Rule 4 gives empty containers their meaning as overrides: an empty
/// override *clears* a list but is a deliberate no-op against a map.
/// Replacement covers everything else (scalars, lists, brand-new keys), even
/// when the shapes are incompatible: a scalar replaced by a map, or vice
/// versa, is not an error.
///
/// Calling with zero layers fails with [`ConfigError::NoLayers`]: the
/// operation is meaningless with nothing to merge in.
pub fn overlay(base: ConfigValue, layers: Vec<ConfigValue>) -> Result<ConfigValue, ConfigError> {
    if layers.is_empty() {
        return Err(ConfigError::NoLayers);
    }
    Ok(layers.into_iter().fold(base, apply_layer))
}

/// Merge a single layer onto the accumulator.
fn apply_layer(mut base: ConfigValue, layer: ConfigValue) -> ConfigValue {
    for (key, value) in layer.into_entries() {
        if can_merge(&base, &key, &value) {
            let child = base.get_mut(&key).expect("can_merge requires the key");
            let existing = std::mem::replace(child, ConfigValue::Scalar(Yaml::Null));
            let inner_base = if existing.is_container() {
                existing
            } else {
                ConfigValue::empty_map()
            };
            let merged = apply_layer(inner_base, value);
            base.insert(&key, merged);
        } else {
            base.insert(&key, value);
        }
    }
    base
}

/// The merge-vs-replace decision rule.
fn can_merge(base: &ConfigValue, key: &str, value: &ConfigValue) -> bool {
    let Some(existing) = base.get(key) else {
        return false;
    };
    value.is_container()
        && !value.is_list_shaped()
        && (!value.is_empty_container() || !existing.is_list_shaped())
}
