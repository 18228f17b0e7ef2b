//! Conversion between decoded YAML values and configuration trees.
//!
//! No parsing happens here: callers decode their source however they like
//! (YAML, JSON, anything that lands in a [`Yaml`] value) and hand in the
//! decoded document.

use crate::types::ConfigValue;
use yaml_rust2::Yaml;

/// Convert a decoded [`Yaml`] document into a [`ConfigValue`] tree.
///
/// Arrays become lists and hashes become maps; hash entries with non-string
/// keys are dropped. Everything else is carried through as an opaque scalar
/// leaf.
pub fn config_value_from_yaml(yaml: Yaml) -> ConfigValue {
    match yaml {
        Yaml::Array(items) => {
            ConfigValue::List(items.into_iter().map(config_value_from_yaml).collect())
        }
        Yaml::Hash(hash) => {
            let entries = hash
                .into_iter()
                .filter_map(|(key, value)| {
                    key.as_str()
                        .map(str::to_string)
                        .map(|key| (key, config_value_from_yaml(value)))
                })
                .collect();
            ConfigValue::Map(entries)
        }
        leaf => ConfigValue::Scalar(leaf),
    }
}

/// Convert a [`ConfigValue`] tree back into a plain [`Yaml`] value, for
/// callers that re-encode a manipulated tree.
pub fn yaml_from_config_value(value: ConfigValue) -> Yaml {
    match value {
        ConfigValue::Scalar(leaf) => leaf,
        ConfigValue::List(items) => {
            Yaml::Array(items.into_iter().map(yaml_from_config_value).collect())
        }
        ConfigValue::Map(entries) => {
            let mut hash = yaml_rust2::yaml::Hash::new();
            for (key, value) in entries {
                hash.insert(Yaml::String(key), yaml_from_config_value(value));
            }
            Yaml::Hash(hash)
        }
    }
}
