//! Dot-notation manipulation of nested configuration trees.
//!
//! This crate operates on the shape produced by decoding JSON/YAML/INI-like
//! sources (maps whose values may themselves be maps, ordered sequences, or
//! scalars) and provides path-based access, deep override merging, and a
//! flatten/expand transform. It does no parsing itself: decoding is the
//! caller's concern, and [`config_value_from_yaml`] adapts an
//! already-decoded document at the boundary.
//!
//! # Key concepts
//!
//! - [`ConfigValue`]: the tree node, either an opaque scalar leaf, a list,
//!   or an insertion-ordered map.
//! - [`get`] / [`set`] / [`forget`]: navigate and mutate by dotted path
//!   (`"format.html.theme"`).
//! - [`overlay`]: deep-merge override layers onto a base tree; map-shaped
//!   substructure merges key by key, lists and scalars replace wholesale.
//! - [`flatten`] / [`expand`]: transform between a nested tree and a flat
//!   mapping keyed by full dotted paths.
//!
//! All operations are synchronous, pure-or-in-place transformations over a
//! caller-owned tree; nothing is retained between calls.
//!
//! # Example
//!
//! ```rust
//! use dotconf::{flatten, get, overlay, set, ConfigValue};
//! use yaml_rust2::Yaml;
//!
//! # fn main() -> Result<(), dotconf::ConfigError> {
//! let mut base = ConfigValue::empty_map();
//! set(&mut base, "server.host", ConfigValue::Scalar(Yaml::String("localhost".into())))?;
//! set(&mut base, "server.port", ConfigValue::Scalar(Yaml::Integer(8080)))?;
//!
//! let mut layer = ConfigValue::empty_map();
//! set(&mut layer, "server.port", ConfigValue::Scalar(Yaml::Integer(9090)))?;
//! let merged = overlay(base, vec![layer])?;
//!
//! let port = get(&merged, "server.port")?
//!     .and_then(ConfigValue::as_yaml)
//!     .and_then(Yaml::as_i64);
//! assert_eq!(port, Some(9090));
//! assert_eq!(flatten(&merged).len(), 2);
//! # Ok(())
//! # }
//! ```

mod convert;
mod flatten;
mod merge;
mod path;
mod types;

pub use types::{ConfigError, ConfigValue};

pub use path::{forget, get, set};

pub use merge::overlay;

pub use flatten::{expand, flatten};

pub use convert::{config_value_from_yaml, yaml_from_config_value};
