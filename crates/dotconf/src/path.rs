//! Dotted-path access into a configuration tree.
//!
//! Paths are key segments separated by `.`. There is no escaping mechanism,
//! so a key containing a literal dot cannot be addressed; that is an inherent
//! limitation of the syntax. Interior empty segments (`"a..b"`) are ordinary
//! empty-string keys.

use crate::types::{ConfigError, ConfigValue};

/// Look up the value at a dotted path.
///
/// Walks the tree one segment at a time; every intermediate step must be a
/// container holding the next segment (lists are addressed by decimal index,
/// maps by string key). Any miss or type mismatch along the way yields
/// `Ok(None)`; callers supply their fallback with `unwrap_or`. A
/// single-segment path degenerates to a direct top-level lookup.
///
/// An empty path is a caller error and fails fast with
/// [`ConfigError::EmptyPath`].
pub fn get<'a>(
    tree: &'a ConfigValue,
    path: &str,
) -> Result<Option<&'a ConfigValue>, ConfigError> {
    if path.is_empty() {
        return Err(ConfigError::EmptyPath);
    }
    let mut node = tree;
    for segment in path.split('.') {
        match node.get(segment) {
            Some(child) => node = child,
            None => return Ok(None),
        }
    }
    Ok(Some(node))
}

/// Assign `value` at a dotted path, mutating the tree in place.
///
/// Intermediate segments that are missing, or that hold a non-container, are
/// overwritten with a fresh empty map before descending; any scalar
/// previously at that position is silently discarded. The final segment is
/// assigned through [`ConfigValue::insert`], overwriting whatever was there.
pub fn set(tree: &mut ConfigValue, path: &str, value: ConfigValue) -> Result<(), ConfigError> {
    if path.is_empty() {
        return Err(ConfigError::EmptyPath);
    }
    let segments: Vec<&str> = path.split('.').collect();
    let (last, parents) = segments
        .split_last()
        .expect("split yields at least one segment");
    let mut node = tree;
    for segment in parents {
        node = descend(node, segment);
    }
    node.insert(last, value);
    Ok(())
}

/// Remove the value at a dotted path, mutating the tree in place.
///
/// If any intermediate segment is missing or not a container the operation
/// is a silent no-op. Removal of the final segment follows
/// [`ConfigValue::remove`]: in particular, removing an interior list index
/// leaves a gap rather than re-indexing.
pub fn forget(tree: &mut ConfigValue, path: &str) -> Result<(), ConfigError> {
    if path.is_empty() {
        return Err(ConfigError::EmptyPath);
    }
    let segments: Vec<&str> = path.split('.').collect();
    let (last, parents) = segments
        .split_last()
        .expect("split yields at least one segment");
    let mut node = tree;
    for segment in parents {
        node = match node.get_mut(segment) {
            Some(child) if child.is_container() => child,
            _ => return Ok(()),
        };
    }
    node.remove(last);
    Ok(())
}

/// Step into `segment`, creating or overwriting so the child is a container.
fn descend<'a>(node: &'a mut ConfigValue, segment: &str) -> &'a mut ConfigValue {
    let fresh = match node.get(segment) {
        Some(child) => !child.is_container(),
        None => true,
    };
    if fresh {
        node.insert(segment, ConfigValue::empty_map());
    }
    node.get_mut(segment).expect("inserted above")
}

#[cfg(test)]
mod tests {
    use super::*;
    use yaml_rust2::Yaml;

    fn scalar(s: &str) -> ConfigValue {
        ConfigValue::Scalar(Yaml::String(s.into()))
    }

    fn list(items: Vec<ConfigValue>) -> ConfigValue {
        ConfigValue::List(items)
    }

    fn map(entries: Vec<(&str, ConfigValue)>) -> ConfigValue {
        ConfigValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    fn sample() -> ConfigValue {
        map(vec![(
            "one",
            map(vec![("two", map(vec![("three", scalar("value"))]))]),
        )])
    }

    #[test]
    fn test_get_string_value() {
        let config = sample();
        assert_eq!(get(&config, "one.two.three").unwrap(), Some(&scalar("value")));
    }

    #[test]
    fn test_get_section() {
        let config = sample();
        assert_eq!(
            get(&config, "one.two").unwrap(),
            Some(&map(vec![("three", scalar("value"))]))
        );
    }

    #[test]
    fn test_get_list_element_by_index() {
        let config = map(vec![(
            "one",
            map(vec![("two", list(vec![scalar("hello"), scalar("world")]))]),
        )]);
        assert_eq!(get(&config, "one.two.1").unwrap(), Some(&scalar("world")));
    }

    #[test]
    fn test_get_missing_yields_none() {
        let config = sample();
        // walking past a leaf is "not found", not an error
        assert_eq!(get(&config, "one.two.three.four").unwrap(), None);
        assert_eq!(get(&config, "missing").unwrap(), None);
        assert_eq!(
            get(&config, "one.two.three.four")
                .unwrap()
                .unwrap_or(&scalar("dflt")),
            &scalar("dflt")
        );
    }

    #[test]
    fn test_get_top_level() {
        let config = map(vec![("only", scalar("v"))]);
        assert_eq!(get(&config, "only").unwrap(), Some(&scalar("v")));
    }

    #[test]
    fn test_get_empty_path_fails() {
        let config = sample();
        assert_eq!(get(&config, ""), Err(ConfigError::EmptyPath));
    }

    #[test]
    fn test_set_new_sibling() {
        let mut config = sample();
        set(&mut config, "one.twob", scalar("hello world")).unwrap();
        assert_eq!(
            config,
            map(vec![(
                "one",
                map(vec![
                    ("two", map(vec![("three", scalar("value"))])),
                    ("twob", scalar("hello world")),
                ]),
            )])
        );
    }

    #[test]
    fn test_set_creates_intermediates() {
        let mut config = ConfigValue::empty_map();
        set(&mut config, "a.b.c", scalar("deep")).unwrap();
        assert_eq!(
            config,
            map(vec![("a", map(vec![("b", map(vec![("c", scalar("deep"))]))]))])
        );
    }

    #[test]
    fn test_set_replaces_leaf() {
        let mut config = sample();
        set(&mut config, "one.two.three", scalar("hello world")).unwrap();
        assert_eq!(
            get(&config, "one.two.three").unwrap(),
            Some(&scalar("hello world"))
        );
    }

    #[test]
    fn test_set_overwrites_scalar_intermediate() {
        let mut config = sample();
        // "three" holds a scalar; descending through it discards the scalar
        set(&mut config, "one.two.three.four", scalar("deep")).unwrap();
        assert_eq!(
            get(&config, "one.two.three").unwrap(),
            Some(&map(vec![("four", scalar("deep"))]))
        );
    }

    #[test]
    fn test_set_list_index() {
        let mut config = map(vec![("items", list(vec![scalar("a"), scalar("b")]))]);
        set(&mut config, "items.1", scalar("B")).unwrap();
        assert_eq!(
            config,
            map(vec![("items", list(vec![scalar("a"), scalar("B")]))])
        );
    }

    #[test]
    fn test_set_on_scalar_root_coerces() {
        let mut config = scalar("not a container");
        set(&mut config, "a.b", scalar("v")).unwrap();
        assert_eq!(config, map(vec![("a", map(vec![("b", scalar("v"))]))]));
    }

    #[test]
    fn test_set_empty_path_fails() {
        let mut config = sample();
        assert_eq!(
            set(&mut config, "", scalar("v")),
            Err(ConfigError::EmptyPath)
        );
        assert_eq!(config, sample());
    }

    #[test]
    fn test_forget_leaf() {
        let mut config = sample();
        forget(&mut config, "one.two.three").unwrap();
        assert_eq!(config, map(vec![("one", map(vec![("two", map(vec![]))]))]));
    }

    #[test]
    fn test_forget_section() {
        let mut config = sample();
        forget(&mut config, "one.two").unwrap();
        assert_eq!(config, map(vec![("one", map(vec![]))]));
    }

    #[test]
    fn test_forget_missing_is_noop() {
        let mut config = sample();
        forget(&mut config, "one.two.missing").unwrap();
        assert_eq!(config, sample());
    }

    #[test]
    fn test_forget_missing_section_is_noop() {
        let mut config = sample();
        forget(&mut config, "one.missing.three").unwrap();
        assert_eq!(config, sample());
    }

    #[test]
    fn test_forget_through_scalar_is_noop() {
        let mut config = sample();
        forget(&mut config, "one.two.three.four").unwrap();
        assert_eq!(config, sample());
    }

    #[test]
    fn test_forget_interior_list_index_leaves_gap() {
        let mut config = map(vec![(
            "items",
            list(vec![scalar("a"), scalar("b"), scalar("c")]),
        )]);
        forget(&mut config, "items.0").unwrap();
        assert_eq!(
            config,
            map(vec![(
                "items",
                map(vec![("1", scalar("b")), ("2", scalar("c"))]),
            )])
        );
    }

    #[test]
    fn test_forget_empty_path_fails() {
        let mut config = sample();
        assert_eq!(forget(&mut config, ""), Err(ConfigError::EmptyPath));
    }
}
