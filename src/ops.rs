//! Operations over nested containers.

use crate::{
    attr::AttrDict,
    error::{ContainerError, Result},
    ident::is_valid_identifier,
    value::{PathKey, Value},
};
use ahash::RandomState;
use indexmap::IndexMap;
use log::debug;

/// Reads a nested field, one [`AttrDict::get_field`] per step.
///
/// ```
/// use collectionish::{ops::get_path, AttrDict, Value};
///
/// let thing = AttrDict::try_from_pairs([("b", Value::dict([("ba", 1)]))]).unwrap();
/// assert_eq!(get_path(&thing, &["b", "ba"]), Ok(&Value::Int(1)));
/// ```
pub fn get_path<'a>(attr: &'a AttrDict, path: &[&str]) -> Result<&'a Value> {
    let (first, rest) = split_path(path)?;
    rest.iter()
        .try_fold(attr.get_field(first)?, |value, name| value.get_field(name))
}

/// Writes a nested field, the parent has to exist already.
pub fn set_path(attr: &mut AttrDict, path: &[&str], value: impl Into<Value>) -> Result<()> {
    let (last, parents) = match path.split_last() {
        Some(split) => split,
        None => return Err(empty_path()),
    };
    match split_path(parents) {
        Ok((first, rest)) => rest
            .iter()
            .try_fold(attr.get_field_mut(first)?, |value, name| value.get_field_mut(name))?
            .set_field(last, value),
        Err(_) => attr.set_field(last, value),
    }
}

fn split_path<'p, 's>(path: &'p [&'s str]) -> Result<(&'s str, &'p [&'s str])> {
    match path.split_first() {
        Some((first, rest)) => Ok((*first, rest)),
        None => Err(empty_path()),
    }
}

fn empty_path() -> ContainerError {
    ContainerError::AttributeNotFound {
        name: String::new(),
    }
}

/// Reads a nested item. An empty path returns `value` itself.
///
/// ```
/// use collectionish::{ops::get_item_path, PathKey, Value};
///
/// let nested = Value::list([Value::from(1), Value::list([1, 2, 3]), Value::from(2)]);
/// assert_eq!(get_item_path(&nested, &[PathKey::Index(-1)]), Ok(&Value::Int(2)));
/// let middle = [PathKey::Index(1), PathKey::Index(2)];
/// assert_eq!(get_item_path(&nested, &middle), Ok(&Value::Int(3)));
/// ```
pub fn get_item_path<'a>(value: &'a Value, path: &[PathKey]) -> Result<&'a Value> {
    path.iter().try_fold(value, |value, key| value.get_item(key))
}

/// Writes a nested item, every step but the last has to exist already.
pub fn set_item_path(root: &mut Value, path: &[PathKey], value: impl Into<Value>) -> Result<()> {
    let (last, parents) = path.split_last().ok_or(ContainerError::KeyNotFound {
        key: String::new(),
    })?;
    parents
        .iter()
        .try_fold(root, |value, key| value.get_item_mut(key))?
        .set_item(last, value)
}

/// Leaf values of nested `AttrDict`s keyed by their joined path.
///
/// ```
/// use collectionish::{ops::flatten, AttrDict, Value};
///
/// let thing = AttrDict::try_from_pairs([
///     ("this", Value::dict([("number", 1)])),
///     ("other", Value::from(2)),
/// ])
/// .unwrap();
/// let flat = flatten(&thing, ".");
/// assert_eq!(flat["this.number"], Value::Int(1));
/// assert_eq!(flat["other"], Value::Int(2));
/// ```
pub fn flatten(attr: &AttrDict, delimiter: &str) -> IndexMap<String, Value, RandomState> {
    let mut flat = IndexMap::default();
    flatten_into(&mut flat, None, attr, delimiter);
    flat
}

fn flatten_into(
    flat: &mut IndexMap<String, Value, RandomState>,
    prefix: Option<&str>,
    attr: &AttrDict,
    delimiter: &str,
) {
    for (key, value) in attr {
        let path = match prefix {
            Some(prefix) => format!("{}{}{}", prefix, delimiter, key),
            None => key.clone(),
        };
        match value {
            Value::Attr(nested) => flatten_into(flat, Some(&path), nested, delimiter),
            leaf => {
                flat.insert(path, leaf.clone());
            }
        }
    }
}

/// Like [`flatten`] but the result is an `AttrDict`, so joined paths must be valid keys.
pub fn flatten_attrs(attr: &AttrDict, delimiter: &str) -> Result<AttrDict> {
    let flat = flatten(attr, delimiter);
    if let Some(key) = flat.keys().find(|key| !is_valid_identifier(key)) {
        debug!("Flattened key {:?} is not a valid identifier", key);
        return Err(ContainerError::InvalidDelimiter {
            delimiter: delimiter.to_owned(),
        });
    }
    AttrDict::try_from_pairs(flat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentry::SENTRY;

    fn at(index: isize) -> PathKey {
        PathKey::Index(index)
    }

    fn teddy() -> AttrDict {
        AttrDict::try_from_pairs([
            (
                "this",
                Value::dict([("nested", Value::dict([("number", 1), ("name", 0)]))]),
            ),
            ("other", Value::from(2)),
        ])
        .unwrap()
    }

    #[test]
    fn paths() {
        let mut thing = teddy();
        assert_eq!(get_path(&thing, &["this", "nested", "number"]), Ok(&Value::Int(1)));
        assert_eq!(get_path(&thing, &["other"]), Ok(&Value::Int(2)));
        assert!(get_path(&thing, &["this", "missing"])
            .unwrap_err()
            .is_attribute_not_found("missing"));
        assert!(get_path(&thing, &["other", "missing"])
            .unwrap_err()
            .is_attribute_not_found("missing"));

        set_path(&mut thing, &["this", "nested", "name"], "teddy").unwrap();
        assert_eq!(
            get_path(&thing, &["this", "nested", "name"]),
            Ok(&Value::from("teddy"))
        );
        set_path(&mut thing, &["another"], 3).unwrap();
        assert_eq!(thing.get("another"), Some(&Value::Int(3)));
    }

    #[test]
    fn empty_paths() {
        let mut thing = teddy();
        assert!(get_path(&thing, &[]).is_err());
        assert!(set_path(&mut thing, &[], 1).is_err());

        let value = Value::from(1);
        assert_eq!(get_item_path(&value, &[]), Ok(&value));
    }

    #[test]
    fn set_path_through_sentry() {
        let mut thing = AttrDict::try_from_pairs([("guard", SENTRY)]).unwrap();
        assert_eq!(
            set_path(&mut thing, &["guard", "a"], 1),
            Err(ContainerError::ImmutableAttributeWrite {
                name: "a".to_owned()
            })
        );
    }

    #[test]
    fn set_path_rejects_bad_keys() {
        let mut thing = teddy();
        assert_eq!(
            set_path(&mut thing, &["this", "for"], 1),
            Err(ContainerError::ReservedOrMalformedKey {
                key: "for".to_owned()
            })
        );
    }

    #[test]
    fn item_paths() {
        let mut nested = Value::list([
            Value::from(1),
            Value::list([Value::from(1), Value::from(2), Value::list([1, 2, 3])]),
            Value::from(2),
        ]);
        assert_eq!(get_item_path(&nested, &[PathKey::Index(-1)]), Ok(&Value::Int(2)));
        assert_eq!(
            get_item_path(&nested, &[at(1), at(2), at(2)]),
            Ok(&Value::Int(3))
        );

        set_item_path(&mut nested, &[PathKey::Index(-1)], 3).unwrap();
        set_item_path(&mut nested, &[at(1), at(2), at(2)], 5).unwrap();
        assert_eq!(nested.to_string(), "[1, [1, 2, [1, 2, 5]], 3]");

        assert_eq!(
            get_item_path(&nested, &[PathKey::Index(3)]),
            Err(ContainerError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            get_item_path(&nested, &[at(0), at(0)]),
            Err(ContainerError::NotIndexable { found: "int" })
        );
    }

    #[test]
    fn item_paths_through_mappings() {
        let mut thing = Value::dict([
            ("a", Value::from(1)),
            ("b", Value::dict([("ba", 1), ("bb", 2)])),
        ]);
        set_item_path(&mut thing, &["a".into()], 2).unwrap();
        set_item_path(&mut thing, &["b".into(), "bb".into()], 4).unwrap();
        assert_eq!(thing.to_string(), "{'a': 2, 'b': {'ba': 1, 'bb': 4}}");

        let attr = Value::Attr(teddy());
        assert_eq!(
            get_item_path(&attr, &["this".into(), "nested".into(), "number".into()]),
            Ok(&Value::Int(1))
        );
        assert_eq!(
            get_item_path(&attr, &["that".into()]),
            Err(ContainerError::KeyNotFound {
                key: "that".to_owned()
            })
        );
    }

    #[test]
    fn flattening() {
        let flat = flatten(&teddy(), ".");
        assert_eq!(
            flat.keys().map(String::as_str).collect::<Vec<_>>(),
            ["this.nested.number", "this.nested.name", "other"]
        );
        assert_eq!(flat["this.nested.name"], Value::Int(0));
    }

    #[test]
    fn flattening_keeps_type() {
        let flat = flatten_attrs(&teddy(), "_").unwrap();
        let expected = AttrDict::try_from_pairs([
            ("this_nested_number", 1),
            ("this_nested_name", 0),
            ("other", 2),
        ])
        .unwrap();
        assert_eq!(flat, expected);
    }

    #[test]
    fn flattening_with_dots_fails() {
        assert_eq!(
            flatten_attrs(&teddy(), "."),
            Err(ContainerError::InvalidDelimiter {
                delimiter: ".".to_owned()
            })
        );
    }

    #[test]
    fn flattening_leaves_lists_alone() {
        let thing = AttrDict::try_from_pairs([("a", Value::list([Value::dict([("b", 1)])]))])
            .unwrap();
        let flat = flatten(&thing, ".");
        assert_eq!(flat.len(), 1);
        assert!(flat["a"].is_arraylike());
    }
}
