//! Dictionary with field access.

use crate::{
    error::{ContainerError, Result},
    ident::is_valid_identifier,
    value::Value,
};
use ahash::RandomState;
use indexmap::{map, IndexMap};
use log::{debug, trace};
use std::{
    fmt::{self, Display},
    ops::Index,
};

type Entries = IndexMap<String, Value, RandomState>;

/// A lightweight dictionary with field access.
///
/// Keys must be strings that are valid identifiers, which is what you want
/// when working with unpredictable json objects or the like. Structured data
/// is of course better off in a struct.
///
/// Nested mappings, and mappings inside of lists and tuples, are converted
/// to `AttrDict`s on insertion so fields keep working all the way down.
///
/// ```
/// use collectionish::{AttrDict, Value};
///
/// let mut the_sea = AttrDict::try_from_pairs([("crabs", 10), ("fish", 2)]).unwrap();
/// the_sea
///     .set_field("submarines", Value::dict([("sandwich", 0), ("actual", 1)]))
///     .unwrap();
/// assert_eq!(
///     the_sea.get_field("submarines").unwrap().get_field("actual"),
///     Ok(&Value::Int(1))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttrDict {
    entries: Entries,
}

impl AttrDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds from positional pairs followed by explicit fields.
    /// Later fields override earlier ones with the same key.
    pub fn from_parts<K, V, F, W>(
        pairs: impl IntoIterator<Item = (K, V)>,
        fields: impl IntoIterator<Item = (F, W)>,
    ) -> Result<Self>
    where
        K: Into<Value>,
        V: Into<Value>,
        F: Into<Value>,
        W: Into<Value>,
    {
        let mut dict = Self::new();
        for (key, value) in pairs {
            dict.set_item(key, value)?;
        }
        for (key, value) in fields {
            dict.set_item(key, value)?;
        }
        Ok(dict)
    }

    pub fn try_from_pairs<K: Into<Value>, V: Into<Value>>(
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self> {
        Self::from_parts(pairs, std::iter::empty::<(Value, Value)>())
    }

    /// Converts nested mappings to `AttrDict`s, lists and tuples are rebuilt
    /// with converted elements, anything else is returned as is.
    pub fn attrify(value: Value) -> Result<Value> {
        Ok(match value {
            Value::List(items) => Value::List(Self::attrify_all(items)?),
            Value::Tuple(items) => Value::Tuple(Self::attrify_all(items)?),
            Value::Dict(pairs) => {
                trace!("Converting dict of {} entries", pairs.len());
                Value::Attr(Self::try_from_pairs(pairs)?)
            }
            other => other,
        })
    }

    fn attrify_all(items: Vec<Value>) -> Result<Vec<Value>> {
        items.into_iter().map(Self::attrify).collect()
    }

    fn validate_key(key: Value) -> Result<String> {
        match key {
            Value::Str(key) if is_valid_identifier(&key) => Ok(key),
            Value::Str(key) => {
                debug!("Rejected key {:?}", key);
                Err(ContainerError::ReservedOrMalformedKey { key })
            }
            other => {
                debug!("Rejected key of type {}", other.type_name());
                Err(ContainerError::InvalidKeyType {
                    found: other.type_name(),
                })
            }
        }
    }

    /// Key that can be inserted. New keys are validated, existing ones aren't.
    fn prepare_key(&self, key: Value) -> Result<String> {
        match key {
            Value::Str(key) if self.entries.contains_key(&key) => Ok(key),
            key => Self::validate_key(key),
        }
    }

    pub fn get_field(&self, name: &str) -> Result<&Value> {
        self.entries
            .get(name)
            .ok_or_else(|| ContainerError::AttributeNotFound {
                name: name.to_owned(),
            })
    }

    pub fn get_field_mut(&mut self, name: &str) -> Result<&mut Value> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| ContainerError::AttributeNotFound {
                name: name.to_owned(),
            })
    }

    /// Same as [`AttrDict::set_item`].
    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.set_item(name, value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Item read, fails with `KeyNotFound` where [`AttrDict::get_field`]
    /// fails with `AttributeNotFound`.
    pub fn get_item(&self, key: &str) -> Result<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| ContainerError::KeyNotFound {
                key: key.to_owned(),
            })
    }

    /// Inserts or overwrites an entry.
    ///
    /// New keys must be strings and valid identifiers.
    /// The value is attrified before it's stored.
    /// On error nothing is changed.
    pub fn set_item(&mut self, key: impl Into<Value>, value: impl Into<Value>) -> Result<()> {
        let key = self.prepare_key(key.into())?;
        let value = Self::attrify(value.into())?;
        self.entries.insert(key, value);
        Ok(())
    }

    /// Sets all fields, or none of them if any of them fails.
    pub fn update<K: Into<Value>, V: Into<Value>>(
        &mut self,
        fields: impl IntoIterator<Item = (K, V)>,
    ) -> Result<()> {
        let mut prepared = Vec::new();
        for (key, value) in fields {
            let key = self.prepare_key(key.into())?;
            prepared.push((key, Self::attrify(value.into())?));
        }
        self.entries.extend(prepared);
        Ok(())
    }

    /// Removes the entry while keeping the order of the rest.
    pub fn pop(&mut self, key: &str) -> Result<Value> {
        self.remove(key).ok_or_else(|| ContainerError::KeyNotFound {
            key: key.to_owned(),
        })
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> + '_ {
        self.entries.values()
    }

    pub fn iter(&self) -> map::Iter<'_, String, Value> {
        self.entries.iter()
    }
}

impl TryFrom<Value> for AttrDict {
    type Error = ContainerError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Attr(attr) => Ok(attr),
            Value::Dict(pairs) => Self::try_from_pairs(pairs),
            other => Err(ContainerError::NotAMapping {
                found: other.type_name(),
            }),
        }
    }
}

impl Index<&str> for AttrDict {
    type Output = Value;

    /// Panics if the key doesn't exist.
    fn index(&self, key: &str) -> &Value {
        &self.entries[key]
    }
}

impl IntoIterator for AttrDict {
    type Item = (String, Value);
    type IntoIter = map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttrDict {
    type Item = (&'a String, &'a Value);
    type IntoIter = map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Display for AttrDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}': {}", key, value)?;
        }
        write!(f, "}}")
    }
}
