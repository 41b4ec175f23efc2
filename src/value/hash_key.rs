use super::Value;
use crate::{
    error::{ContainerError, Result},
    sentry::Sentry,
};
use ordered_float::OrderedFloat;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hashable subset of [`Value`].
///
/// Floats hash by their bits through `OrderedFloat`, so `NaN` equals itself here.
/// Variants are compared strictly, `Int(1)` and `Float(1.0)` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HashKey {
    None,
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    Str(String),
    Tuple(Vec<HashKey>),
    Sentry(Sentry),
}

impl TryFrom<&Value> for HashKey {
    type Error = ContainerError;

    fn try_from(value: &Value) -> Result<Self> {
        Ok(match value {
            Value::None => HashKey::None,
            Value::Bool(b) => HashKey::Bool(*b),
            Value::Int(i) => HashKey::Int(*i),
            Value::Float(f) => HashKey::Float(OrderedFloat(*f)),
            Value::Str(s) => HashKey::Str(s.clone()),
            Value::Tuple(items) => HashKey::Tuple(
                items
                    .iter()
                    .map(HashKey::try_from)
                    .collect::<Result<_>>()?,
            ),
            Value::Sentry(sentry) => HashKey::Sentry(*sentry),
            other @ (Value::List(_) | Value::Dict(_) | Value::Attr(_)) => {
                return Err(ContainerError::UnhashableElement {
                    found: other.type_name(),
                })
            }
        })
    }
}

impl TryFrom<Value> for HashKey {
    type Error = ContainerError;

    fn try_from(value: Value) -> Result<Self> {
        HashKey::try_from(&value)
    }
}

impl From<HashKey> for Value {
    fn from(key: HashKey) -> Self {
        match key {
            HashKey::None => Value::None,
            HashKey::Bool(b) => Value::Bool(b),
            HashKey::Int(i) => Value::Int(i),
            HashKey::Float(f) => Value::Float(f.into_inner()),
            HashKey::Str(s) => Value::Str(s),
            HashKey::Tuple(items) => Value::Tuple(items.into_iter().map(Value::from).collect()),
            HashKey::Sentry(sentry) => Value::Sentry(sentry),
        }
    }
}

impl From<&str> for HashKey {
    fn from(s: &str) -> Self {
        HashKey::Str(s.to_owned())
    }
}

impl From<i64> for HashKey {
    fn from(i: i64) -> Self {
        HashKey::Int(i)
    }
}

impl Display for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&Value::from(self.clone()), f)
    }
}
