//! Closed set of values that containers can store.

mod hash_key;
mod number;

pub use hash_key::HashKey;
pub use number::{BinaryOp, CompareOp, Number};

use crate::{
    attr::AttrDict,
    error::{ContainerError, Result},
    sentry::Sentry,
};
use std::fmt::{self, Display};

/// Python like truthiness.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

/// A value stored in an [`AttrDict`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    /// Raw mapping with arbitrary keys, as it comes from the outside.
    /// Storing it in an [`AttrDict`] converts it to [`Value::Attr`].
    Dict(Vec<(Value, Value)>),
    Attr(AttrDict),
    Sentry(Sentry),
}

/// One step of an item path, see [`Value::get_item`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathKey {
    Key(String),
    /// Negative indices count from the end.
    Index(isize),
}

impl Value {
    pub fn list(items: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn tuple(items: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Value::Tuple(items.into_iter().map(Into::into).collect())
    }

    pub fn dict<K: Into<Value>, V: Into<Value>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Value::Dict(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Dict(_) => "dict",
            Self::Attr(_) => "AttrDict",
            Self::Sentry(_) => "Sentry",
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Dict(_) | Self::Attr(_))
    }

    /// Non mapping container. Strings don't count.
    pub fn is_arraylike(&self) -> bool {
        matches!(self, Self::List(_) | Self::Tuple(_))
    }

    pub fn is_hashable(&self) -> bool {
        HashKey::try_from(self).is_ok()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match *self {
            Self::Bool(b) => Some(Number::Bool(b)),
            Self::Int(i) => Some(Number::Int(i)),
            Self::Float(f) => Some(Number::Float(f)),
            _ => None,
        }
    }

    pub fn as_attr(&self) -> Option<&AttrDict> {
        match self {
            Self::Attr(attr) => Some(attr),
            _ => None,
        }
    }

    pub fn as_attr_mut(&mut self) -> Option<&mut AttrDict> {
        match self {
            Self::Attr(attr) => Some(attr),
            _ => None,
        }
    }

    /// Elements of a list or a tuple.
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) | Self::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Field read, only an [`AttrDict`] has fields.
    pub fn get_field(&self, name: &str) -> Result<&Value> {
        match self {
            Self::Attr(attr) => attr.get_field(name),
            _ => Err(ContainerError::AttributeNotFound {
                name: name.to_owned(),
            }),
        }
    }

    pub fn get_field_mut(&mut self, name: &str) -> Result<&mut Value> {
        match self {
            Self::Attr(attr) => attr.get_field_mut(name),
            _ => Err(ContainerError::AttributeNotFound {
                name: name.to_owned(),
            }),
        }
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        match self {
            Self::Attr(attr) => attr.set_field(name, value),
            Self::Sentry(sentry) => sentry.set_attr(name, value),
            other => Err(ContainerError::NotAMapping {
                found: other.type_name(),
            }),
        }
    }

    /// Item read of a mapping entry or a sequence element.
    pub fn get_item(&self, key: &PathKey) -> Result<&Value> {
        match (self, key) {
            (Self::Attr(attr), PathKey::Key(key)) => attr.get_item(key),
            (Self::Dict(pairs), PathKey::Key(key)) => pairs
                .iter()
                .rev()
                .find(|(k, _)| k.as_str() == Some(key.as_str()))
                .map(|(_, v)| v)
                .ok_or_else(|| ContainerError::KeyNotFound { key: key.clone() }),
            (Self::List(items) | Self::Tuple(items), PathKey::Index(index)) => {
                let position = resolve_index(*index, items.len())?;
                Ok(&items[position])
            }
            (other, _) => Err(ContainerError::NotIndexable {
                found: other.type_name(),
            }),
        }
    }

    pub fn get_item_mut(&mut self, key: &PathKey) -> Result<&mut Value> {
        match (self, key) {
            (Self::Attr(attr), PathKey::Key(key)) => attr
                .get_mut(key)
                .ok_or_else(|| ContainerError::KeyNotFound { key: key.clone() }),
            (Self::Dict(pairs), PathKey::Key(key)) => pairs
                .iter_mut()
                .rev()
                .find(|(k, _)| k.as_str() == Some(key.as_str()))
                .map(|(_, v)| v)
                .ok_or_else(|| ContainerError::KeyNotFound { key: key.clone() }),
            (Self::List(items) | Self::Tuple(items), PathKey::Index(index)) => {
                let position = resolve_index(*index, items.len())?;
                Ok(&mut items[position])
            }
            (other, _) => Err(ContainerError::NotIndexable {
                found: other.type_name(),
            }),
        }
    }

    /// Item write. Mappings get the key inserted, sequences need an existing index.
    pub fn set_item(&mut self, key: &PathKey, value: impl Into<Value>) -> Result<()> {
        match (self, key) {
            (Self::Attr(attr), PathKey::Key(key)) => attr.set_item(key.as_str(), value),
            (Self::Dict(pairs), PathKey::Key(key)) => {
                let value = value.into();
                match pairs.iter_mut().rev().find(|(k, _)| k.as_str() == Some(key.as_str())) {
                    Some((_, slot)) => *slot = value,
                    None => pairs.push((Value::Str(key.clone()), value)),
                }
                Ok(())
            }
            (Self::List(items) | Self::Tuple(items), PathKey::Index(index)) => {
                let position = resolve_index(*index, items.len())?;
                items[position] = value.into();
                Ok(())
            }
            (other, _) => Err(ContainerError::NotIndexable {
                found: other.type_name(),
            }),
        }
    }
}

fn resolve_index(index: isize, len: usize) -> Result<usize> {
    let position = if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index.unsigned_abs()).filter(|&position| position < len)
    };
    position.ok_or(ContainerError::IndexOutOfRange { index, len })
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::None | Self::Sentry(_) => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::List(items) | Self::Tuple(items) => !items.is_empty(),
            Self::Dict(pairs) => !pairs.is_empty(),
            Self::Attr(attr) => !attr.is_empty(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Bool(b) => Display::fmt(&Number::Bool(*b), f),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{:?}", x),
            Self::Str(s) => write_quoted(f, s),
            Self::List(items) => {
                write!(f, "[")?;
                write_separated(f, items)?;
                write!(f, "]")
            }
            Self::Tuple(items) => {
                write!(f, "(")?;
                write_separated(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Self::Dict(pairs) => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Self::Attr(attr) => Display::fmt(attr, f),
            Self::Sentry(sentry) => Display::fmt(sentry, f),
        }
    }
}

/// Single quoted, only quotes, backslashes and unprintable characters are escaped.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "'")?;
    for c in s.chars() {
        match c {
            '\'' => write!(f, "\\'")?,
            '"' => write!(f, "\"")?,
            c => write!(f, "{}", c.escape_debug())?,
        }
    }
    write!(f, "'")
}

fn write_separated(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::None
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! value_from {
    ($variant:ident as $target:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::$variant(<$target>::from(n))
                }
            }
        )*
    };
}

value_from!(Int as i64: i8, i16, i32, i64, u8, u16, u32);
value_from!(Float as f64: f32, f64);
value_from!(Str as String: &str, String, char);

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Bool(b) => Value::Bool(b),
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<AttrDict> for Value {
    fn from(attr: AttrDict) -> Self {
        Value::Attr(attr)
    }
}

impl From<Sentry> for Value {
    fn from(sentry: Sentry) -> Self {
        Value::Sentry(sentry)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::None, Into::into)
    }
}

impl From<&str> for PathKey {
    fn from(key: &str) -> Self {
        PathKey::Key(key.to_owned())
    }
}

impl From<isize> for PathKey {
    fn from(index: isize) -> Self {
        PathKey::Index(index)
    }
}
