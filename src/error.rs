use std::fmt::{self, Display};

pub type Result<T> = std::result::Result<T, ContainerError>;

/// Container level errors.
/// All of them are local to the call that produced them, nothing is left half done.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerError {
    /// Key of a non string type was used where a string key is required.
    InvalidKeyType { found: &'static str },
    /// String key is a keyword or isn't a valid identifier.
    ReservedOrMalformedKey { key: String },
    /// Field read of a missing field.
    AttributeNotFound { name: String },
    /// Item read of a missing key.
    KeyNotFound { key: String },
    /// Right hand side isn't a number nor a compatible mapping.
    UnsupportedOperand { op: &'static str, found: &'static str },
    /// Ordering comparison between mappings with different keys.
    KeySetMismatch {
        op: &'static str,
        missing: Vec<String>,
        extra: Vec<String>,
    },
    UnhashableElement { found: &'static str },
    /// Sentry doesn't have attributes, nor can it get any.
    ImmutableAttributeWrite { name: String },
    ZeroDivision { op: &'static str },
    /// Aggregate that has no value for an empty mapping.
    EmptyAggregate { op: &'static str },
    IndexOutOfRange { index: isize, len: usize },
    NotIndexable { found: &'static str },
    NotAMapping { found: &'static str },
    /// Delimiter would produce keys that can't be used as fields.
    InvalidDelimiter { delimiter: String },
}

impl ContainerError {
    pub fn unsupported(op: &'static str, found: &'static str) -> Self {
        Self::UnsupportedOperand { op, found }
    }

    pub fn key_set_mismatch<'a>(
        op: &'static str,
        left: impl Iterator<Item = &'a String> + Clone,
        right: impl Iterator<Item = &'a String> + Clone,
    ) -> Self {
        let missing = left
            .clone()
            .filter(|key| !right.clone().any(|other| other == *key))
            .cloned()
            .collect();
        let extra = right
            .filter(|key| !left.clone().any(|other| other == *key))
            .cloned()
            .collect();
        Self::KeySetMismatch { op, missing, extra }
    }

    pub fn is_attribute_not_found(&self, name: &str) -> bool {
        match self {
            Self::AttributeNotFound { name: missing } => missing == name,
            _ => false,
        }
    }
}

impl Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyType { found } => {
                write!(f, "AttrDict keys must be strings, found {}.", found)
            }
            Self::ReservedOrMalformedKey { key } => write!(
                f,
                "AttrDict keys must be valid identifiers, {:?} isn't one.",
                key
            ),
            Self::AttributeNotFound { name } => write!(f, "No attribute named {:?}.", name),
            Self::KeyNotFound { key } => write!(f, "Key {:?} doesn't exist.", key),
            Self::UnsupportedOperand { op, found } => write!(
                f,
                "Unsupported operand of type {} for operation '{}'.",
                found, op
            ),
            Self::KeySetMismatch { op, missing, extra } => write!(
                f,
                "Operation '{}' requires identical keys, right side is missing {:?} and has extra {:?}.",
                op, missing, extra
            ),
            Self::UnhashableElement { found } => write!(f, "Unhashable type {}.", found),
            Self::ImmutableAttributeWrite { name } => {
                write!(f, "Can't set attribute {:?}, Sentry is immutable.", name)
            }
            Self::ZeroDivision { op } => write!(f, "Division by zero in operation '{}'.", op),
            Self::EmptyAggregate { op } => write!(f, "Operation '{}' of an empty mapping.", op),
            Self::IndexOutOfRange { index, len } => write!(
                f,
                "Index {} is out of range for a sequence of length {}.",
                index, len
            ),
            Self::NotIndexable { found } => write!(f, "Type {} can't be indexed.", found),
            Self::NotAMapping { found } => write!(f, "Expected a mapping, found {}.", found),
            Self::InvalidDelimiter { delimiter } => write!(
                f,
                "Can't use delimiter {:?} with AttrDict, try a different delimiter such as an underscore or flatten into a plain map.",
                delimiter
            ),
        }
    }
}

impl std::error::Error for ContainerError {}
