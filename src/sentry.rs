//! Falsey marker for when `None` actually means something.

use crate::{
    error::{ContainerError, Result},
    value::{Truthy, Value},
};
use std::fmt::{self, Debug, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A falsey singleton.
///
/// There is only one `Sentry` value, [`SENTRY`], and every `Sentry` is equal to it.
/// The private field keeps it from being built or extended outside of this crate:
///
/// ```compile_fail
/// let sentry = collectionish::Sentry { _private: () };
/// ```
///
/// Nor can it get any attributes:
///
/// ```
/// use collectionish::{ContainerError, Sentry, Truthy};
///
/// let sentry = Sentry::new();
/// assert!(!sentry.is_truthy());
/// assert!(matches!(
///     sentry.set_attr("apples", 1),
///     Err(ContainerError::ImmutableAttributeWrite { .. })
/// ));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sentry {
    #[cfg_attr(feature = "serde", serde(skip))]
    _private: (),
}

pub const SENTRY: Sentry = Sentry { _private: () };

impl Sentry {
    pub const fn new() -> Self {
        SENTRY
    }

    /// Always fails, Sentry is immutable.
    pub fn set_attr(&self, name: &str, _value: impl Into<Value>) -> Result<()> {
        log::debug!("Rejected write of attribute {:?} on Sentry", name);
        Err(ContainerError::ImmutableAttributeWrite {
            name: name.to_owned(),
        })
    }
}

impl Default for Sentry {
    fn default() -> Self {
        SENTRY
    }
}

impl Truthy for Sentry {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl From<Sentry> for bool {
    fn from(_: Sentry) -> bool {
        false
    }
}

impl Display for Sentry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sentry()")
    }
}

impl Debug for Sentry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}
