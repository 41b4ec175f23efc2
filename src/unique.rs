//! Immutable sequence of unique items.

use crate::{
    error::Result,
    value::{HashKey, Value},
};
use ahash::RandomState;
use indexmap::{set, IndexSet};
use std::{
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
};

/// An immutable sequence of unique and hashable items ordered by first appearance.
///
/// - like a tuple it is immutable and ordered.
/// - like a set it only holds hashable items, each of them once.
///
/// ```
/// use collectionish::unique_tuple;
///
/// let numbers = unique_tuple![3, 2, 3, 1];
/// assert_eq!(numbers.to_string(), "UniqueTuple(3, 2, 1)");
/// ```
#[derive(Clone)]
pub struct UniqueTuple<T> {
    items: IndexSet<T, RandomState>,
}

impl<T: Hash + Eq> UniqueTuple<T> {
    /// Later duplicates are dropped.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        items.into_iter().collect()
    }

    /// Number of occurrences, either 0 or 1.
    pub fn count(&self, value: &T) -> usize {
        usize::from(self.items.contains(value))
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Position of `value`.
    pub fn index(&self, value: &T) -> Option<usize> {
        self.items.get_index_of(value)
    }
}

impl UniqueTuple<HashKey> {
    /// Dynamically typed items, lists and mappings are unhashable.
    pub fn try_from_values(values: impl IntoIterator<Item = Value>) -> Result<Self> {
        values
            .into_iter()
            .map(HashKey::try_from)
            .collect::<Result<IndexSet<_, RandomState>>>()
            .map(|items| Self { items })
    }
}

impl<T> UniqueTuple<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get_index(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn iter(&self) -> set::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Hash + Eq> FromIterator<T> for UniqueTuple<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for UniqueTuple<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T> Default for UniqueTuple<T> {
    fn default() -> Self {
        Self {
            items: IndexSet::default(),
        }
    }
}

/// Order matters, like with tuples.
impl<T: PartialEq> PartialEq for UniqueTuple<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items.iter().eq(other.items.iter())
    }
}

impl<T: Eq> Eq for UniqueTuple<T> {}

impl<T: Hash> Hash for UniqueTuple<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.items.len());
        for item in &self.items {
            item.hash(state);
        }
    }
}

impl<T> IntoIterator for UniqueTuple<T> {
    type Item = T;
    type IntoIter = set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a UniqueTuple<T> {
    type Item = &'a T;
    type IntoIter = set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Debug> Debug for UniqueTuple<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("UniqueTuple");
        for item in &self.items {
            tuple.field(item);
        }
        tuple.finish()
    }
}

impl<T: Display> Display for UniqueTuple<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UniqueTuple(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, ")")
    }
}

/// Builds a [`UniqueTuple`] from the listed items.
#[macro_export]
macro_rules! unique_tuple {
    () => {
        $crate::UniqueTuple::default()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::UniqueTuple::from([$($item),+])
    };
}
