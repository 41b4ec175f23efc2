use super::{Elementwise, NumDict, NumEntries};
use crate::{
    error::{ContainerError, Result},
    value::Number,
};

/// A [`NumDict`] whose values can also be read as fields.
///
/// ```
/// use collectionish::{AttyNumDict, Elementwise};
///
/// let prices = AttyNumDict::from([("apples", 2), ("pears", 3)]);
/// let doubled = (&prices * 2i64).unwrap();
/// assert_eq!(doubled.get_field("pears").unwrap().as_int(), Some(6));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttyNumDict {
    entries: NumEntries,
}

impl AttyNumDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_field(&self, name: &str) -> Result<Number> {
        self.get(name)
            .ok_or_else(|| ContainerError::AttributeNotFound {
                name: name.to_owned(),
            })
    }
}

impl Elementwise for AttyNumDict {
    fn entries(&self) -> &NumEntries {
        &self.entries
    }

    fn entries_mut(&mut self) -> &mut NumEntries {
        &mut self.entries
    }

    fn from_entries(entries: NumEntries) -> Self {
        Self { entries }
    }

    fn into_entries(self) -> NumEntries {
        self.entries
    }
}

numeric_mapping!(AttyNumDict);

impl From<NumDict> for AttyNumDict {
    fn from(dict: NumDict) -> Self {
        Self::from_entries(dict.into_entries())
    }
}

impl From<AttyNumDict> for NumDict {
    fn from(dict: AttyNumDict) -> Self {
        Self::from_entries(dict.into_entries())
    }
}
