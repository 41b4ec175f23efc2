//! Mappings you can do basic math with as though they were numbers.
//!
//! Every operation is applied per key. The right side is either a number or
//! another numeric mapping:
//! - with a number, each value is combined with it.
//! - with a mapping, the result keeps exactly the keys of the left side and
//!   their order. Keys the right side is missing are filled in with the
//!   identity of the operator ([`BinaryOp::identity`]), keys only the right
//!   side has are ignored.
//!
//! Ordering comparisons (`ge`, `le`, `gt`, `lt`) between mappings require both
//! sides to have the same keys. Equality between mappings on the other hand
//! compares them as a whole and never fails.
//!
//! ```
//! use collectionish::{Elementwise, NumDict};
//!
//! let a = NumDict::from([("a", 1), ("b", 2)]);
//! let b = NumDict::from([("a", 3)]);
//! assert_eq!((&a * &b).unwrap(), NumDict::from([("a", 3), ("b", 2)]));
//! ```

#[macro_use]
mod ops;
#[cfg(feature = "atty-num")]
mod atty;

#[cfg(feature = "atty-num")]
pub use atty::AttyNumDict;

use crate::{
    error::{ContainerError, Result},
    value::{BinaryOp, CompareOp, Number, Value},
};
use ahash::RandomState;
use indexmap::{map, IndexMap};
use log::debug;
use std::{cmp::Ordering, fmt};

pub type NumEntries = IndexMap<String, Number, RandomState>;

/// Right hand side of an element-wise operation.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Scalar(Number),
    /// Entries of any numeric mapping.
    Mapping(&'a NumEntries),
}

/// Result of an equality comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison<D> {
    /// Per key result of comparing with a number.
    Elementwise(D),
    /// Whole mapping comparison.
    Whole(bool),
}

impl<D> Comparison<D> {
    pub fn into_elementwise(self) -> Option<D> {
        match self {
            Self::Elementwise(d) => Some(d),
            Self::Whole(_) => None,
        }
    }

    pub fn into_whole(self) -> Option<bool> {
        match self {
            Self::Whole(b) => Some(b),
            Self::Elementwise(_) => None,
        }
    }
}

macro_rules! in_place {
    ($($(#[$meta:meta])* $name:ident => $op:ident;)*) => {
        $(
            $(#[$meta])*
            fn $name<'a>(&mut self, rhs: impl Into<Operand<'a>>) -> Result<()> {
                self.binary_in_place(BinaryOp::$op, rhs)
            }
        )*
    };
}

/// Element-wise numeric behavior shared by numeric mappings.
///
/// Implementors provide access to their entries, everything else is built on top.
/// Every operation that produces a mapping produces `Self`.
pub trait Elementwise: Sized {
    fn entries(&self) -> &NumEntries;

    fn entries_mut(&mut self) -> &mut NumEntries;

    fn from_entries(entries: NumEntries) -> Self;

    fn into_entries(self) -> NumEntries;

    fn get(&self, key: &str) -> Option<Number> {
        self.entries().get(key).copied()
    }

    fn insert(&mut self, key: impl Into<String>, value: impl Into<Number>) -> Option<Number> {
        self.entries_mut().insert(key.into(), value.into())
    }

    /// Removes the entry while keeping the order of the rest.
    fn remove(&mut self, key: &str) -> Option<Number> {
        self.entries_mut().shift_remove(key)
    }

    fn contains_key(&self, key: &str) -> bool {
        self.entries().contains_key(key)
    }

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn keys(&self) -> map::Keys<'_, String, Number> {
        self.entries().keys()
    }

    fn values(&self) -> map::Values<'_, String, Number> {
        self.entries().values()
    }

    fn iter(&self) -> map::Iter<'_, String, Number> {
        self.entries().iter()
    }

    /// New mapping with `f` applied to every value.
    /// Extra arguments can be captured by the closure.
    fn apply(&self, mut f: impl FnMut(Number) -> Number) -> Self {
        Self::from_entries(
            self.iter()
                .map(|(key, &value)| (key.clone(), f(value)))
                .collect(),
        )
    }

    fn try_apply(&self, mut f: impl FnMut(Number) -> Result<Number>) -> Result<Self> {
        self.iter()
            .map(|(key, &value)| Ok((key.clone(), f(value)?)))
            .collect::<Result<NumEntries>>()
            .map(Self::from_entries)
    }

    /// `op(value, rhs)` for every value.
    fn binary<'a>(&self, op: BinaryOp, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        match rhs.into() {
            Operand::Scalar(scalar) => self.try_apply(|value| value.binary(op, scalar)),
            Operand::Mapping(other) => self
                .iter()
                .map(|(key, &value)| {
                    let rhs = other.get(key).copied().unwrap_or(op.identity());
                    Ok((key.clone(), value.binary(op, rhs)?))
                })
                .collect::<Result<NumEntries>>()
                .map(Self::from_entries),
        }
    }

    /// Same as [`Elementwise::binary`] with a dynamically typed right side.
    /// Anything but a number is an unsupported operand.
    fn binary_value(&self, op: BinaryOp, rhs: &Value) -> Result<Self> {
        let scalar = rhs
            .as_number()
            .ok_or_else(|| ContainerError::unsupported(op.name(), rhs.type_name()))?;
        self.binary(op, scalar)
    }

    /// Reflected operation, `op(lhs, value)` for every value.
    fn rbinary(&self, op: BinaryOp, lhs: impl Into<Number>) -> Result<Self> {
        let lhs = lhs.into();
        self.try_apply(|value| lhs.binary(op, value))
    }

    /// In place [`Elementwise::binary`].
    ///
    /// Only existing keys are changed. All new values are computed before
    /// any is written, so on error `self` is unchanged.
    fn binary_in_place<'a>(&mut self, op: BinaryOp, rhs: impl Into<Operand<'a>>) -> Result<()> {
        let updated = self.binary(op, rhs)?.into_entries();
        for (slot, value) in self.entries_mut().values_mut().zip(updated.into_values()) {
            *slot = value;
        }
        Ok(())
    }

    in_place! {
        add_in_place => Add;
        sub_in_place => Sub;
        mul_in_place => Mul;
        div_in_place => TrueDiv;
        floor_div_in_place => FloorDiv;
        pow_in_place => Pow;
        rem_in_place => Mod;
        and_in_place => BitAnd;
        or_in_place => BitOr;
        xor_in_place => BitXor;
    }

    fn floor_div<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        self.binary(BinaryOp::FloorDiv, rhs)
    }

    fn pow<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        self.binary(BinaryOp::Pow, rhs)
    }

    /// Ordering comparison, a mapping of bools.
    /// Mappings must have the same keys.
    fn ordering<'a>(&self, op: CompareOp, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        match rhs.into() {
            Operand::Scalar(scalar) => {
                Ok(self.apply(|value| Number::Bool(value.compare(op, scalar))))
            }
            Operand::Mapping(other) => {
                let same_keys = self.len() == other.len()
                    && self.keys().all(|key| other.contains_key(key));
                if !same_keys {
                    debug!("Key sets differ for '{}'", op.name());
                    return Err(ContainerError::key_set_mismatch(
                        op.name(),
                        self.keys(),
                        other.keys(),
                    ));
                }
                Ok(Self::from_entries(
                    self.iter()
                        .map(|(key, &value)| {
                            let result = other
                                .get(key)
                                .map_or(false, |&rhs| value.compare(op, rhs));
                            (key.clone(), Number::Bool(result))
                        })
                        .collect(),
                ))
            }
        }
    }

    /// With a number compares per key, with a mapping compares as a whole.
    fn equals<'a>(&self, rhs: impl Into<Operand<'a>>) -> Comparison<Self> {
        match rhs.into() {
            Operand::Scalar(scalar) => Comparison::Elementwise(
                self.apply(|value| Number::Bool(value.compare(CompareOp::Eq, scalar))),
            ),
            Operand::Mapping(other) => Comparison::Whole(self.entries() == other),
        }
    }

    fn not_equals<'a>(&self, rhs: impl Into<Operand<'a>>) -> Comparison<Self> {
        match rhs.into() {
            Operand::Scalar(scalar) => Comparison::Elementwise(
                self.apply(|value| Number::Bool(value.compare(CompareOp::Ne, scalar))),
            ),
            Operand::Mapping(other) => Comparison::Whole(self.entries() != other),
        }
    }

    /// Any comparison. Equality never fails, ordering fails on mismatched keys.
    fn compare<'a>(&self, op: CompareOp, rhs: impl Into<Operand<'a>>) -> Result<Comparison<Self>> {
        if op.is_ordering() {
            self.ordering(op, rhs).map(Comparison::Elementwise)
        } else if op == CompareOp::Eq {
            Ok(self.equals(rhs))
        } else {
            Ok(self.not_equals(rhs))
        }
    }

    fn ge<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        self.ordering(CompareOp::Ge, rhs)
    }

    fn le<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        self.ordering(CompareOp::Le, rhs)
    }

    fn gt<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        self.ordering(CompareOp::Gt, rhs)
    }

    fn lt<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self> {
        self.ordering(CompareOp::Lt, rhs)
    }

    fn neg(&self) -> Self {
        self.apply(Number::neg)
    }

    fn pos(&self) -> Self {
        self.apply(Number::pos)
    }

    fn abs(&self) -> Self {
        self.apply(Number::abs)
    }

    fn invert(&self) -> Result<Self> {
        self.try_apply(Number::invert)
    }

    /// Half to even, see [`Number::round`].
    fn round(&self, places: Option<i32>) -> Self {
        self.apply(|value| value.round(places))
    }

    /// Empty mapping sums to 0.
    fn sum(&self) -> Number {
        self.values().fold(Number::Int(0), |sum, &value| sum + value)
    }

    fn min(&self) -> Result<Number> {
        extreme(self.entries(), "min", Ordering::Less)
    }

    fn max(&self) -> Result<Number> {
        extreme(self.entries(), "max", Ordering::Greater)
    }

    /// Fails with division by zero if empty.
    fn mean(&self) -> Result<Number> {
        self.sum()
            .binary(BinaryOp::TrueDiv, Number::Int(self.len() as i64))
    }
}

fn extreme(entries: &NumEntries, op: &'static str, wanted: Ordering) -> Result<Number> {
    let mut values = entries.values().copied();
    let first = values
        .next()
        .ok_or(ContainerError::EmptyAggregate { op })?;
    Ok(values.fold(first, |best, value| {
        if value.partial_cmp(&best) == Some(wanted) {
            value
        } else {
            best
        }
    }))
}

fn fmt_entries(name: &str, entries: &NumEntries, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}({{", name)?;
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "'{}': {}", key, value)?;
    }
    write!(f, "}})")
}

/// A string keyed mapping of numbers that works like a number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumDict {
    entries: NumEntries,
}

impl NumDict {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Elementwise for NumDict {
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

numeric_mapping!(NumDict);

impl<'a, D: Elementwise> From<&'a D> for Operand<'a> {
    fn from(mapping: &'a D) -> Self {
        Operand::Mapping(mapping.entries())
    }
}

impl From<Number> for Operand<'_> {
    fn from(scalar: Number) -> Self {
        Operand::Scalar(scalar)
    }
}

macro_rules! operand_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand<'_> {
                fn from(scalar: $ty) -> Self {
                    Operand::Scalar(Number::from(scalar))
                }
            }
        )*
    };
}

operand_from!(bool, i8, i16, i32, i64, u8, u16, u32, f32, f64);

impl TryFrom<&Value> for Operand<'static> {
    type Error = ContainerError;

    fn try_from(value: &Value) -> Result<Self> {
        value
            .as_number()
            .map(Operand::Scalar)
            .ok_or_else(|| ContainerError::unsupported("operand", value.type_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};

    fn x() -> NumDict {
        NumDict::from([("a", 1.54), ("b", 2.1)])
    }

    fn close(a: &NumDict, b: &NumDict) -> bool {
        a.len() == b.len()
            && a.iter().all(|(key, value)| {
                b.get(key)
                    .map_or(false, |other| (value.as_f64() - other.as_f64()).abs() < 1e-9)
            })
    }

    #[test]
    fn scalar_arithmetic() {
        let x = x();
        let orig = x.clone();

        let cases: [(BinaryOp, fn(f64) -> f64); 7] = [
            (BinaryOp::Add, |v| v + 2.0),
            (BinaryOp::Sub, |v| v - 2.0),
            (BinaryOp::Mul, |v| v * 2.0),
            (BinaryOp::TrueDiv, |v| v / 2.0),
            (BinaryOp::Pow, |v| v.powf(2.0)),
            (BinaryOp::FloorDiv, |v| (v / 2.0).floor()),
            (BinaryOp::Mod, |v| v % 2.0),
        ];
        for (op, expected) in cases {
            let y = x.binary(op, 2i64).unwrap();
            assert_eq!(y, x.apply(|v| Number::Float(expected(v.as_f64()))), "{}", op.name());
            assert_eq!(y.keys().collect::<Vec<_>>(), ["a", "b"]);
        }
        assert_eq!(x, orig);
    }

    #[test]
    fn operators() {
        let x = x();
        assert_eq!((&x + 2i64).unwrap(), x.binary(BinaryOp::Add, 2i64).unwrap());
        assert_eq!((&x - 2.0f64).unwrap(), x.binary(BinaryOp::Sub, 2.0f64).unwrap());
        assert_eq!((x.clone() * 2i64).unwrap(), x.binary(BinaryOp::Mul, 2i64).unwrap());
        assert_eq!((&x / 2i64).unwrap(), x.binary(BinaryOp::TrueDiv, 2i64).unwrap());
        assert_eq!((&x % 2i64).unwrap(), x.binary(BinaryOp::Mod, 2i64).unwrap());
        assert_eq!(-&x, NumDict::from([("a", -1.54), ("b", -2.1)]));
    }

    #[test]
    fn identity_for_missing_keys() {
        let a = NumDict::from([("a", 1), ("b", 2)]);
        let b = NumDict::from([("a", 3)]);

        assert_eq!((&a * &b).unwrap(), NumDict::from([("a", 3), ("b", 2)]));
        assert_eq!((&a + &b).unwrap(), NumDict::from([("a", 4), ("b", 2)]));
        assert_eq!((&a - &b).unwrap(), NumDict::from([("a", -2), ("b", 2)]));
        assert_eq!(a.pow(&b).unwrap(), NumDict::from([("a", 1), ("b", 2)]));
        assert_eq!(a.floor_div(&b).unwrap(), NumDict::from([("a", 0), ("b", 2)]));
    }

    #[test]
    fn result_has_left_keys_only() {
        let a = NumDict::from([("b", 1), ("a", 2)]);
        let b = NumDict::from([("c", 10), ("a", 3), ("d", 4)]);

        let sum = (&a + &b).unwrap();
        assert_eq!(sum.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(sum, NumDict::from([("b", 1), ("a", 5)]));
    }

    #[test]
    fn right_side_is_never_mutated() {
        let mut a = NumDict::from([("a", 1), ("b", 2)]);
        let b = NumDict::from([("a", 3), ("c", 4)]);
        let orig = b.clone();

        a.add_in_place(&b).unwrap();
        assert_eq!(a, NumDict::from([("a", 4), ("b", 2)]));
        assert!(!a.contains_key("c"));
        assert_eq!(b, orig);
    }

    #[test]
    fn in_place_is_atomic() {
        let mut a = NumDict::from([("a", 1), ("b", 2)]);
        let b = NumDict::from([("a", 1), ("b", 0)]);

        assert_eq!(
            a.div_in_place(&b),
            Err(ContainerError::ZeroDivision { op: "truediv" })
        );
        assert_eq!(a, NumDict::from([("a", 1), ("b", 2)]));

        a.mul_in_place(3i64).unwrap();
        assert_eq!(a, NumDict::from([("a", 3), ("b", 6)]));
        a.floor_div_in_place(4i64).unwrap();
        assert_eq!(a, NumDict::from([("a", 0), ("b", 1)]));
    }

    #[test]
    fn reflected() {
        let a = NumDict::from([("a", 1), ("b", 4)]);

        assert_eq!((10i64 - &a).unwrap(), NumDict::from([("a", 9), ("b", 6)]));
        assert_eq!((8.0f64 / &a).unwrap(), NumDict::from([("a", 8.0), ("b", 2.0)]));
        assert_eq!(
            a.rbinary(BinaryOp::Pow, 2).unwrap(),
            NumDict::from([("a", 2), ("b", 16)])
        );
        assert_eq!(a.rbinary(BinaryOp::Mod, 5).unwrap().keys().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn ordering_requires_same_keys() {
        let a = NumDict::from([("a", 1), ("b", 2)]);
        let b = NumDict::from([("b", 1), ("a", 2)]);
        let c = NumDict::from([("a", 1), ("c", 2)]);

        assert_eq!(
            a.ge(&b).unwrap(),
            NumDict::from([("a", false), ("b", true)])
        );
        assert_eq!(a.lt(&b).unwrap(), NumDict::from([("a", true), ("b", false)]));
        assert_eq!(
            a.ge(&c),
            Err(ContainerError::KeySetMismatch {
                op: "ge",
                missing: vec!["b".to_owned()],
                extra: vec!["c".to_owned()],
            })
        );
        assert!(a.lt(&NumDict::from([("a", 1)])).is_err());
        assert_eq!(a.gt(1i64).unwrap(), NumDict::from([("a", false), ("b", true)]));
    }

    #[test]
    fn equality_is_asymmetric_with_ordering() {
        let a = NumDict::from([("a", 1), ("b", 2)]);
        let c = NumDict::from([("a", 1), ("c", 2)]);

        assert_eq!(a.equals(&c), Comparison::Whole(false));
        assert_eq!(a.equals(&a.clone()), Comparison::Whole(true));
        assert_eq!(a.not_equals(&c), Comparison::Whole(true));
        assert_eq!(
            a.equals(2i64),
            Comparison::Elementwise(NumDict::from([("a", false), ("b", true)]))
        );
        assert_eq!(
            a.not_equals(2i64),
            Comparison::Elementwise(NumDict::from([("a", true), ("b", false)]))
        );
        assert!(a.compare(CompareOp::Eq, &c).is_ok());
        assert!(a.compare(CompareOp::Le, &c).is_err());
    }

    #[test]
    fn compare_dispatch() {
        let a = NumDict::from([("a", 1), ("b", 2)]);
        let b = NumDict::from([("a", 2), ("b", 2)]);

        for op in [CompareOp::Ge, CompareOp::Le, CompareOp::Gt, CompareOp::Lt] {
            assert!(op.is_ordering(), "{}", op.name());
            let per_key = a.compare(op, &b).unwrap().into_elementwise().unwrap();
            assert_eq!(per_key, a.ordering(op, &b).unwrap());
        }
        assert!(!CompareOp::Eq.is_ordering());
        assert!(!CompareOp::Ne.is_ordering());

        let whole = a.compare(CompareOp::Eq, &b).unwrap();
        assert_eq!(whole.clone().into_elementwise(), None);
        assert_eq!(whole.into_whole(), Some(false));
        assert_eq!(a.compare(CompareOp::Ne, &b).unwrap().into_whole(), Some(true));

        let per_key = a.compare(CompareOp::Eq, 2i64).unwrap();
        assert_eq!(per_key.clone().into_whole(), None);
        assert_eq!(
            per_key.into_elementwise(),
            Some(NumDict::from([("a", false), ("b", true)]))
        );
    }

    #[test]
    fn unsupported_operand() {
        let a = NumDict::from([("a", 1)]);
        assert_eq!(
            a.binary_value(BinaryOp::Add, &Value::from("two")),
            Err(ContainerError::unsupported("add", "str"))
        );
        assert_eq!(
            a.binary_value(BinaryOp::Add, &Value::from(2)).unwrap(),
            NumDict::from([("a", 3)])
        );
        assert!(Operand::try_from(&Value::list([1])).is_err());
        assert!((&NumDict::from([("a", 1.5)]) | 1i64).is_err());
    }

    #[test]
    fn bitwise() {
        let a = NumDict::from([("a", 6), ("b", 5)]);
        let b = NumDict::from([("a", 3)]);

        assert_eq!((&a & &b).unwrap(), NumDict::from([("a", 2), ("b", 5)]));
        assert_eq!((&a | &b).unwrap(), NumDict::from([("a", 7), ("b", 5)]));
        assert_eq!((&a ^ &b).unwrap(), NumDict::from([("a", 5), ("b", 5)]));
        assert_eq!(a.invert().unwrap(), NumDict::from([("a", -7), ("b", -6)]));
    }

    #[test]
    fn unary() {
        let a = NumDict::from([("b", -1.5), ("a", 2.5)]);

        assert_eq!(a.abs(), NumDict::from([("b", 1.5), ("a", 2.5)]));
        assert_eq!(a.neg(), NumDict::from([("b", 1.5), ("a", -2.5)]));
        assert_eq!(a.round(None), NumDict::from([("b", -2), ("a", 2)]));
        assert_eq!(a.round(None).keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(a.pos(), a);
    }

    #[test]
    fn aggregates() {
        let a = NumDict::from([("a", 1), ("b", 4), ("c", -2)]);

        assert_eq!(a.sum(), Number::Int(3));
        assert_eq!(a.min(), Ok(Number::Int(-2)));
        assert_eq!(a.max(), Ok(Number::Int(4)));
        assert_eq!(a.mean(), Ok(Number::Float(1.0)));

        let empty = NumDict::new();
        assert_eq!(empty.sum(), Number::Int(0));
        assert_eq!(empty.min(), Err(ContainerError::EmptyAggregate { op: "min" }));
        assert_eq!(empty.max(), Err(ContainerError::EmptyAggregate { op: "max" }));
        assert_eq!(
            empty.mean(),
            Err(ContainerError::ZeroDivision { op: "truediv" })
        );
    }

    #[test]
    fn apply() {
        let a = NumDict::from([("a", 1), ("b", 2)]);
        let offset = Number::Int(10);

        assert_eq!(a.apply(|v| v + offset), NumDict::from([("a", 11), ("b", 12)]));
        assert!(a
            .try_apply(|v| v.binary(BinaryOp::Mod, Number::Int(0)))
            .is_err());
    }

    #[test]
    fn display() {
        assert_eq!(
            NumDict::from([("a", 1), ("b", 2)]).to_string(),
            "NumDict({'a': 1, 'b': 2})"
        );
    }

    #[test]
    fn scalar_round_trip() {
        let mut rand = thread_rng();
        for _ in 0..1000 {
            let a = (0..rand.gen_range(0..10))
                .map(|i| (format!("k{}", i), rand.gen_range(-1e6..1e6)))
                .collect::<NumDict>();
            let s: f64 = rand.gen_range(-1e3..1e3);

            let shifted = (&a + s).unwrap();
            assert!(close(&(&shifted - s).unwrap(), &a));
            assert_eq!(shifted.keys().collect::<Vec<_>>(), a.keys().collect::<Vec<_>>());
        }
    }

    #[test]
    fn mapping_keys_doppelganger() {
        let mut rand = thread_rng();
        for _ in 0..1000 {
            let a = (0..rand.gen_range(0..8))
                .map(|_| (format!("k{}", rand.gen_range(0..12)), rand.gen_range(-100i64..100)))
                .collect::<NumDict>();
            let b = (0..rand.gen_range(0..8))
                .map(|_| (format!("k{}", rand.gen_range(0..12)), rand.gen_range(-100i64..100)))
                .collect::<NumDict>();

            let sum = (&a + &b).unwrap();
            assert_eq!(sum.keys().collect::<Vec<_>>(), a.keys().collect::<Vec<_>>());
            for (key, value) in sum.iter() {
                let expected = a.get(key).unwrap_or_default() + b.get(key).unwrap_or_default();
                assert_eq!(*value, expected);
            }
        }
    }
}
