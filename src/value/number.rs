use super::Truthy;
use crate::error::{ContainerError, Result};
use std::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::{Add, BitAnd, BitOr, BitXor, Mul, Neg, Sub},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number following the usual numeric tower.
///
/// - `Bool` acts as 0 or 1 in arithmetic.
/// - Mixed int and float operands promote to float.
/// - Integer overflow promotes to float instead of wrapping.
/// - True division always produces a float.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Number {
    Bool(bool),
    Int(i64),
    Float(f64),
}

/// Element-wise binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    TrueDiv,
    FloorDiv,
    Pow,
    Mod,
    BitAnd,
    BitOr,
    BitXor,
}

impl BinaryOp {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::TrueDiv => "truediv",
            Self::FloorDiv => "floordiv",
            Self::Pow => "pow",
            Self::Mod => "mod",
            Self::BitAnd => "and",
            Self::BitOr => "or",
            Self::BitXor => "xor",
        }
    }

    /// Right operand that leaves the left one unchanged.
    /// Substituted for keys the right mapping doesn't have.
    pub const fn identity(self) -> Number {
        match self {
            Self::Add | Self::Sub | Self::BitOr | Self::BitXor => Number::Int(0),
            Self::Mul | Self::TrueDiv | Self::FloorDiv | Self::Pow | Self::Mod => Number::Int(1),
            Self::BitAnd => Number::Int(-1),
        }
    }
}

/// Element-wise comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Ge,
    Le,
    Gt,
    Lt,
}

impl CompareOp {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Ge => "ge",
            Self::Le => "le",
            Self::Gt => "gt",
            Self::Lt => "lt",
        }
    }

    /// Ordering comparisons require matching key sets.
    pub const fn is_ordering(self) -> bool {
        matches!(self, Self::Ge | Self::Le | Self::Gt | Self::Lt)
    }
}

impl Number {
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
        }
    }

    /// Integer view, `None` for floats.
    pub const fn as_int(self) -> Option<i64> {
        match self {
            Self::Bool(b) => Some(b as i64),
            Self::Int(i) => Some(i),
            Self::Float(_) => None,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Bool(b) => b as i64 as f64,
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    pub fn binary(self, op: BinaryOp, rhs: Number) -> Result<Number> {
        match op {
            BinaryOp::Add => Ok(self + rhs),
            BinaryOp::Sub => Ok(self - rhs),
            BinaryOp::Mul => Ok(self * rhs),
            BinaryOp::TrueDiv => {
                let divisor = rhs.as_f64();
                if divisor == 0.0 {
                    return Err(ContainerError::ZeroDivision { op: op.name() });
                }
                Ok(Number::Float(self.as_f64() / divisor))
            }
            BinaryOp::FloorDiv | BinaryOp::Mod => self.divmod(op, rhs),
            BinaryOp::Pow => self.pow(rhs),
            BinaryOp::BitAnd => self.bitwise(op, rhs, bool::bitand, i64::bitand),
            BinaryOp::BitOr => self.bitwise(op, rhs, bool::bitor, i64::bitor),
            BinaryOp::BitXor => self.bitwise(op, rhs, bool::bitxor, i64::bitxor),
        }
    }

    pub fn compare(self, op: CompareOp, rhs: Number) -> bool {
        let ordering = self.partial_cmp(&rhs);
        match op {
            CompareOp::Eq => self == rhs,
            CompareOp::Ne => self != rhs,
            CompareOp::Ge => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
            CompareOp::Le => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            CompareOp::Gt => ordering == Some(Ordering::Greater),
            CompareOp::Lt => ordering == Some(Ordering::Less),
        }
    }

    pub fn neg(self) -> Number {
        match self.as_int() {
            Some(i) => i
                .checked_neg()
                .map_or(Number::Float(-(i as f64)), Number::Int),
            None => Number::Float(-self.as_f64()),
        }
    }

    pub fn pos(self) -> Number {
        match self {
            Self::Bool(b) => Self::Int(b as i64),
            other => other,
        }
    }

    pub fn abs(self) -> Number {
        match self.as_int() {
            Some(i) => i
                .checked_abs()
                .map_or(Number::Float((i as f64).abs()), Number::Int),
            None => Number::Float(self.as_f64().abs()),
        }
    }

    /// Bitwise inversion, only defined for integers.
    pub fn invert(self) -> Result<Number> {
        match self.as_int() {
            Some(i) => Ok(Number::Int(!i)),
            None => Err(ContainerError::unsupported("invert", self.type_name())),
        }
    }

    /// Rounds half to even.
    ///
    /// Without `places` the result is an integer when it fits into one.
    /// Negative `places` round to tens, hundreds and so on.
    pub fn round(self, places: Option<i32>) -> Number {
        match (self, places) {
            (Self::Float(f), None) => {
                let rounded = f.round_ties_even();
                if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
                    Number::Int(rounded as i64)
                } else {
                    Number::Float(rounded)
                }
            }
            (Self::Float(f), Some(places)) => Number::Float(round_float(f, places)),
            (other, places) => {
                let i = other.as_int().unwrap_or_default();
                Number::Int(round_int(i, places.unwrap_or(0)))
            }
        }
    }

    fn arith(
        self,
        rhs: Number,
        ints: fn(i64, i64) -> Option<i64>,
        floats: fn(f64, f64) -> f64,
    ) -> Number {
        match (self.as_int(), rhs.as_int()) {
            (Some(a), Some(b)) => {
                ints(a, b).map_or_else(|| Number::Float(floats(a as f64, b as f64)), Number::Int)
            }
            _ => Number::Float(floats(self.as_f64(), rhs.as_f64())),
        }
    }

    fn divmod(self, op: BinaryOp, rhs: Number) -> Result<Number> {
        if rhs.as_f64() == 0.0 {
            return Err(ContainerError::ZeroDivision { op: op.name() });
        }
        let floor = op == BinaryOp::FloorDiv;
        match (self.as_int(), rhs.as_int()) {
            (Some(a), Some(b)) => {
                let result = if floor {
                    floor_div_int(a, b)
                } else {
                    Some(mod_int(a, b))
                };
                Ok(result.map_or_else(
                    || {
                        let (div, rem) = float_divmod(a as f64, b as f64);
                        Number::Float(if floor { div } else { rem })
                    },
                    Number::Int,
                ))
            }
            _ => {
                let (div, rem) = float_divmod(self.as_f64(), rhs.as_f64());
                Ok(Number::Float(if floor { div } else { rem }))
            }
        }
    }

    fn pow(self, rhs: Number) -> Result<Number> {
        if let (Some(base), Some(exp)) = (self.as_int(), rhs.as_int()) {
            if exp >= 0 {
                let int = u32::try_from(exp)
                    .ok()
                    .and_then(|exp| base.checked_pow(exp));
                return Ok(int.map_or_else(
                    || Number::Float((base as f64).powf(exp as f64)),
                    Number::Int,
                ));
            }
        }

        let (base, exp) = (self.as_f64(), rhs.as_f64());
        if base == 0.0 && exp < 0.0 {
            Err(ContainerError::ZeroDivision { op: "pow" })
        } else {
            Ok(Number::Float(base.powf(exp)))
        }
    }

    fn bitwise(
        self,
        op: BinaryOp,
        rhs: Number,
        bools: fn(bool, bool) -> bool,
        ints: fn(i64, i64) -> i64,
    ) -> Result<Number> {
        match (self, rhs) {
            (Self::Bool(a), Self::Bool(b)) => Ok(Number::Bool(bools(a, b))),
            (Self::Float(_), _) => Err(ContainerError::unsupported(op.name(), "float")),
            (_, Self::Float(_)) => Err(ContainerError::unsupported(op.name(), "float")),
            (a, b) => Ok(Number::Int(ints(
                a.as_int().unwrap_or_default(),
                b.as_int().unwrap_or_default(),
            ))),
        }
    }
}

fn floor_div_int(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}

/// Remainder with the sign of the divisor.
fn mod_int(a: i64, b: i64) -> i64 {
    // Only i64::MIN % -1 overflows, and that is 0.
    let remainder = a.checked_rem(b).unwrap_or(0);
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        remainder + b
    } else {
        remainder
    }
}

/// Floor division and remainder of floats, remainder takes the sign of the divisor.
fn float_divmod(a: f64, b: f64) -> (f64, f64) {
    let mut rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 {
        if (b < 0.0) != (rem < 0.0) {
            rem += b;
            div -= 1.0;
        }
    } else {
        rem = 0.0_f64.copysign(b);
    }

    let floor_div = if div != 0.0 {
        let floor = div.floor();
        if div - floor > 0.5 {
            floor + 1.0
        } else {
            floor
        }
    } else {
        0.0_f64.copysign(a / b)
    };
    (floor_div, rem)
}

fn round_float(f: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places.saturating_abs());
    if places < 0 && scale.is_infinite() {
        return 0.0_f64.copysign(f);
    }
    let rounded = if places >= 0 {
        (f * scale).round_ties_even() / scale
    } else {
        (f / scale).round_ties_even() * scale
    };
    if rounded.is_finite() {
        rounded
    } else {
        f
    }
}

fn round_int(i: i64, places: i32) -> i64 {
    if places >= 0 {
        return i;
    }
    let Some(scale) = 10i64.checked_pow(places.unsigned_abs()) else {
        return 0;
    };
    let quotient = i.div_euclid(scale);
    let twice_remainder = i.rem_euclid(scale) * 2;
    let quotient = if twice_remainder > scale || (twice_remainder == scale && quotient % 2 != 0) {
        quotient + 1
    } else {
        quotient
    };
    quotient.checked_mul(scale).unwrap_or(i)
}

/// Exact comparison of an integer with a float, no rounding through `as f64`.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    // 2^63, the first float past i64::MAX.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f.is_nan() {
        None
    } else if f >= LIMIT {
        Some(Ordering::Less)
    } else if f < -LIMIT {
        Some(Ordering::Greater)
    } else {
        let whole = f.trunc();
        match i.cmp(&(whole as i64)) {
            Ordering::Equal => 0.0_f64.partial_cmp(&(f - whole)),
            ordering => Some(ordering),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.as_int(), other.as_int()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (Some(a), None) => cmp_int_float(a, other.as_f64()),
            (None, Some(b)) => cmp_int_float(b, self.as_f64()).map(Ordering::reverse),
            (None, None) => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        self.arith(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        self.arith(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        self.arith(rhs, i64::checked_mul, |a, b| a * b)
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        Number::neg(self)
    }
}

impl Truthy for Number {
    fn is_truthy(&self) -> bool {
        match *self {
            Self::Bool(b) => b,
            Self::Int(i) => i != 0,
            Self::Float(f) => f != 0.0,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl From<bool> for Number {
    fn from(b: bool) -> Self {
        Number::Bool(b)
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(<$target>::from(n))
                }
            }
        )*
    };
}

number_from!(Int as i64: i8, i16, i32, i64, u8, u16, u32);
number_from!(Float as f64: f32, f64);
