//! Operator impls for numeric mappings.
//!
//! Binary operators produce `Result<Self>` since division and friends can fail,
//! and so can bitwise operators on floats.

macro_rules! binary_operator {
    ($ty:ty: $($trait:ident::$method:ident => $op:ident),*) => {
        $(
            impl<'b, R: Into<$crate::num::Operand<'b>>> ::std::ops::$trait<R> for &$ty {
                type Output = $crate::error::Result<$ty>;

                fn $method(self, rhs: R) -> Self::Output {
                    $crate::num::Elementwise::binary(self, $crate::value::BinaryOp::$op, rhs)
                }
            }

            impl<'b, R: Into<$crate::num::Operand<'b>>> ::std::ops::$trait<R> for $ty {
                type Output = $crate::error::Result<$ty>;

                fn $method(self, rhs: R) -> Self::Output {
                    $crate::num::Elementwise::binary(&self, $crate::value::BinaryOp::$op, rhs)
                }
            }
        )*
    };
}

/// `scalar op mapping`.
macro_rules! reflected_operator {
    (@impl $ty:ty, $scalar:ty: $($trait:ident::$method:ident => $op:ident),*) => {
        $(
            impl<'a> ::std::ops::$trait<&'a $ty> for $scalar {
                type Output = $crate::error::Result<$ty>;

                fn $method(self, rhs: &'a $ty) -> Self::Output {
                    $crate::num::Elementwise::rbinary(rhs, $crate::value::BinaryOp::$op, self)
                }
            }
        )*
    };
    ($ty:ty: $($scalar:ty),*) => {
        $(
            reflected_operator!(@impl $ty, $scalar:
                Add::add => Add,
                Sub::sub => Sub,
                Mul::mul => Mul,
                Div::div => TrueDiv,
                Rem::rem => Mod
            );
        )*
    };
}

/// Operators, conversions and formatting of a numeric mapping.
macro_rules! numeric_mapping {
    ($ty:ident) => {
        binary_operator!($ty:
            Add::add => Add,
            Sub::sub => Sub,
            Mul::mul => Mul,
            Div::div => TrueDiv,
            Rem::rem => Mod,
            BitAnd::bitand => BitAnd,
            BitOr::bitor => BitOr,
            BitXor::bitxor => BitXor
        );

        reflected_operator!($ty: i64, f64, $crate::value::Number);

        impl ::std::ops::Neg for &$ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $crate::num::Elementwise::neg(self)
            }
        }

        impl ::std::ops::Neg for $ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $crate::num::Elementwise::neg(&self)
            }
        }

        impl ::std::ops::Index<&str> for $ty {
            type Output = $crate::value::Number;

            /// Panics if the key doesn't exist.
            fn index(&self, key: &str) -> &$crate::value::Number {
                &$crate::num::Elementwise::entries(self)[key]
            }
        }

        impl<K: Into<String>, V: Into<$crate::value::Number>> ::std::iter::FromIterator<(K, V)>
            for $ty
        {
            fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
                $crate::num::Elementwise::from_entries(
                    iter.into_iter()
                        .map(|(key, value)| (key.into(), value.into()))
                        .collect(),
                )
            }
        }

        impl<K: Into<String>, V: Into<$crate::value::Number>, const N: usize> From<[(K, V); N]>
            for $ty
        {
            fn from(pairs: [(K, V); N]) -> Self {
                pairs.into_iter().collect()
            }
        }

        impl IntoIterator for $ty {
            type Item = (String, $crate::value::Number);
            type IntoIter = ::indexmap::map::IntoIter<String, $crate::value::Number>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::num::Elementwise::into_entries(self).into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $ty {
            type Item = (&'a String, &'a $crate::value::Number);
            type IntoIter = ::indexmap::map::Iter<'a, String, $crate::value::Number>;

            fn into_iter(self) -> Self::IntoIter {
                $crate::num::Elementwise::entries(self).iter()
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::num::fmt_entries(
                    stringify!($ty),
                    $crate::num::Elementwise::entries(self),
                    f,
                )
            }
        }
    };
}
