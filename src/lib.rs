//! # Goal
//! Container types that the standard collections leave out, built on top of
//! ordered maps and sets.
//!
//! # Features
//! - [`AttrDict`], a mapping whose entries are also fields.
//!      - Keys must be valid identifiers, nested mappings become `AttrDict`s too.
//! - [`NumDict`] and [`AttyNumDict`], numeric mappings with elementwise arithmetic.
//!      - A scalar operand applies to every value, a mapping operand applies by key.
//!      - Both keep the keys of the left operand.
//! - [`UniqueTuple`], an immutable sequence of unique items in order of first appearance.
//! - [`Sentry`], a falsey singleton that rejects attribute writes.
//! - [`AncestorChainMap`], a child mapping layered over its parents and ancestors.
//! - [`ops`], path based reads and writes of nested containers and flattening.
//!
//! # Values
//! Dynamically typed contents are represented by the closed [`Value`] type,
//! its hashable subset by [`HashKey`] and numbers by [`Number`].
//!
//! # Cargo features
//! - `atty-num` (default): [`AttyNumDict`].
//! - `serde` (default): serialization of [`Sentry`], [`Number`] and [`HashKey`].

pub mod attr;
pub mod chain;
pub mod error;
pub mod ident;
pub mod num;
pub mod ops;
pub mod sentry;
pub mod unique;
pub mod value;

pub use attr::AttrDict;
pub use chain::AncestorChainMap;
pub use error::{ContainerError, Result};
pub use ident::{is_keyword, is_valid_identifier};
#[cfg(feature = "atty-num")]
pub use num::AttyNumDict;
pub use num::{Comparison, Elementwise, NumDict, Operand};
pub use sentry::{Sentry, SENTRY};
pub use unique::UniqueTuple;
pub use value::{BinaryOp, CompareOp, HashKey, Number, PathKey, Truthy, Value};
