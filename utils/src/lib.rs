//! Small set of helpers extending [arkworks](https://arkworks.rs/) prime
//! fields: byte/hex/bit conversions, serde adapters for types implementing
//! `CanonicalSerialize`, and exponent arithmetic on the multiplicative group
//! order.

pub mod field_helpers;
pub mod math;
pub mod serialization;

pub use field_helpers::{FieldHelpers, FieldHelpersError};
