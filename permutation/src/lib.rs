//! Sponge permutation primitives over a pairing-friendly scalar field.
//!
//! This crate provides two interchangeable fixed-round permutations of a
//! 3-cell field-element state, meant as the core of algebraic hash and
//! commitment constructions: a Poseidon-family substitution-permutation
//! network ([Poseidon128](crate::constants::Poseidon128Constants)) and a
//! Rescue-family "Marvellous" alternating-inverse network
//! ([Rescue](crate::constants::RescueConstants)).
//!
//! Both are driven through the same lifecycle: build a
//! [`PermutationParams`](crate::params::PermutationParams) constant table
//! once, allocate any number of [`PermutationContext`]s against it,
//! initialize each context's state, permute in place, and read the state
//! back. The [`bls12_381`](crate::bls12_381) module pins the BLS12-381
//! scalar field and offers one process-global table per algorithm.
//!
//! ```rust
//! use bls_permutation::{bls12_381::Fr, context::Poseidon128Context, dummy_values};
//!
//! let mut ctx = Poseidon128Context::new(dummy_values::poseidon128_static_params());
//! ctx.init(Fr::from(1u64), Fr::from(2u64), Fr::from(3u64));
//! ctx.apply_permutation().unwrap();
//! let (a, b, c) = ctx.state().unwrap();
//! # let _ = (a, b, c);
//! ```

pub mod bls12_381;
pub mod constants;
pub mod context;
pub mod dummy_values;
pub mod error;
pub mod params;
pub mod permutation;

pub use context::PermutationContext;
pub use error::PermutationError;
pub use params::PermutationParams;
