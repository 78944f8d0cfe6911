//! Instantiation over the BLS12-381 scalar field, with one process-global
//! constant table per algorithm.
//!
//! The numeric round constants of a vetted parameter set are external data:
//! callers load them once at startup through `constants_init`, before any
//! context for that algorithm is used. Publication goes through a
//! [`OnceCell`], so concurrent readers observe either nothing or the fully
//! built table; after that the table is immutable and freely shared.

use crate::{
    constants::{Poseidon128Constants, RescueConstants},
    context::{Poseidon128Context, RescueContext},
    error::PermutationError,
    params::PermutationParams,
};
use fr_utils::FieldHelpers;

pub use ark_bls12_381::Fr;

/// Byte width of one serialized `Fr` element.
pub fn field_element_size() -> usize {
    Fr::size_in_bytes()
}

pub mod poseidon128 {
    use super::*;
    use once_cell::sync::OnceCell;

    static PARAMS: OnceCell<PermutationParams<Fr>> = OnceCell::new();

    /// Validates and publishes the process-global Poseidon128 constant
    /// table. The first successful call wins; later calls validate their
    /// input but leave the published table as is.
    pub fn constants_init(ark: &[Fr], mds: &[Vec<Fr>]) -> Result<(), PermutationError> {
        let params = PermutationParams::from_constants::<Poseidon128Constants>(ark, mds)?;
        let _ = PARAMS.set(params);
        Ok(())
    }

    /// Like [`constants_init`], for inputs in the legacy reserved-index
    /// layout.
    pub fn constants_init_one_based(ark: &[Fr], mds: &[Vec<Fr>]) -> Result<(), PermutationError> {
        let params = PermutationParams::from_one_based::<Poseidon128Constants>(ark, mds)?;
        let _ = PARAMS.set(params);
        Ok(())
    }

    /// The published table, or
    /// [`UninitializedConstants`](PermutationError::UninitializedConstants)
    /// before the first successful [`constants_init`].
    pub fn static_params() -> Result<&'static PermutationParams<Fr>, PermutationError> {
        PARAMS
            .get()
            .ok_or(PermutationError::UninitializedConstants("poseidon128"))
    }

    /// Allocates a fresh context bound to the global table.
    pub fn context() -> Result<Poseidon128Context<Fr>, PermutationError> {
        Ok(Poseidon128Context::new(static_params()?))
    }
}

pub mod rescue {
    use super::*;
    use once_cell::sync::OnceCell;

    static PARAMS: OnceCell<PermutationParams<Fr>> = OnceCell::new();

    /// Validates and publishes the process-global Rescue constant table.
    /// The first successful call wins; later calls validate their input but
    /// leave the published table as is.
    pub fn constants_init(ark: &[Fr], mds: &[Vec<Fr>]) -> Result<(), PermutationError> {
        let params = PermutationParams::from_constants::<RescueConstants>(ark, mds)?;
        let _ = PARAMS.set(params);
        Ok(())
    }

    /// Like [`constants_init`], for inputs in the legacy reserved-index
    /// layout.
    pub fn constants_init_one_based(ark: &[Fr], mds: &[Vec<Fr>]) -> Result<(), PermutationError> {
        let params = PermutationParams::from_one_based::<RescueConstants>(ark, mds)?;
        let _ = PARAMS.set(params);
        Ok(())
    }

    /// The published table, or
    /// [`UninitializedConstants`](PermutationError::UninitializedConstants)
    /// before the first successful [`constants_init`].
    pub fn static_params() -> Result<&'static PermutationParams<Fr>, PermutationError> {
        PARAMS
            .get()
            .ok_or(PermutationError::UninitializedConstants("rescue"))
    }

    /// Allocates a fresh context bound to the global table.
    pub fn context() -> Result<RescueContext<Fr>, PermutationError> {
        Ok(RescueContext::new(static_params()?))
    }
}
