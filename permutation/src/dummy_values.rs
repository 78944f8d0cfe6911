//! Deterministic placeholder constant tables for tests and benchmarks.
//!
//! These values are small consecutive integers, not the output of a
//! parameter-generation procedure, and provide no security whatsoever.
//! Production callers must load the constants of a vetted parameter set
//! through [`crate::bls12_381`] instead. The MDS matrices below are
//! circulant with nonzero determinant, so the permutations built on them
//! are still bijections.

use crate::{
    constants::{PermutationConstants, Poseidon128Constants, RescueConstants, STATE_WIDTH},
    params::PermutationParams,
};
use ark_bls12_381::Fr;
use once_cell::sync::OnceCell;

fn consecutive_ark(len: usize, offset: u64) -> Vec<Fr> {
    (0..len as u64).map(|k| Fr::from(offset + k + 1)).collect()
}

fn circulant_mds(first_row: [u64; STATE_WIDTH]) -> Vec<Vec<Fr>> {
    (0..STATE_WIDTH)
        .map(|i| {
            (0..STATE_WIDTH)
                .map(|j| Fr::from(first_row[(j + STATE_WIDTH - i) % STATE_WIDTH]))
                .collect()
        })
        .collect()
}

/// Poseidon128 table: ark row `r` is `(3r+1, 3r+2, 3r+3)`, MDS is the
/// circulant of `(2, 3, 1)`.
pub fn poseidon128_params() -> PermutationParams<Fr> {
    PermutationParams::from_constants::<Poseidon128Constants>(
        &consecutive_ark(Poseidon128Constants::ark_len(), 0),
        &circulant_mds([2, 3, 1]),
    )
    .expect("generated constants match the declared shape")
}

/// Rescue table: ark row `r` is `(1000+3r+1, 1000+3r+2, 1000+3r+3)`, MDS is
/// the circulant of `(1, 4, 2)`.
pub fn rescue_params() -> PermutationParams<Fr> {
    PermutationParams::from_constants::<RescueConstants>(
        &consecutive_ark(RescueConstants::ark_len(), 1000),
        &circulant_mds([1, 4, 2]),
    )
    .expect("generated constants match the declared shape")
}

pub fn poseidon128_static_params() -> &'static PermutationParams<Fr> {
    static PARAMS: OnceCell<PermutationParams<Fr>> = OnceCell::new();
    PARAMS.get_or_init(poseidon128_params)
}

pub fn rescue_static_params() -> &'static PermutationParams<Fr> {
    static PARAMS: OnceCell<PermutationParams<Fr>> = OnceCell::new();
    PARAMS.get_or_init(rescue_params)
}
