//! The round functions of the two permutation networks.
//!
//! Every round follows the same ark -> S-box -> MDS shape; the networks
//! differ only in which cells the S-box touches and in the alternation of
//! the forward and inverse power maps.

use crate::{
    constants::{PermutationConstants, RoundStructure, STATE_WIDTH},
    params::PermutationParams,
};
use ark_ff::{Field, PrimeField};
use fr_utils::math;

/// The non-linear layer: one cell through the forward power map.
pub fn sbox<F: Field, SC: PermutationConstants>(mut x: F) -> F {
    if SC::SBOX_ALPHA == 5 {
        // x * (x^2)^2, much cheaper than the generic pow for the common
        // exponent
        let mut square = x;
        square.square_in_place();
        square.square_in_place();
        x *= square;
        x
    } else {
        x.pow([SC::SBOX_ALPHA])
    }
}

fn apply_mds_matrix<F: Field>(
    params: &PermutationParams<F>,
    state: &[F; STATE_WIDTH],
) -> [F; STATE_WIDTH] {
    core::array::from_fn(|i| {
        state
            .iter()
            .zip(params.mds[i].iter())
            .fold(F::zero(), |acc, (s, &m)| m * s + acc)
    })
}

fn add_round_constants<F: Field>(
    params: &PermutationParams<F>,
    state: &mut [F; STATE_WIDTH],
    row: usize,
) {
    for (cell, cst) in state.iter_mut().zip(params.round_constants[row].iter()) {
        cell.add_assign(cst);
    }
}

/// One full round: add one row of round constants, S-box every cell, mix
/// through the MDS matrix.
pub fn full_round<F: Field, SC: PermutationConstants>(
    params: &PermutationParams<F>,
    state: &mut [F; STATE_WIDTH],
    row: usize,
) {
    add_round_constants(params, state, row);
    for cell in state.iter_mut() {
        *cell = sbox::<F, SC>(*cell);
    }
    *state = apply_mds_matrix(params, state);
}

/// One partial round: same shape as a full round, with the S-box applied to
/// the single cell `SC::PARTIAL_SBOX_IDX`.
pub fn partial_round<F: Field, SC: PermutationConstants>(
    params: &PermutationParams<F>,
    state: &mut [F; STATE_WIDTH],
    row: usize,
) {
    add_round_constants(params, state, row);
    state[SC::PARTIAL_SBOX_IDX] = sbox::<F, SC>(state[SC::PARTIAL_SBOX_IDX]);
    *state = apply_mds_matrix(params, state);
}

/// The fixed-round Poseidon permutation: a half run of full rounds, the
/// partial rounds, then the remaining full rounds, consuming one row of
/// round constants per round.
pub fn poseidon_block_cipher<F: Field, SC: PermutationConstants>(
    params: &PermutationParams<F>,
    state: &mut [F; STATE_WIDTH],
) {
    for r in 0..SC::ROUNDS_FULL / 2 {
        full_round::<F, SC>(params, state, r);
    }
    for r in 0..SC::ROUNDS_PARTIAL {
        partial_round::<F, SC>(params, state, SC::ROUNDS_FULL / 2 + r);
    }
    for r in 0..SC::ROUNDS_FULL / 2 {
        full_round::<F, SC>(params, state, SC::ROUNDS_FULL / 2 + SC::ROUNDS_PARTIAL + r);
    }
}

/// The fixed-round Marvellous permutation: every round chains a forward
/// half-round (S-box `x^alpha`) and an inverse half-round (S-box
/// `x^(alpha^-1 mod p-1)`), each consuming its own row of round constants.
///
/// The inverse exponent is derived from the field's multiplicative group
/// order rather than hardcoded per field.
pub fn marvellous_block_cipher<F: PrimeField, SC: PermutationConstants>(
    params: &PermutationParams<F>,
    state: &mut [F; STATE_WIDTH],
) {
    let alpha_inv = math::inverse_exponent::<F>(SC::SBOX_ALPHA)
        .expect("the forward S-box exponent must be coprime with the group order");
    for r in 0..SC::ROUNDS_FULL {
        full_round::<F, SC>(params, state, 2 * r);

        add_round_constants(params, state, 2 * r + 1);
        for cell in state.iter_mut() {
            *cell = cell.pow(&alpha_inv);
        }
        *state = apply_mds_matrix(params, state);
    }
}

/// Applies the network selected by `SC` to `state` in place.
pub fn apply_block_cipher<F: PrimeField, SC: PermutationConstants>(
    params: &PermutationParams<F>,
    state: &mut [F; STATE_WIDTH],
) {
    match SC::STRUCTURE {
        RoundStructure::SubstitutionPermutation => poseidon_block_cipher::<F, SC>(params, state),
        RoundStructure::AlternatingInverse => marvellous_block_cipher::<F, SC>(params, state),
    }
}
