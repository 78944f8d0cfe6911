//! Round-schedule constants of the supported permutation networks.

/// Width of the permutation state, in field elements. In a sponge
/// construction these are the rate and capacity cells; the split is not this
/// crate's concern.
pub const STATE_WIDTH: usize = 3;

/// Shape of a network's round schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStructure {
    /// Substitution-permutation network: runs of full rounds surround a run
    /// of partial rounds in which a single cell goes through the S-box.
    SubstitutionPermutation,
    /// Marvellous network: every round chains a forward half-round and an
    /// inverse half-round.
    AlternatingInverse,
}

/// Compile-time description of one permutation algorithm. The numeric round
/// constants live in [`PermutationParams`](crate::params::PermutationParams);
/// this trait only fixes the schedule those constants are consumed by.
pub trait PermutationConstants: Clone {
    const STRUCTURE: RoundStructure;
    /// Full rounds (substitution-permutation) or forward/inverse round pairs
    /// (Marvellous).
    const ROUNDS_FULL: usize;
    /// Rounds applying the S-box to a single cell; substitution-permutation
    /// networks only.
    const ROUNDS_PARTIAL: usize = 0;
    /// The cell the S-box touches during a partial round.
    const PARTIAL_SBOX_IDX: usize = 0;
    /// Exponent of the forward power-map S-box.
    const SBOX_ALPHA: u64;

    /// Rows of additive round constants consumed by one permutation call.
    fn ark_rows() -> usize {
        match Self::STRUCTURE {
            RoundStructure::SubstitutionPermutation => Self::ROUNDS_FULL + Self::ROUNDS_PARTIAL,
            RoundStructure::AlternatingInverse => 2 * Self::ROUNDS_FULL,
        }
    }

    /// Total additive round constants consumed by one permutation call.
    fn ark_len() -> usize {
        Self::ark_rows() * STATE_WIDTH
    }
}

/// Poseidon instantiated at the 128-bit security level for a ~255-bit scalar
/// field: x^5 S-box, 8 full rounds around 56 partial rounds.
#[derive(Clone)]
pub struct Poseidon128Constants;

impl PermutationConstants for Poseidon128Constants {
    const STRUCTURE: RoundStructure = RoundStructure::SubstitutionPermutation;
    const ROUNDS_FULL: usize = 8;
    const ROUNDS_PARTIAL: usize = 56;
    const PARTIAL_SBOX_IDX: usize = 2;
    const SBOX_ALPHA: u64 = 5;
}

/// Rescue (Marvellous) with 14 rounds and the x^5 forward S-box.
#[derive(Clone)]
pub struct RescueConstants;

impl PermutationConstants for RescueConstants {
    const STRUCTURE: RoundStructure = RoundStructure::AlternatingInverse;
    const ROUNDS_FULL: usize = 14;
    const SBOX_ALPHA: u64 = 5;
}
