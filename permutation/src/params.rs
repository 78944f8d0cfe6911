//! Constant tables: additive round constants and the MDS mixing matrix.

use crate::{
    constants::{PermutationConstants, STATE_WIDTH},
    error::PermutationError,
};
use ark_ff::Field;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// The immutable constant table shared by every context of one algorithm.
///
/// `round_constants` holds [`ark_rows`](PermutationConstants::ark_rows) rows
/// of [`STATE_WIDTH`] elements each, consumed strictly in order by one
/// permutation call; `mds` is the `STATE_WIDTH x STATE_WIDTH` mixing matrix
/// applied every round. Storage is 0-based and row-major throughout.
#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PermutationParams<F: Field + CanonicalSerialize + CanonicalDeserialize> {
    #[serde_as(as = "Vec<Vec<fr_utils::serialization::SerdeAs>>")]
    pub round_constants: Vec<Vec<F>>,
    #[serde_as(as = "Vec<Vec<fr_utils::serialization::SerdeAs>>")]
    pub mds: Vec<Vec<F>>,
}

impl<F: Field + CanonicalSerialize + CanonicalDeserialize> PermutationParams<F> {
    /// Builds a table for the algorithm `SC` from a flat run of additive
    /// round constants and a row-major MDS matrix.
    ///
    /// The inputs are copied; nothing is retained on error. `ark` must hold
    /// exactly [`ark_len`](PermutationConstants::ark_len) elements and `mds`
    /// exactly [`STATE_WIDTH`] rows of [`STATE_WIDTH`] elements.
    pub fn from_constants<SC: PermutationConstants>(
        ark: &[F],
        mds: &[Vec<F>],
    ) -> Result<Self, PermutationError> {
        if ark.len() != SC::ark_len() {
            return Err(PermutationError::ShapeMismatch(
                "ark",
                SC::ark_len(),
                ark.len(),
            ));
        }
        if mds.len() != STATE_WIDTH {
            return Err(PermutationError::ShapeMismatch(
                "mds row",
                STATE_WIDTH,
                mds.len(),
            ));
        }
        for row in mds {
            if row.len() != STATE_WIDTH {
                return Err(PermutationError::ShapeMismatch(
                    "mds column",
                    STATE_WIDTH,
                    row.len(),
                ));
            }
        }

        Ok(Self {
            round_constants: copy_rows(ark.chunks_exact(STATE_WIDTH))?,
            mds: copy_rows(mds.iter().map(|row| row.as_slice()))?,
        })
    }

    /// Like [`from_constants`](Self::from_constants), for inputs in the
    /// legacy reserved-index layout: index 0 of the flat `ark` vector, of
    /// the `mds` row list and of each `mds` row carries a placeholder that
    /// is skipped. The offset is applied here only; the table itself stays
    /// 0-based.
    pub fn from_one_based<SC: PermutationConstants>(
        ark: &[F],
        mds: &[Vec<F>],
    ) -> Result<Self, PermutationError> {
        if ark.len() != SC::ark_len() + 1 {
            return Err(PermutationError::ShapeMismatch(
                "ark",
                SC::ark_len() + 1,
                ark.len(),
            ));
        }
        if mds.len() != STATE_WIDTH + 1 {
            return Err(PermutationError::ShapeMismatch(
                "mds row",
                STATE_WIDTH + 1,
                mds.len(),
            ));
        }
        for row in &mds[1..] {
            if row.len() != STATE_WIDTH + 1 {
                return Err(PermutationError::ShapeMismatch(
                    "mds column",
                    STATE_WIDTH + 1,
                    row.len(),
                ));
            }
        }

        let mds: Vec<Vec<F>> = mds[1..].iter().map(|row| row[1..].to_vec()).collect();
        Self::from_constants::<SC>(&ark[1..], &mds)
    }

    /// Rows of additive round constants held by this table.
    pub fn ark_rows(&self) -> usize {
        self.round_constants.len()
    }
}

fn copy_rows<'a, F: Field + 'a>(
    rows: impl Iterator<Item = &'a [F]>,
) -> Result<Vec<Vec<F>>, PermutationError> {
    let mut out = Vec::new();
    for row in rows {
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(row.len())
            .map_err(|_| PermutationError::AllocationFailure)?;
        cells.extend_from_slice(row);
        out.try_reserve(1)
            .map_err(|_| PermutationError::AllocationFailure)?;
        out.push(cells);
    }
    Ok(out)
}
