//! Per-instance permutation contexts and their lifecycle.

use crate::{
    constants::{PermutationConstants, Poseidon128Constants, RescueConstants, STATE_WIDTH},
    error::PermutationError,
    params::PermutationParams,
    permutation::apply_block_cipher,
};
use ark_ff::PrimeField;
use core::marker::PhantomData;

/// A permutation instance: [`STATE_WIDTH`] mutable cells of working state
/// bound to one algorithm's immutable constant table.
///
/// The table is taken by shared reference at construction, so a context
/// cannot exist before the constants it reads; many contexts may share one
/// table. Each context owns its state exclusively; `clone` yields an
/// independent instance. Lifecycle: allocate with [`new`](Self::new)
/// (state undefined), set the state with [`init`](Self::init), then any
/// number of [`apply_permutation`](Self::apply_permutation) /
/// [`state`](Self::state) calls. Dropping the context releases its storage
/// and leaves the table untouched.
#[derive(Clone)]
pub struct PermutationContext<F: PrimeField, SC: PermutationConstants> {
    params: &'static PermutationParams<F>,
    /// `None` until [`init`](Self::init) runs.
    state: Option<[F; STATE_WIDTH]>,
    constants: PhantomData<SC>,
}

/// Context running the Poseidon128 network.
pub type Poseidon128Context<F> = PermutationContext<F, Poseidon128Constants>;

/// Context running the Rescue network.
pub type RescueContext<F> = PermutationContext<F, RescueConstants>;

impl<F: PrimeField, SC: PermutationConstants> PermutationContext<F, SC> {
    /// Allocates a context with undefined state.
    pub fn new(params: &'static PermutationParams<F>) -> Self {
        Self {
            params,
            state: None,
            constants: PhantomData,
        }
    }

    /// Sets the working state to `(a, b, c)`. Calling it again resets the
    /// context as if freshly initialized.
    pub fn init(&mut self, a: F, b: F, c: F) {
        self.state = Some([a, b, c]);
    }

    /// Advances the state by one full fixed-round permutation.
    ///
    /// Fails with [`NotInitialized`](PermutationError::NotInitialized), and
    /// leaves the state untouched, when called before [`init`](Self::init).
    pub fn apply_permutation(&mut self) -> Result<(), PermutationError> {
        let state = self.state.as_mut().ok_or(PermutationError::NotInitialized)?;
        apply_block_cipher::<F, SC>(self.params, state);
        Ok(())
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> Result<(F, F, F), PermutationError> {
        let [a, b, c] = self.state.ok_or(PermutationError::NotInitialized)?;
        Ok((a, b, c))
    }

    /// The constant table this context reads.
    pub fn params(&self) -> &'static PermutationParams<F> {
        self.params
    }
}
