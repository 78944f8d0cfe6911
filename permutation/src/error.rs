//! Errors shared by the constants loaders and the permutation contexts.

use thiserror::Error;

/// Everything here is detected synchronously at the violating call; no
/// operation leaves a partially updated table or state behind an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermutationError {
    /// Declared constant-table dimensions disagree with the supplied data.
    #[error("the {0} constants are of an unexpected size (expected {1}, got {2})")]
    ShapeMismatch(&'static str, usize, usize),

    /// Backing storage for the constant table could not be reserved.
    #[error("failed to reserve storage for the constants table")]
    AllocationFailure,

    /// The context was allocated but its state was never initialized.
    #[error("the permutation context has not been initialized")]
    NotInitialized,

    /// The algorithm's process-global constant table was never published.
    #[error("the {0} constants table has not been initialized")]
    UninitializedConstants(&'static str),
}
