//! Arithmetic on exponents of the multiplicative group of a prime field.

use crate::field_helpers::FieldHelpers;
use ark_ff::PrimeField;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;

/// Little-endian 64-bit limbs of `alpha^-1 (mod p - 1)`, where `p` is the
/// modulus of `F` and `p - 1` the order of its multiplicative group.
///
/// Raising to this exponent inverts the power map `x -> x^alpha` on the
/// nonzero elements of `F`. Returns `None` when `alpha` is not coprime with
/// `p - 1`, in which case the power map is not a bijection and has no
/// inverse exponent.
pub fn inverse_exponent<F: PrimeField>(alpha: u64) -> Option<Vec<u64>> {
    let group_order = BigInt::from(F::modulus_biguint() - BigUint::from(1u64));
    let ext = BigInt::from(alpha).extended_gcd(&group_order);
    if ext.gcd != BigInt::from(1u64) {
        return None;
    }
    let (_, limbs) = ext.x.mod_floor(&group_order).to_u64_digits();
    Some(limbs)
}
