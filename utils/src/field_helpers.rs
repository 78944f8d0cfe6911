//! Conversions between field elements and their little-endian byte, hex and
//! bit representations.

use ark_ff::{BigInteger, Field, PrimeField};
use num_bigint::BigUint;
use thiserror::Error;

/// Errors raised when converting raw representations into field elements.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldHelpersError {
    #[error("failed to deserialize field bytes")]
    DeserializeBytes,
    #[error("failed to decode hex")]
    DecodeHex,
}

pub type Result<T> = core::result::Result<T, FieldHelpersError>;

/// Field element helpers
pub trait FieldHelpers<F> {
    /// Deserialize from little-endian canonical bytes
    fn from_bytes(bytes: &[u8]) -> Result<F>;

    /// Deserialize from hex
    fn from_hex(hex: &str) -> Result<F>;

    /// Deserialize from bits, least significant first
    fn from_bits(bits: &[bool]) -> Result<F>;

    /// Serialize to bytes
    fn to_bytes(self) -> Vec<u8>;

    /// Serialize to hex
    fn to_hex(self) -> String;

    /// Serialize to bits
    fn to_bits(self) -> Vec<bool>;

    /// Field size in bytes
    fn size_in_bytes() -> usize
    where
        F: PrimeField,
    {
        let bits = F::MODULUS_BIT_SIZE as usize;
        bits / 8 + (bits % 8 != 0) as usize
    }

    /// Get the modulus as `BigUint`
    fn modulus_biguint() -> BigUint
    where
        F: PrimeField,
    {
        BigUint::from_bytes_le(&F::MODULUS.to_bytes_le())
    }
}

impl<F: Field> FieldHelpers<F> for F {
    fn from_bytes(bytes: &[u8]) -> Result<F> {
        F::deserialize_uncompressed(bytes).map_err(|_| FieldHelpersError::DeserializeBytes)
    }

    fn from_hex(hex: &str) -> Result<F> {
        let bytes: Vec<u8> = hex::decode(hex).map_err(|_| FieldHelpersError::DecodeHex)?;
        F::deserialize_uncompressed(&bytes[..]).map_err(|_| FieldHelpersError::DeserializeBytes)
    }

    fn from_bits(bits: &[bool]) -> Result<F> {
        let bytes = bits
            .iter()
            .enumerate()
            .fold(F::zero().to_bytes(), |mut bytes, (i, bit)| {
                bytes[i / 8] |= (*bit as u8) << (i % 8);
                bytes
            });

        F::deserialize_uncompressed(&bytes[..]).map_err(|_| FieldHelpersError::DeserializeBytes)
    }

    fn to_bytes(self) -> Vec<u8> {
        let mut bytes: Vec<u8> = vec![];
        self.serialize_uncompressed(&mut bytes)
            .expect("Failed to serialize field");

        bytes
    }

    fn to_hex(self) -> String {
        hex::encode(self.to_bytes())
    }

    fn to_bits(self) -> Vec<bool> {
        self.to_bytes().iter().fold(vec![], |mut bits, byte| {
            let mut byte = *byte;
            for _ in 0..8 {
                bits.push(byte & 0x01 == 0x01);
                byte >>= 1;
            }
            bits
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fr;
    use ark_ff::One;

    #[test]
    fn field_hex() {
        assert_eq!(Fr::from_hex(""), Err(FieldHelpersError::DeserializeBytes));
        // odd number of digits
        assert_eq!(
            Fr::from_hex("0100000000000000000000000000000000000000000000000000000000000000f"),
            Err(FieldHelpersError::DecodeHex)
        );
        // non-hex character
        assert_eq!(
            Fr::from_hex("z100000000000000000000000000000000000000000000000000000000000000"),
            Err(FieldHelpersError::DecodeHex)
        );
        // one more than the modulus, little-endian
        assert_eq!(
            Fr::from_hex("02000000fffffffffe5bfeff02a4bd5305d8a10908d83933487d9d2953a7ed73"),
            Err(FieldHelpersError::DeserializeBytes)
        );

        let field_hex = "3a00000000000000000000000000000000000000000000000000000000000000";
        assert_eq!(
            Fr::to_hex(Fr::from_hex(field_hex).expect("Failed to deserialize field hex")),
            field_hex
        );
        assert_eq!(Fr::from_hex(field_hex), Ok(Fr::from(0x3au64)));
    }

    #[test]
    fn field_bytes() {
        let bytes = Fr::from(42u64).to_bytes();
        assert_eq!(bytes.len(), Fr::size_in_bytes());
        assert_eq!(Fr::from_bytes(&bytes), Ok(Fr::from(42u64)));

        assert_eq!(
            Fr::from_bytes(&[1, 2, 3]),
            Err(FieldHelpersError::DeserializeBytes)
        );
    }

    #[test]
    fn field_bits() {
        let fe = Fr::from(0b1011u64);
        let fe_check = Fr::from_bits(&fe.to_bits()).expect("Failed to deserialize field bits");
        assert_eq!(fe, fe_check);

        assert_eq!(
            Fr::from_bits(&[true, false, false]).expect("Failed to deserialize field bits"),
            Fr::one()
        );

        assert_eq!(
            Fr::from_bits(&vec![true; 256]),
            Err(FieldHelpersError::DeserializeBytes)
        );
    }

    #[test]
    fn field_size() {
        assert_eq!(Fr::size_in_bytes(), 32);
        let modulus = Fr::modulus_biguint();
        assert_eq!(
            modulus.to_string(),
            "52435875175126190479447740508185965837690552500527637822603658699938581184513"
        );
    }
}
