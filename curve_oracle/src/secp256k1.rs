//! secp256k1 public keys derived from decimal private scalars.

use crate::{
    OracleError,
    codec::{format_unpadded_lower_hex, parse_decimal, to_fixed_be_bytes},
};
use secp::{G, Scalar};
use std::str::FromStr;
use strum_macros::{Display, EnumIter};

/// Width of a private scalar and of each public key coordinate.
pub const SECP256K1_SCALAR_BYTES: usize = 32;

/// Which affine coordinate of the public key to report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum Coordinate {
    X,
    Y,
}

impl FromStr for Coordinate {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Coordinate::X),
            "Y" => Ok(Coordinate::Y),
            _ => Err(OracleError::UnknownSelector {
                kind: "coordinate",
                value: s.to_string(),
                expected: "X, Y",
            }),
        }
    }
}

/// Affine public key, both coordinates big-endian.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub x: [u8; SECP256K1_SCALAR_BYTES],
    pub y: [u8; SECP256K1_SCALAR_BYTES],
}

impl PublicKey {
    pub fn coordinate(&self, coordinate: Coordinate) -> &[u8; SECP256K1_SCALAR_BYTES] {
        match coordinate {
            Coordinate::X => &self.x,
            Coordinate::Y => &self.y,
        }
    }
}

/// Compute `d * G` for the private scalar `d` given in decimal.
///
/// The scalar must fit in 32 bytes. Range checking against the group order is
/// left to `secp`, which refuses zero and anything `>= n`.
pub fn derive_public_key(scalar_decimal: &str) -> Result<PublicKey, OracleError> {
    let scalar = parse_decimal("scalar", scalar_decimal)?;
    let scalar_bytes = to_fixed_be_bytes::<SECP256K1_SCALAR_BYTES>("scalar", &scalar)?;
    let private_key = Scalar::from_slice(&scalar_bytes)?;

    // 0x04 || X || Y
    let encoded = (private_key * G).serialize_uncompressed();
    let mut public_key = PublicKey {
        x: [0u8; SECP256K1_SCALAR_BYTES],
        y: [0u8; SECP256K1_SCALAR_BYTES],
    };
    public_key.x.copy_from_slice(&encoded[1..33]);
    public_key.y.copy_from_slice(&encoded[33..65]);
    tracing::trace!("derived secp256k1 public key {:?}", public_key);
    Ok(public_key)
}

/// Lowercase, unpadded hex of one public key coordinate.
pub fn derive_public_key_coordinate(
    scalar_decimal: &str,
    coordinate: Coordinate,
) -> Result<String, OracleError> {
    let public_key = derive_public_key(scalar_decimal)?;
    let hex = format_unpadded_lower_hex(public_key.coordinate(coordinate));
    tracing::debug!("secp256k1 {coordinate} for scalar {scalar_decimal}: {hex}");
    Ok(hex)
}
