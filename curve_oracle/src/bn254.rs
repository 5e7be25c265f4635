//! Multiples of the BN254 G2 generator, reported limb by limb.
//!
//! A G2 coordinate lives in Fq2 and is written `c0 + c1 * u`. The four limbs
//! of an affine point are, in order, `x.c0`, `x.c1`, `y.c0` and `y.c1`. They
//! are read straight out of the field elements with `Fq2::real` and
//! `Fq2::imaginary`.

use crate::{
    OracleError,
    codec::{format_limb_hex, parse_decimal, to_fixed_be_bytes},
};
use num_bigint::BigUint;
use std::{str::FromStr, sync::OnceLock};
use strum_macros::{Display, EnumIter};
use substrate_bn::{AffineG2, Fq, Fq2, Fr, G2};

pub const BN254_FP_BYTES: usize = 32;

/// Order `r` of the BN254 groups, big-endian.
const BN254_FR_MODULUS: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58, 0x5d,
    0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00, 0x00, 0x01,
];

// notation: Fq2 is a + bi (a real and b imaginary)
const G2_GENERATOR_X_REAL: &str =
    "10857046999023057135944570762232829481370756359578518086990519993285655852781";
const G2_GENERATOR_X_IMAGINARY: &str =
    "11559732032986387107991004021392285783925812861821192530917403151452391805634";
const G2_GENERATOR_Y_REAL: &str =
    "8495653923123431417604973247489272438418190587263600148770280649306958101930";
const G2_GENERATOR_Y_IMAGINARY: &str =
    "4082367875863433681332203403145435568316851327593401208105741076214120093531";

static G2_GENERATOR: OnceLock<AffineG2> = OnceLock::new();

/// The fixed G2 base point, checked to be on the curve on first use.
pub fn g2_generator() -> &'static AffineG2 {
    G2_GENERATOR.get_or_init(|| {
        let fq = |decimal: &str| Fq::from_str(decimal).expect("cannot parse Fq");
        let x = Fq2::new(fq(G2_GENERATOR_X_REAL), fq(G2_GENERATOR_X_IMAGINARY));
        let y = Fq2::new(fq(G2_GENERATOR_Y_REAL), fq(G2_GENERATOR_Y_IMAGINARY));
        AffineG2::new(x, y).expect("G2 generator is not on the curve")
    })
}

/// One of the four integers making up an affine G2 point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum G2Limb {
    #[strum(to_string = "1")]
    XReal = 1,
    #[strum(to_string = "2")]
    XImaginary = 2,
    #[strum(to_string = "3")]
    YReal = 3,
    #[strum(to_string = "4")]
    YImaginary = 4,
}

impl FromStr for G2Limb {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(G2Limb::XReal),
            "2" => Ok(G2Limb::XImaginary),
            "3" => Ok(G2Limb::YReal),
            "4" => Ok(G2Limb::YImaginary),
            _ => Err(OracleError::UnknownSelector {
                kind: "limb",
                value: s.to_string(),
                expected: "1, 2, 3, 4",
            }),
        }
    }
}

/// The four big-endian limbs of an affine G2 point, indexed by [`G2Limb`].
///
/// The point at infinity has no affine form and is represented by four zero
/// limbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2Limbs([[u8; BN254_FP_BYTES]; 4]);

impl G2Limbs {
    pub const IDENTITY: G2Limbs = G2Limbs([[0u8; BN254_FP_BYTES]; 4]);

    pub fn from_affine(point: &AffineG2) -> Result<Self, OracleError> {
        let (x, y) = (point.x(), point.y());
        Ok(G2Limbs([
            fq_to_bytes(x.real(), "x.c0")?,
            fq_to_bytes(x.imaginary(), "x.c1")?,
            fq_to_bytes(y.real(), "y.c0")?,
            fq_to_bytes(y.imaginary(), "y.c1")?,
        ]))
    }

    pub fn limb(&self, limb: G2Limb) -> &[u8; BN254_FP_BYTES] {
        &self.0[limb as usize - 1]
    }
}

fn fq_to_bytes(value: Fq, name: &'static str) -> Result<[u8; BN254_FP_BYTES], OracleError> {
    let mut bytes_be = [0u8; BN254_FP_BYTES];
    value
        .to_big_endian(&mut bytes_be)
        .map_err(|_| OracleError::FieldEncoding(name))?;
    Ok(bytes_be)
}

/// Reduce `scalar` modulo `r` and convert it into an `Fr`.
fn scalar_to_fr(scalar: &BigUint) -> Result<Fr, OracleError> {
    let reduced = scalar % BigUint::from_bytes_be(&BN254_FR_MODULUS);
    let bytes_be = to_fixed_be_bytes::<32>("scalar", &reduced)?;
    Fr::from_slice(&bytes_be).map_err(|_| OracleError::FieldEncoding("scalar"))
}

/// Compute `scalar * G2` and split the affine result into limbs.
pub fn scale_generator(scalar: &BigUint) -> Result<G2Limbs, OracleError> {
    let fr = scalar_to_fr(scalar)?;
    let point = G2::from(*g2_generator()) * fr;
    match AffineG2::from_jacobian(point) {
        Some(affine) => G2Limbs::from_affine(&affine),
        None => {
            tracing::debug!(
                "scalar {scalar} is a multiple of the group order, result is the identity"
            );
            Ok(G2Limbs::IDENTITY)
        }
    }
}

/// `0x`-prefixed, 64 digit uppercase hex of one limb of `scalar * G2`.
pub fn derive_g2_limb(scalar_decimal: &str, limb: G2Limb) -> Result<String, OracleError> {
    let scalar = parse_decimal("scalar", scalar_decimal)?;
    let limbs = scale_generator(&scalar)?;
    tracing::trace!("G2 limbs for scalar {scalar}: {limbs:?}");
    let hex = format_limb_hex(limbs.limb(limb));
    tracing::debug!("G2 limb {limb} for scalar {scalar_decimal}: {hex}");
    Ok(hex)
}
