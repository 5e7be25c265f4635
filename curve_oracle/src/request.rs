use crate::{
    OracleError,
    bn254::{G2Limb, derive_g2_limb},
    secp256k1::{Coordinate, derive_public_key_coordinate},
};

pub const COMPUTE_G2_POINT: &str = "computeG2Point";
pub const GET_ECDSA_PUB_KEY: &str = "getECDSAPubKey";

/// A fully parsed invocation.
///
/// The scalar is kept as given and decoded by the computation, so that a
/// bad selector is reported before a bad scalar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    G2Point { scalar: String, limb: G2Limb },
    EcdsaPubKey { scalar: String, coordinate: Coordinate },
}

impl Request {
    pub fn parse(command: &str, scalar: &str, selector: &str) -> Result<Self, OracleError> {
        let scalar = scalar.to_string();
        match command {
            COMPUTE_G2_POINT => Ok(Request::G2Point {
                scalar,
                limb: selector.parse()?,
            }),
            GET_ECDSA_PUB_KEY => Ok(Request::EcdsaPubKey {
                scalar,
                coordinate: selector.parse()?,
            }),
            _ => Err(OracleError::UnknownCommand(command.to_string())),
        }
    }

    pub fn command(&self) -> &'static str {
        match self {
            Request::G2Point { .. } => COMPUTE_G2_POINT,
            Request::EcdsaPubKey { .. } => GET_ECDSA_PUB_KEY,
        }
    }

    pub fn execute(&self) -> Result<String, OracleError> {
        match self {
            Request::G2Point { scalar, limb } => derive_g2_limb(scalar, *limb),
            Request::EcdsaPubKey { scalar, coordinate } => {
                derive_public_key_coordinate(scalar, *coordinate)
            }
        }
    }

    /// Public key coordinates are printed newline-terminated, G2 limbs are not.
    pub fn trailing_newline(&self) -> bool {
        matches!(self, Request::EcdsaPubKey { .. })
    }
}
