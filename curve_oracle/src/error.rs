use secp::errors::InvalidScalarBytes;
use thiserror::Error;

/// Errors raised while decoding arguments or deriving a point.
#[derive(Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OracleError {
    /// The argument is not a plain base-10 integer
    #[error("{argument}: {value:?} is not a decimal integer")]
    Parse {
        argument: &'static str,
        value: String,
    },
    /// The integer does not fit the target encoding
    #[error("{argument}: value needs {actual} bytes, at most {max} allowed")]
    Range {
        argument: &'static str,
        actual: usize,
        max: usize,
    },
    /// secp256k1 rejected the private scalar: zero or not below the group order
    #[error("invalid secp256k1 private key, expected 1 <= scalar < n")]
    InvalidKey(#[from] InvalidScalarBytes),
    /// The first-level command name is not known
    #[error("unknown command {0:?}, expected one of: computeG2Point, getECDSAPubKey")]
    UnknownCommand(String),
    /// The limb or coordinate selector is not known
    #[error("unknown {kind} selector {value:?}, expected one of: {expected}")]
    UnknownSelector {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
    /// A BN254 field element could not be converted
    #[error("BN254 {0} could not be encoded as 32 big-endian bytes")]
    FieldEncoding(&'static str),
}
