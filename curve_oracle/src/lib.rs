//! Independently computed reference values for cross-checking elliptic curve
//! code.
//!
//! Two derivations are offered:
//! - [`secp256k1::derive_public_key_coordinate`]: an affine coordinate of the
//!   secp256k1 public key for a private scalar.
//! - [`bn254::derive_g2_limb`]: one of the four base field limbs of a multiple
//!   of the BN254 G2 generator.
//!
//! Both take their scalar as a decimal string and return the hex text the
//! command line tool prints. [`Request`] ties a command name and selector to
//! one of them.

pub mod bn254;
pub mod codec;
mod error;
pub mod request;
pub mod secp256k1;

pub use error::OracleError;
pub use request::Request;
