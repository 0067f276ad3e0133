//! Key derivation.
//!
//! There is exactly one KDF: the first 32 bytes of a hex signature.

pub mod signature;

pub use signature::derive_key;
