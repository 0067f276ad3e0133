// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! - [`rng`] - fresh notes from the OS RNG
//! - [`kdf`] - key derivation from a signature
//! - [`cipher`] - the AES-256-CTR stream bound to one (key, note) pair

pub mod cipher;
pub mod kdf;
pub mod rng;
