//! # Secure-Gate Type Aliases
//!
//! Fixed-size buffers for the two values that flow through every operation.
//! Both are direct aliases of [`secure_gate::Fixed`], so they are wiped on drop
//! and only readable through `.expose_secret()`.
//!
//! - [`Note16`] - 16-byte note, sent to the signer as hex and used as the IV
//! - [`DerivedKey32`] - 32-byte AES-256 key taken from the signature

use secure_gate::Fixed;

/// Generic secure stack buffer.
pub type SpanBuffer<const N: usize> = Fixed<[u8; N]>;

pub type Note16 = SpanBuffer<16>; // public, but never reused
pub type DerivedKey32 = SpanBuffer<32>; // lives for one operation
