// src/crypto/rng.rs
//! Secure randomness for fixed-size secrets.
//!
//! Adds `T::try_random()` to every `Fixed<[u8; N]>` alias (`Note16`,
//! `DerivedKey32`, ...) straight from the OS RNG. A failing OS RNG is an
//! error, never a zero-filled buffer.

use crate::aliases::Note16;
use crate::error::{NoteCryptError, Result};
use rand::{rngs::OsRng, TryRngCore};
use secure_gate::Fixed;
use secure_gate::RevealSecret;

/// Extension trait – gives `.try_random()` to all fixed-size secret types
pub trait SecureRandomExt: Sized {
    /// Generate a cryptographically secure random instance of this type
    fn try_random() -> Result<Self>;
}

impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline]
    fn try_random() -> Result<Self> {
        let mut bytes = [0u8; N];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| NoteCryptError::Crypto(format!("OS RNG unavailable: {e}")))?;
        Ok(Fixed::new(bytes))
    }
}

/// Generate a fresh note for one encryption.
///
/// Each call draws 16 new bytes; a note must never be reused with the same key.
pub fn generate_note() -> Result<Note16> {
    let note = Note16::try_random()?;
    log::debug!("generated fresh {}-byte note", note.expose_secret().len());
    Ok(note)
}
