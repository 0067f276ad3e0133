//! src/crypto/kdf/signature.rs
//! Signature → AES-256 key
//!
//! The signer's output is treated as opaque hex. The first 64 hex characters
//! after an optional `0x` are the key; everything after them (the rest of `s`,
//! the recovery byte) is ignored.

use crate::aliases::DerivedKey32;
use crate::consts::{KEY_HEX_LEN, KEY_SIZE};
use crate::error::{NoteCryptError, Result};
use secure_gate::RevealSecretMut;

/// Derive the 32-byte key from a hex signature.
///
/// Deterministic: the same signature text always yields the same key, and two
/// signatures that agree on their first 64 hex characters yield the same key.
///
/// # Errors
///
/// [`NoteCryptError::MalformedKeyMaterial`] if fewer than 64 characters remain
/// after the prefix, or if any of those 64 is not a hex digit. A short key is
/// never padded.
#[inline]
pub fn derive_key(signature: &str) -> Result<DerivedKey32> {
    let trimmed = signature.trim();
    let body = trimmed.strip_prefix("0x").unwrap_or(trimmed);

    let Some(key_hex) = body.get(..KEY_HEX_LEN) else {
        return Err(NoteCryptError::MalformedKeyMaterial(format!(
            "need {KEY_HEX_LEN} hex characters, signature has {}",
            body.len()
        )));
    };

    let mut key = DerivedKey32::new([0u8; KEY_SIZE]);
    hex::decode_to_slice(key_hex, key.expose_secret_mut())
        .map_err(|e| NoteCryptError::MalformedKeyMaterial(format!("signature is not hex: {e}")))?;

    log::debug!("derived {KEY_SIZE}-byte key from signature");
    Ok(key)
}
