//! src/encryptor/encrypt.rs
//! Note-keyed encryption with an already obtained signature

use crate::aliases::Note16;
use crate::builders::NoteCryptConfig;
use crate::consts::{NOTE_SIZE, STREAM_CHUNK_SIZE};
use crate::crypto::kdf::derive_key;
use crate::encryptor::stream::encrypt_stream;
use crate::error::Result;
use std::io::{Read, Write};

/// Encrypt `input` into `output` as `note || ciphertext`.
///
/// `signed_note` is the signer's signature over the message built from
/// `note`. The key is derived before the first byte is written, so a
/// malformed signature leaves `output` untouched.
///
/// `note` must be fresh: encrypting two plaintexts under the same note and
/// signature exposes their XOR.
#[inline]
pub fn encrypt<R, W>(input: R, output: W, note: &Note16, signed_note: &str) -> Result<u64>
where
    R: Read,
    W: Write,
{
    encrypt_with_chunk_size(input, output, note, signed_note, STREAM_CHUNK_SIZE)
}

/// [`encrypt`] using the chunk size from `config`.
#[inline]
pub fn encrypt_with_config<R, W>(
    input: R,
    output: W,
    note: &Note16,
    signed_note: &str,
    config: &NoteCryptConfig,
) -> Result<u64>
where
    R: Read,
    W: Write,
{
    encrypt_with_chunk_size(input, output, note, signed_note, config.chunk_size())
}

/// Encrypt a whole buffer, returning `note || ciphertext`.
///
/// # Example
///
/// ```
/// use notecrypt::{decrypt_buffer, encrypt_buffer, note_from_hex};
///
/// let note = note_from_hex(&"00".repeat(16))?;
/// let signature = "11".repeat(32);
///
/// let payload = encrypt_buffer(b"hello world", &note, &signature)?;
/// assert_eq!(payload.len(), 16 + 11);
/// assert_eq!(decrypt_buffer(&payload, &signature)?, b"hello world");
/// # Ok::<(), notecrypt::NoteCryptError>(())
/// ```
pub fn encrypt_buffer(plaintext: &[u8], note: &Note16, signed_note: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(NOTE_SIZE + plaintext.len());
    encrypt(plaintext, &mut out, note, signed_note)?;
    Ok(out)
}

fn encrypt_with_chunk_size<R, W>(
    input: R,
    output: W,
    note: &Note16,
    signed_note: &str,
    chunk_size: usize,
) -> Result<u64>
where
    R: Read,
    W: Write,
{
    let key = derive_key(signed_note)?;
    let written = encrypt_stream(input, output, note, &key, chunk_size)?;
    log::debug!("encrypted {written} bytes");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoteCryptError;
    use std::io::Cursor;

    const SIG: &str = "0x11111111111111111111111111111111111111111111111111111111111111111b";

    #[test]
    fn payload_is_note_plus_ciphertext() {
        let note = Note16::new([0x42; 16]);
        let out = encrypt_buffer(b"hello world", &note, SIG).unwrap();
        assert_eq!(out.len(), 16 + 11);
        assert_eq!(&out[..16], &[0x42; 16]);
        assert_ne!(&out[16..], b"hello world");
    }

    #[test]
    fn empty_plaintext_is_note_only() {
        let note = Note16::new([0x42; 16]);
        assert_eq!(encrypt_buffer(&[], &note, SIG).unwrap(), vec![0x42; 16]);
    }

    #[test]
    fn bad_signature_writes_nothing() {
        let note = Note16::new([0u8; 16]);
        let mut out = Vec::new();
        let err = encrypt(Cursor::new(b"data"), &mut out, &note, "0x1234").unwrap_err();
        assert!(matches!(err, NoteCryptError::MalformedKeyMaterial(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn chunk_size_does_not_change_output() {
        let note = Note16::new([3u8; 16]);
        let data = vec![0x5A; 10_000];
        let small = NoteCryptConfig::builder().with_chunk_size(7).build();

        let mut a = Vec::new();
        encrypt_with_config(&data[..], &mut a, &note, SIG, &small).unwrap();
        let b = encrypt_buffer(&data, &note, SIG).unwrap();
        assert_eq!(a, b);
    }
}
