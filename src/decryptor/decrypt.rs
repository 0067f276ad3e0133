//! src/decryptor/decrypt.rs
//! Note-keyed decryption with an already obtained signature

use crate::builders::NoteCryptConfig;
use crate::consts::{NOTE_SIZE, STREAM_CHUNK_SIZE};
use crate::crypto::cipher::create_decipher;
use crate::crypto::kdf::derive_key;
use crate::decryptor::stream::decrypt_ciphertext_stream;
use crate::error::Result;
use crate::header::{note_from_buffer, note_from_reader};
use std::io::{Read, Write};

/// Decrypt a `note || ciphertext` payload from `input` into `output`.
///
/// The key is derived before anything is read, and the note is read before
/// anything is written.
#[inline]
pub fn decrypt<R, W>(input: R, output: W, signed_note: &str) -> Result<u64>
where
    R: Read,
    W: Write,
{
    decrypt_with_chunk_size(input, output, signed_note, STREAM_CHUNK_SIZE)
}

/// [`decrypt`] using the chunk size from `config`.
#[inline]
pub fn decrypt_with_config<R, W>(
    input: R,
    output: W,
    signed_note: &str,
    config: &NoteCryptConfig,
) -> Result<u64>
where
    R: Read,
    W: Write,
{
    decrypt_with_chunk_size(input, output, signed_note, config.chunk_size())
}

/// Decrypt an in-memory payload.
pub fn decrypt_buffer(payload: &[u8], signed_note: &str) -> Result<Vec<u8>> {
    let key = derive_key(signed_note)?;
    let note = note_from_buffer(payload)?;

    let mut decipher = create_decipher(&key, &note);
    let mut plaintext = payload[NOTE_SIZE..].to_vec();
    decipher.update_in_place(&mut plaintext)?;
    plaintext.extend(decipher.finalize()?);
    Ok(plaintext)
}

fn decrypt_with_chunk_size<R, W>(
    mut input: R,
    output: W,
    signed_note: &str,
    chunk_size: usize,
) -> Result<u64>
where
    R: Read,
    W: Write,
{
    let key = derive_key(signed_note)?;
    let note = note_from_reader(&mut input)?;
    let written = decrypt_ciphertext_stream(input, output, &note, &key, chunk_size)?;
    log::debug!("decrypted {written} bytes");
    Ok(written)
}
