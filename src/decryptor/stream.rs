//! src/decryptor/stream.rs
//! Streaming decryption: the decode half of the note framing

use crate::aliases::{DerivedKey32, Note16};
use crate::crypto::cipher::create_decipher;
use crate::error::Result;
use crate::header::note_from_reader;
use crate::utils::read_chunk;
use std::io::{Read, Write};

/// Decrypt a whole payload from `input`, skipping its 16-byte note.
///
/// `note` is the one already extracted from the same payload (it is what the
/// signer signed); the header bytes read here are discarded.
///
/// # Errors
///
/// [`InvalidInput`](crate::NoteCryptError::InvalidInput) if `input` is
/// shorter than the note.
pub fn decrypt_stream<R, W>(
    mut input: R,
    output: W,
    note: &Note16,
    key: &DerivedKey32,
    chunk_size: usize,
) -> Result<u64>
where
    R: Read,
    W: Write,
{
    note_from_reader(&mut input)?;
    decrypt_ciphertext_stream(input, output, note, key, chunk_size)
}

/// Decrypt raw ciphertext (no note header) from `input` into `output`.
///
/// No integrity check exists: a wrong key produces garbage, not an error.
/// Returns the number of plaintext bytes written.
pub fn decrypt_ciphertext_stream<R, W>(
    mut input: R,
    mut output: W,
    note: &Note16,
    key: &DerivedKey32,
    chunk_size: usize,
) -> Result<u64>
where
    R: Read,
    W: Write,
{
    let mut decipher = create_decipher(key, note);
    let mut buf = vec![0u8; chunk_size.max(1)];

    loop {
        let n = read_chunk(&mut input, &mut buf)?;
        if n == 0 {
            break;
        }
        decipher.update_in_place(&mut buf[..n])?;
        output.write_all(&buf[..n])?;
        if n < buf.len() {
            break;
        }
    }

    output.write_all(&decipher.finalize()?)?;
    output.flush()?;
    Ok(decipher.processed())
}
