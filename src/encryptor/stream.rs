//! src/encryptor/stream.rs
//! Streaming encryption: source → CTR → note framing → sink

use crate::aliases::{DerivedKey32, Note16};
use crate::crypto::cipher::create_cipher;
use crate::encryptor::frame::FramedWriter;
use crate::error::Result;
use crate::utils::read_chunk;
use std::io::{Read, Write};

/// Encrypt `source` into `destination` as `note || ciphertext`.
///
/// Memory use is one `chunk_size` buffer regardless of input size. Returns
/// the number of plaintext bytes consumed.
pub fn encrypt_stream<R, W>(
    mut source: R,
    destination: W,
    note: &Note16,
    key: &DerivedKey32,
    chunk_size: usize,
) -> Result<u64>
where
    R: Read,
    W: Write,
{
    let mut cipher = create_cipher(key, note);
    let mut framed = FramedWriter::new(destination, note);
    let mut buf = vec![0u8; chunk_size.max(1)];

    loop {
        let n = read_chunk(&mut source, &mut buf)?;
        if n == 0 {
            break;
        }
        cipher.update_in_place(&mut buf[..n])?;
        framed.write_chunk(&buf[..n])?;
        if n < buf.len() {
            break;
        }
    }

    let tail = cipher.finalize()?;
    framed.write_chunk(&tail)?;
    framed.finish()?;

    Ok(cipher.processed())
}
