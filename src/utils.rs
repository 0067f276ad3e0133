// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::aliases::Note16;
use crate::consts::NOTE_SIZE;
use crate::error::{NoteCryptError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use secure_gate::RevealSecret;

/// Lowercase hex form of a note, as sent to the signer.
#[inline]
pub fn note_to_hex(note: &Note16) -> String {
    hex::encode(note.expose_secret())
}

/// Parse a note from its hex form (optional `0x`).
pub fn note_from_hex(note_hex: &str) -> Result<Note16> {
    let body = note_hex.strip_prefix("0x").unwrap_or(note_hex);
    let mut bytes = [0u8; NOTE_SIZE];
    hex::decode_to_slice(body, &mut bytes)
        .map_err(|e| NoteCryptError::InvalidInput(format!("note is not 16 bytes of hex: {e}")))?;
    Ok(Note16::new(bytes))
}

/// The exact message a signer is asked to sign: `prefix` followed by the note's hex.
#[inline]
pub fn signing_message(prefix: &str, note: &Note16) -> String {
    format!("{prefix}{}", note_to_hex(note))
}

/// Read until `buf` is full or the source is exhausted.
///
/// Returns the number of bytes read; less than `buf.len()` only at EOF.
/// `Interrupted` reads are retried.
pub fn read_chunk<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Fail with `InvalidInput` unless `path` is an existing file.
pub(crate) fn require_source(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(NoteCryptError::InvalidInput(format!(
            "source file does not exist: {}",
            path.display()
        )))
    }
}

/// Create `dst`, hand a buffered writer to `write`, flush.
///
/// `dst` must not exist yet; an existing file (including the source itself)
/// is rejected with `InvalidInput` and left untouched. If `write` or the
/// flush fails, the partial file is removed before the error is returned.
/// The handle is closed on every path.
pub(crate) fn write_output_file<T, F>(dst: &Path, write: F) -> Result<T>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<T>,
{
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dst)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => NoteCryptError::InvalidInput(format!(
                "output file already exists: {}",
                dst.display()
            )),
            _ => NoteCryptError::Io(e),
        })?;
    let mut writer = BufWriter::new(file);
    let result = write(&mut writer).and_then(|value| {
        writer.flush()?;
        Ok(value)
    });
    drop(writer);

    if result.is_err() {
        if let Err(e) = fs::remove_file(dst) {
            log::warn!("could not remove partial output {}: {e}", dst.display());
        }
    }
    result
}
