//! # Note Extraction
//!
//! Every payload starts with the 16-byte note it was encrypted under:
//!
//! ```text
//! [0, 16)    note (the counter-mode IV), raw bytes
//! [16, EOF)  ciphertext, same length as the plaintext
//! ```
//!
//! The functions here recover the note without touching the ciphertext, so a
//! caller can ask the signer for the key before any decryption starts.

use crate::aliases::Note16;
use crate::consts::NOTE_SIZE;
use crate::error::{NoteCryptError, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// The note at the front of an in-memory payload.
///
/// Only the first 16 bytes are looked at.
///
/// # Errors
///
/// [`NoteCryptError::InvalidInput`] if `data` is shorter than 16 bytes.
///
/// # Example
///
/// ```
/// use notecrypt::note_from_buffer;
/// use secure_gate::RevealSecret;
///
/// let mut payload = vec![7u8; 16];
/// payload.extend_from_slice(b"ciphertext");
/// let note = note_from_buffer(&payload)?;
/// assert_eq!(note.expose_secret(), &[7u8; 16]);
/// # Ok::<(), notecrypt::NoteCryptError>(())
/// ```
pub fn note_from_buffer(data: &[u8]) -> Result<Note16> {
    let Some(head) = data.get(..NOTE_SIZE) else {
        return Err(too_short(data.len()));
    };
    let mut note = [0u8; NOTE_SIZE];
    note.copy_from_slice(head);
    Ok(Note16::new(note))
}

/// Read the note from the front of `reader`, leaving it positioned at the ciphertext.
///
/// # Errors
///
/// [`NoteCryptError::InvalidInput`] if the source ends before 16 bytes,
/// [`NoteCryptError::Io`] for any other read failure.
pub fn note_from_reader<R: Read + ?Sized>(reader: &mut R) -> Result<Note16> {
    let mut note = [0u8; NOTE_SIZE];
    match reader.read_exact(&mut note) {
        Ok(()) => Ok(Note16::new(note)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(NoteCryptError::InvalidInput(
            format!("payload ends before the {NOTE_SIZE}-byte note"),
        )),
        Err(e) => Err(e.into()),
    }
}

/// Read bytes `[0, 16)` of the file at `path`.
///
/// Only the note is read, whatever the file size; the handle is closed before returning.
///
/// # Errors
///
/// [`NoteCryptError::InvalidInput`] if the file does not exist or is shorter
/// than 16 bytes.
pub fn note_from_path(path: &Path) -> Result<Note16> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => NoteCryptError::InvalidInput(format!(
            "source file does not exist: {}",
            path.display()
        )),
        _ => NoteCryptError::Io(e),
    })?;
    note_from_reader(&mut file.take(NOTE_SIZE as u64))
}

fn too_short(len: usize) -> NoteCryptError {
    NoteCryptError::InvalidInput(format!(
        "payload is {len} bytes, shorter than the {NOTE_SIZE}-byte note"
    ))
}
