//! src/decryptor/file.rs
//! File-to-file decryption

use crate::aliases::{DerivedKey32, Note16};
use crate::builders::NoteCryptConfig;
use crate::crypto::kdf::derive_key;
use crate::decryptor::stream::decrypt_stream;
use crate::error::Result;
use crate::header::note_from_path;
use crate::utils::{require_source, write_output_file};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Decrypt the payload file at `src` into a new file at `dst`.
///
/// The key is derived and the note read before `dst` is created, so a bad
/// signature or a truncated source leaves no output. `dst` must not exist.
/// If streaming fails, the partial `dst` is removed.
pub fn decrypt_file(
    src: &Path,
    dst: &Path,
    signed_note: &str,
    config: &NoteCryptConfig,
) -> Result<u64> {
    require_source(src)?;
    let key = derive_key(signed_note)?;
    let note = note_from_path(src)?;
    decrypt_file_with_key(src, dst, &note, &key, config.chunk_size())
}

/// Stream `src` into `dst` using the note the key was derived from.
///
/// The header in `src` is skipped, not re-read as the IV.
pub(crate) fn decrypt_file_with_key(
    src: &Path,
    dst: &Path,
    note: &Note16,
    key: &DerivedKey32,
    chunk_size: usize,
) -> Result<u64> {
    let reader = BufReader::new(File::open(src)?);
    let written = write_output_file(dst, |writer| {
        decrypt_stream(reader, writer, note, key, chunk_size)
    })?;
    log::info!(
        "decrypted {} -> {} ({written} bytes)",
        src.display(),
        dst.display()
    );
    Ok(written)
}
