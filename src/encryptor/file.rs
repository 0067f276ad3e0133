//! src/encryptor/file.rs
//! File-to-file encryption

use crate::aliases::{DerivedKey32, Note16};
use crate::builders::NoteCryptConfig;
use crate::crypto::kdf::derive_key;
use crate::encryptor::stream::encrypt_stream;
use crate::error::Result;
use crate::utils::{require_source, write_output_file};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Encrypt the file at `src` into a new file at `dst`.
///
/// The source is checked and the key derived before `dst` is created. `dst`
/// must not exist, so passing the source path fails without touching it. If
/// streaming fails, the partial `dst` is removed. Pick a free name with
/// [`resolve_output_path`](crate::output::resolve_output_path).
pub fn encrypt_file(
    src: &Path,
    dst: &Path,
    note: &Note16,
    signed_note: &str,
    config: &NoteCryptConfig,
) -> Result<u64> {
    require_source(src)?;
    let key = derive_key(signed_note)?;
    encrypt_file_with_key(src, dst, note, &key, config.chunk_size())
}

pub(crate) fn encrypt_file_with_key(
    src: &Path,
    dst: &Path,
    note: &Note16,
    key: &DerivedKey32,
    chunk_size: usize,
) -> Result<u64> {
    let reader = BufReader::new(File::open(src)?);
    let written =
        write_output_file(dst, |writer| encrypt_stream(reader, writer, note, key, chunk_size))?;
    log::info!(
        "encrypted {} -> {} ({written} bytes)",
        src.display(),
        dst.display()
    );
    Ok(written)
}
