//! Output path helpers for front ends.
//!
//! The core never picks output names itself; callers resolve a free path
//! first and then hand it to [`encrypt_file`](crate::encrypt_file) or
//! [`decrypt_file`](crate::decrypt_file). Two operations given the same
//! output path are not coordinated.

use crate::builders::NoteCryptConfig;
use crate::consts::MAX_OUTPUT_SUFFIX;
use crate::error::{NoteCryptError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Default output for encrypting `src`: the full file name plus `.enc`.
///
/// `notes.txt` → `notes.txt.enc`
pub fn default_encrypted_path(src: &Path, config: &NoteCryptConfig) -> PathBuf {
    append_extension(src, config.encrypted_extension())
}

/// Default output for decrypting `src`: strip `.enc` if present, else add `.dec`.
///
/// `notes.txt.enc` → `notes.txt`, `blob.bin` → `blob.bin.dec`
pub fn default_decrypted_path(src: &Path, config: &NoteCryptConfig) -> PathBuf {
    let has_enc = src
        .extension()
        .is_some_and(|ext| ext == config.encrypted_extension());
    let stripped = src.with_extension("");
    if has_enc && stripped.file_name().is_some() {
        stripped
    } else {
        append_extension(src, config.decrypted_extension())
    }
}

/// Return `desired` if nothing exists there, otherwise the first free
/// `stem (n).ext` for n = 1, 2, ...
///
/// # Errors
///
/// [`NoteCryptError::InvalidInput`] if `desired` has no file name or every
/// suffix up to `MAX_OUTPUT_SUFFIX` is taken.
pub fn resolve_output_path(desired: &Path) -> Result<PathBuf> {
    if !desired.exists() {
        return Ok(desired.to_path_buf());
    }

    let stem = desired.file_stem().ok_or_else(|| {
        NoteCryptError::InvalidInput(format!("output path has no file name: {}", desired.display()))
    })?;
    let ext = desired.extension();

    for n in 1..=MAX_OUTPUT_SUFFIX {
        let mut name = stem.to_os_string();
        name.push(format!(" ({n})"));
        if let Some(ext) = ext {
            name.push(".");
            name.push(ext);
        }
        let candidate = desired.with_file_name(name);
        if !candidate.exists() {
            log::warn!(
                "{} exists, writing to {} instead",
                desired.display(),
                candidate.display()
            );
            return Ok(candidate);
        }
    }

    Err(NoteCryptError::InvalidInput(format!(
        "no free output name for {} after {MAX_OUTPUT_SUFFIX} attempts",
        desired.display()
    )))
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}
