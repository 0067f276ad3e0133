//! src/encryptor/signed.rs
//! Full encrypt flow: fresh note → signer → key → stream
//!
//! The signer is awaited before any cipher exists or any output is opened,
//! so a declined or failed signature leaves nothing behind.

use crate::aliases::{DerivedKey32, Note16};
use crate::builders::NoteCryptConfig;
use crate::crypto::kdf::derive_key;
use crate::crypto::rng::generate_note;
use crate::encryptor::file::encrypt_file_with_key;
use crate::encryptor::stream::encrypt_stream;
use crate::error::{NoteCryptError, Result};
use crate::signer::Signer;
use crate::state::{Operation, OperationState};
use crate::utils::{require_source, signing_message};
use std::path::Path;
use secure_gate::RevealSecret;

/// Encrypt `plaintext` under a fresh note signed by `signer`.
pub async fn encrypt_with_signer<S>(
    signer: &S,
    plaintext: &[u8],
    config: &NoteCryptConfig,
) -> Result<Vec<u8>>
where
    S: Signer + ?Sized,
{
    let mut op = Operation::new("encrypt");
    let (note, key) = sign_fresh_note(&mut op, signer, config).await?;

    op.advance(OperationState::Streaming)?;
    let mut out = Vec::with_capacity(note.expose_secret().len() + plaintext.len());
    let result = encrypt_stream(plaintext, &mut out, &note, &key, config.chunk_size());
    op.track(result)?;

    op.advance(OperationState::Complete)?;
    Ok(out)
}

/// Encrypt the file at `src` into `dst` under a fresh note signed by `signer`.
///
/// The copy runs on tokio's blocking pool, so this must be awaited inside a
/// Tokio runtime. Returns the plaintext byte count.
pub async fn encrypt_file_with_signer<S>(
    signer: &S,
    src: &Path,
    dst: &Path,
    config: &NoteCryptConfig,
) -> Result<u64>
where
    S: Signer + ?Sized,
{
    let mut op = Operation::new("encrypt_file");
    op.track(require_source(src))?;
    let (note, key) = sign_fresh_note(&mut op, signer, config).await?;

    op.advance(OperationState::Streaming)?;
    let (src, dst, chunk_size) = (src.to_path_buf(), dst.to_path_buf(), config.chunk_size());
    let result = tokio::task::spawn_blocking(move || {
        encrypt_file_with_key(&src, &dst, &note, &key, chunk_size)
    })
    .await
    .map_err(|e| NoteCryptError::Task(e.to_string()))
    .and_then(|inner| inner);
    let written = op.track(result)?;

    op.advance(OperationState::Complete)?;
    Ok(written)
}

async fn sign_fresh_note<S>(
    op: &mut Operation,
    signer: &S,
    config: &NoteCryptConfig,
) -> Result<(Note16, DerivedKey32)>
where
    S: Signer + ?Sized,
{
    let note = op.track(generate_note())?;

    op.advance(OperationState::AwaitingSignature)?;
    let message = signing_message(config.message_prefix(), &note);
    let signature = signer.request_signature(&message).await.inspect_err(|e| {
        log::warn!("signer did not sign note: {e}");
    });
    let signature = op.track(signature)?;

    let key = op.track(derive_key(&signature))?;
    op.advance(OperationState::KeyDerived)?;
    Ok((note, key))
}
