//! src/decryptor/signed.rs
//! Full decrypt flow: note from payload → signer → key → stream

use crate::aliases::{DerivedKey32, Note16};
use crate::builders::NoteCryptConfig;
use crate::consts::NOTE_SIZE;
use crate::crypto::cipher::create_decipher;
use crate::crypto::kdf::derive_key;
use crate::decryptor::file::decrypt_file_with_key;
use crate::error::{NoteCryptError, Result};
use crate::header::{note_from_buffer, note_from_path};
use crate::signer::Signer;
use crate::state::{Operation, OperationState};
use crate::utils::{require_source, signing_message};
use std::path::Path;

/// Decrypt an in-memory payload, asking `signer` to sign its note.
pub async fn decrypt_with_signer<S>(
    signer: &S,
    payload: &[u8],
    config: &NoteCryptConfig,
) -> Result<Vec<u8>>
where
    S: Signer + ?Sized,
{
    let mut op = Operation::new("decrypt");
    let note = op.track(note_from_buffer(payload))?;
    let key = sign_note(&mut op, signer, &note, config).await?;

    op.advance(OperationState::Streaming)?;
    let mut decipher = create_decipher(&key, &note);
    let mut plaintext = payload[NOTE_SIZE..].to_vec();
    op.track(decipher.update_in_place(&mut plaintext))?;
    plaintext.extend(op.track(decipher.finalize())?);

    op.advance(OperationState::Complete)?;
    Ok(plaintext)
}

/// Decrypt the payload file at `src` into `dst`, asking `signer` to sign its note.
///
/// Only the first 16 bytes of `src` are read before the signature arrives.
/// The copy runs on tokio's blocking pool, so this must be awaited inside a
/// Tokio runtime.
pub async fn decrypt_file_with_signer<S>(
    signer: &S,
    src: &Path,
    dst: &Path,
    config: &NoteCryptConfig,
) -> Result<u64>
where
    S: Signer + ?Sized,
{
    let mut op = Operation::new("decrypt_file");
    op.track(require_source(src))?;
    let note = op.track(note_from_path(src))?;
    let key = sign_note(&mut op, signer, &note, config).await?;

    op.advance(OperationState::Streaming)?;
    let (src, dst, chunk_size) = (src.to_path_buf(), dst.to_path_buf(), config.chunk_size());
    let result = tokio::task::spawn_blocking(move || {
        decrypt_file_with_key(&src, &dst, &note, &key, chunk_size)
    })
    .await
    .map_err(|e| NoteCryptError::Task(e.to_string()))
    .and_then(|inner| inner);
    let written = op.track(result)?;

    op.advance(OperationState::Complete)?;
    Ok(written)
}

async fn sign_note<S>(
    op: &mut Operation,
    signer: &S,
    note: &Note16,
    config: &NoteCryptConfig,
) -> Result<DerivedKey32>
where
    S: Signer + ?Sized,
{
    op.advance(OperationState::AwaitingSignature)?;
    let message = signing_message(config.message_prefix(), note);
    let signature = signer.request_signature(&message).await.inspect_err(|e| {
        log::warn!("signer did not sign note: {e}");
    });
    let signature = op.track(signature)?;

    let key = op.track(derive_key(&signature))?;
    op.advance(OperationState::KeyDerived)?;
    Ok(key)
}
