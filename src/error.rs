//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All operations return [`Result<T>`](Result) for explicit error handling;
//! nothing in the core substitutes a default key or note on failure.

use crate::state::OperationState;
use thiserror::Error;

/// Result alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, NoteCryptError>;

/// The error type for all note-keyed encryption operations.
#[derive(Error, Debug)]
pub enum NoteCryptError {
    /// The source is missing, or too short to hold a note.
    ///
    /// Also used for notes that are not valid 16-byte hex and for output
    /// paths that cannot be resolved.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The identity holder refused to sign the note.
    #[error("Signer declined: {0}")]
    SignerDeclined(String),

    /// The signing round-trip failed for any other reason.
    #[error("Signer error: {0}")]
    Signer(String),

    /// The signature does not carry 64 hex characters of key material.
    #[error("Malformed key material: {0}")]
    MalformedKeyMaterial(String),

    /// I/O error while streaming from the source or into the sink.
    ///
    /// This variant wraps [`std::io::Error`] and is created automatically
    /// by `?` on any read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cryptographic primitive failure (RNG unavailable, keystream exhausted).
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// `update` or `finalize` was called on a stream that was already finalized.
    #[error("cipher stream already finalized")]
    StreamFinalized,

    /// An operation tried to move between states out of order.
    #[error("invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        /// State the operation was in.
        from: OperationState,
        /// State that was requested.
        to: OperationState,
    },

    /// The blocking worker running a file stream panicked or was cancelled.
    #[error("Worker task failed: {0}")]
    Task(String),
}
