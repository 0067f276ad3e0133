// src/lib.rs

//! File encryption keyed by a signature.
//!
//! A fresh 16-byte note is signed by an external [`Signer`]; the first 32
//! bytes of the signature become an AES-256-CTR key and the note becomes the
//! IV. The key is never stored: whoever can get the same identity to sign the
//! same note again can decrypt.
//!
//! Payload layout: `note (16 bytes) || ciphertext (same length as plaintext)`.
//! There is no authentication tag; a wrong key decrypts to garbage silently.

pub mod aliases;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod header;
pub mod output;
pub mod signer;
pub mod state;
pub mod utils;

// High-level API
pub use decryptor::{
    decrypt, decrypt_buffer, decrypt_file, decrypt_file_with_signer, decrypt_with_signer,
};
pub use encryptor::{
    encrypt, encrypt_buffer, encrypt_file, encrypt_file_with_signer, encrypt_with_signer,
};
pub use error::{NoteCryptError, Result};
pub use signer::{Signer, StaticSigner};

// Building blocks for custom flows
pub use builders::NoteCryptConfig;
pub use crypto::cipher::{create_cipher, create_decipher, CipherStream};
pub use crypto::kdf::derive_key;
pub use crypto::rng::generate_note;
pub use header::{note_from_buffer, note_from_path, note_from_reader};
pub use output::resolve_output_path;
pub use utils::{note_from_hex, note_to_hex, signing_message};
