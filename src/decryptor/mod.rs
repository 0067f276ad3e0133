// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(input, output, signed_note)?` for any reader/writer pair.
//! Helpers: `decrypt_stream`, `decrypt_ciphertext_stream` for custom flows
//! where the note was extracted separately.

pub(crate) mod decrypt;
pub(crate) mod file;
pub(crate) mod signed;
pub(crate) mod stream;

pub use decrypt::{decrypt, decrypt_buffer, decrypt_with_config};
pub use file::decrypt_file;
pub use signed::{decrypt_file_with_signer, decrypt_with_signer};
pub use stream::{decrypt_ciphertext_stream, decrypt_stream};
