// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! - `encrypt(input, output, &note, signed_note)?` for any reader/writer pair
//! - `encrypt_buffer`, `encrypt_file` for whole buffers and files
//! - `encrypt_with_signer`, `encrypt_file_with_signer` for the full flow
//!   including note generation and the signer round-trip

pub(crate) mod encrypt;
pub(crate) mod file;
pub mod frame;
pub(crate) mod signed;
pub(crate) mod stream;

pub use encrypt::{encrypt, encrypt_buffer, encrypt_with_config};
pub use file::encrypt_file;
pub use frame::{FramedWriter, NoteFramer};
pub use signed::{encrypt_file_with_signer, encrypt_with_signer};
pub use stream::encrypt_stream;
