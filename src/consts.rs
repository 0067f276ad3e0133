//! # Constants
//!
//! Fixed sizes, identifiers, and defaults shared by the cipher engine, the
//! framing codec and the file helpers. Runtime overrides live in
//! [`NoteCryptConfig`](crate::builders::NoteCryptConfig); nothing here is mutable.

/// Cipher construction used for every payload.
pub const CIPHER_ALGORITHM: &str = "aes-256-ctr";

/// Size of the note, which doubles as the counter-mode IV.
pub const NOTE_SIZE: usize = 16;

/// Size of the key derived from a signature.
pub const KEY_SIZE: usize = 32;

/// Number of hex characters of signature consumed as key material.
pub const KEY_HEX_LEN: usize = KEY_SIZE * 2;

/// Text the signer is asked to sign, followed by the note's hex form.
pub const SIGN_MESSAGE_PREFIX: &str = "Sign this message to derive a file encryption key.\n\nNote: ";

/// Extension appended to encrypted outputs by default.
pub const ENCRYPTED_EXTENSION: &str = "enc";

/// Extension appended to decrypted outputs when the source has no `.enc` to strip.
pub const DECRYPTED_EXTENSION: &str = "dec";

/// Default read size for the streaming pipeline (64 KiB).
pub const STREAM_CHUNK_SIZE: usize = 64 * 1024;

/// Upper bound on ` (n)` suffixes tried when resolving a free output path.
pub const MAX_OUTPUT_SUFFIX: u32 = 10_000;
