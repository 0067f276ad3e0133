//! src/crypto/cipher.rs
//! AES-256-CTR stream bound to exactly one (key, note) pair
//!
//! Counter mode turns AES into a keystream: output length always equals input
//! length, there is no padding and no integrity tag. Encryption and decryption
//! are the same XOR, so [`create_cipher`] and [`create_decipher`] differ only
//! in the direction recorded for logging.
//!
//! A [`CipherStream`] is fed any number of chunks of any size and finalized
//! once. After [`CipherStream::finalize`] the keystream state is dropped and
//! every further call fails with [`NoteCryptError::StreamFinalized`].

use crate::aliases::{DerivedKey32, Note16};
use crate::error::{NoteCryptError, Result};
use aes::Aes256;
use ctr::cipher::{KeyIvInit, StreamCipher};
use secure_gate::RevealSecret;

/// AES-256 in CTR mode with a 128-bit big-endian counter.
type Aes256Ctr = ctr::Ctr128BE<Aes256>;

/// Which way a [`CipherStream`] was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext in, ciphertext out.
    Encrypt,
    /// Ciphertext in, plaintext out.
    Decrypt,
}

/// Single-use keystream state.
pub struct CipherStream {
    cipher: Option<Aes256Ctr>,
    direction: Direction,
    processed: u64,
}

impl CipherStream {
    fn new(key: &DerivedKey32, note: &Note16, direction: Direction) -> Self {
        let cipher = Aes256Ctr::new(key.expose_secret().into(), note.expose_secret().into());
        log::debug!("opened {direction:?} stream");
        Self {
            cipher: Some(cipher),
            direction,
            processed: 0,
        }
    }

    /// Transform `chunk` and return the output (same length).
    pub fn update(&mut self, chunk: &[u8]) -> Result<Vec<u8>> {
        let mut out = chunk.to_vec();
        self.update_in_place(&mut out)?;
        Ok(out)
    }

    /// Transform `buf` in place. Used by the streaming paths to avoid a copy per chunk.
    pub fn update_in_place(&mut self, buf: &mut [u8]) -> Result<()> {
        let cipher = self.cipher.as_mut().ok_or(NoteCryptError::StreamFinalized)?;
        cipher
            .try_apply_keystream(buf)
            .map_err(|e| NoteCryptError::Crypto(format!("keystream exhausted: {e}")))?;
        self.processed += buf.len() as u64;
        Ok(())
    }

    /// Close the stream and return any buffered output.
    ///
    /// Counter mode buffers nothing, so the result is always empty; callers
    /// still forward it so the framing sees a final (possibly empty) chunk.
    pub fn finalize(&mut self) -> Result<Vec<u8>> {
        if self.cipher.take().is_none() {
            return Err(NoteCryptError::StreamFinalized);
        }
        log::debug!(
            "finalized {:?} stream after {} bytes",
            self.direction,
            self.processed
        );
        Ok(Vec::new())
    }

    /// `true` once [`finalize`](Self::finalize) has run.
    pub fn is_finalized(&self) -> bool {
        self.cipher.is_none()
    }

    /// Bytes transformed so far.
    pub const fn processed(&self) -> u64 {
        self.processed
    }

    /// Direction this stream was opened in.
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

/// Open an encrypting stream. `note` must be fresh for this key.
#[inline]
pub fn create_cipher(key: &DerivedKey32, note: &Note16) -> CipherStream {
    CipherStream::new(key, note, Direction::Encrypt)
}

/// Open a decrypting stream for a payload whose header carried `note`.
#[inline]
pub fn create_decipher(key: &DerivedKey32, note: &Note16) -> CipherStream {
    CipherStream::new(key, note, Direction::Decrypt)
}
