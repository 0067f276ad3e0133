//! tests/common.rs
//! Common constants and utilities shared across test files

use async_trait::async_trait;
use notecrypt::{NoteCryptError, Result, Signer};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// 32 bytes of 0x11 as the key, then bytes the key must ignore
#[allow(dead_code)] // Used across multiple test files
pub const TEST_SIGNATURE: &str =
    "0x1111111111111111111111111111111111111111111111111111111111111111\
     22222222222222222222222222222222222222222222222222222222222222221b";

/// Different first 32 bytes → different key
#[allow(dead_code)]
pub const OTHER_SIGNATURE: &str =
    "0x3333333333333333333333333333333333333333333333333333333333333333\
     22222222222222222222222222222222222222222222222222222222222222221b";

#[allow(dead_code)]
pub const TEST_DATA: &[u8] = b"hello world";

/// Deterministic pseudo-random bytes for larger inputs
#[allow(dead_code)]
pub fn test_bytes(len: usize) -> Vec<u8> {
    let mut state = 0x2545_F491_u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}

/// Signs by echoing the note, so every note gets its own key.
/// Records every message it was asked to sign.
#[allow(dead_code)]
#[derive(Default)]
pub struct EchoSigner {
    calls: AtomicUsize,
    messages: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl EchoSigner {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Signer for EchoSigner {
    async fn request_signature(&self, message: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.messages.lock().unwrap().push(message.to_string());
        // the note hex is the last 32 characters of the message
        let note_hex = &message[message.len() - 32..];
        Ok(format!("0x{note_hex}{note_hex}1c"))
    }
}

/// Always refuses.
#[allow(dead_code)]
pub struct DecliningSigner;

#[async_trait]
impl Signer for DecliningSigner {
    async fn request_signature(&self, _message: &str) -> Result<String> {
        Err(NoteCryptError::SignerDeclined("user rejected request".into()))
    }
}

/// Signs with something too short to be a key.
#[allow(dead_code)]
pub struct ShortSigner;

#[async_trait]
impl Signer for ShortSigner {
    async fn request_signature(&self, _message: &str) -> Result<String> {
        Ok("0xdeadbeef".into())
    }
}
