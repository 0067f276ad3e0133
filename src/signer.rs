//! # Signer Capability
//!
//! The identity that turns a note into key material lives outside this crate
//! (an RPC wallet, a hardware device, ...). All the core needs from it is one
//! asynchronous call: sign this message, or explain why not.
//!
//! Implementations should return [`NoteCryptError::SignerDeclined`] when the
//! identity holder refuses, and [`NoteCryptError::Signer`] for every other
//! failure. The orchestrators never retry.

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

#[cfg(doc)]
use crate::error::NoteCryptError;

/// Produces a hex signature (optionally `0x`-prefixed) over a message.
#[async_trait]
pub trait Signer: Send + Sync {
    /// Ask the identity to sign `message`.
    async fn request_signature(&self, message: &str) -> Result<String>;
}

#[async_trait]
impl<S: Signer + ?Sized> Signer for Box<S> {
    async fn request_signature(&self, message: &str) -> Result<String> {
        (**self).request_signature(message).await
    }
}

#[async_trait]
impl<S: Signer + ?Sized> Signer for Arc<S> {
    async fn request_signature(&self, message: &str) -> Result<String> {
        (**self).request_signature(message).await
    }
}

/// Returns the same signature for every message.
///
/// Useful offline, when the signature for a note was obtained out of band.
/// Every payload encrypted through it shares one key, so each still needs
/// its own note.
#[derive(Clone)]
pub struct StaticSigner {
    signature: String,
}

impl StaticSigner {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
        }
    }
}

impl std::fmt::Debug for StaticSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticSigner").finish_non_exhaustive()
    }
}

#[async_trait]
impl Signer for StaticSigner {
    async fn request_signature(&self, _message: &str) -> Result<String> {
        Ok(self.signature.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_signer_ignores_message() {
        let signer = StaticSigner::new("0xabc");
        assert_eq!(signer.request_signature("a").await.unwrap(), "0xabc");
        assert_eq!(signer.request_signature("b").await.unwrap(), "0xabc");
    }

    #[tokio::test]
    async fn smart_pointers_delegate() {
        let boxed: Box<dyn Signer> = Box::new(StaticSigner::new("01"));
        assert_eq!(boxed.request_signature("m").await.unwrap(), "01");

        let shared = Arc::new(StaticSigner::new("02"));
        assert_eq!(shared.request_signature("m").await.unwrap(), "02");
    }

    #[test]
    fn debug_hides_signature() {
        let dbg = format!("{:?}", StaticSigner::new("secret-sig"));
        assert!(!dbg.contains("secret-sig"));
    }
}
