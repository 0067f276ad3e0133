//! src/builders/config_builder.rs
//! Immutable runtime configuration + its builder

use crate::consts::{
    CIPHER_ALGORITHM, DECRYPTED_EXTENSION, ENCRYPTED_EXTENSION, SIGN_MESSAGE_PREFIX,
    STREAM_CHUNK_SIZE,
};

/// Settings shared by the orchestrators.
///
/// Built once and passed by reference; there is no global mutable state.
/// Key and note sizes are not configurable.
///
/// # Thread Safety
///
/// `Send + Sync` and cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCryptConfig {
    algorithm: &'static str,
    message_prefix: String,
    chunk_size: usize,
    encrypted_extension: String,
    decrypted_extension: String,
}

impl NoteCryptConfig {
    /// Start a builder from the defaults.
    #[must_use]
    pub fn builder() -> NoteCryptConfigBuilder {
        NoteCryptConfigBuilder::new()
    }

    /// Cipher identifier (always [`CIPHER_ALGORITHM`]).
    pub const fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Text placed before the note's hex in the signing message.
    pub fn message_prefix(&self) -> &str {
        &self.message_prefix
    }

    /// Bytes read per step of the streaming pipeline.
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Extension given to encrypted outputs.
    pub fn encrypted_extension(&self) -> &str {
        &self.encrypted_extension
    }

    /// Extension given to decrypted outputs when there is none to strip.
    pub fn decrypted_extension(&self) -> &str {
        &self.decrypted_extension
    }
}

impl Default for NoteCryptConfig {
    fn default() -> Self {
        Self {
            algorithm: CIPHER_ALGORITHM,
            message_prefix: SIGN_MESSAGE_PREFIX.to_string(),
            chunk_size: STREAM_CHUNK_SIZE,
            encrypted_extension: ENCRYPTED_EXTENSION.to_string(),
            decrypted_extension: DECRYPTED_EXTENSION.to_string(),
        }
    }
}

/// Builder for [`NoteCryptConfig`]
///
/// Defaults come from [`crate::consts`].
#[derive(Debug, Clone, Default)]
pub struct NoteCryptConfigBuilder {
    config: NoteCryptConfig,
}

impl NoteCryptConfigBuilder {
    /// Builder holding the defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signing message prefix
    ///
    /// Both sides of a payload must agree on it, otherwise decryption
    /// silently produces garbage.
    #[must_use]
    pub fn with_message_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.message_prefix = prefix.into();
        self
    }

    /// Set the streaming chunk size (minimum 1)
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = chunk_size.max(1);
        self
    }

    /// Set the encrypted-output extension (without the dot)
    #[must_use]
    pub fn with_encrypted_extension(mut self, ext: impl Into<String>) -> Self {
        self.config.encrypted_extension = ext.into().trim_start_matches('.').to_string();
        self
    }

    /// Set the decrypted-output extension (without the dot)
    #[must_use]
    pub fn with_decrypted_extension(mut self, ext: impl Into<String>) -> Self {
        self.config.decrypted_extension = ext.into().trim_start_matches('.').to_string();
        self
    }

    #[must_use]
    pub fn build(self) -> NoteCryptConfig {
        self.config
    }
}
