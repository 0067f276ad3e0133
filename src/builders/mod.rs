//! # Builders
//!
//! Builder patterns for runtime configuration.
//!
//! ## Modules
//!
//! - [`config_builder`] - [`NoteCryptConfig`] and its fluent builder
//!
//! ## Usage
//!
//! ```
//! use notecrypt::builders::NoteCryptConfig;
//!
//! let config = NoteCryptConfig::builder().with_chunk_size(4096).build();
//! assert_eq!(config.chunk_size(), 4096);
//! ```

pub mod config_builder;

pub use config_builder::{NoteCryptConfig, NoteCryptConfigBuilder};
