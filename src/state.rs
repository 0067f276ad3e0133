//! Per-operation lifecycle.
//!
//! Every encrypt or decrypt walks the same chain:
//!
//! ```text
//! NotePending -> AwaitingSignature -> KeyDerived -> Streaming -> Complete
//!       \________________\__________________\____________\______-> Failed
//! ```
//!
//! `Complete` and `Failed` are terminal.

use crate::error::{NoteCryptError, Result};

/// Where an operation currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationState {
    /// The note is being generated (encrypt) or extracted (decrypt).
    NotePending,
    /// The signer has been asked to sign the note.
    AwaitingSignature,
    /// A key has been derived from the signature.
    KeyDerived,
    /// Bytes are flowing through the cipher.
    Streaming,
    /// All output written.
    Complete,
    /// Some step failed; no further progress is possible.
    Failed,
}

impl OperationState {
    /// `true` for `Complete` and `Failed`.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }

    const fn successor(self) -> Option<Self> {
        match self {
            Self::NotePending => Some(Self::AwaitingSignature),
            Self::AwaitingSignature => Some(Self::KeyDerived),
            Self::KeyDerived => Some(Self::Streaming),
            Self::Streaming => Some(Self::Complete),
            Self::Complete | Self::Failed => None,
        }
    }
}

/// Tracks one operation through [`OperationState`].
#[derive(Debug)]
pub struct Operation {
    name: &'static str,
    state: OperationState,
}

impl Operation {
    /// Start a new operation in `NotePending`.
    pub fn new(name: &'static str) -> Self {
        log::trace!("{name}: {:?}", OperationState::NotePending);
        Self {
            name,
            state: OperationState::NotePending,
        }
    }

    /// Current state.
    pub const fn state(&self) -> OperationState {
        self.state
    }

    /// Move to `next`. Only the forward chain and `* -> Failed` are allowed.
    pub fn advance(&mut self, next: OperationState) -> Result<()> {
        let allowed = if next == OperationState::Failed {
            !self.state.is_terminal()
        } else {
            self.state.successor() == Some(next)
        };

        if !allowed {
            return Err(NoteCryptError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }

        log::trace!("{}: {:?} -> {:?}", self.name, self.state, next);
        self.state = next;
        Ok(())
    }

    /// Pass `result` through, marking the operation `Failed` on error.
    pub fn track<T>(&mut self, result: Result<T>) -> Result<T> {
        if result.is_err() && !self.state.is_terminal() {
            log::trace!("{}: {:?} -> Failed", self.name, self.state);
            self.state = OperationState::Failed;
        }
        result
    }
}
