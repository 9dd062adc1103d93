//! Access-code entry: collects exactly [`CODE_LENGTH`] characters.
//!
//! Any byte value is accepted; validation against the stored code belongs to
//! whoever consumes the completed code.

use heapless::Vec;

use crate::config::CODE_LENGTH;

pub type Code = [u8; CODE_LENGTH];

/// Which code the operator is typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodeEntryKind {
    /// Code to check against the stored one (alarm deactivation).
    Verify,
    /// Replacement for the stored code.
    SetNew,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeProgress {
    /// Character taken; `received` characters so far.
    Pending { received: usize },
    /// Last character taken; the cursor is back at zero.
    Complete(Code),
}

#[derive(Debug, Default)]
pub struct CodeEntry {
    buffer: Vec<u8, CODE_LENGTH>,
}

impl CodeEntry {
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Characters received since the last reset or completion.
    pub fn received(&self) -> usize {
        self.buffer.len()
    }

    pub fn push(&mut self, byte: u8) -> CodeProgress {
        // Cannot fail: a full buffer is drained below before the next push.
        let _ = self.buffer.push(byte);
        if !self.buffer.is_full() {
            return CodeProgress::Pending { received: self.buffer.len() };
        }

        let mut code = [0u8; CODE_LENGTH];
        code.copy_from_slice(&self.buffer);
        self.buffer.clear();
        CodeProgress::Complete(code)
    }
}
