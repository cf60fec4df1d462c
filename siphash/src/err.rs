//! Error types for the `siphash` crate

/// Errors that could occur while preparing or computing a SipHash
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The key was not exactly [`crate::SipKey::SIZE`] bytes long.
    ///
    /// SipHash is defined only for 128-bit keys. Shorter keys are never
    /// padded and longer keys are never truncated.
    #[error("SipHash key must be exactly 16 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// One of the round counts was zero.
    ///
    /// Both the per-block compression rounds and the finalization rounds
    /// must be positive.
    #[error("SipHash round counts must be positive, got c={compression} d={finalization}")]
    InvalidRoundCount {
        /// Requested number of compression rounds per message block
        compression: u32,
        /// Requested number of finalization rounds
        finalization: u32,
    },

    /// A message word could not be read at the computed position.
    ///
    /// This can't happen for any valid input. It indicates a bug in the
    /// block boundary arithmetic, not a usage error.
    #[error("internal error: can't read {count} bytes at offset {offset} of a {len}-byte message")]
    InternalExtraction {
        /// Byte offset of the attempted read
        offset: usize,
        /// Number of bytes requested
        count: usize,
        /// Total length of the message being read
        len: usize,
    },
}
