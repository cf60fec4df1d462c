//! Typed 128-bit SipHash keys

use crate::err::Error;
use crate::word::{read_u64_le, WORD_SIZE};
use std::fmt::{self, Debug};

/// A 128-bit SipHash key, split into the two words `k0` and `k1`
///
/// The key is secret material. Its [`Debug`] output never includes the key
/// words.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct SipKey {
    /// First key word, from bytes 0..8
    k0: u64,
    /// Second key word, from bytes 8..16
    k1: u64,
}

impl Debug for SipKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SipKey { .. }")
    }
}

impl SipKey {
    /// Size of a serialized key, in bytes
    pub const SIZE: usize = 16;

    /// Construct a key directly from its two 64-bit words.
    #[inline(always)]
    pub fn new(k0: u64, k1: u64) -> Self {
        Self { k0, k1 }
    }

    /// Construct a key from 16 bytes, each half read as a little-endian word.
    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        let mut k0 = [0_u8; WORD_SIZE];
        let mut k1 = [0_u8; WORD_SIZE];
        k0.copy_from_slice(&bytes[..WORD_SIZE]);
        k1.copy_from_slice(&bytes[WORD_SIZE..]);
        Self::new(u64::from_le_bytes(k0), u64::from_le_bytes(k1))
    }

    /// Return the key words as `(k0, k1)`.
    #[inline(always)]
    pub fn words(&self) -> (u64, u64) {
        (self.k0, self.k1)
    }
}

impl From<[u8; SipKey::SIZE]> for SipKey {
    fn from(bytes: [u8; SipKey::SIZE]) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl TryFrom<&[u8]> for SipKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != Self::SIZE {
            return Err(Error::InvalidKeyLength(bytes.len()));
        }
        Ok(Self::new(
            read_u64_le(bytes, 0, WORD_SIZE)?,
            read_u64_le(bytes, WORD_SIZE, WORD_SIZE)?,
        ))
    }
}
