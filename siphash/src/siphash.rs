//! SipHash core: state, SipRound, compression and finalization
//!
//! The fundamentals follow the SipHash paper directly. A 256-bit internal
//! state is seeded from the 128-bit key and four nothing-up-my-sleeve
//! constants. Each complete 8-byte message word is injected into the state
//! around `c` SipRounds. The final partial word is zero padded and tagged
//! with the low byte of the message length, compressed the same way, and
//! then `d` more SipRounds run after a fixed perturbation of `v2`. The output
//! is the XOR of all four state words.
//!
//! SipHash is defined by Jean-Philippe Aumasson and Daniel J. Bernstein in
//! their paper "SipHash: a fast short-input PRF" (2012).

use crate::err::Error;
use crate::key::SipKey;
use crate::word::{read_u64_le, WORD_SIZE};
use std::fmt::{self, Debug};

/// Initialization constant for `v0`, "somepseu" in ASCII
const INIT_V0: u64 = 0x736f6d6570736575;
/// Initialization constant for `v1`, "dorandom" in ASCII
const INIT_V1: u64 = 0x646f72616e646f6d;
/// Initialization constant for `v2`, "lygenera" in ASCII
const INIT_V2: u64 = 0x6c7967656e657261;
/// Initialization constant for `v3`, "tedbytes" in ASCII
const INIT_V3: u64 = 0x7465646279746573;

/// Value XOR'ed into `v2` between the last compression and finalization
const FINALIZE_V2: u64 = 0xff;

/// Internal state of one SipHash computation
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct SipState {
    /// State variable V0 as defined in the SipHash paper
    pub(crate) v0: u64,
    /// State variable V1 as defined in the SipHash paper
    pub(crate) v1: u64,
    /// State variable V2 as defined in the SipHash paper
    pub(crate) v2: u64,
    /// State variable V3 as defined in the SipHash paper
    pub(crate) v3: u64,
}

impl Debug for SipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SipState[ {:#018x}, {:#018x}, {:#018x}, {:#018x} ]",
            self.v0, self.v1, self.v2, self.v3
        )
    }
}

impl From<SipState> for [u64; 4] {
    #[inline(always)]
    fn from(s: SipState) -> Self {
        [s.v0, s.v1, s.v2, s.v3]
    }
}

impl From<[u64; 4]> for SipState {
    #[inline(always)]
    fn from(a: [u64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl SipState {
    /// Construct a SipHash state from raw words.
    ///
    /// This takes the parameters `v0..v3` as defined in the SipHash paper.
    #[inline(always)]
    pub fn new(v0: u64, v1: u64, v2: u64, v3: u64) -> Self {
        Self { v0, v1, v2, v3 }
    }

    /// Construct the initial state for a key, using the standard constants.
    #[inline(always)]
    pub fn new_from_key(key: SipKey) -> Self {
        let (k0, k1) = key.words();
        Self::new(k0 ^ INIT_V0, k1 ^ INIT_V1, k0 ^ INIT_V2, k1 ^ INIT_V3)
    }

    /// One `SipRound` as defined in the SipHash paper
    ///
    /// Modifies the `SipState` in-place.
    #[inline(always)]
    pub(crate) fn sip_round(&mut self) {
        self.v0 = self.v0.wrapping_add(self.v1);
        self.v1 = self.v1.rotate_left(13);
        self.v1 ^= self.v0;
        self.v0 = self.v0.rotate_left(32);

        self.v2 = self.v2.wrapping_add(self.v3);
        self.v3 = self.v3.rotate_left(16);
        self.v3 ^= self.v2;

        self.v2 = self.v2.wrapping_add(self.v1);
        self.v1 = self.v1.rotate_left(17);
        self.v1 ^= self.v2;
        self.v2 = self.v2.rotate_left(32);

        self.v0 = self.v0.wrapping_add(self.v3);
        self.v3 = self.v3.rotate_left(21);
        self.v3 ^= self.v0;
    }

    /// Run `rounds` consecutive SipRounds.
    #[inline(always)]
    fn sip_rounds(&mut self, rounds: u32) {
        for _ in 0..rounds {
            self.sip_round();
        }
    }

    /// Inject one message word, surrounding `rounds` SipRounds.
    #[inline(always)]
    pub(crate) fn compress_word(&mut self, m: u64, rounds: u32) {
        self.v3 ^= m;
        self.sip_rounds(rounds);
        self.v0 ^= m;
    }

    /// XOR all four state words into the 64-bit output.
    #[inline(always)]
    pub(crate) fn fold(&self) -> u64 {
        self.v0 ^ self.v1 ^ self.v2 ^ self.v3
    }
}

/// Compress every complete 8-byte word of `message`, in order.
///
/// Bytes after the last complete word are left for [`finalize()`].
pub(crate) fn compress(state: &mut SipState, message: &[u8], rounds: u32) -> Result<(), Error> {
    let blocks_len = message.len() - message.len() % WORD_SIZE;
    let mut offset = 0;
    while offset < blocks_len {
        let m = read_u64_le(message, offset, WORD_SIZE)?;
        state.compress_word(m, rounds);
        offset += WORD_SIZE;
    }
    Ok(())
}

/// Build the last message word: leftover bytes plus the length tag.
///
/// Only the low byte of the message length is encoded, in the top byte of
/// the word. This matches the SipHash definition.
pub(crate) fn last_word(message: &[u8]) -> Result<u64, Error> {
    let tail_len = message.len() % WORD_SIZE;
    let tail = read_u64_le(message, message.len() - tail_len, tail_len)?;
    let len_tag = u64::from(message.len() as u8) << 56;
    Ok(len_tag | tail)
}

/// Compress the length-tagged last word and produce the 64-bit output.
pub(crate) fn finalize(
    mut state: SipState,
    message: &[u8],
    compression: u32,
    finalization: u32,
) -> Result<u64, Error> {
    state.compress_word(last_word(message)?, compression);
    state.v2 ^= FINALIZE_V2;
    state.sip_rounds(finalization);
    Ok(state.fold())
}

/// Hash a whole message with an already validated key and round counts.
pub(crate) fn hash(
    key: SipKey,
    message: &[u8],
    compression: u32,
    finalization: u32,
) -> Result<u64, Error> {
    let mut state = SipState::new_from_key(key);
    compress(&mut state, message, compression)?;
    finalize(state, message, compression, finalization)
}
