//! Little-endian word extraction from message bytes

use crate::err::Error;

/// Size in bytes of one SipHash message word
pub(crate) const WORD_SIZE: usize = 8;

/// Read up to one 64-bit little-endian word from `bytes`.
///
/// Takes exactly `count` bytes starting at `offset`, placing the first byte
/// in the least significant position. Bytes beyond `count` are zero. A read
/// that would leave the slice, or a `count` larger than one word, fails with
/// [`Error::InternalExtraction`].
#[inline(always)]
pub(crate) fn read_u64_le(bytes: &[u8], offset: usize, count: usize) -> Result<u64, Error> {
    let src = offset
        .checked_add(count)
        .filter(|_| count <= WORD_SIZE)
        .and_then(|end| bytes.get(offset..end))
        .ok_or_else(|| {
            log::error!(
                "word read out of bounds: offset={} count={} len={}",
                offset,
                count,
                bytes.len()
            );
            Error::InternalExtraction {
                offset,
                count,
                len: bytes.len(),
            }
        })?;

    let mut word = [0_u8; WORD_SIZE];
    word[..count].copy_from_slice(src);
    Ok(u64::from_le_bytes(word))
}
