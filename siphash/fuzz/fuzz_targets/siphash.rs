//! Differential fuzzer for SipHash against the `siphasher` crate
//!
//! Each run hashes one arbitrary message under an arbitrary key with both
//! SipHash-2-4 and SipHash-1-3, and checks that arbitrary round counts are
//! accepted or rejected consistently.

#![no_main]
use arbitrary::Arbitrary;
use core::hash::Hasher;
use libfuzzer_sys::fuzz_target;

/// Operation, decoded from arbitrary fuzzer input
#[derive(Clone, Debug, Arbitrary)]
struct Op {
    /// Key bytes, of any length so that validation is also exercised
    key: Vec<u8>,
    /// Compression rounds for the custom parameterization
    compression: u8,
    /// Finalization rounds for the custom parameterization
    finalization: u8,
    /// Message to hash
    message: Vec<u8>,
}

fuzz_target! {|op: Op| {
    let c = u32::from(op.compression);
    let d = u32::from(op.finalization);
    let custom = siphash::siphash(&op.message, &op.key, c, d);

    let key: [u8; 16] = match op.key.as_slice().try_into() {
        Ok(key) => key,
        Err(_) => {
            assert_eq!(custom, Err(siphash::Error::InvalidKeyLength(op.key.len())));
            return;
        }
    };

    if c == 0 || d == 0 {
        assert!(matches!(custom, Err(siphash::Error::InvalidRoundCount { .. })));
    } else {
        assert!(custom.is_ok());
    }

    let mut h24 = siphasher::sip::SipHasher24::new_with_key(&key);
    h24.write(&op.message);
    assert_eq!(siphash::siphash_2_4(&op.message, &key), Ok(h24.finish()));

    let mut h13 = siphasher::sip::SipHasher13::new_with_key(&key);
    h13.write(&op.message);
    assert_eq!(siphash::siphash_1_3(&op.message, &key), Ok(h13.finish()));
}}
