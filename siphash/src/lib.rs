#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![doc = include_str!("../README.md")]
// @@ begin lint list maintained by maint/add_warning @@
#![allow(renamed_and_removed_lints)]
#![allow(unknown_lints)]
#![warn(missing_docs)]
#![warn(noop_method_call)]
#![warn(unreachable_pub)]
#![warn(clippy::all)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::checked_conversions)]
#![warn(clippy::cognitive_complexity)]
#![deny(clippy::debug_assert_with_mut_call)]
#![deny(clippy::exhaustive_enums)]
#![deny(clippy::exhaustive_structs)]
#![deny(clippy::expl_impl_clone_on_copy)]
#![deny(clippy::fallible_impl_from)]
#![deny(clippy::implicit_clone)]
#![deny(clippy::large_stack_arrays)]
#![warn(clippy::manual_ok_or)]
#![deny(clippy::missing_docs_in_private_items)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::option_option)]
#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]
#![deny(clippy::ref_option_ref)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::trait_duplication_in_bounds)]
#![deny(clippy::unnecessary_wraps)]
#![warn(clippy::unseparated_literal_suffix)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::mod_module_files)]
#![allow(clippy::uninlined_format_args)]
//! <!-- @@ end lint list maintained by maint/add_warning @@ -->

mod err;
mod key;
mod siphash;
mod word;

pub use crate::err::Error;
pub use crate::key::SipKey;
pub use crate::siphash::SipState;

/// A SipHash function with a fixed key and round counts
///
/// Build one with [`SipHash::new()`] for the standard SipHash-2-4, or with
/// [`SipHashBuilder`] for other parameters. The same instance can hash any
/// number of messages; each call is independent.
#[derive(Clone)]
pub struct SipHash {
    /// Secret key used to seed the state for every message
    key: SipKey,
    /// Number of SipRounds per compressed message word
    compression: u32,
    /// Number of SipRounds after the last message word
    finalization: u32,
}

impl std::fmt::Debug for SipHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SipHash-{}-{}", self.compression, self.finalization)
    }
}

impl SipHash {
    /// Prepare SipHash-2-4 with a 16-byte key.
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        SipHashBuilder::new().build(key)
    }

    /// Number of SipRounds run for each message word
    pub fn compression_rounds(&self) -> u32 {
        self.compression
    }

    /// Number of SipRounds run during finalization
    pub fn finalization_rounds(&self) -> u32 {
        self.finalization
    }

    /// Hash an entire message to a 64-bit value.
    pub fn hash(&self, message: &[u8]) -> Result<u64, Error> {
        siphash::hash(self.key, message, self.compression, self.finalization)
    }
}

/// Builder for creating [`SipHash`] instances with custom round counts
///
/// Defaults to 2 compression rounds and 4 finalization rounds.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SipHashBuilder {
    /// Current compression_rounds() setting for this builder
    compression: u32,
    /// Current finalization_rounds() setting for this builder
    finalization: u32,
}

impl Default for SipHashBuilder {
    fn default() -> Self {
        Self {
            compression: 2,
            finalization: 4,
        }
    }
}

impl SipHashBuilder {
    /// Create a new [`SipHashBuilder`] with default settings.
    ///
    /// Immediately calling [`Self::build()`] would be equivalent to using
    /// [`SipHash::new()`].
    pub fn new() -> Self {
        Default::default()
    }

    /// Select the number of SipRounds per message word (`c`).
    pub fn compression_rounds(&mut self, rounds: u32) -> &mut Self {
        self.compression = rounds;
        self
    }

    /// Select the number of finalization SipRounds (`d`).
    pub fn finalization_rounds(&mut self, rounds: u32) -> &mut Self {
        self.finalization = rounds;
        self
    }

    /// Build a [`SipHash`] from key bytes and the selected options.
    ///
    /// The key length is checked first, then the round counts.
    pub fn build(&self, key: &[u8]) -> Result<SipHash, Error> {
        let key = SipKey::try_from(key).inspect_err(|err| {
            log::debug!("rejecting SipHash parameters: {}", err);
        })?;
        self.build_with_key(key)
    }

    /// Build a [`SipHash`] from an already typed key.
    pub fn build_with_key(&self, key: SipKey) -> Result<SipHash, Error> {
        if self.compression == 0 || self.finalization == 0 {
            let err = Error::InvalidRoundCount {
                compression: self.compression,
                finalization: self.finalization,
            };
            log::debug!("rejecting SipHash parameters: {}", err);
            return Err(err);
        }
        Ok(SipHash {
            key,
            compression: self.compression,
            finalization: self.finalization,
        })
    }
}

/// Compute SipHash-`c`-`d` of `message` under a 16-byte `key`.
///
/// Fails with [`Error::InvalidKeyLength`] or [`Error::InvalidRoundCount`]
/// before any hashing work is done.
pub fn siphash(message: &[u8], key: &[u8], c: u32, d: u32) -> Result<u64, Error> {
    SipHashBuilder::new()
        .compression_rounds(c)
        .finalization_rounds(d)
        .build(key)?
        .hash(message)
}

/// Compute SipHash-2-4, the standard parameterization.
pub fn siphash_2_4(message: &[u8], key: &[u8]) -> Result<u64, Error> {
    siphash(message, key, 2, 4)
}

/// Compute SipHash-1-3, the faster variant used for in-memory hash tables.
pub fn siphash_1_3(message: &[u8], key: &[u8]) -> Result<u64, Error> {
    siphash(message, key, 1, 3)
}

#[cfg(test)]
mod test {
    use super::{siphash, siphash_2_4, SipHash, SipHashBuilder, SipKey};
    use crate::Error;

    #[test]
    fn builder_defaults() {
        let key = [0_u8; 16];
        let func = SipHashBuilder::new().build(&key);
        assert!(matches!(&func, Ok(f) if f.compression_rounds() == 2));
        assert!(matches!(&func, Ok(f) if f.finalization_rounds() == 4));
        assert_eq!(format!("{:?}", SipHash::new(&key)), "Ok(SipHash-2-4)");
    }

    #[test]
    fn key_checked_before_rounds() {
        assert!(matches!(
            SipHashBuilder::new()
                .compression_rounds(0)
                .finalization_rounds(0)
                .build(&[0_u8; 3]),
            Err(Error::InvalidKeyLength(3))
        ));
        assert!(matches!(
            siphash(b"", &[0_u8; 16], 0, 0),
            Err(Error::InvalidRoundCount {
                compression: 0,
                finalization: 0
            })
        ));
    }

    #[test]
    fn typed_key_matches_bytes() {
        let bytes: [u8; 16] = *b"8027f33015eaaba5";
        let typed = SipHashBuilder::new().build_with_key(SipKey::from(bytes));
        let typed = typed.map(|f| f.hash(b"Hello world!"));
        assert_eq!(typed, Ok(Ok(0x3eb7d9b19dbec827)));
        assert_eq!(siphash_2_4(b"Hello world!", &bytes), Ok(0x3eb7d9b19dbec827));
    }
}
