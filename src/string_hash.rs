//! The classic ELF rolling string hash, as a [`Hashable`] key type and as a
//! [`Hasher`] for anything else that wants the same distribution.

use std::{
    fmt,
    hash::{BuildHasher, Hasher},
    ops::Deref,
};

use crate::hashable::Hashable;

/// Mask for the top nibble of the low 32 bits.
const HIGH_NIBBLE: i64 = 0xf000_0000;

/// Folds bytes into an accumulator: shift left a nibble, add the byte, and
/// whenever the top nibble of the low word fills up, xor it back down into the
/// low bits and clear it.
///
/// The accumulator is 64 bits wide and wraps on overflow. Hash codes match
/// any other implementation using a 64-bit signed accumulator; a 32-bit one
/// will disagree once a carry escapes past bit 31.
fn fold(mut acc: i64, bytes: &[u8]) -> i64 {
    for &byte in bytes {
        acc = acc.wrapping_shl(4).wrapping_add(i64::from(byte));
        let high = acc & HIGH_NIBBLE;
        if high != 0 {
            acc ^= high >> 24;
            acc ^= high;
        }
    }

    acc
}

/// Hashes a run of bytes with the ELF rolling hash.
pub fn elf_hash(bytes: &[u8]) -> i64 {
    fold(0, bytes)
}

/// A string key hashed with [`elf_hash`] over its UTF-8 bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringHash(String);

impl StringHash {
    pub fn new<S: Into<String>>(s: S) -> Self {
        StringHash(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Wraps a string up as a [`StringHash`] key.
pub fn string_hash(s: &str) -> StringHash {
    StringHash::new(s)
}

impl Hashable for StringHash {
    fn hash_code(&self) -> i64 {
        elf_hash(self.0.as_bytes())
    }
}

impl Deref for StringHash {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StringHash {
    fn from(s: &str) -> Self {
        StringHash::new(s)
    }
}

impl From<String> for StringHash {
    fn from(s: String) -> Self {
        StringHash(s)
    }
}

impl fmt::Display for StringHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Runs the ELF hash over everything written to it. Note that std's `Hash`
/// impl for `str` writes a trailing 0xff byte, so hashing a `String` through
/// this will not agree with [`elf_hash`] on the same text.
#[derive(Default)]
pub struct ElfHasher(i64);

impl Hasher for ElfHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.0 = fold(self.0, bytes);
    }

    fn finish(&self) -> u64 {
        self.0 as u64
    }
}

/// Builds new ElfHashers on demand.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuildElfHasher;

impl BuildHasher for BuildElfHasher {
    type Hasher = ElfHasher;

    fn build_hasher(&self) -> Self::Hasher {
        ElfHasher(0)
    }
}
