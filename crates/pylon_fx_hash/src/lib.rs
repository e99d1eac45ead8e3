//! Implements the fx hash algorithm, used by every `HashMap`/`HashSet` in the
//! Pylon compiler workspace.
//!
//! This is the same non-cryptographic, high-throughput hash used throughout
//! `rustc` (hence the name): it trades collision-resistance against
//! adversarial input for speed, which is the right trade-off for compiler
//! internal maps keyed by interned symbols rather than untrusted strings.

#![warn(missing_docs, clippy::dbg_macro)]
#![allow(clippy::module_name_repetitions)]

use std::{
    collections::{HashMap, HashSet},
    hash::{BuildHasherDefault, Hasher},
    ops::BitXor,
};

/// Type alias for a [`HashMap`] using the fx hasher.
pub type FxHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FxHasher>>;

/// Type alias for a [`HashSet`] using the fx hasher.
pub type FxHashSet<V> = HashSet<V, BuildHasherDefault<FxHasher>>;

const SEED: u64 = 0x51_7c_c1_b7_27_22_0a_95;
const ROTATE: u32 = 5;

/// A speedy hasher based on the one used internally in `rustc`.
///
/// The hash algorithm used is FxHash, originally created by The Rust
/// Compiler Team.
#[derive(Debug, Clone, Copy, Default)]
pub struct FxHasher {
    hash: u64,
}

impl FxHasher {
    #[inline]
    fn write_u64(&mut self, word: u64) {
        self.hash = (self.hash.rotate_left(ROTATE).bitxor(word)).wrapping_mul(SEED);
    }
}

impl Hasher for FxHasher {
    #[inline]
    fn write(&mut self, mut bytes: &[u8]) {
        while bytes.len() >= 8 {
            self.write_u64(u64::from_ne_bytes(bytes[..8].try_into().unwrap()));
            bytes = &bytes[8..];
        }

        if bytes.len() >= 4 {
            self.write_u32(u32::from_ne_bytes(bytes[..4].try_into().unwrap()));
            bytes = &bytes[4..];
        }

        if bytes.len() >= 2 {
            self.write_u16(u16::from_ne_bytes(bytes[..2].try_into().unwrap()));
            bytes = &bytes[2..];
        }

        if let Some(&byte) = bytes.first() {
            self.write_u8(byte);
        }
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.write_u64(u64::from(i));
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.write_u64(u64::from(i));
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.write_u64(u64::from(i));
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.write_u64(i);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }
}

#[cfg(test)]
mod tests {
    use std::hash::Hash;

    use super::*;

    fn hash_of(value: impl Hash) -> u64 {
        let mut hasher = FxHasher::default();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_values_hash_equal() {
        assert_eq!(hash_of("namespace.table"), hash_of("namespace.table"));
    }

    #[test]
    fn different_values_usually_hash_different() {
        assert_ne!(hash_of("R"), hash_of("S"));
    }

    #[test]
    fn map_round_trips() {
        let mut map: FxHashMap<&str, u32> = FxHashMap::default();
        map.insert("A", 1);
        map.insert("B", 2);

        assert_eq!(map.get("A"), Some(&1));
        assert_eq!(map.get("B"), Some(&2));
        assert_eq!(map.get("C"), None);
    }
}
