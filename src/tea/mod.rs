//! # TEA
//!
//! The Tiny Encryption Algorithm: a 64-bit Feistel block cipher with a
//! 128-bit key and 32 rounds, used here as a reversible transform over `u64`.
//!
//! ## Layout
//!
//! ```text
//! block:    v0 = bits 0..32,  v1 = bits 32..64
//! key_low:  k0 = bits 0..32,  k1 = bits 32..64
//! key_high: k2 = bits 0..32,  k3 = bits 32..64
//! ```
//!
//! Byte forms are little-endian: the first four bytes of a block are `v0`,
//! the first four bytes of a key are `k0`.
//!
//! ## Examples
//!
//! ```rust
//! use numprim::tea::{decrypt, encrypt};
//!
//! let ciphertext = encrypt(0, 0, 0);
//! assert_eq!(ciphertext, 0x94BA_A940_41EA_3A0A);
//! assert_eq!(decrypt(ciphertext, 0, 0), 0);
//! ```

const DELTA: u32 = 0x9E37_79B9;
const ROUNDS: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TeaKey {
    words: [u32; 4],
}

impl TeaKey {
    pub fn new(key_low: u64, key_high: u64) -> Self {
        let (k0, k1) = split(key_low);
        let (k2, k3) = split(key_high);
        Self::from_words([k0, k1, k2, k3])
    }

    pub const fn from_words(words: [u32; 4]) -> Self {
        Self { words }
    }

    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self::from_words(words)
    }

    pub fn words(&self) -> [u32; 4] {
        self.words
    }
}

fn split(value: u64) -> (u32, u32) {
    (value as u32, (value >> 32) as u32)
}

fn join(low: u32, high: u32) -> u64 {
    u64::from(low) | (u64::from(high) << 32)
}

fn feistel(v: u32, sum: u32, ka: u32, kb: u32) -> u32 {
    (v << 4).wrapping_add(ka) ^ v.wrapping_add(sum) ^ (v >> 5).wrapping_add(kb)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tea {
    key: TeaKey,
}

impl Tea {
    pub fn new(key: TeaKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> TeaKey {
        self.key
    }

    pub fn encrypt_block(&self, block: u64) -> u64 {
        let [k0, k1, k2, k3] = self.key.words;
        let (mut v0, mut v1) = split(block);
        let mut sum: u32 = 0;
        for _ in 0..ROUNDS {
            sum = sum.wrapping_add(DELTA);
            v0 = v0.wrapping_add(feistel(v1, sum, k0, k1));
            v1 = v1.wrapping_add(feistel(v0, sum, k2, k3));
        }
        join(v0, v1)
    }

    pub fn decrypt_block(&self, block: u64) -> u64 {
        let [k0, k1, k2, k3] = self.key.words;
        let (mut v0, mut v1) = split(block);
        let mut sum = DELTA.wrapping_mul(ROUNDS);
        for _ in 0..ROUNDS {
            v1 = v1.wrapping_sub(feistel(v0, sum, k2, k3));
            v0 = v0.wrapping_sub(feistel(v1, sum, k0, k1));
            sum = sum.wrapping_sub(DELTA);
        }
        join(v0, v1)
    }

    pub fn encrypt_bytes(&self, block: [u8; 8]) -> [u8; 8] {
        self.encrypt_block(u64::from_le_bytes(block)).to_le_bytes()
    }

    pub fn decrypt_bytes(&self, block: [u8; 8]) -> [u8; 8] {
        self.decrypt_block(u64::from_le_bytes(block)).to_le_bytes()
    }
}

pub fn encrypt(block: u64, key_low: u64, key_high: u64) -> u64 {
    Tea::new(TeaKey::new(key_low, key_high)).encrypt_block(block)
}

pub fn decrypt(block: u64, key_low: u64, key_high: u64) -> u64 {
    Tea::new(TeaKey::new(key_low, key_high)).decrypt_block(block)
}
