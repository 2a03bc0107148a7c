//! RustCrypto-based backend: XChaCha20 stream cipher, SHA-256 digests, and
//! limb-based big integers.
//!
//! Big integers are unsigned magnitudes stored as little-endian `u64` limbs
//! with no trailing zero limbs; the empty limb vector is zero.

use std::cmp::Ordering;

use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::XChaCha20;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

pub(crate) const NAME: &str = "rustcrypto (XChaCha20 + SHA-256)";

/// Big-integer magnitudes routinely hold key-exchange secrets, so they are
/// scrubbed on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Bn {
    limbs: Vec<u64>,
}

impl Bn {
    pub(crate) fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    pub(crate) fn from_u64(value: u64) -> Self {
        let mut bn = Self::zero();
        bn.set_u64(value);
        bn
    }

    pub(crate) fn set_u64(&mut self, value: u64) {
        self.limbs.clear();
        if value != 0 {
            self.limbs.push(value);
        }
    }

    pub(crate) fn to_u64(&self) -> Option<u64> {
        match self.limbs.as_slice() {
            [] => Some(0),
            [limb] => Some(*limb),
            _ => None,
        }
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    pub(crate) fn from_bytes_be(bytes: &[u8]) -> Self {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let bytes = &bytes[start..];

        let mut limbs = Vec::with_capacity(bytes.len().div_ceil(8));
        for chunk in bytes.rchunks(8) {
            let mut limb = [0u8; 8];
            limb[8 - chunk.len()..].copy_from_slice(chunk);
            limbs.push(u64::from_be_bytes(limb));
        }
        Self { limbs }
    }

    pub(crate) fn to_bytes_be(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.limbs.len() * 8);
        for limb in self.limbs.iter().rev() {
            out.extend_from_slice(&limb.to_be_bytes());
        }
        let start = out.iter().position(|&b| b != 0).unwrap_or(out.len());
        out.drain(..start);
        out
    }

    pub(crate) fn num_bits(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(top) => (self.limbs.len() - 1) * 64 + (64 - top.leading_zeros() as usize),
        }
    }

    pub(crate) fn add(&self, rhs: &Self) -> Self {
        let (long, short) = if self.limbs.len() >= rhs.limbs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        let mut limbs = Vec::with_capacity(long.limbs.len() + 1);
        let mut carry = false;
        for (i, &limb) in long.limbs.iter().enumerate() {
            let other = short.limbs.get(i).copied().unwrap_or(0);
            let (sum, c1) = limb.overflowing_add(other);
            let (sum, c2) = sum.overflowing_add(carry as u64);
            carry = c1 || c2;
            limbs.push(sum);
        }
        if carry {
            limbs.push(1);
        }
        Self { limbs }
    }

    /// `self - rhs`, or `None` when `rhs` is larger.
    pub(crate) fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if self.cmp_value(rhs) == Ordering::Less {
            return None;
        }

        let mut limbs = Vec::with_capacity(self.limbs.len());
        let mut borrow = false;
        for (i, &limb) in self.limbs.iter().enumerate() {
            let other = rhs.limbs.get(i).copied().unwrap_or(0);
            let (diff, b1) = limb.overflowing_sub(other);
            let (diff, b2) = diff.overflowing_sub(borrow as u64);
            borrow = b1 || b2;
            limbs.push(diff);
        }
        debug_assert!(!borrow);

        while limbs.last() == Some(&0) {
            limbs.pop();
        }
        Some(Self { limbs })
    }

    pub(crate) fn mul(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }

        let mut acc = vec![0u64; self.limbs.len() + rhs.limbs.len()];
        for (i, &a) in self.limbs.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &b) in rhs.limbs.iter().enumerate() {
                let wide = a as u128 * b as u128 + acc[i + j] as u128 + carry as u128;
                acc[i + j] = wide as u64;
                carry = (wide >> 64) as u64;
            }
            // The slot past this row has not been written yet.
            acc[i + rhs.limbs.len()] = carry;
        }

        while acc.last() == Some(&0) {
            acc.pop();
        }
        Self { limbs: acc }
    }

    pub(crate) fn cmp_value(&self, rhs: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&rhs.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(rhs.limbs.iter().rev()))
    }
}

/// XChaCha20 keystream state. The underlying cipher scrubs its key schedule
/// on drop (the `zeroize` feature of `chacha20`).
pub(crate) struct CipherState {
    inner: XChaCha20,
}

impl CipherState {
    pub(crate) fn new(key: &[u8; 32], iv: &[u8; 24]) -> Self {
        Self {
            inner: XChaCha20::new(key.into(), iv.into()),
        }
    }

    pub(crate) fn apply_keystream(&mut self, buf: &mut [u8]) {
        self.inner.apply_keystream(buf);
    }
}

pub(crate) struct HashState {
    inner: Sha256,
}

impl HashState {
    pub(crate) fn new() -> Self {
        Self {
            inner: Sha256::new(),
        }
    }

    pub(crate) fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    pub(crate) fn finish(self) -> [u8; 32] {
        self.inner.finalize().into()
    }
}

pub(crate) struct RsaParts {
    pub(crate) n: Bn,
    pub(crate) e: Bn,
}
