//! BLAKE3-based backend: keyed-XOF keystream cipher, BLAKE3 digests, and
//! byte-array big integers.
//!
//! Deliberately lays out every primitive differently from the default
//! backend — big integers are big-endian byte magnitudes rather than `u64`
//! limbs — so that building against it exercises a representation swap end
//! to end.

use std::cmp::Ordering;

use zeroize::{Zeroize, ZeroizeOnDrop};

pub(crate) const NAME: &str = "blake3 (keyed XOF)";

/// Big-integer magnitudes routinely hold key-exchange secrets, so they are
/// scrubbed on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Bn {
    /// Big-endian, no leading zero bytes; empty means zero.
    mag: Vec<u8>,
}

impl Bn {
    pub(crate) fn zero() -> Self {
        Self { mag: Vec::new() }
    }

    pub(crate) fn from_u64(value: u64) -> Self {
        let mut bn = Self::zero();
        bn.set_u64(value);
        bn
    }

    pub(crate) fn set_u64(&mut self, value: u64) {
        self.mag.clear();
        let bytes = value.to_be_bytes();
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        self.mag.extend_from_slice(&bytes[start..]);
    }

    pub(crate) fn to_u64(&self) -> Option<u64> {
        if self.mag.len() > 8 {
            return None;
        }
        let mut bytes = [0u8; 8];
        bytes[8 - self.mag.len()..].copy_from_slice(&self.mag);
        Some(u64::from_be_bytes(bytes))
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.mag.is_empty()
    }

    pub(crate) fn from_bytes_be(bytes: &[u8]) -> Self {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        Self {
            mag: bytes[start..].to_vec(),
        }
    }

    pub(crate) fn to_bytes_be(&self) -> Vec<u8> {
        self.mag.clone()
    }

    pub(crate) fn num_bits(&self) -> usize {
        match self.mag.first() {
            None => 0,
            Some(top) => (self.mag.len() - 1) * 8 + (8 - top.leading_zeros() as usize),
        }
    }

    /// The `index`-th byte counted from the least-significant end.
    fn byte(&self, index: usize) -> u8 {
        if index < self.mag.len() {
            self.mag[self.mag.len() - 1 - index]
        } else {
            0
        }
    }

    pub(crate) fn add(&self, rhs: &Self) -> Self {
        let width = self.mag.len().max(rhs.mag.len());
        let mut out = vec![0u8; width + 1];
        let mut carry = 0u16;
        for i in 0..width {
            let sum = self.byte(i) as u16 + rhs.byte(i) as u16 + carry;
            out[width - i] = sum as u8;
            carry = sum >> 8;
        }
        out[0] = carry as u8;
        Self::from_bytes_be(&out)
    }

    /// `self - rhs`, or `None` when `rhs` is larger.
    pub(crate) fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if self.cmp_value(rhs) == Ordering::Less {
            return None;
        }

        let width = self.mag.len();
        let mut out = vec![0u8; width];
        let mut borrow = 0i16;
        for i in 0..width {
            let mut diff = self.byte(i) as i16 - rhs.byte(i) as i16 - borrow;
            borrow = 0;
            if diff < 0 {
                diff += 256;
                borrow = 1;
            }
            out[width - 1 - i] = diff as u8;
        }
        debug_assert_eq!(borrow, 0);
        Some(Self::from_bytes_be(&out))
    }

    pub(crate) fn mul(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }

        let width = self.mag.len() + rhs.mag.len();
        // Indexed from the least-significant end; u64 slots absorb every
        // partial product before a single carry-propagation pass.
        let mut acc = vec![0u64; width];
        for i in 0..self.mag.len() {
            for j in 0..rhs.mag.len() {
                acc[i + j] += self.byte(i) as u64 * rhs.byte(j) as u64;
            }
        }

        let mut out = vec![0u8; width];
        let mut carry = 0u64;
        for (k, &slot) in acc.iter().enumerate() {
            let total = slot + carry;
            out[width - 1 - k] = total as u8;
            carry = total >> 8;
        }
        debug_assert_eq!(carry, 0);
        Self::from_bytes_be(&out)
    }

    pub(crate) fn cmp_value(&self, rhs: &Self) -> Ordering {
        self.mag
            .len()
            .cmp(&rhs.mag.len())
            .then_with(|| self.mag.cmp(&rhs.mag))
    }
}

/// Keystream drawn from a BLAKE3 keyed XOF over the IV. The reader owns the
/// expanded state; scrubbing it is not reachable through the `blake3` API,
/// so only the local block buffer is wiped.
pub(crate) struct CipherState {
    keystream: blake3::OutputReader,
}

impl CipherState {
    pub(crate) fn new(key: &[u8; 32], iv: &[u8; 24]) -> Self {
        let mut hasher = blake3::Hasher::new_keyed(key);
        hasher.update(iv);
        Self {
            keystream: hasher.finalize_xof(),
        }
    }

    pub(crate) fn apply_keystream(&mut self, buf: &mut [u8]) {
        let mut block = [0u8; 64];
        for chunk in buf.chunks_mut(block.len()) {
            let keystream = &mut block[..chunk.len()];
            self.keystream.fill(keystream);
            for (byte, ks) in chunk.iter_mut().zip(keystream.iter()) {
                *byte ^= ks;
            }
        }
        block.zeroize();
    }
}

pub(crate) struct HashState {
    inner: blake3::Hasher,
}

impl HashState {
    pub(crate) fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    pub(crate) fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    pub(crate) fn finish(self) -> [u8; 32] {
        *self.inner.finalize().as_bytes()
    }
}

pub(crate) struct RsaParts {
    pub(crate) n: Bn,
    pub(crate) e: Bn,
}
