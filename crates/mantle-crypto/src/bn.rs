//! Arbitrary-precision unsigned integers behind an opaque handle.

use std::cmp::Ordering;
use std::fmt;

use crate::backend;
use crate::error::{CryptoError, CryptoResult};
use crate::opaque::opaque_handle;

opaque_handle! {
    /// An arbitrary-precision unsigned integer owned by the active backend.
    ///
    /// Values come from the factory functions on this type; the in-memory
    /// representation belongs to the backend and is not observable here.
    pub struct BigNum wraps backend::Bn;
}

impl BigNum {
    /// Returns zero.
    pub fn new() -> BigNum {
        BigNum::from_raw(backend::Bn::zero())
    }

    pub fn from_u64(value: u64) -> BigNum {
        BigNum::from_raw(backend::Bn::from_u64(value))
    }

    /// Parses a big-endian magnitude. Leading zero bytes are ignored and an
    /// empty slice parses as zero.
    pub fn from_bytes_be(bytes: &[u8]) -> BigNum {
        BigNum::from_raw(backend::Bn::from_bytes_be(bytes))
    }

    /// Minimal big-endian encoding; empty for zero.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.unwrap().to_bytes_be()
    }

    /// Overwrites the value in place.
    pub fn set_u64(&mut self, value: u64) {
        self.unwrap_mut().set_u64(value);
    }

    /// The value as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.unwrap().to_u64()
    }

    pub fn is_zero(&self) -> bool {
        self.unwrap().is_zero()
    }

    /// Bit length of the value; zero has none.
    pub fn num_bits(&self) -> usize {
        self.unwrap().num_bits()
    }

    /// Byte length of the minimal big-endian encoding.
    pub fn num_bytes(&self) -> usize {
        self.num_bits().div_ceil(8)
    }

    pub fn add(&self, rhs: &BigNum) -> BigNum {
        BigNum::from_raw(self.unwrap().add(rhs.unwrap()))
    }

    /// `self - rhs`; underflow is an error since values are unsigned.
    pub fn checked_sub(&self, rhs: &BigNum) -> CryptoResult<BigNum> {
        self.unwrap()
            .checked_sub(rhs.unwrap())
            .map(BigNum::from_raw)
            .ok_or_else(|| CryptoError::Underflow("subtraction below zero".into()))
    }

    pub fn mul(&self, rhs: &BigNum) -> BigNum {
        BigNum::from_raw(self.unwrap().mul(rhs.unwrap()))
    }
}

impl Default for BigNum {
    fn default() -> Self {
        BigNum::new()
    }
}

impl PartialEq for BigNum {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigNum {}

impl PartialOrd for BigNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigNum {
    fn cmp(&self, other: &Self) -> Ordering {
        self.unwrap().cmp_value(other.unwrap())
    }
}

/// Prints the value, not the representation.
impl fmt::Debug for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNum(0x")?;
        let bytes = self.to_bytes_be();
        if bytes.is_empty() {
            write!(f, "0")?;
        }
        for byte in bytes {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}
