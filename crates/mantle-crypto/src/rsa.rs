//! Asymmetric public-key contexts behind an opaque handle.
//!
//! A key context holds its modulus and public exponent as backend-owned big
//! integers; [`RsaKey::n`] and [`RsaKey::e`] hand them back as borrowed
//! opaque views of that same memory, not as copies.

use crate::backend;
use crate::bn::BigNum;
use crate::error::{CryptoError, CryptoResult};
use crate::hash;
use crate::opaque::opaque_handle;

opaque_handle! {
    /// An asymmetric public-key context (modulus and exponent) owned by the
    /// active backend.
    pub struct RsaKey wraps backend::RsaParts;
}

impl RsaKey {
    /// Builds a key context from its modulus and public exponent.
    pub fn from_components(n: BigNum, e: BigNum) -> CryptoResult<RsaKey> {
        if n.is_zero() {
            return Err(CryptoError::InvalidKey("zero modulus".into()));
        }
        if e.is_zero() {
            return Err(CryptoError::InvalidKey("zero public exponent".into()));
        }
        Ok(RsaKey::from_raw(backend::RsaParts {
            n: n.into_raw(),
            e: e.into_raw(),
        }))
    }

    /// The modulus, borrowed from the key context.
    pub fn n(&self) -> &BigNum {
        BigNum::wrap(&self.unwrap().n)
    }

    /// The public exponent, borrowed from the key context.
    pub fn e(&self) -> &BigNum {
        BigNum::wrap(&self.unwrap().e)
    }

    /// Truncated digest over the length-prefixed `n || e` magnitudes.
    ///
    /// Computed with the active backend's digest, so fingerprints are stable
    /// within a backend but differ across backends.
    pub fn fingerprint(&self) -> u64 {
        let n = self.n().to_bytes_be();
        let e = self.e().to_bytes_be();

        let mut material = Vec::with_capacity(8 + n.len() + e.len());
        material.extend((n.len() as u32).to_le_bytes());
        material.extend(&n);
        material.extend((e.len() as u32).to_le_bytes());
        material.extend(&e);

        let digest = hash::digest(&material);
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(prefix)
    }
}
