//! Symmetric stream-cipher contexts behind an opaque handle.
//!
//! Keystreams are backend-specific. The contract both backends share:
//! applying the keystream twice over the same stream positions restores the
//! input, and a context advances its position with every call.

use crate::backend;
use crate::error::{CryptoError, CryptoResult};
use crate::opaque::opaque_handle;

/// Key length in bytes, common to every backend.
pub const KEY_LEN: usize = 32;

/// IV length in bytes, common to every backend.
pub const IV_LEN: usize = 24;

opaque_handle! {
    /// A streaming cipher context owned by the active backend.
    ///
    /// Cipher contexts are their own primitive kind; no entry point accepts
    /// any other kind's handle in their place:
    ///
    /// ```compile_fail
    /// use mantle_crypto::{Cipher, Hasher};
    ///
    /// fn encrypts(_: &mut Cipher) {}
    ///
    /// let mut hasher = Hasher::new();
    /// encrypts(&mut hasher);
    /// ```
    pub struct Cipher wraps backend::CipherState;
}

impl Cipher {
    /// Initializes a cipher context from key material.
    pub fn new(key: &[u8], iv: &[u8]) -> CryptoResult<Cipher> {
        let key: &[u8; KEY_LEN] = key
            .try_into()
            .map_err(|_| CryptoError::InvalidKey(format!("cipher key must be {KEY_LEN} bytes")))?;
        let iv: &[u8; IV_LEN] = iv
            .try_into()
            .map_err(|_| CryptoError::InvalidNonce(format!("cipher IV must be {IV_LEN} bytes")))?;
        Ok(Cipher::from_raw(backend::CipherState::new(key, iv)))
    }

    /// XORs the next keystream bytes into `buf` in place. Encryption and
    /// decryption are the same operation at matching stream positions.
    pub fn apply_keystream(&mut self, buf: &mut [u8]) {
        self.unwrap_mut().apply_keystream(buf);
    }
}
