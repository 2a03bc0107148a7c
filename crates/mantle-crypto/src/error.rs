//! Error types for primitive operations.
//!
//! Handle conversions are total and infallible; errors only arise from the
//! public operations that validate caller-supplied material.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("invalid key material: {0}")]
    InvalidKey(String),

    #[error("invalid nonce: {0}")]
    InvalidNonce(String),

    #[error("big integer underflow: {0}")]
    Underflow(String),
}

pub type CryptoResult<T> = Result<T, CryptoError>;
