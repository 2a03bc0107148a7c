//! # mantle-crypto: backend isolation for cryptographic primitives
//!
//! Consumer code works with four opaque primitive handles — [`BigNum`],
//! [`Cipher`], [`Hasher`] and [`RsaKey`] — while the concrete representation
//! behind each one belongs to the active backend and never appears in a
//! public signature. Swapping the backend is a cargo feature change: no
//! consumer code changes, and the replaced backend's symbols are no longer
//! compiled or linked.
//!
//! ## Backends
//!
//! - **`backend-rustcrypto`** (default): XChaCha20 stream cipher, SHA-256
//!   digests, limb-based big integers
//! - **`backend-blake3`**: BLAKE3 digests and keyed-XOF keystream,
//!   byte-array big integers
//!
//! Exactly one must be enabled; enabling both, or neither, fails to compile.
//!
//! ## Example
//!
//! ```rust
//! use mantle_crypto::{BigNum, Cipher, Hasher, RsaKey};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Big integers round-trip through the backend untouched.
//! let answer = BigNum::from_u64(42);
//! assert_eq!(answer.to_u64(), Some(42));
//!
//! // Applying the same keystream twice restores the input.
//! let mut msg = *b"move fast, keep the types";
//! let mut enc = Cipher::new(&[7u8; 32], &[1u8; 24])?;
//! enc.apply_keystream(&mut msg);
//! let mut dec = Cipher::new(&[7u8; 32], &[1u8; 24])?;
//! dec.apply_keystream(&mut msg);
//! assert_eq!(&msg, b"move fast, keep the types");
//!
//! // Key contexts expose their components as borrowed opaque views.
//! let key = RsaKey::from_components(BigNum::from_u64(3233), BigNum::from_u64(17))?;
//! assert_eq!(key.e().to_u64(), Some(17));
//!
//! let mut hasher = Hasher::new();
//! hasher.update(b"hello");
//! let _digest = hasher.finish();
//! # Ok(())
//! # }
//! ```
//!
//! ## Type safety across kinds
//!
//! Every primitive kind gets its own nominal handle type; there is no shared
//! erased handle. Passing one kind where another is expected is rejected at
//! compile time, never detected at run time:
//!
//! ```compile_fail
//! use mantle_crypto::{BigNum, Hasher};
//!
//! fn wants_bignum(_: &BigNum) {}
//!
//! let hasher = Hasher::new();
//! wants_bignum(&hasher);
//! ```
//!
//! ## Ownership
//!
//! A handle owns its backend value the way any Rust value owns its fields;
//! borrowed views such as [`RsaKey::n`] live exactly as long as the borrow
//! they came from. The layer itself never copies, validates, or tracks the
//! wrapped value — it relabels references across the crate boundary, at zero
//! runtime cost.

pub mod bn;
pub mod cipher;
pub mod error;
pub mod hash;
pub mod rsa;

mod backend;
mod opaque;

pub use bn::BigNum;
pub use cipher::Cipher;
pub use error::{CryptoError, CryptoResult};
pub use hash::Hasher;
pub use rsa::RsaKey;

/// Human-readable name of the backend this build was compiled against.
pub fn backend_name() -> &'static str {
    backend::NAME
}
