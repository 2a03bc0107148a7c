//! Known-answer tests pinned per backend.
//!
//! Digest values are part of each backend's contract with itself; a change
//! here means the backend's output changed, not just its layout.

use mantle_crypto::hash;

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn bn_square_of_word_max() {
    use mantle_crypto::BigNum;

    let max = BigNum::from_u64(u64::MAX);
    assert_eq!(
        hex(&max.mul(&max).to_bytes_be()),
        "fffffffffffffffe0000000000000001"
    );
}

#[cfg(feature = "backend-rustcrypto")]
mod rustcrypto {
    use super::*;

    #[test]
    fn sha256_empty() {
        assert_eq!(
            hex(&hash::digest(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha256_abc() {
        assert_eq!(
            hex(&hash::digest(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}

#[cfg(feature = "backend-blake3")]
mod blake3_backend {
    use super::*;

    #[test]
    fn blake3_empty() {
        assert_eq!(
            hex(&hash::digest(b"")),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
    }

    #[test]
    fn blake3_abc() {
        assert_eq!(
            hex(&hash::digest(b"abc")),
            "6437b3ac38465133ffb63b75273a8db548c558465d79db03fd359c6cd5bd9d85"
        );
    }
}
