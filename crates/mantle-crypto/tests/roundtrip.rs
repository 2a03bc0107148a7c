//! Consumer-facing round-trip tests.
//!
//! Everything here is written against the opaque handles only, so this file
//! must pass unchanged under either backend:
//!
//! ```text
//! cargo test
//! cargo test --no-default-features --features backend-blake3
//! ```

use mantle_crypto::{cipher, hash, BigNum, Cipher, CryptoError, Hasher, RsaKey};

#[test]
fn factory_value_survives_the_boundary() {
    let answer = BigNum::from_u64(42);
    assert_eq!(answer.to_u64(), Some(42));
    assert_eq!(answer.to_bytes_be(), vec![42]);
    assert_eq!(BigNum::from_bytes_be(&answer.to_bytes_be()), answer);
}

#[test]
fn bn_arithmetic_is_backend_independent() {
    // 2^64 and friends force multi-word representations in any layout.
    let two_pow_64 = BigNum::from_bytes_be(&[1, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(two_pow_64.num_bits(), 65);
    assert_eq!(two_pow_64.num_bytes(), 9);
    assert_eq!(two_pow_64.to_u64(), None);

    let max = BigNum::from_u64(u64::MAX);
    assert_eq!(max.add(&BigNum::from_u64(1)), two_pow_64);
    assert_eq!(
        two_pow_64.checked_sub(&BigNum::from_u64(1)).unwrap(),
        max
    );

    assert_eq!(
        max.mul(&max).to_bytes_be(),
        [
            0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, //
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
        ]
    );
}

#[test]
fn bn_underflow_is_an_error() {
    let small = BigNum::from_u64(3);
    let big = BigNum::from_u64(4);
    assert!(matches!(
        small.checked_sub(&big),
        Err(CryptoError::Underflow(_))
    ));
}

#[test]
fn bn_ordering_is_by_value() {
    let mut values = vec![
        BigNum::from_u64(500),
        BigNum::new(),
        BigNum::from_bytes_be(&[1, 0, 0, 0, 0, 0, 0, 0, 0]),
        BigNum::from_u64(7),
    ];
    values.sort();

    let sorted: Vec<Option<u64>> = values.iter().map(BigNum::to_u64).collect();
    assert_eq!(sorted, vec![Some(0), Some(7), Some(500), None]);
}

#[test]
fn bn_overwrite_in_place() {
    let mut n = BigNum::new();
    assert!(n.is_zero());
    n.set_u64(9);
    assert_eq!(n.to_u64(), Some(9));
}

#[test]
fn cipher_roundtrips() {
    let key = [0x42u8; cipher::KEY_LEN];
    let iv = [0x24u8; cipher::IV_LEN];
    let plaintext = b"the representation stays on the other side";

    let mut buf = *plaintext;
    Cipher::new(&key, &iv).unwrap().apply_keystream(&mut buf);
    assert_ne!(&buf, plaintext);

    Cipher::new(&key, &iv).unwrap().apply_keystream(&mut buf);
    assert_eq!(&buf, plaintext);
}

#[test]
fn cipher_is_deterministic_per_backend() {
    let key = [5u8; cipher::KEY_LEN];
    let iv = [6u8; cipher::IV_LEN];

    let mut first = [0u8; 48];
    let mut second = [0u8; 48];
    Cipher::new(&key, &iv).unwrap().apply_keystream(&mut first);
    Cipher::new(&key, &iv).unwrap().apply_keystream(&mut second);
    assert_eq!(first, second);
}

#[test]
fn cipher_position_advances_across_calls() {
    let key = [3u8; cipher::KEY_LEN];
    let iv = [9u8; cipher::IV_LEN];

    let mut whole = [0u8; 100];
    Cipher::new(&key, &iv).unwrap().apply_keystream(&mut whole);

    let mut split = [0u8; 100];
    let mut ctx = Cipher::new(&key, &iv).unwrap();
    let (head, tail) = split.split_at_mut(33);
    ctx.apply_keystream(head);
    ctx.apply_keystream(tail);

    assert_eq!(whole, split);
}

#[test]
fn cipher_rejects_bad_material() {
    assert!(matches!(
        Cipher::new(b"short", &[0u8; cipher::IV_LEN]),
        Err(CryptoError::InvalidKey(_))
    ));
    assert!(matches!(
        Cipher::new(&[0u8; cipher::KEY_LEN], b"short"),
        Err(CryptoError::InvalidNonce(_))
    ));
}

#[test]
fn digest_streaming_matches_oneshot() {
    let data = b"chunked exactly like a transport would chunk it";

    let mut hasher = Hasher::new();
    for chunk in data.chunks(7) {
        hasher.update(chunk);
    }
    assert_eq!(hasher.finish(), hash::digest(data));
    assert_eq!(hash::digest(data).len(), hash::DIGEST_LEN);
}

#[test]
fn rsa_key_exposes_borrowed_components() {
    let key = RsaKey::from_components(BigNum::from_u64(3233), BigNum::from_u64(17)).unwrap();

    assert_eq!(key.n().to_u64(), Some(3233));
    assert_eq!(key.e().to_u64(), Some(17));
    assert_eq!(key.n().num_bits(), 12);

    // The views are stable references into the key context, not copies.
    assert!(std::ptr::eq(key.n(), key.n()));
}

#[test]
fn rsa_fingerprint_is_stable_within_a_backend() {
    let a = RsaKey::from_components(BigNum::from_u64(3233), BigNum::from_u64(17)).unwrap();
    let b = RsaKey::from_components(BigNum::from_u64(3233), BigNum::from_u64(17)).unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());

    let c = RsaKey::from_components(BigNum::from_u64(3233), BigNum::from_u64(19)).unwrap();
    assert_ne!(a.fingerprint(), c.fingerprint());
}

#[test]
fn rsa_rejects_zero_components() {
    assert!(RsaKey::from_components(BigNum::new(), BigNum::from_u64(17)).is_err());
    assert!(RsaKey::from_components(BigNum::from_u64(3233), BigNum::new()).is_err());
}

#[test]
fn active_backend_is_named() {
    assert!(!mantle_crypto::backend_name().is_empty());
}
