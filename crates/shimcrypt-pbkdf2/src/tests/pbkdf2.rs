// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::algorithm::HashAlgorithm;
use crate::error::Pbkdf2Error;
use crate::pbkdf2::{Pbkdf2Output, hash_pbkdf2, pbkdf2_into};

const SHA256_ONE_ROUND: &str = "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b";

#[test]
fn test_zero_rounds_rejected() {
    let mut okm = [0u8; 32];
    let result = pbkdf2_into(HashAlgorithm::Sha256, b"password", b"salt", 0, &mut okm);

    assert_eq!(result, Err(Pbkdf2Error::InvalidRounds));
    assert_eq!(
        hash_pbkdf2(HashAlgorithm::Sha256, b"password", b"salt", 0, 0, true),
        Err(Pbkdf2Error::InvalidRounds)
    );
}

#[test]
fn test_oversized_length_is_rejected_before_allocation() {
    assert_eq!(
        hash_pbkdf2(HashAlgorithm::Sha1, b"p", b"s", 1, usize::MAX, true),
        Err(Pbkdf2Error::OutputTooLong)
    );
    assert_eq!(
        hash_pbkdf2(HashAlgorithm::Sha512, b"p", b"s", 1, usize::MAX, false),
        Err(Pbkdf2Error::OutputTooLong)
    );
}

#[test]
fn test_zero_rounds_checked_before_length() {
    assert_eq!(
        hash_pbkdf2(HashAlgorithm::Sha256, b"p", b"s", 0, usize::MAX, true),
        Err(Pbkdf2Error::InvalidRounds)
    );
}

#[test]
fn test_empty_output_is_noop() {
    let mut okm: [u8; 0] = [];
    assert!(pbkdf2_into(HashAlgorithm::Sha256, b"password", b"salt", 1, &mut okm).is_ok());
}

#[test]
fn test_empty_password_and_salt() {
    let mut okm = [0u8; 32];
    pbkdf2_into(HashAlgorithm::Sha256, b"", b"", 2, &mut okm).expect("Failed to pbkdf2_into(..)");

    assert_ne!(okm, [0u8; 32]);
}

#[test]
fn test_shorter_output_is_prefix_of_longer() {
    let mut short = [0u8; 10];
    let mut long = [0u8; 100];

    pbkdf2_into(HashAlgorithm::Sha384, b"pw", b"nacl", 3, &mut short)
        .expect("Failed to pbkdf2_into(..)");
    pbkdf2_into(HashAlgorithm::Sha384, b"pw", b"nacl", 3, &mut long)
        .expect("Failed to pbkdf2_into(..)");

    assert_eq!(short, long[..10]);
}

#[test]
fn test_hex_default_length_is_twice_digest() {
    let out = hash_pbkdf2(HashAlgorithm::Sha256, b"password", b"salt", 1, 0, false)
        .expect("Failed to hash_pbkdf2(..)");

    assert_eq!(out, Pbkdf2Output::Hex(SHA256_ONE_ROUND.to_owned()));
    assert_eq!(out.len(), 64);
    assert!(out.as_raw().is_none());
}

#[test]
fn test_hex_length_counts_characters() {
    let out = hash_pbkdf2(HashAlgorithm::Sha256, b"password", b"salt", 1, 7, false)
        .expect("Failed to hash_pbkdf2(..)");

    assert_eq!(out.as_hex(), Some(&SHA256_ONE_ROUND[..7]));
}

#[test]
fn test_raw_default_length_is_digest() {
    for algo in [
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ] {
        let out = hash_pbkdf2(algo, b"password", b"salt", 1, 0, true)
            .expect("Failed to hash_pbkdf2(..)");

        assert_eq!(out.len(), algo.digest_len());
        assert!(out.as_hex().is_none());
    }
}

#[test]
fn test_raw_and_hex_agree() {
    let raw = hash_pbkdf2(HashAlgorithm::Sha512, b"secret", b"pepper", 5, 40, true)
        .expect("Failed to hash_pbkdf2(..) raw");
    let hex = hash_pbkdf2(HashAlgorithm::Sha512, b"secret", b"pepper", 5, 80, false)
        .expect("Failed to hash_pbkdf2(..) hex");

    let raw = raw.as_raw().expect("expected raw output");
    assert_eq!(hex.as_hex(), Some(shimcrypt_util::to_hex(raw).as_str()));
}

#[test]
fn test_raw_output_longer_than_digest() {
    let out = hash_pbkdf2(HashAlgorithm::Sha1, b"password", b"salt", 1, 45, true)
        .expect("Failed to hash_pbkdf2(..)");

    assert_eq!(out.len(), 45);
}
