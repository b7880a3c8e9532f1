// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod hex_tests {
    use shimcrypt_util::{hex_to_bytes, to_hex};

    #[test]
    fn test_to_hex_lowercase() {
        assert_eq!(to_hex(&[0x00, 0x0f, 0xa0, 0xff]), "000fa0ff");
    }

    #[test]
    fn test_to_hex_empty() {
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn test_hex_to_bytes_mixed_case() {
        assert_eq!(hex_to_bytes("0aFf"), Some(vec![0x0a, 0xff]));
    }

    #[test]
    fn test_hex_to_bytes_rejects_odd_length() {
        assert_eq!(hex_to_bytes("0"), None);
    }

    #[test]
    fn test_hex_to_bytes_rejects_invalid_digit() {
        assert_eq!(hex_to_bytes("zz"), None);
        assert_eq!(hex_to_bytes("0g"), None);
    }

    #[test]
    fn test_hex_to_bytes_inverts_to_hex() {
        let bytes = [0x12, 0x34, 0xab, 0xcd, 0xef];
        assert_eq!(hex_to_bytes(&to_hex(&bytes)).as_deref(), Some(&bytes[..]));
    }
}
