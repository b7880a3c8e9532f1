// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte utilities shared by the shimcrypt crates.
//!
//! Everything here is allocation-light and `no_std` friendly. The only
//! security-relevant helper is [`constant_time_eq`], which every digest or
//! password comparison in the workspace goes through.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Constant-time equality comparison for byte slices.
///
/// Returns `false` immediately on a length mismatch (length is not secret).
/// For equal lengths every byte pair is visited; differences are accumulated
/// with OR so the running time does not depend on where they occur.
///
/// # Example
///
/// ```
/// use shimcrypt_util::constant_time_eq;
///
/// let a = [1, 2, 3, 4];
/// let b = [1, 2, 3, 4];
/// let c = [1, 2, 3, 5];
///
/// assert!(constant_time_eq(&a, &b));
/// assert!(!constant_time_eq(&a, &c));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let diff = a
        .iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y));

    core::hint::black_box(diff) == 0
}

/// Encodes bytes as a lowercase hexadecimal string.
///
/// # Example
///
/// ```
/// use shimcrypt_util::to_hex;
///
/// assert_eq!(to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
/// ```
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Parses a hexadecimal string into bytes.
///
/// Accepts upper and lower case digits. Returns `None` on odd length or on
/// any non-hex character.
///
/// # Example
///
/// ```
/// use shimcrypt_util::hex_to_bytes;
///
/// assert_eq!(hex_to_bytes("DeadBeef"), Some(vec![0xde, 0xad, 0xbe, 0xef]));
/// assert_eq!(hex_to_bytes("abc"), None);
/// ```
pub fn hex_to_bytes(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return None;
    }

    hex.as_bytes()
        .chunks_exact(2)
        .map(|pair| Some((hex_value(pair[0])? << 4) | hex_value(pair[1])?))
        .collect()
}

#[inline]
fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Assembles up to 8 bytes into a `u64`, least significant byte first.
///
/// Bytes beyond the eighth are ignored.
///
/// # Example
///
/// ```
/// use shimcrypt_util::u64_from_le_slice;
///
/// assert_eq!(u64_from_le_slice(&[0x34, 0x12]), 0x1234);
/// assert_eq!(u64_from_le_slice(&[]), 0);
/// ```
#[inline]
pub fn u64_from_le_slice(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .take(8)
        .enumerate()
        .fold(0u64, |acc, (i, byte)| acc | ((*byte as u64) << (8 * i)))
}
