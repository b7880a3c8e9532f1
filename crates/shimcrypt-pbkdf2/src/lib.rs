// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2-HMAC key derivation
//!
//! Implementation per RFC 8018 §5.2. HMAC and the underlying digests come from
//! the RustCrypto `hmac`, `sha1` and `sha2` crates; only the iteration loop
//! lives here.
//!
//! References:
//! - RFC 8018: PKCS #5: Password-Based Cryptography Specification Version 2.1
//!   <https://datatracker.ietf.org/doc/html/rfc8018>
//! - RFC 6070: PBKDF2 HMAC-SHA1 Test Vectors
//!   <https://datatracker.ietf.org/doc/html/rfc6070>

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod algorithm;
mod error;
mod pbkdf2;

pub use algorithm::HashAlgorithm;
pub use error::Pbkdf2Error;
pub use pbkdf2::{Pbkdf2Output, hash_pbkdf2, pbkdf2_into};
