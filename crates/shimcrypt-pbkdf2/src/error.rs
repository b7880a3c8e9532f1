// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// PBKDF2 error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Pbkdf2Error {
    /// Iteration count must be at least 1
    #[error("iteration count must be at least 1")]
    InvalidRounds,

    /// Requested output length exceeds maximum ((2^32 - 1) * HashLen)
    #[error("requested output length exceeds maximum ((2^32 - 1) * HashLen)")]
    OutputTooLong,

    /// HMAC rejected the password as a key
    #[error("invalid HMAC key length")]
    InvalidKeyLength,

    /// Algorithm name is not one of sha1, sha256, sha384, sha512
    #[error("unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl From<hmac::digest::InvalidLength> for Pbkdf2Error {
    fn from(_: hmac::digest::InvalidLength) -> Self {
        Self::InvalidKeyLength
    }
}
