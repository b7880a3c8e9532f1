// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shimcrypt_rand::EntropyError;
use thiserror::Error;

use crate::options::SALT_LEN;

/// Errors returned by [`password_hash`](crate::password_hash).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    /// A caller-supplied salt is shorter than the 16 bytes bcrypt consumes.
    #[error("salt must be at least {SALT_LEN} bytes, got {len}")]
    SaltTooShort {
        /// Length of the supplied salt.
        len: usize,
    },

    /// No entropy was available to generate a salt.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
