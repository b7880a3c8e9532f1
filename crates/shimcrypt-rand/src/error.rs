// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when generating random data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// System entropy source is unavailable or failed to generate random data.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,
}

/// Errors returned by [`BoundedIntGenerator`](crate::BoundedIntGenerator).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RandomIntError {
    /// `min` is greater than `max`. Raised before any entropy is consumed.
    #[error("invalid range: min ({min}) is greater than max ({max})")]
    InvalidRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },

    /// Every draw in the retry budget fell outside the range.
    #[error("could not generate random integer after {attempts} attempts")]
    RetriesExhausted {
        /// Number of draws performed.
        attempts: usize,
    },

    /// The entropy source failed.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
