// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # shimcrypt_rand
//!
//! Cryptographically secure random bytes and unbiased bounded integers.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`DevUrandomEntropySource`]: raw device-file reader (unix only)
//! - [`FallbackEntropySource`]: ordered chain of sources, first success wins
//! - [`BoundedIntGenerator`]: uniform integers in `[min, max]` by rejection sampling
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for CSPRNGs
//!
//! ## Example
//!
//! ```rust
//! use shimcrypt_rand::{random_int, secure_bytes};
//!
//! let key = secure_bytes(32).expect("Failed to generate entropy");
//! assert_eq!(key.len(), 32);
//!
//! let roll = random_int(1, 6).expect("Failed to generate integer");
//! assert!((1..=6).contains(&roll));
//! ```
//!
//! ## Entropy preference
//!
//! [`default_entropy_source`] tries, in order:
//! - the OS CSPRNG through `getrandom` (`getrandom()`, `getentropy()`,
//!   `BCryptGenRandom`, `crypto.getRandomValues`, ...)
//! - `/dev/urandom` on unix targets
//!
//! There is no fallback to a non-cryptographic generator. If every source
//! fails the call fails with [`EntropyError::EntropyNotAvailable`].

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod bytes;
#[cfg(unix)]
mod device;
mod error;
mod fallback;
mod int;
mod support;
mod system;
mod traits;

pub use bytes::{fill_secure_bytes, secure_bytes};
#[cfg(unix)]
pub use device::{DEFAULT_DEVICE_PATH, DevUrandomEntropySource};
pub use error::{EntropyError, RandomIntError};
pub use fallback::{FallbackEntropySource, default_entropy_source};
pub use int::{BoundedIntGenerator, CoveringMask, DEFAULT_MAX_ATTEMPTS, random_int};
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
