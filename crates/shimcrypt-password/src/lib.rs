// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # shimcrypt_password
//!
//! bcrypt password hashing producing and checking `$2y$NN$<salt><digest>`
//! strings, the format shared by PHP's `password_hash`, OpenBSD and most
//! `crypt(3)` implementations.
//!
//! The EksBlowfish primitive itself comes from the `bcrypt` crate; this crate
//! owns salt generation, cost policy, the modular crypt encoding and the
//! constant-time verification.
//!
//! ## Example
//!
//! ```rust
//! use shimcrypt_password::{PasswordAlgorithm, PasswordOptions, password_hash, password_verify};
//!
//! let options = PasswordOptions::default().with_cost(4);
//! let hash = password_hash(b"hunter2", PasswordAlgorithm::Bcrypt, &options)
//!     .expect("Failed to hash password");
//!
//! assert!(hash.starts_with("$2y$04$"));
//! assert!(password_verify(b"hunter2", &hash));
//! assert!(!password_verify(b"hunter3", &hash));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod format;
mod hash;
mod options;

pub use error::PasswordError;
pub use format::{BcryptVariant, HASH_LEN, HashInfo};
pub use hash::{
    password_get_info, password_hash, password_hash_with_source, password_needs_rehash,
    password_verify,
};
pub use options::{DEFAULT_COST, MAX_COST, MIN_COST, PasswordAlgorithm, PasswordOptions, SALT_LEN};
