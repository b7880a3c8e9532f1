// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Drop-in fallbacks for the small crypto helpers every runtime should have.</em></p>
//!
//! ---
//!
//! shimcrypt provides the primitives that older or locked-down environments
//! tend to be missing, each as a plain stateless function:
//!
//! - 🎲 **Secure bytes**: OS CSPRNG with an ordered fallback chain, never a weak RNG
//! - 🎯 **Bounded integers**: uniform `[min, max]` by rejection sampling, no modulo bias
//! - ⏱️ **Constant-time equality**: for digests, MACs and password hashes
//! - 🔑 **PBKDF2**: HMAC-SHA1/256/384/512 with raw or hex output
//! - 🔒 **bcrypt**: `$2y$` password hashing, verification and rehash checks
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! shimcrypt = "0.1"
//! ```
//!
//! Enable the `tracing` feature to get `trace`-level spans around every
//! operation and `debug`/`warn` events when an entropy source fails.
//!
//! # Quick Start
//!
//! ```rust
//! use shimcrypt::{
//!     HashAlgorithm, PasswordAlgorithm, PasswordOptions, constant_time_eq, hash_pbkdf2,
//!     password_hash, password_verify, random_int, secure_bytes,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let token = secure_bytes(32)?;
//!     let roll = random_int(1, 6)?;
//!     assert!((1..=6).contains(&roll));
//!
//!     let key = hash_pbkdf2(HashAlgorithm::Sha256, b"password", &token, 1_000, 32, true)?;
//!     assert_eq!(key.len(), 32);
//!
//!     let options = PasswordOptions::default().with_cost(4);
//!     let hash = password_hash(b"hunter2", PasswordAlgorithm::Bcrypt, &options)?;
//!     assert!(password_verify(b"hunter2", &hash));
//!
//!     assert!(constant_time_eq(b"digest", b"digest"));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! | module       | crate                | contents                                        |
//! |--------------|----------------------|-------------------------------------------------|
//! | [`rand`]     | `shimcrypt-rand`     | entropy sources, fallback chain, bounded ints   |
//! | [`pbkdf2`]   | `shimcrypt-pbkdf2`   | PBKDF2-HMAC                                     |
//! | [`password`] | `shimcrypt-password` | bcrypt hash / verify / needs-rehash             |
//! | [`util`]     | `shimcrypt-util`     | constant-time equality, hex                     |

pub use shimcrypt_password as password;
pub use shimcrypt_pbkdf2 as pbkdf2;
pub use shimcrypt_rand as rand;
pub use shimcrypt_util as util;

pub use shimcrypt_password::{
    PasswordAlgorithm, PasswordError, PasswordOptions, password_get_info, password_hash,
    password_needs_rehash, password_verify,
};
pub use shimcrypt_pbkdf2::{HashAlgorithm, Pbkdf2Error, Pbkdf2Output, hash_pbkdf2};
pub use shimcrypt_rand::{EntropyError, RandomIntError, random_int, secure_bytes};
pub use shimcrypt_util::constant_time_eq;
