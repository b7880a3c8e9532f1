// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shimcrypt_rand::{EntropySource, default_entropy_source};
use shimcrypt_util::constant_time_eq;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::error::PasswordError;
use crate::format::{self, BcryptVariant, HashInfo};
use crate::options::{PasswordAlgorithm, PasswordOptions, SALT_LEN};

/// bcrypt reads at most 72 key bytes, including the NUL terminator.
const MAX_KEY_LEN: usize = 72;

/// Hashes `password` with bcrypt, drawing the salt from the default entropy chain.
///
/// Cost is clamped to `4..=31`. The password is NUL-terminated and the key
/// truncated to 72 bytes, so passwords sharing their first 72 bytes collide.
///
/// # Errors
///
/// - [`PasswordError::SaltTooShort`] if `options.salt` holds fewer than 16 bytes
/// - [`PasswordError::Entropy`] if no salt could be generated
pub fn password_hash(
    password: &[u8],
    algo: PasswordAlgorithm,
    options: &PasswordOptions,
) -> Result<String, PasswordError> {
    password_hash_with_source(password, algo, options, &default_entropy_source())
}

/// [`password_hash`] with an explicit entropy source for the salt.
///
/// The source is only consulted when `options.salt` is `None`.
///
/// # Errors
///
/// See [`password_hash`].
#[cfg_attr(
    feature = "tracing",
    instrument(level = "trace", skip_all, fields(cost = options.effective_cost()))
)]
pub fn password_hash_with_source<E: EntropySource>(
    password: &[u8],
    algo: PasswordAlgorithm,
    options: &PasswordOptions,
    entropy: &E,
) -> Result<String, PasswordError> {
    let PasswordAlgorithm::Bcrypt = algo;

    let mut salt = [0u8; SALT_LEN];
    match &options.salt {
        Some(given) if given.len() < SALT_LEN => {
            return Err(PasswordError::SaltTooShort { len: given.len() });
        }
        Some(given) => salt.copy_from_slice(&given[..SALT_LEN]),
        None => entropy.fill_bytes(&mut salt)?,
    }

    let cost = options.effective_cost();
    let digest = raw_bcrypt(cost, salt, password);

    Ok(format::encode(BcryptVariant::TwoY, cost, &salt, &digest))
}

/// Checks `password` against an encoded bcrypt hash.
///
/// Accepts `$2a$`, `$2b$` and `$2y$` hashes. Anything malformed, including
/// an out-of-range cost, yields `false`. The recomputed hash is compared in
/// constant time.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
pub fn password_verify(password: &[u8], hash: &str) -> bool {
    let Some(parsed) = format::parse(hash) else {
        #[cfg(feature = "tracing")]
        tracing::debug!("rejecting malformed bcrypt hash");
        return false;
    };

    let digest = raw_bcrypt(parsed.info.cost, parsed.salt, password);
    let candidate = format::encode(parsed.info.variant, parsed.info.cost, &parsed.salt, &digest);

    constant_time_eq(candidate.as_bytes(), hash.as_bytes())
}

/// Returns `true` unless `hash` is a `$2y$` bcrypt hash whose cost matches
/// the cost `options` would produce today.
///
/// `$2a$` and `$2b$` hashes always report `true` so they migrate to `$2y$`
/// on the next successful login.
pub fn password_needs_rehash(
    hash: &str,
    algo: PasswordAlgorithm,
    options: &PasswordOptions,
) -> bool {
    let PasswordAlgorithm::Bcrypt = algo;

    match password_get_info(hash) {
        Some(HashInfo {
            variant: BcryptVariant::TwoY,
            cost,
        }) => cost != options.effective_cost(),
        _ => true,
    }
}

/// Parses the variant and cost out of an encoded bcrypt hash.
///
/// Returns `None` for anything that is not a well-formed 60-character hash.
pub fn password_get_info(hash: &str) -> Option<HashInfo> {
    format::parse(hash).map(|parsed| parsed.info)
}

fn raw_bcrypt(cost: u32, salt: [u8; SALT_LEN], password: &[u8]) -> [u8; 24] {
    let mut key = Vec::with_capacity(password.len() + 1);
    key.extend_from_slice(password);
    key.push(0);
    key.truncate(MAX_KEY_LEN);

    let digest = bcrypt::bcrypt(cost, salt, &key);
    key.fill(0);

    digest
}
