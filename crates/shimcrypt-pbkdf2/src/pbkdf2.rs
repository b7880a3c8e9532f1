// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hmac::digest::OutputSizeUser;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use shimcrypt_util::to_hex;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::algorithm::HashAlgorithm;
use crate::error::Pbkdf2Error;

/// Output of [`hash_pbkdf2`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pbkdf2Output {
    /// Raw derived bytes.
    Raw(Vec<u8>),
    /// Lowercase hex of the derived bytes.
    Hex(String),
}

impl Pbkdf2Output {
    /// Raw bytes, if this is raw output.
    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            Self::Raw(bytes) => Some(bytes),
            Self::Hex(_) => None,
        }
    }

    /// Hex string, if this is hex output.
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            Self::Raw(_) => None,
            Self::Hex(hex) => Some(hex),
        }
    }

    /// Output length: bytes for raw output, characters for hex output.
    pub fn len(&self) -> usize {
        match self {
            Self::Raw(bytes) => bytes.len(),
            Self::Hex(hex) => hex.len(),
        }
    }

    /// Returns `true` for zero-length output.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derives `out.len()` bytes with PBKDF2-HMAC.
///
/// `DK = T_1 || T_2 || ...` truncated to `out.len()`, where
/// `T_i = U_1 ^ ... ^ U_rounds`, `U_1 = PRF(password, salt || INT_BE32(i))`
/// and `U_j = PRF(password, U_{j-1})`. Block indices start at 1.
///
/// # Errors
///
/// - [`Pbkdf2Error::InvalidRounds`] if `rounds == 0`
/// - [`Pbkdf2Error::OutputTooLong`] if `out` needs more than `2^32 - 1` blocks
///
/// # Example
///
/// ```rust
/// use shimcrypt_pbkdf2::{HashAlgorithm, pbkdf2_into};
///
/// let mut key = [0u8; 32];
/// pbkdf2_into(HashAlgorithm::Sha256, b"password", b"salt", 4096, &mut key)
///     .expect("Failed to derive key");
/// ```
#[cfg_attr(
    feature = "tracing",
    instrument(level = "trace", skip(password, salt, out), fields(len = out.len()))
)]
pub fn pbkdf2_into(
    algo: HashAlgorithm,
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    out: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    check_params(algo, rounds, out.len())?;

    match algo {
        HashAlgorithm::Sha1 => derive(Hmac::<Sha1>::new_from_slice(password)?, salt, rounds, out),
        HashAlgorithm::Sha256 => {
            derive(Hmac::<Sha256>::new_from_slice(password)?, salt, rounds, out)
        }
        HashAlgorithm::Sha384 => {
            derive(Hmac::<Sha384>::new_from_slice(password)?, salt, rounds, out)
        }
        HashAlgorithm::Sha512 => {
            derive(Hmac::<Sha512>::new_from_slice(password)?, salt, rounds, out)
        }
    }

    Ok(())
}

/// Validates `rounds` and a requested output length of `len` bytes.
///
/// Runs before any output buffer is sized, so an absurd `len` is reported
/// as [`Pbkdf2Error::OutputTooLong`] instead of reaching the allocator.
fn check_params(algo: HashAlgorithm, rounds: u32, len: usize) -> Result<(), Pbkdf2Error> {
    if rounds == 0 {
        return Err(Pbkdf2Error::InvalidRounds);
    }

    let blocks = len.div_ceil(algo.digest_len());
    if blocks as u64 > u32::MAX as u64 {
        return Err(Pbkdf2Error::OutputTooLong);
    }

    Ok(())
}

/// Zeroed output buffer; allocation failure maps to [`Pbkdf2Error::OutputTooLong`].
fn output_buffer(len: usize) -> Result<Vec<u8>, Pbkdf2Error> {
    let mut out = Vec::new();
    out.try_reserve_exact(len).map_err(|_| Pbkdf2Error::OutputTooLong)?;
    out.resize(len, 0);

    Ok(out)
}

/// Block loop over an HMAC already keyed with the password.
fn derive<M: Mac + Clone>(prf: M, salt: &[u8], rounds: u32, out: &mut [u8]) {
    let hash_len = <M as OutputSizeUser>::output_size();

    for (index, chunk) in out.chunks_mut(hash_len).enumerate() {
        let block_index = index as u32 + 1;

        let mut mac = prf.clone();
        mac.update(salt);
        mac.update(&block_index.to_be_bytes());
        let mut u = mac.finalize().into_bytes();
        let mut t = u.clone();

        for _ in 1..rounds {
            let mut mac = prf.clone();
            mac.update(&u);
            u = mac.finalize().into_bytes();

            for (t_byte, u_byte) in t.iter_mut().zip(u.iter()) {
                *t_byte ^= u_byte;
            }
        }

        chunk.copy_from_slice(&t[..chunk.len()]);
    }
}

/// PBKDF2 with the length conventions of the classic `hash_pbkdf2` helper.
///
/// - `raw == true`: `length` is a byte count, `0` means the digest length.
/// - `raw == false`: `length` counts hex characters, `0` means twice the
///   digest length. Odd lengths are honoured by truncating the hex string.
///
/// # Errors
///
/// See [`pbkdf2_into`].
///
/// # Example
///
/// ```rust
/// use shimcrypt_pbkdf2::{HashAlgorithm, hash_pbkdf2};
///
/// let out = hash_pbkdf2(HashAlgorithm::Sha256, b"password", b"salt", 1, 0, false)
///     .expect("Failed to derive key");
///
/// assert_eq!(
///     out.as_hex(),
///     Some("120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b")
/// );
/// ```
pub fn hash_pbkdf2(
    algo: HashAlgorithm,
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    length: usize,
    raw: bool,
) -> Result<Pbkdf2Output, Pbkdf2Error> {
    let digest_len = algo.digest_len();

    if raw {
        let len = if length == 0 { digest_len } else { length };
        check_params(algo, rounds, len)?;

        let mut out = output_buffer(len)?;
        pbkdf2_into(algo, password, salt, rounds, &mut out)?;

        return Ok(Pbkdf2Output::Raw(out));
    }

    let chars = if length == 0 { digest_len * 2 } else { length };
    let len = chars.div_ceil(2);
    check_params(algo, rounds, len)?;

    let mut out = output_buffer(len)?;
    pbkdf2_into(algo, password, salt, rounds, &mut out)?;

    let mut hex = to_hex(&out);
    hex.truncate(chars);

    Ok(Pbkdf2Output::Hex(hex))
}
