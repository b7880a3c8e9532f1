// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Modular crypt encoding: `$2y$` + 2-digit cost + `$` + 22 salt chars +
//! 31 digest chars, using bcrypt's own base64 alphabet without padding.

use base64::Engine;
use base64::alphabet::BCRYPT;
use base64::engine::GeneralPurpose;
use base64::engine::general_purpose::NO_PAD;

use crate::options::{MAX_COST, MIN_COST, SALT_LEN};

/// Length of an encoded hash.
pub const HASH_LEN: usize = 60;

const BCRYPT_B64: GeneralPurpose = GeneralPurpose::new(&BCRYPT, NO_PAD);

const SALT_START: usize = 7;
const DIGEST_START: usize = SALT_START + 22;
// bcrypt emits 24 bytes; the format keeps 23.
const DIGEST_BYTES: usize = 23;

/// bcrypt hash identifiers accepted for verification.
///
/// `$2x$` (the pre-2011 sign-extension bug) is deliberately not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BcryptVariant {
    /// `$2a$`
    TwoA,
    /// `$2b$`
    TwoB,
    /// `$2y$`
    TwoY,
}

impl BcryptVariant {
    /// Identifier including both dollar signs, e.g. `$2y$`.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::TwoA => "$2a$",
            Self::TwoB => "$2b$",
            Self::TwoY => "$2y$",
        }
    }

    fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            b'a' => Some(Self::TwoA),
            b'b' => Some(Self::TwoB),
            b'y' => Some(Self::TwoY),
            _ => None,
        }
    }
}

/// Algorithm parameters recovered from an encoded hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashInfo {
    /// Hash identifier.
    pub variant: BcryptVariant,
    /// Work factor.
    pub cost: u32,
}

/// A syntactically valid hash split into its parts.
pub(crate) struct ParsedHash {
    pub(crate) info: HashInfo,
    pub(crate) salt: [u8; SALT_LEN],
}

pub(crate) fn encode(
    variant: BcryptVariant,
    cost: u32,
    salt: &[u8; SALT_LEN],
    digest: &[u8; 24],
) -> String {
    let mut out = String::with_capacity(HASH_LEN);
    out.push_str(variant.prefix());
    out.push_str(&format!("{cost:02}$"));
    BCRYPT_B64.encode_string(salt, &mut out);
    BCRYPT_B64.encode_string(&digest[..DIGEST_BYTES], &mut out);
    out
}

pub(crate) fn parse(hash: &str) -> Option<ParsedHash> {
    let bytes = hash.as_bytes();
    if bytes.len() != HASH_LEN || !hash.is_ascii() {
        return None;
    }

    if &bytes[..2] != b"$2" || bytes[3] != b'$' || bytes[6] != b'$' {
        return None;
    }

    let variant = BcryptVariant::from_tag(bytes[2])?;

    if !bytes[4].is_ascii_digit() || !bytes[5].is_ascii_digit() {
        return None;
    }
    let cost = u32::from(bytes[4] - b'0') * 10 + u32::from(bytes[5] - b'0');
    if !(MIN_COST..=MAX_COST).contains(&cost) {
        return None;
    }

    let salt: [u8; SALT_LEN] = BCRYPT_B64
        .decode(&hash[SALT_START..DIGEST_START])
        .ok()?
        .try_into()
        .ok()?;

    // The digest is never decoded, only compared, but must still be well formed.
    if !hash[DIGEST_START..]
        .bytes()
        .all(|c| c == b'.' || c == b'/' || c.is_ascii_alphanumeric())
    {
        return None;
    }

    Some(ParsedHash {
        info: HashInfo { variant, cost },
        salt,
    })
}
