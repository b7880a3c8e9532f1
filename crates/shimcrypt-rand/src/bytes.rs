// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::fallback::default_entropy_source;
use crate::traits::EntropySource;

/// Returns `len` cryptographically secure random bytes.
///
/// Drawn from [`default_entropy_source`]. A zero length yields an empty
/// vector without touching any source.
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if no source in the chain
/// can supply the bytes.
pub fn secure_bytes(len: usize) -> Result<Vec<u8>, EntropyError> {
    let mut bytes = vec![0u8; len];
    fill_secure_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Fills `dest` from [`default_entropy_source`].
///
/// # Errors
///
/// Returns [`EntropyError::EntropyNotAvailable`] if no source in the chain
/// can supply the bytes.
pub fn fill_secure_bytes(dest: &mut [u8]) -> Result<(), EntropyError> {
    if dest.is_empty() {
        return Ok(());
    }

    default_entropy_source().fill_bytes(dest)
}
