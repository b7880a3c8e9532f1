// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::{EntropySource, error::EntropyError};

/// OS CSPRNG through `getrandom`; the first link of
/// [`FallbackEntropySource::system_default`](crate::FallbackEntropySource::system_default).
///
/// Any `getrandom` failure collapses to [`EntropyError::EntropyNotAvailable`]
/// so the chain moves on to `/dev/urandom` (unix) or gives up. Partial
/// output is never reported as success.
///
/// Backends: `getrandom()` on Linux/Android, `getentropy()` on Apple
/// targets, `ProcessPrng` on Windows, `random_get` on WASI and
/// `crypto.getRandomValues` in the browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource {}

impl SystemEntropySource {
    pub(crate) fn fill_bytes_with(
        fill_fn: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
        dest: &mut [u8],
    ) -> Result<(), EntropyError> {
        fill_fn(dest).map_err(|_| EntropyError::EntropyNotAvailable)
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        Self::fill_bytes_with(&getrandom::fill, dest)
    }
}
