// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

type BoxedSource = Box<dyn EntropySource + Send + Sync>;

/// Ordered chain of entropy sources.
///
/// Sources are tried in insertion order; the first one that fills the whole
/// buffer wins. A failing source is skipped, never retried within the same
/// call. An empty chain, or one where every source fails, yields
/// [`EntropyError::EntropyNotAvailable`].
///
/// # Example
///
/// ```rust
/// use shimcrypt_rand::{EntropySource, FallbackEntropySource, SystemEntropySource};
///
/// let chain = FallbackEntropySource::new().with_source(SystemEntropySource {});
///
/// let mut salt = [0u8; 16];
/// chain.fill_bytes(&mut salt).expect("Failed to generate entropy");
/// ```
#[derive(Default)]
pub struct FallbackEntropySource {
    sources: Vec<BoxedSource>,
}

impl FallbackEntropySource {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// The platform chain: OS CSPRNG first, then `/dev/urandom` on unix.
    pub fn system_default() -> Self {
        let chain = Self::new().with_source(SystemEntropySource {});

        #[cfg(unix)]
        let chain = chain.with_source(crate::device::DevUrandomEntropySource::new());

        chain
    }

    /// Appends a source at the lowest priority.
    pub fn with_source<S>(mut self, source: S) -> Self
    where
        S: EntropySource + Send + Sync + 'static,
    {
        self.push(source);
        self
    }

    /// Appends a source at the lowest priority.
    pub fn push<S>(&mut self, source: S)
    where
        S: EntropySource + Send + Sync + 'static,
    {
        self.sources.push(Box::new(source));
    }

    /// Number of sources in the chain.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` when the chain has no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl EntropySource for FallbackEntropySource {
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip_all, fields(len = dest.len()))
    )]
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        for (_index, source) in self.sources.iter().enumerate() {
            match source.fill_bytes(dest) {
                Ok(()) => return Ok(()),
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        index = _index,
                        error = %_err,
                        "entropy source failed, trying next"
                    );
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(sources = self.sources.len(), "no entropy source could supply bytes");

        Err(EntropyError::EntropyNotAvailable)
    }
}

/// Returns [`FallbackEntropySource::system_default`].
pub fn default_entropy_source() -> FallbackEntropySource {
    FallbackEntropySource::system_default()
}
