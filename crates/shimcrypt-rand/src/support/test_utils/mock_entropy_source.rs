// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Configurable behavior for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Normal operation (delegates to real entropy source).
    None,
    /// Always fail fill_bytes.
    FailAlways,
    /// Fail fill_bytes on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthFillBytes(usize),
    /// The Nth call (0-indexed) fills every byte with `seq[N % seq.len()]`.
    ///
    /// An empty sequence fills with zeros.
    ByteSequence(&'static [u8]),
}

/// Mock entropy source for testing.
///
/// Wraps [`SystemEntropySource`] but allows simulating failures and scripted
/// output via [`MockEntropySourceBehaviour`]. Counters are atomic so the mock
/// can sit inside a [`FallbackEntropySource`](crate::FallbackEntropySource).
pub struct MockEntropySource {
    inner: SystemEntropySource,
    behaviour: MockEntropySourceBehaviour,
    fill_bytes_count: AtomicUsize,
    bytes_requested: AtomicUsize,
}

impl MockEntropySource {
    /// Creates a new mock entropy source with the specified behavior.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            inner: SystemEntropySource {},
            behaviour,
            fill_bytes_count: AtomicUsize::new(0),
            bytes_requested: AtomicUsize::new(0),
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Resets the call and byte counters.
    pub fn reset_count(&self) {
        self.fill_bytes_count.store(0, Ordering::Relaxed);
        self.bytes_requested.store(0, Ordering::Relaxed);
    }

    /// Returns the current call count.
    pub fn call_count(&self) -> usize {
        self.fill_bytes_count.load(Ordering::Relaxed)
    }

    /// Returns the total number of bytes requested across all calls.
    pub fn bytes_requested(&self) -> usize {
        self.bytes_requested.load(Ordering::Relaxed)
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let current = self.fill_bytes_count.fetch_add(1, Ordering::Relaxed);
        self.bytes_requested.fetch_add(dest.len(), Ordering::Relaxed);

        match self.behaviour {
            MockEntropySourceBehaviour::None => self.inner.fill_bytes(dest),
            MockEntropySourceBehaviour::FailAlways => Err(EntropyError::EntropyNotAvailable),
            MockEntropySourceBehaviour::FailAtNthFillBytes(n) if current + 1 == n => {
                Err(EntropyError::EntropyNotAvailable)
            }
            MockEntropySourceBehaviour::FailAtNthFillBytes(_) => self.inner.fill_bytes(dest),
            MockEntropySourceBehaviour::ByteSequence(seq) => {
                let byte = if seq.is_empty() {
                    0
                } else {
                    seq[current % seq.len()]
                };
                dest.fill(byte);
                Ok(())
            }
        }
    }
}
