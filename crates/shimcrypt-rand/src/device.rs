// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Raw device-file entropy, the last resort of the default chain.

use std::fs::File;
use std::io::Read;
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Device read by [`DevUrandomEntropySource::new`].
pub const DEFAULT_DEVICE_PATH: &str = "/dev/urandom";

/// Reads entropy straight from a character device such as `/dev/urandom`.
///
/// The path must name a character device; regular files are refused so a
/// misconfigured path can never pass predictable bytes off as entropy.
/// Every call opens the device, reads exactly `dest.len()` bytes and closes it.
#[derive(Debug, Clone)]
pub struct DevUrandomEntropySource {
    path: PathBuf,
}

impl DevUrandomEntropySource {
    /// Creates a source reading from [`DEFAULT_DEVICE_PATH`].
    pub fn new() -> Self {
        Self::with_path(DEFAULT_DEVICE_PATH)
    }

    /// Creates a source reading from a custom device path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Device path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for DevUrandomEntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for DevUrandomEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if dest.is_empty() {
            return Ok(());
        }

        let mut device = File::open(&self.path).map_err(|_| EntropyError::EntropyNotAvailable)?;
        let is_char_device = device
            .metadata()
            .map(|meta| meta.file_type().is_char_device())
            .map_err(|_| EntropyError::EntropyNotAvailable)?;

        if !is_char_device {
            return Err(EntropyError::EntropyNotAvailable);
        }

        device
            .read_exact(dest)
            .map_err(|_| EntropyError::EntropyNotAvailable)
    }
}
