// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

#[test]
fn test_fill_bytes_with_failure() {
    let mut bytes = [0u8; 32];
    let result =
        SystemEntropySource::fill_bytes_with(&|_| Err(GetRandomError::UNSUPPORTED), &mut bytes);

    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)))
}

#[test]
fn test_fill_bytes_ok() {
    let source = SystemEntropySource {};
    let mut bytes = [0u8; 32];
    let result = source.fill_bytes(&mut bytes);

    assert!(result.is_ok());
    // 2^-256 chance of a false failure
    assert_ne!(bytes, [0u8; 32]);
}

fn fill_generic<E: EntropySource>(source: E, dest: &mut [u8]) -> Result<(), EntropyError> {
    source.fill_bytes(dest)
}

#[test]
fn test_fill_bytes_through_reference_and_box() {
    let source = SystemEntropySource {};
    let boxed: Box<dyn EntropySource> = Box::new(source);
    let mut bytes = [0u8; 16];

    assert!(fill_generic(&source, &mut bytes).is_ok());
    assert!(fill_generic(boxed, &mut bytes).is_ok());
}
