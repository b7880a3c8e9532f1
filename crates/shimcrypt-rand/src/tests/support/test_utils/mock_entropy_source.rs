// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::EntropySource;

#[test]
fn test_mock_entropy_source_behaviour_none() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert!(result.is_ok());
}

#[test]
fn test_mock_entropy_source_behaviour_fail_always() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut buf = [0u8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
}

#[test]
fn test_mock_entropy_source_behaviour_fail_at_nth_third_call() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(3));
    let mut buf = [0u8; 32];

    // First two calls succeed
    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(mock.fill_bytes(&mut buf).is_ok());

    // Third call fails
    let result = mock.fill_bytes(&mut buf);
    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));

    // Fourth call succeeds
    assert!(mock.fill_bytes(&mut buf).is_ok());
}

#[test]
fn test_mock_entropy_source_byte_sequence_cycles_per_call() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::ByteSequence(&[0xAA, 0x01]));
    let mut buf = [0u8; 3];

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..) (#0)");
    assert_eq!(buf, [0xAA; 3]);

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..) (#1)");
    assert_eq!(buf, [0x01; 3]);

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..) (#2)");
    assert_eq!(buf, [0xAA; 3]);
}

#[test]
fn test_mock_entropy_source_empty_byte_sequence_fills_zero() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::ByteSequence(&[]));
    let mut buf = [0xFFu8; 4];

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");

    assert_eq!(buf, [0u8; 4]);
}

#[test]
fn test_mock_entropy_source_counters() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut small = [0u8; 2];
    let mut large = [0u8; 30];

    assert_eq!(mock.call_count(), 0);
    assert_eq!(mock.bytes_requested(), 0);

    mock.fill_bytes(&mut small).unwrap();
    mock.fill_bytes(&mut large).unwrap();
    assert_eq!(mock.call_count(), 2);
    assert_eq!(mock.bytes_requested(), 32);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);
    assert_eq!(mock.bytes_requested(), 0);
}

#[test]
fn test_mock_entropy_source_change_behaviour() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut bytes = [0u8; 32];

    assert!(mock.fill_bytes(&mut bytes).is_ok());

    mock.change_behaviour(MockEntropySourceBehaviour::FailAlways);
    assert!(mock.fill_bytes(&mut bytes).is_err());

    mock.change_behaviour(MockEntropySourceBehaviour::None);
    assert!(mock.fill_bytes(&mut bytes).is_ok());
}
