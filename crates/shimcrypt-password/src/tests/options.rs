// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::options::{DEFAULT_COST, MAX_COST, MIN_COST, PasswordOptions};

#[test]
fn test_effective_cost_defaults() {
    assert_eq!(PasswordOptions::default().effective_cost(), DEFAULT_COST);
}

#[test]
fn test_effective_cost_clamps() {
    assert_eq!(PasswordOptions::default().with_cost(0).effective_cost(), MIN_COST);
    assert_eq!(PasswordOptions::default().with_cost(12).effective_cost(), 12);
    assert_eq!(PasswordOptions::default().with_cost(99).effective_cost(), MAX_COST);
}

#[test]
fn test_with_salt_stores_bytes() {
    let options = PasswordOptions::default().with_salt(b"0123456789abcdef".as_slice());

    assert_eq!(options.salt.as_deref(), Some(&b"0123456789abcdef"[..]));
    assert_eq!(options.cost, None);
}
