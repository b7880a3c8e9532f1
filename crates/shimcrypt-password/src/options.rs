// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Cost used when [`PasswordOptions::cost`] is unset.
pub const DEFAULT_COST: u32 = 10;
/// Lowest accepted cost; smaller requests are raised to it.
pub const MIN_COST: u32 = 4;
/// Highest accepted cost; larger requests are lowered to it.
pub const MAX_COST: u32 = 31;
/// Salt bytes consumed by bcrypt.
pub const SALT_LEN: usize = 16;

/// Password hashing algorithm. bcrypt is the only one, and the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PasswordAlgorithm {
    /// bcrypt, `$2y$` format.
    #[default]
    Bcrypt,
}

/// Options for [`password_hash`](crate::password_hash) and
/// [`password_needs_rehash`](crate::password_needs_rehash).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordOptions {
    /// Work factor as a power of two. `None` means [`DEFAULT_COST`].
    pub cost: Option<u32>,
    /// Raw salt bytes; only the first [`SALT_LEN`] are used. `None` means a
    /// fresh random salt per hash.
    pub salt: Option<Vec<u8>>,
}

impl PasswordOptions {
    /// Sets the cost.
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Sets an explicit salt.
    pub fn with_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    /// Requested cost clamped to [`MIN_COST`]`..=`[`MAX_COST`].
    pub fn effective_cost(&self) -> u32 {
        self.cost.unwrap_or(DEFAULT_COST).clamp(MIN_COST, MAX_COST)
    }
}
