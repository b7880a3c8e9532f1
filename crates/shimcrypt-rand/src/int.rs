// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Uniform integers in a closed interval by rejection sampling.
//!
//! `random() % n` is biased whenever `n` does not divide the size of the
//! source's output space. Instead, each draw takes just enough random bytes
//! to cover the range width, masks them down to the smallest all-ones bit
//! pattern that covers the width, and rejects values past the width.
//!
//! The covering mask is at most twice the width, so a single draw is accepted
//! with probability above 1/2 and the expected number of draws is below 2.

#[cfg(feature = "tracing")]
use tracing::instrument;

use shimcrypt_util::u64_from_le_slice;

use crate::error::{EntropyError, RandomIntError};
use crate::fallback::default_entropy_source;
use crate::traits::EntropySource;

/// Draws performed by [`BoundedIntGenerator`] before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 128;

/// Smallest all-ones bit mask covering a range width.
///
/// # Example
///
/// ```rust
/// use shimcrypt_rand::CoveringMask;
///
/// // 2^7 - 1 = 127 < 200 <= 255 = 2^8 - 1
/// let plan = CoveringMask::for_width(200);
/// assert_eq!(plan.bits, 8);
/// assert_eq!(plan.bytes, 1);
/// assert_eq!(plan.mask, 0xFF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoveringMask {
    /// Smallest `k` with `2^k - 1 >= width`.
    pub bits: u32,
    /// Random bytes needed per draw, `ceil(bits / 8)`.
    pub bytes: usize,
    /// `bits` low bits set.
    pub mask: u64,
}

impl CoveringMask {
    /// Computes the covering mask for `width = max - min`.
    pub const fn for_width(width: u64) -> Self {
        let bits = u64::BITS - width.leading_zeros();
        let mask = if bits == u64::BITS {
            u64::MAX
        } else {
            (1u64 << bits) - 1
        };

        Self {
            bits,
            bytes: bits.div_ceil(8) as usize,
            mask,
        }
    }
}

/// Generates uniformly distributed integers in `[min, max]`.
///
/// Every draw requests fresh bytes from the entropy source; bytes from a
/// rejected draw are never reused. The generator holds no other state, so a
/// shared reference can be used from several threads as long as the entropy
/// source is `Sync`.
///
/// # Example
///
/// ```rust
/// use shimcrypt_rand::{BoundedIntGenerator, SystemEntropySource};
///
/// let generator = BoundedIntGenerator::new(SystemEntropySource {});
/// let roll = generator.generate(1, 6).expect("Failed to generate integer");
///
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug, Clone)]
pub struct BoundedIntGenerator<E: EntropySource> {
    entropy: E,
    max_attempts: usize,
}

impl<E: EntropySource> BoundedIntGenerator<E> {
    /// Creates a generator with the [`DEFAULT_MAX_ATTEMPTS`] retry bound.
    pub fn new(entropy: E) -> Self {
        Self {
            entropy,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the retry bound.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Current retry bound.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Underlying entropy source.
    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    /// Returns an integer `n` with `min <= n <= max`, each value equally likely.
    ///
    /// `min == max` returns `min` without drawing any entropy.
    ///
    /// # Errors
    ///
    /// - [`RandomIntError::InvalidRange`] if `min > max` (no entropy consumed)
    /// - [`RandomIntError::Entropy`] if the entropy source fails
    /// - [`RandomIntError::RetriesExhausted`] if every draw in the retry
    ///   bound was rejected
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self, min: i64, max: i64) -> Result<i64, RandomIntError> {
        if min > max {
            return Err(RandomIntError::InvalidRange { min, max });
        }

        // Two's complement: the true width always fits in u64.
        let width = max.wrapping_sub(min) as u64;
        let plan = CoveringMask::for_width(width);

        if plan.bits == 0 {
            return Ok(min);
        }

        let mut buf = [0u8; 8];
        let draw = &mut buf[..plan.bytes];

        for _ in 0..self.max_attempts {
            fill_or_wipe(&self.entropy, draw)?;

            let num = u64_from_le_slice(draw) & plan.mask;
            draw.fill(0);

            if num <= width {
                return Ok(min.wrapping_add_unsigned(num));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(
            attempts = self.max_attempts,
            width,
            "rejection sampling exhausted its retry bound"
        );

        Err(RandomIntError::RetriesExhausted {
            attempts: self.max_attempts,
        })
    }
}

/// Fills `dest` from `entropy`; on failure `dest` is zeroed before the error
/// is returned, so a partial fill never outlives the call.
pub(crate) fn fill_or_wipe<E: EntropySource + ?Sized>(
    entropy: &E,
    dest: &mut [u8],
) -> Result<(), EntropyError> {
    match entropy.fill_bytes(dest) {
        Ok(()) => Ok(()),
        Err(err) => {
            dest.fill(0);
            Err(err)
        }
    }
}

/// Returns a uniform integer in `[min, max]` drawn from [`default_entropy_source`].
///
/// # Errors
///
/// See [`BoundedIntGenerator::generate`].
pub fn random_int(min: i64, max: i64) -> Result<i64, RandomIntError> {
    BoundedIntGenerator::new(default_entropy_source()).generate(min, max)
}
