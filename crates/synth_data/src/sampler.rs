//! Random date and number sampling shared by all generators.
//!
//! A [`Sampler`] owns its random source and a fixed "today" anchor, so the
//! same seed and anchor always yield the same sequence of values.

use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Largest scale a `Decimal` can carry
const MAX_DECIMAL_SCALE: u32 = 28;

/// Uniform sampling over dates, integers, decimals and slices
#[derive(Debug, Clone)]
pub struct Sampler<R: Rng = ChaCha8Rng> {
    rng: R,
    today: NaiveDate,
}

impl Sampler<ChaCha8Rng> {
    /// Create a sampler backed by ChaCha8 seeded with `seed`
    pub fn seeded(seed: u64, today: NaiveDate) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed), today)
    }
}

impl<R: Rng> Sampler<R> {
    pub fn new(rng: R, today: NaiveDate) -> Self {
        Self { rng, today }
    }

    /// The date every window ends at
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Uniform date in `[today - window_days, today]`
    pub fn date_within(&mut self, window_days: u32) -> NaiveDate {
        let back = self.rng.random_range(0..=window_days as u64);
        self.today
            .checked_sub_days(Days::new(back))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Uniform integer in `[min, max]`; `min` when the range is empty
    pub fn int_in(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// Uniform decimal in `[min, max]` on a grid of `scale` fractional digits.
    ///
    /// Returns `None` when the range cannot be expressed on an `i64` grid at
    /// that scale (see [`decimal_grid`]).
    pub fn decimal_in(&mut self, min: Decimal, max: Decimal, scale: u32) -> Option<Decimal> {
        let (lo, hi) = decimal_grid(min, max, scale)?;
        Some(self.decimal_on_grid(lo, hi, scale))
    }

    /// Uniform decimal `n / 10^scale` with `n` in `[lo, hi]`.
    ///
    /// Sampling happens on the integer grid itself, so every result already
    /// carries exactly `scale` digits and never needs a second rounding.
    pub fn decimal_on_grid(&mut self, lo: i64, hi: i64, scale: u32) -> Decimal {
        let units = if lo >= hi {
            lo
        } else {
            self.rng.random_range(lo..=hi)
        };
        Decimal::new(units, scale)
    }

    /// Uniform real in `[min, max]`
    pub fn fraction_in(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// Pick a random element from a non-empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.random_range(0..items.len())]
    }
}

/// Integer bounds of `[min, max]` scaled by `10^scale`, rounded inward.
///
/// `None` if the scale exceeds what `Decimal` supports or either bound
/// overflows `Decimal` or `i64` once scaled.
pub fn decimal_grid(min: Decimal, max: Decimal, scale: u32) -> Option<(i64, i64)> {
    if scale > MAX_DECIMAL_SCALE {
        return None;
    }
    let factor = Decimal::from_i128_with_scale(10i128.checked_pow(scale)?, 0);
    let lo = min.checked_mul(factor)?.ceil().to_i64()?;
    let hi = max.checked_mul(factor)?.floor().to_i64()?;
    Some((lo, hi))
}

impl<R: Rng + SeedableRng> Sampler<R> {
    /// Restart the random source from `seed`, keeping the date anchor
    pub fn reseed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }
}
