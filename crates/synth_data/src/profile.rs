//! Numeric bounds and windows used by the generators.

use crate::master::MasterData;
use crate::sampler::decimal_grid;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inclusive integer range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: u32,
    pub max: u32,
}

impl IntRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Inclusive fixed-point range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// Inclusive real range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractionRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("{field}: min ({min}) is greater than max ({max})")]
    InvertedRange {
        field: &'static str,
        min: String,
        max: String,
    },
    #[error("{field}: must be between 0 and 1, got {value}")]
    FractionOutOfBounds { field: &'static str, value: f64 },
    #[error("unit_price: negative prices are not allowed")]
    NegativePrice,
    #[error("price_scale: at most 8 fractional digits are supported, got {0}")]
    ScaleTooLarge(u32),
    #[error("unit_price: {min}..{max} does not fit 64-bit integer units at scale {scale}")]
    PriceOutOfRange { min: String, max: String, scale: u32 },
    #[error("weeks: must be at least 1")]
    NoWeeks,
    #[error("{0} list is empty")]
    EmptyList(&'static str),
}

/// Bounds for every randomized field.
///
/// Defaults reproduce the glass plant scenario: 50–500 units per order at
/// 120.00–350.00, delivered 2–15 days later; 52 weeks of 1000–5000 units with
/// 2%–8% scrap; 800–5000 units in stock updated within the last 30 days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationProfile {
    pub quantity: IntRange,
    pub unit_price: DecimalRange,
    pub price_scale: u32,
    pub delivery_days: IntRange,
    pub order_window_days: u32,
    pub weeks: u32,
    pub week_prefix: String,
    pub units_produced: IntRange,
    pub scrap_fraction: FractionRange,
    pub production_window_days: u32,
    pub stock_units: IntRange,
    pub inventory_window_days: u32,
}

impl Default for GenerationProfile {
    fn default() -> Self {
        Self {
            quantity: IntRange::new(50, 500),
            unit_price: DecimalRange {
                min: Decimal::new(120, 0),
                max: Decimal::new(350, 0),
            },
            price_scale: 2,
            delivery_days: IntRange::new(2, 15),
            order_window_days: 365,
            weeks: 52,
            week_prefix: "P".to_string(),
            units_produced: IntRange::new(1000, 5000),
            scrap_fraction: FractionRange {
                min: 0.02,
                max: 0.08,
            },
            production_window_days: 365,
            stock_units: IntRange::new(800, 5000),
            inventory_window_days: 30,
        }
    }
}

impl GenerationProfile {
    /// Check that every range is well-formed and the reference lists are usable
    pub fn validate(&self, master: &MasterData) -> Result<(), ProfileError> {
        check_int("quantity", self.quantity)?;
        check_int("delivery_days", self.delivery_days)?;
        check_int("units_produced", self.units_produced)?;
        check_int("stock_units", self.stock_units)?;

        if self.unit_price.min.is_sign_negative() {
            return Err(ProfileError::NegativePrice);
        }
        if self.unit_price.min > self.unit_price.max {
            return Err(ProfileError::InvertedRange {
                field: "unit_price",
                min: self.unit_price.min.to_string(),
                max: self.unit_price.max.to_string(),
            });
        }
        if self.price_scale > 8 {
            return Err(ProfileError::ScaleTooLarge(self.price_scale));
        }
        self.price_grid()?;

        let scrap = self.scrap_fraction;
        for value in [scrap.min, scrap.max] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ProfileError::FractionOutOfBounds {
                    field: "scrap_fraction",
                    value,
                });
            }
        }
        if scrap.min > scrap.max {
            return Err(ProfileError::InvertedRange {
                field: "scrap_fraction",
                min: scrap.min.to_string(),
                max: scrap.max.to_string(),
            });
        }

        if self.weeks == 0 {
            return Err(ProfileError::NoWeeks);
        }

        if master.customers.is_empty() {
            return Err(ProfileError::EmptyList("customers"));
        }
        if master.products.is_empty() {
            return Err(ProfileError::EmptyList("products"));
        }
        if master.warehouses.is_empty() {
            return Err(ProfileError::EmptyList("warehouses"));
        }

        Ok(())
    }
}

impl GenerationProfile {
    /// `unit_price` bounds in units of `10^-price_scale`
    pub fn price_grid(&self) -> Result<(i64, i64), ProfileError> {
        let DecimalRange { min, max } = self.unit_price;
        let Some(grid) = decimal_grid(min, max, self.price_scale) else {
            return Err(ProfileError::PriceOutOfRange {
                min: min.to_string(),
                max: max.to_string(),
                scale: self.price_scale,
            });
        };
        Ok(grid)
    }
}

fn check_int(field: &'static str, range: IntRange) -> Result<(), ProfileError> {
    if range.min > range.max {
        return Err(ProfileError::InvertedRange {
            field,
            min: range.min.to_string(),
            max: range.max.to_string(),
        });
    }
    Ok(())
}
