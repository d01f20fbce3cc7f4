//! Synthetic business data for a glass manufacturer.
//!
//! Generates deterministic sales orders, weekly production batches and
//! warehouse inventory snapshots from fixed reference lists and randomized
//! ranges. The same seed and "today" anchor always produce the same rows.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use synth_data::Generator;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
//! let mut gen = Generator::new(42, today);
//!
//! let sales: Vec<_> = gen.sales(10).collect();
//! assert_eq!(sales.len(), 10);
//! assert_eq!(gen.production().count(), 52 * 3);
//! assert_eq!(gen.inventory().count(), 3 * 3);
//! ```

pub mod generator;
pub mod master;
pub mod profile;
pub mod records;
pub mod sampler;

pub use generator::{line_total, Generator, InventoryRows, ProductionRows, SalesRows};
pub use master::MasterData;
pub use profile::{DecimalRange, FractionRange, GenerationProfile, IntRange, ProfileError};
pub use records::{Dataset, InventoryRecord, ProductionRecord, SalesRecord};
pub use sampler::Sampler;
