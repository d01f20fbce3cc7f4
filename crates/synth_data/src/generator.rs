//! Row generators for sales, production and inventory.
//!
//! Each dataset is produced by a lazy iterator borrowing the [`Generator`], so
//! rows can be streamed straight into a sink without buffering the dataset.
//! Datasets must be drained in order (sales, production, inventory) for a
//! given seed to reproduce the same files.

use crate::master::MasterData;
use crate::profile::{GenerationProfile, ProfileError};
use crate::records::{InventoryRecord, ProductionRecord, SalesRecord};
use crate::sampler::Sampler;
use chrono::{Days, NaiveDate};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::{Decimal, RoundingStrategy};

/// Default 120.00..350.00 price range in cents
const DEFAULT_PRICE_GRID: (i64, i64) = (12_000, 35_000);

pub struct Generator<R: Rng = ChaCha8Rng> {
    sampler: Sampler<R>,
    profile: GenerationProfile,
    master: MasterData,
    price_grid: (i64, i64),
}

impl Generator<ChaCha8Rng> {
    /// Generator with the built-in reference data and default profile
    pub fn new(seed: u64, today: NaiveDate) -> Self {
        Self {
            sampler: Sampler::seeded(seed, today),
            profile: GenerationProfile::default(),
            master: MasterData::default(),
            price_grid: DEFAULT_PRICE_GRID,
        }
    }
}

impl<R: Rng> Generator<R> {
    /// Assemble a generator from its parts, validating `profile` against
    /// `master` first.
    pub fn with_parts(
        sampler: Sampler<R>,
        profile: GenerationProfile,
        master: MasterData,
    ) -> Result<Self, ProfileError> {
        profile.validate(&master)?;
        let price_grid = profile.price_grid()?;
        Ok(Self {
            sampler,
            profile,
            master,
            price_grid,
        })
    }

    pub fn profile(&self) -> &GenerationProfile {
        &self.profile
    }

    pub fn master(&self) -> &MasterData {
        &self.master
    }

    pub fn sampler_mut(&mut self) -> &mut Sampler<R> {
        &mut self.sampler
    }

    /// `rows` sales records with order ids `1..=rows`
    pub fn sales(&mut self, rows: u64) -> SalesRows<'_, R> {
        SalesRows {
            gen: self,
            next_id: 1,
            rows,
        }
    }

    /// One production record per week and product, weeks outermost
    pub fn production(&mut self) -> ProductionRows<'_, R> {
        ProductionRows {
            gen: self,
            week: 1,
            product: 0,
        }
    }

    /// One inventory record per product and warehouse, products outermost
    pub fn inventory(&mut self) -> InventoryRows<'_, R> {
        InventoryRows {
            gen: self,
            product: 0,
            warehouse: 0,
        }
    }

    fn sales_record(&mut self, order_id: u64) -> SalesRecord {
        let p = &self.profile;
        let s = &mut self.sampler;

        let quantity = s.int_in(p.quantity.min, p.quantity.max);
        let (lo, hi) = self.price_grid;
        let unit_price = s.decimal_on_grid(lo, hi, p.price_scale);

        let order_date = s.date_within(p.order_window_days);
        let lead = s.int_in(p.delivery_days.min, p.delivery_days.max);
        let delivery_date = order_date
            .checked_add_days(Days::new(lead as u64))
            .unwrap_or(NaiveDate::MAX);

        let customer = s.pick(&self.master.customers).clone();
        let product = s.pick(&self.master.products).clone();

        SalesRecord {
            order_id,
            customer,
            product,
            quantity,
            unit_price,
            order_date,
            delivery_date,
            total_sales: line_total(quantity, unit_price, p.price_scale),
        }
    }

    fn production_record(&mut self, week: u32, product: usize) -> ProductionRecord {
        let p = &self.profile;
        let s = &mut self.sampler;

        let units_produced = s.int_in(p.units_produced.min, p.units_produced.max);
        let fraction = s.fraction_in(p.scrap_fraction.min, p.scrap_fraction.max);
        let scrap_units = ((units_produced as f64 * fraction) as u32).min(units_produced);

        ProductionRecord {
            production_id: format!("{}{}", p.week_prefix, week),
            product: self.master.products[product].clone(),
            production_date: s.date_within(p.production_window_days),
            units_produced,
            scrap_units,
        }
    }

    fn inventory_record(&mut self, product: usize, warehouse: usize) -> InventoryRecord {
        let p = &self.profile;
        let s = &mut self.sampler;

        InventoryRecord {
            product: self.master.products[product].clone(),
            warehouse: self.master.warehouses[warehouse].clone(),
            stock_units: s.int_in(p.stock_units.min, p.stock_units.max),
            last_update: s.date_within(p.inventory_window_days),
        }
    }
}

/// `quantity * unit_price` rounded half away from zero to `scale` digits
pub fn line_total(quantity: u32, unit_price: Decimal, scale: u32) -> Decimal {
    let mut total = (Decimal::from(quantity) * unit_price)
        .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    total.rescale(scale);
    total
}

pub struct SalesRows<'a, R: Rng> {
    gen: &'a mut Generator<R>,
    next_id: u64,
    rows: u64,
}

impl<R: Rng> Iterator for SalesRows<'_, R> {
    type Item = SalesRecord;

    fn next(&mut self) -> Option<SalesRecord> {
        if self.next_id > self.rows {
            return None;
        }
        let record = self.gen.sales_record(self.next_id);
        self.next_id += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.rows + 1).saturating_sub(self.next_id) as usize;
        (left, Some(left))
    }
}

pub struct ProductionRows<'a, R: Rng> {
    gen: &'a mut Generator<R>,
    week: u32,
    product: usize,
}

impl<R: Rng> Iterator for ProductionRows<'_, R> {
    type Item = ProductionRecord;

    fn next(&mut self) -> Option<ProductionRecord> {
        if self.product >= self.gen.master.products.len() {
            self.product = 0;
            self.week += 1;
        }
        if self.week > self.gen.profile.weeks || self.gen.master.products.is_empty() {
            return None;
        }
        let record = self.gen.production_record(self.week, self.product);
        self.product += 1;
        Some(record)
    }
}

pub struct InventoryRows<'a, R: Rng> {
    gen: &'a mut Generator<R>,
    product: usize,
    warehouse: usize,
}

impl<R: Rng> Iterator for InventoryRows<'_, R> {
    type Item = InventoryRecord;

    fn next(&mut self) -> Option<InventoryRecord> {
        if self.warehouse >= self.gen.master.warehouses.len() {
            self.warehouse = 0;
            self.product += 1;
        }
        if self.product >= self.gen.master.products.len() || self.gen.master.warehouses.is_empty() {
            return None;
        }
        let record = self.gen.inventory_record(self.product, self.warehouse);
        self.warehouse += 1;
        Some(record)
    }
}
