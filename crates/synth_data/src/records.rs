//! Typed rows for the three datasets.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One of the three generated datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Sales,
    Production,
    Inventory,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::Sales, Dataset::Production, Dataset::Inventory];

    /// File name used when the config does not override it
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Dataset::Sales => "ventas.csv",
            Dataset::Production => "produccion.csv",
            Dataset::Inventory => "inventario.csv",
        }
    }

    /// Column names, in serialization order
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            Dataset::Sales => SalesRecord::HEADER,
            Dataset::Production => ProductionRecord::HEADER,
            Dataset::Inventory => InventoryRecord::HEADER,
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dataset::Sales => write!(f, "sales"),
            Dataset::Production => write!(f, "production"),
            Dataset::Inventory => write!(f, "inventory"),
        }
    }
}

/// A sales order line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesRecord {
    pub order_id: u64,
    pub customer: String,
    pub product: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub order_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub total_sales: Decimal,
}

impl SalesRecord {
    pub const HEADER: &'static [&'static str] = &[
        "order_id",
        "customer",
        "product",
        "quantity",
        "unit_price",
        "order_date",
        "delivery_date",
        "total_sales",
    ];

    /// Days between order and delivery
    pub fn lead_time_days(&self) -> i64 {
        (self.delivery_date - self.order_date).num_days()
    }
}

/// One product's output for one week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionRecord {
    pub production_id: String,
    pub product: String,
    pub production_date: NaiveDate,
    pub units_produced: u32,
    pub scrap_units: u32,
}

impl ProductionRecord {
    pub const HEADER: &'static [&'static str] = &[
        "production_id",
        "product",
        "production_date",
        "units_produced",
        "scrap_units",
    ];
}

/// Stock of one product at one warehouse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRecord {
    pub product: String,
    pub warehouse: String,
    pub stock_units: u32,
    pub last_update: NaiveDate,
}

impl InventoryRecord {
    pub const HEADER: &'static [&'static str] =
        &["product", "warehouse", "stock_units", "last_update"];
}
