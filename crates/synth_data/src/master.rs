//! Reference (master) data shared read-only by every generator.

use serde::{Deserialize, Serialize};

/// Customers sampled for sales orders
pub const CUSTOMERS: &[&str] = &[
    "Cliente Automotriz A",
    "Cliente Construccion B",
    "Cliente Industrial C",
    "Cliente Exportacion D",
];

/// Glass product lines
pub const PRODUCTS: &[&str] = &["Vidrio Templado", "Vidrio Laminado", "Vidrio Flotado"];

/// Plants holding finished-goods stock
pub const WAREHOUSES: &[&str] = &["Planta Monterrey", "Planta Toluca", "Planta Queretaro"];

/// Customer, product and warehouse lists.
///
/// Defaults to the built-in lists above; any list can be replaced from the
/// YAML config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterData {
    pub customers: Vec<String>,
    pub products: Vec<String>,
    pub warehouses: Vec<String>,
}

impl Default for MasterData {
    fn default() -> Self {
        Self {
            customers: to_owned(CUSTOMERS),
            products: to_owned(PRODUCTS),
            warehouses: to_owned(WAREHOUSES),
        }
    }
}

impl MasterData {
    pub fn new(customers: Vec<String>, products: Vec<String>, warehouses: Vec<String>) -> Self {
        Self {
            customers,
            products,
            warehouses,
        }
    }

    /// Number of rows the production dataset will hold for `weeks` weeks
    pub fn production_rows(&self, weeks: u32) -> u64 {
        weeks as u64 * self.products.len() as u64
    }

    /// Number of rows the inventory dataset will hold
    pub fn inventory_rows(&self) -> u64 {
        self.products.len() as u64 * self.warehouses.len() as u64
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists() {
        let master = MasterData::default();
        assert_eq!(master.customers.len(), 4);
        assert_eq!(master.products.len(), 3);
        assert_eq!(master.warehouses.len(), 3);
        assert_eq!(master.products[0], "Vidrio Templado");
    }

    #[test]
    fn test_row_counts() {
        let master = MasterData::default();
        assert_eq!(master.production_rows(52), 156);
        assert_eq!(master.inventory_rows(), 9);
    }
}
