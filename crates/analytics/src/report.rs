use crate::error::AnalyticsError;
use core_types::Seller;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Money values in the final report carry exactly this many decimal places.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a money value to cents, with midpoints rounded away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Cumulative quantity of one SKU sold by a seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// Running statistics for one roster seller during aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStats {
    pub id: String,
    pub name: String,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub sales_count: u64,
    /// Position of the seller in the input roster.
    pub roster_index: usize,
    // Tallies in the order each SKU was first sold, with a SKU -> slot index.
    products_sold: Vec<TopProduct>,
    sku_slots: HashMap<String, usize>,
}

impl SellerStats {
    /// Creates zeroed statistics for a roster entry.
    pub fn new(roster_index: usize, seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: seller.display_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            roster_index,
            products_sold: Vec::new(),
            sku_slots: HashMap::new(),
        }
    }

    /// Counts one receipt and its net amount.
    pub fn record_sale(&mut self, net_amount: Decimal) -> Result<(), AnalyticsError> {
        self.revenue = self
            .revenue
            .checked_add(net_amount)
            .ok_or_else(|| self.overflow())?;
        self.sales_count += 1;
        Ok(())
    }

    /// Adds the profit and quantity of one resolved line item.
    pub fn record_item(
        &mut self,
        sku: &str,
        quantity: u32,
        profit: Decimal,
    ) -> Result<(), AnalyticsError> {
        self.profit = self
            .profit
            .checked_add(profit)
            .ok_or_else(|| self.overflow())?;

        let slot = match self.sku_slots.get(sku) {
            Some(&slot) => slot,
            None => {
                self.products_sold.push(TopProduct {
                    sku: sku.to_string(),
                    quantity: 0,
                });
                let slot = self.products_sold.len() - 1;
                self.sku_slots.insert(sku.to_string(), slot);
                slot
            }
        };
        self.products_sold[slot].quantity += u64::from(quantity);
        Ok(())
    }

    /// The error raised when a running total no longer fits in a `Decimal`.
    pub fn overflow(&self) -> AnalyticsError {
        AnalyticsError::AmountOverflow(self.id.clone())
    }

    /// Total quantity sold for `sku`, zero if it was never sold.
    pub fn quantity_sold(&self, sku: &str) -> u64 {
        self.sku_slots
            .get(sku)
            .map_or(0, |&slot| self.products_sold[slot].quantity)
    }

    /// The `limit` best-selling SKUs by quantity, highest first.
    ///
    /// Equal quantities keep the order in which the SKUs were first sold.
    pub fn top_products(&self, limit: usize) -> Vec<TopProduct> {
        let mut products = self.products_sold.clone();
        products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        products.truncate(limit);
        products
    }
}

/// The final, rounded report line for one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub seller_id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    /// Bonus in currency units, not a percentage.
    #[serde(with = "rust_decimal::serde::float")]
    pub bonus: Decimal,
}
