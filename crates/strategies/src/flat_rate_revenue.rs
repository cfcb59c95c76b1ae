use crate::RevenueStrategy;
use core_types::{LineItem, Product};
use rust_decimal::Decimal;

/// Revenue at catalog list price, ignoring any discount on the receipt.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatRateRevenue;

impl FlatRateRevenue {
    pub fn new() -> Self {
        Self
    }
}

impl RevenueStrategy for FlatRateRevenue {
    fn calculate_revenue(&self, item: &LineItem, product: &Product) -> Decimal {
        product.sale_price * Decimal::from(item.quantity)
    }
}
