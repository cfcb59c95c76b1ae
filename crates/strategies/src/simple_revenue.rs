use crate::RevenueStrategy;
use core_types::{LineItem, Product};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Revenue as charged on the receipt: the line's sale price times quantity,
/// reduced by the line's percentage discount.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl SimpleRevenue {
    pub fn new() -> Self {
        Self
    }
}

impl RevenueStrategy for SimpleRevenue {
    fn calculate_revenue(&self, item: &LineItem, _product: &Product) -> Decimal {
        let discount_coefficient = dec!(1) - item.discount / dec!(100);
        item.sale_price * Decimal::from(item.quantity) * discount_coefficient
    }
}
