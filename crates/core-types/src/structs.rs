use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product line within a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u32,
    /// The unit price actually charged on this receipt.
    #[serde(default)]
    pub sale_price: Decimal,
    /// Discount applied to this line, in percent (e.g. 10 for 10%).
    #[serde(default)]
    pub discount: Decimal,
}

/// One completed transaction by one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub seller_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub items: Vec<LineItem>,
    pub total_amount: Decimal,
    #[serde(default)]
    pub total_discount: Decimal,
}

impl PurchaseRecord {
    /// The receipt total net of its discount, `None` if it does not fit.
    pub fn net_amount(&self) -> Option<Decimal> {
        self.total_amount.checked_sub(self.total_discount)
    }
}

/// A catalog entry, keyed by SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    /// Unit cost paid to acquire the product.
    pub purchase_price: Decimal,
    /// Catalog list price.
    #[serde(default)]
    pub sale_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Seller {
    /// First and last name joined by a single space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A roster seller enriched with the profit computed for them.
///
/// This is what bonus strategies receive when a seller's rank is evaluated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerView {
    #[serde(flatten)]
    pub seller: Seller,
    pub profit: Decimal,
}
