use crate::error::CoreError;
use crate::structs::{Product, PurchaseRecord, Seller};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io::Read;

/// Largest absolute value accepted for any price or receipt amount.
///
/// With quantities capped at `u32::MAX`, a line's revenue or cost stays many
/// orders of magnitude below `Decimal::MAX`.
pub const MAX_MONEY: Decimal = dec!(1000000000000);

/// Line discounts are percentages in `0..=MAX_DISCOUNT`.
pub const MAX_DISCOUNT: Decimal = dec!(100);

/// The three input collections a sales report is computed from.
///
/// Each collection is optional: a dataset may omit one, or carry a value that
/// is not a list. Such gaps are preserved here as `None` and rejected later by
/// the analyzer's validation step rather than at load time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesData {
    pub purchase_records: Option<Vec<PurchaseRecord>>,
    pub products: Option<Vec<Product>>,
    pub sellers: Option<Vec<Seller>>,
}

impl SalesData {
    /// Builds a dataset with all three collections present.
    ///
    /// Values are taken as given. Untrusted input should go through
    /// `from_value` so that the money limits are enforced.
    pub fn new(
        purchase_records: Vec<PurchaseRecord>,
        products: Vec<Product>,
        sellers: Vec<Seller>,
    ) -> Self {
        Self {
            purchase_records: Some(purchase_records),
            products: Some(products),
            sellers: Some(sellers),
        }
    }

    /// Parses a dataset from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parses a dataset from any JSON source (a file, stdin, ...).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    /// Extracts the three collections from an already-parsed JSON value.
    ///
    /// A collection that is absent or is not an array becomes `None`. An array
    /// whose elements do not have the expected record shape, or carry money
    /// values outside the limits above, is an error.
    pub fn from_value(mut value: Value) -> Result<Self, CoreError> {
        Ok(Self {
            purchase_records: take_collection(&mut value, "purchase_records")?,
            products: take_collection(&mut value, "products")?,
            sellers: take_collection(&mut value, "sellers")?,
        })
    }
}

/// Range checks applied to every loaded entry.
trait CheckLimits {
    fn check_limits(&self) -> Result<(), String>;
}

impl CheckLimits for PurchaseRecord {
    fn check_limits(&self) -> Result<(), String> {
        check_money("total_amount", self.total_amount)?;
        check_money("total_discount", self.total_discount)?;
        for item in &self.items {
            check_money("sale_price", item.sale_price)?;
            if item.discount < Decimal::ZERO || item.discount > MAX_DISCOUNT {
                return Err(format!(
                    "discount {} on '{}' is outside 0..={}",
                    item.discount, item.sku, MAX_DISCOUNT
                ));
            }
        }
        Ok(())
    }
}

impl CheckLimits for Product {
    fn check_limits(&self) -> Result<(), String> {
        check_money("purchase_price", self.purchase_price)?;
        check_money("sale_price", self.sale_price)
    }
}

impl CheckLimits for Seller {
    fn check_limits(&self) -> Result<(), String> {
        Ok(())
    }
}

fn check_money(field: &str, value: Decimal) -> Result<(), String> {
    if value.abs() > MAX_MONEY {
        return Err(format!("{field} {value} exceeds the limit of {MAX_MONEY}"));
    }
    Ok(())
}

fn take_collection<T: DeserializeOwned + CheckLimits>(
    root: &mut Value,
    key: &str,
) -> Result<Option<Vec<T>>, CoreError> {
    let Some(slot) = root.get_mut(key) else {
        tracing::debug!("Collection '{}' is absent from the dataset", key);
        return Ok(None);
    };

    if !slot.is_array() {
        tracing::debug!("Collection '{}' is not a list; treating it as absent", key);
        return Ok(None);
    }

    let entries: Vec<T> = serde_json::from_value(slot.take())
        .map_err(|e| CoreError::MalformedRecord(key.to_string(), e.to_string()))?;

    for (index, entry) in entries.iter().enumerate() {
        entry
            .check_limits()
            .map_err(|e| CoreError::MalformedRecord(key.to_string(), format!("entry {index}: {e}")))?;
    }
    Ok(Some(entries))
}
