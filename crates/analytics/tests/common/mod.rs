#![allow(dead_code)]

use core_types::SalesData;
use serde_json::{Value, json};

pub fn seller(id: &str, first_name: &str, last_name: &str) -> Value {
    json!({ "id": id, "first_name": first_name, "last_name": last_name })
}

/// A catalog entry that costs nothing, so profit equals revenue.
pub fn free_product(sku: &str) -> Value {
    json!({ "sku": sku, "purchase_price": 0, "sale_price": 0 })
}

pub fn product(sku: &str, purchase_price: f64, sale_price: f64) -> Value {
    json!({ "sku": sku, "purchase_price": purchase_price, "sale_price": sale_price })
}

pub fn item(sku: &str, quantity: u32, sale_price: f64, discount: f64) -> Value {
    json!({ "sku": sku, "quantity": quantity, "sale_price": sale_price, "discount": discount })
}

pub fn record(seller_id: &str, total_amount: f64, total_discount: f64, items: Vec<Value>) -> Value {
    json!({
        "seller_id": seller_id,
        "items": items,
        "total_amount": total_amount,
        "total_discount": total_discount
    })
}

pub fn dataset(records: Vec<Value>, products: Vec<Value>, sellers: Vec<Value>) -> SalesData {
    SalesData::from_value(json!({
        "purchase_records": records,
        "products": products,
        "sellers": sellers
    }))
    .expect("fixture dataset should load")
}
