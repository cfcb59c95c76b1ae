mod common;

use analytics::{AnalysisOptions, AnalyticsError, SalesAnalyzer, StrategyBinding};
use common::{dataset, free_product, item, record, seller};
use core_types::SalesData;
use serde_json::json;
use strategies::{ProfitRankBonus, SimpleRevenue};

fn valid_data() -> SalesData {
    dataset(
        vec![record("s1", 10.0, 0.0, vec![item("SKU_1", 1, 10.0, 0.0)])],
        vec![free_product("SKU_1")],
        vec![seller("s1", "Anna", "Lee")],
    )
}

fn analyze(data: &SalesData, options: Option<&AnalysisOptions>) -> AnalyticsError {
    SalesAnalyzer::new()
        .analyze(data, options)
        .expect_err("analysis should fail")
}

#[test]
fn empty_purchase_records_fail() {
    let mut data = valid_data();
    data.purchase_records = Some(vec![]);
    assert_eq!(
        analyze(&data, Some(&AnalysisOptions::reference())),
        AnalyticsError::MissingPurchaseData
    );
}

#[test]
fn empty_products_fail() {
    let mut data = valid_data();
    data.products = Some(vec![]);
    assert_eq!(
        analyze(&data, Some(&AnalysisOptions::reference())),
        AnalyticsError::MissingProductData
    );
}

#[test]
fn empty_sellers_fail() {
    let mut data = valid_data();
    data.sellers = Some(vec![]);
    assert_eq!(
        analyze(&data, Some(&AnalysisOptions::reference())),
        AnalyticsError::MissingSellerData
    );
}

fn load_with(key: &str, replacement: Option<serde_json::Value>) -> SalesData {
    let mut document = json!({
        "purchase_records": [record("s1", 10.0, 0.0, vec![item("SKU_1", 1, 10.0, 0.0)])],
        "products": [free_product("SKU_1")],
        "sellers": [seller("s1", "Anna", "Lee")]
    });
    match replacement {
        Some(value) => document[key] = value,
        None => {
            document.as_object_mut().unwrap().remove(key);
        }
    }
    SalesData::from_value(document).unwrap()
}

#[test]
fn collections_that_are_not_lists_are_missing() {
    let cases = [
        ("purchase_records", AnalyticsError::MissingPurchaseData),
        ("products", AnalyticsError::MissingProductData),
        ("sellers", AnalyticsError::MissingSellerData),
    ];

    for (key, expected) in cases {
        let data = load_with(key, Some(json!("receipts.csv")));
        assert_eq!(analyze(&data, Some(&AnalysisOptions::reference())), expected, "{key}");

        let data = load_with(key, Some(json!({ "s1": {} })));
        assert_eq!(analyze(&data, Some(&AnalysisOptions::reference())), expected, "{key}");
    }
}

#[test]
fn absent_collections_are_missing() {
    let cases = [
        ("purchase_records", AnalyticsError::MissingPurchaseData),
        ("products", AnalyticsError::MissingProductData),
        ("sellers", AnalyticsError::MissingSellerData),
    ];

    for (key, expected) in cases {
        let data = load_with(key, None);
        assert_eq!(analyze(&data, Some(&AnalysisOptions::reference())), expected, "{key}");
    }
}

#[test]
fn input_is_checked_before_options() {
    let data = SalesData::default();
    assert_eq!(analyze(&data, None), AnalyticsError::MissingPurchaseData);
}

#[test]
fn absent_options_are_invalid_configuration() {
    assert_eq!(
        analyze(&valid_data(), None),
        AnalyticsError::InvalidConfiguration
    );
}

#[test]
fn missing_bonus_strategy_fails() {
    let options = AnalysisOptions::new().with_revenue(SimpleRevenue::new());
    assert_eq!(
        analyze(&valid_data(), Some(&options)),
        AnalyticsError::MissingStrategy("calculate_bonus".to_string())
    );
}

#[test]
fn missing_revenue_strategy_fails() {
    let options = AnalysisOptions::new().with_bonus(ProfitRankBonus::default());
    assert_eq!(
        analyze(&valid_data(), Some(&options)),
        AnalyticsError::MissingStrategy("calculate_revenue".to_string())
    );
}

#[test]
fn presence_is_checked_before_callability() {
    let options = AnalysisOptions {
        calculate_revenue: Some(StrategyBinding::Unresolved("median".to_string())),
        calculate_bonus: None,
    };
    assert_eq!(
        analyze(&valid_data(), Some(&options)),
        AnalyticsError::MissingStrategy("calculate_bonus".to_string())
    );
}

#[test]
fn unresolved_strategy_is_not_callable() {
    let mut options = AnalysisOptions::reference();
    options.calculate_bonus = Some(StrategyBinding::Unresolved("lottery".to_string()));
    assert_eq!(
        analyze(&valid_data(), Some(&options)),
        AnalyticsError::StrategyNotCallable("calculate_bonus".to_string())
    );
}
