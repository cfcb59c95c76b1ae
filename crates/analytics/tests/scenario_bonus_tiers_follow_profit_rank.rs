mod common;

use analytics::{AnalysisOptions, SalesAnalyzer};
use common::{dataset, free_product, item, record, seller};
use core_types::SalesData;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Four sellers whose profits come out as A:300, B:200, C:200, D:50.
/// Products cost nothing, so profit equals receipt revenue.
fn four_sellers(roster_order: &[&str]) -> SalesData {
    dataset(
        vec![
            record("D", 50.0, 0.0, vec![item("SKU_1", 1, 50.0, 0.0)]),
            record("C", 200.0, 0.0, vec![item("SKU_1", 2, 100.0, 0.0)]),
            record("A", 300.0, 0.0, vec![item("SKU_2", 3, 100.0, 0.0)]),
            record("B", 200.0, 0.0, vec![item("SKU_2", 1, 200.0, 0.0)]),
        ],
        vec![free_product("SKU_1"), free_product("SKU_2")],
        roster_order
            .iter()
            .map(|id| seller(id, "Seller", id))
            .collect(),
    )
}

#[test]
fn reference_tiers_with_tie_at_second_and_third() {
    let results = SalesAnalyzer::new()
        .analyze(&four_sellers(&["A", "B", "C", "D"]), Some(&AnalysisOptions::reference()))
        .unwrap();

    let order: Vec<&str> = results.iter().map(|r| r.seller_id.as_str()).collect();
    assert_eq!(order, vec!["A", "B", "C", "D"]);

    let profits: Vec<Decimal> = results.iter().map(|r| r.profit).collect();
    assert_eq!(profits, vec![dec!(300), dec!(200), dec!(200), dec!(50)]);

    let bonuses: Vec<Decimal> = results.iter().map(|r| r.bonus).collect();
    assert_eq!(bonuses, vec![dec!(45), dec!(20), dec!(20), dec!(0)]);
}

#[test]
fn equal_profits_keep_roster_order() {
    let results = SalesAnalyzer::new()
        .analyze(&four_sellers(&["D", "C", "B", "A"]), Some(&AnalysisOptions::reference()))
        .unwrap();

    let order: Vec<&str> = results.iter().map(|r| r.seller_id.as_str()).collect();
    assert_eq!(order, vec!["A", "C", "B", "D"]);
}

#[test]
fn output_is_sorted_by_profit_descending() {
    let results = SalesAnalyzer::new()
        .analyze(&four_sellers(&["B", "D", "A", "C"]), Some(&AnalysisOptions::reference()))
        .unwrap();

    for pair in results.windows(2) {
        assert!(pair[0].profit >= pair[1].profit);
    }
}

#[test]
fn bonus_strategy_sees_rank_total_and_seller() {
    let options = AnalysisOptions::reference().with_bonus(
        |index: usize, total: usize, seller: &core_types::SellerView| {
            assert_eq!(total, 4);
            assert_eq!(seller.seller.last_name, seller.seller.id);
            if index == total - 1 && seller.profit == dec!(50) {
                dec!(1)
            } else {
                Decimal::ZERO
            }
        },
    );

    let results = SalesAnalyzer::new()
        .analyze(&four_sellers(&["A", "B", "C", "D"]), Some(&options))
        .unwrap();

    assert_eq!(results[3].bonus, dec!(50));
    assert!(results[..3].iter().all(|r| r.bonus.is_zero()));
}
