use crate::error::AnalyticsError;
use crate::options::{AnalysisOptions, BONUS_STRATEGY_KEY, REVENUE_STRATEGY_KEY};
use crate::report::{RankedResult, SellerStats, TopProduct, round_money};
use core_types::{Product, PurchaseRecord, SalesData, Seller, SellerView};
use rust_decimal::Decimal;
use std::collections::HashMap;
use strategies::{BonusStrategy, RevenueStrategy};

/// Maximum number of entries in a seller's `top_products`.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Input that passed validation, with both strategies ready to call.
struct ValidatedInput<'a> {
    records: &'a [PurchaseRecord],
    products: &'a [Product],
    sellers: &'a [Seller],
    revenue: &'a dyn RevenueStrategy,
    bonus: &'a dyn BonusStrategy,
}

/// A seller after ranking, before rounding.
struct RankedSeller {
    stats: SellerStats,
    bonus: Decimal,
    top_products: Vec<TopProduct>,
}

/// A stateless calculator for the per-seller sales report.
#[derive(Debug, Default)]
pub struct SalesAnalyzer {}

impl SalesAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for computing the sales report.
    ///
    /// # Arguments
    ///
    /// * `data` - The purchase records, product catalog and seller roster.
    /// * `options` - The revenue and bonus strategies to use.
    ///
    /// # Returns
    ///
    /// One `RankedResult` per roster seller, most profitable first, or the
    /// first validation failure found. A running total that outgrows `Decimal`
    /// is reported as `AmountOverflow` for the seller it belongs to.
    pub fn analyze(
        &self,
        data: &SalesData,
        options: Option<&AnalysisOptions>,
    ) -> Result<Vec<RankedResult>, AnalyticsError> {
        let input = self.validate(data, options)?;
        let stats = self.aggregate(&input)?;
        let ranked = self.rank(stats, &input)?;
        let results = self.format(ranked);

        tracing::info!("Sales report ready for {} sellers", results.len());
        Ok(results)
    }

    /// Rejects missing collections and unusable strategies.
    fn validate<'a>(
        &self,
        data: &'a SalesData,
        options: Option<&'a AnalysisOptions>,
    ) -> Result<ValidatedInput<'a>, AnalyticsError> {
        let records = non_empty(&data.purchase_records).ok_or(AnalyticsError::MissingPurchaseData)?;
        let products = non_empty(&data.products).ok_or(AnalyticsError::MissingProductData)?;
        let sellers = non_empty(&data.sellers).ok_or(AnalyticsError::MissingSellerData)?;

        let options = options.ok_or(AnalyticsError::InvalidConfiguration)?;

        let revenue = options
            .calculate_revenue
            .as_ref()
            .ok_or_else(|| AnalyticsError::MissingStrategy(REVENUE_STRATEGY_KEY.to_string()))?;
        let bonus = options
            .calculate_bonus
            .as_ref()
            .ok_or_else(|| AnalyticsError::MissingStrategy(BONUS_STRATEGY_KEY.to_string()))?;

        let revenue = revenue
            .as_callable()
            .ok_or_else(|| AnalyticsError::StrategyNotCallable(REVENUE_STRATEGY_KEY.to_string()))?;
        let bonus = bonus
            .as_callable()
            .ok_or_else(|| AnalyticsError::StrategyNotCallable(BONUS_STRATEGY_KEY.to_string()))?;

        tracing::debug!(
            "Validated input: {} purchase records, {} products, {} sellers",
            records.len(),
            products.len(),
            sellers.len()
        );

        Ok(ValidatedInput {
            records,
            products,
            sellers,
            revenue,
            bonus,
        })
    }

    /// Accumulates revenue, profit, sales count and quantities per roster seller.
    fn aggregate(&self, input: &ValidatedInput<'_>) -> Result<Vec<SellerStats>, AnalyticsError> {
        let mut stats: Vec<SellerStats> = input
            .sellers
            .iter()
            .enumerate()
            .map(|(index, seller)| SellerStats::new(index, seller))
            .collect();

        // A repeated id or SKU resolves to its last occurrence.
        let seller_index: HashMap<&str, usize> = input
            .sellers
            .iter()
            .enumerate()
            .map(|(index, seller)| (seller.id.as_str(), index))
            .collect();
        let product_index: HashMap<&str, &Product> = input
            .products
            .iter()
            .map(|product| (product.sku.as_str(), product))
            .collect();

        let mut skipped_records = 0usize;
        let mut skipped_items = 0usize;

        for record in input.records {
            let Some(&slot) = seller_index.get(record.seller_id.as_str()) else {
                tracing::trace!("Skipping record for unknown seller '{}'", record.seller_id);
                skipped_records += 1;
                continue;
            };
            let seller = &mut stats[slot];

            let net_amount = record.net_amount().ok_or_else(|| seller.overflow())?;
            seller.record_sale(net_amount)?;

            for item in &record.items {
                let Some(product) = product_index.get(item.sku.as_str()) else {
                    tracing::trace!("Skipping line item for unknown SKU '{}'", item.sku);
                    skipped_items += 1;
                    continue;
                };

                let item_revenue = input.revenue.calculate_revenue(item, product);
                let item_profit = product
                    .purchase_price
                    .checked_mul(Decimal::from(item.quantity))
                    .and_then(|cost| item_revenue.checked_sub(cost))
                    .ok_or_else(|| seller.overflow())?;
                seller.record_item(&item.sku, item.quantity, item_profit)?;
            }
        }

        tracing::debug!(
            "Aggregated {} records ({} skipped for unknown sellers, {} line items skipped for unknown SKUs)",
            input.records.len(),
            skipped_records,
            skipped_items
        );
        Ok(stats)
    }

    /// Orders sellers by profit, assigns bonuses and derives top products.
    fn rank(
        &self,
        mut stats: Vec<SellerStats>,
        input: &ValidatedInput<'_>,
    ) -> Result<Vec<RankedSeller>, AnalyticsError> {
        // `sort_by` is stable, so sellers with equal profit keep roster order.
        stats.sort_by(|a, b| b.profit.cmp(&a.profit));

        let total = stats.len();
        stats
            .into_iter()
            .enumerate()
            .map(|(index, stats)| {
                let view = SellerView {
                    seller: input.sellers[stats.roster_index].clone(),
                    profit: stats.profit,
                };
                let rate = input.bonus.calculate_bonus(index, total, &view);
                if rate < Decimal::ZERO || rate > Decimal::ONE {
                    tracing::warn!(
                        "Bonus rate {} for seller '{}' is outside [0, 1]",
                        rate,
                        stats.id
                    );
                }

                let bonus = stats
                    .profit
                    .checked_mul(rate)
                    .ok_or_else(|| stats.overflow())?;
                let top_products = stats.top_products(TOP_PRODUCTS_LIMIT);
                Ok(RankedSeller {
                    bonus,
                    top_products,
                    stats,
                })
            })
            .collect()
    }

    /// Shapes the final records, rounding money to cents.
    fn format(&self, ranked: Vec<RankedSeller>) -> Vec<RankedResult> {
        ranked
            .into_iter()
            .map(|ranked| RankedResult {
                seller_id: ranked.stats.id,
                name: ranked.stats.name,
                revenue: round_money(ranked.stats.revenue),
                profit: round_money(ranked.stats.profit),
                sales_count: ranked.stats.sales_count,
                top_products: ranked.top_products,
                bonus: round_money(ranked.bonus),
            })
            .collect()
    }
}

/// Returns the collection if it is present and has at least one entry.
fn non_empty<T>(collection: &Option<Vec<T>>) -> Option<&[T]> {
    collection.as_deref().filter(|items| !items.is_empty())
}
