use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::generator::SalesDataset;
use super::record::{Market, SalesRecord};

/// Dashboard KPI card totals over a filtered slice of the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_sales: i64,
    pub total_goal: i64,
    /// Positive means under goal, negative means goal exceeded
    pub gap_to_goal: i64,
    pub attainment: Decimal,
}

/// Per-market rollup for the territory bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerritorySummary {
    pub market: Market,
    pub sales: i64,
    pub goal: i64,
    pub attainment: Decimal,
}

/// Per-day sales total for the trend line chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTrendPoint {
    pub date: NaiveDate,
    pub sales: i64,
}

/// Goal attainment as a percentage rounded to one decimal place, 0 when
/// there is no goal to attain
fn attainment_pct(sales: i64, goal: i64) -> Decimal {
    if goal == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(sales) / Decimal::from(goal) * Decimal::ONE_HUNDRED).round_dp(1)
}

impl SalesDataset {
    /// Records matching both filters (AND semantics), in generation order.
    /// An unknown market name matches nothing; absent filters match all.
    pub fn filtered_records(&self, week: Option<u32>, market: Option<&str>) -> Vec<SalesRecord> {
        self.records()
            .iter()
            .filter(|r| week.map_or(true, |w| r.week == w))
            .filter(|r| market.map_or(true, |m| r.market.name() == m))
            .cloned()
            .collect()
    }

    /// Totals, gap and attainment over the filtered slice. An empty slice
    /// yields all-zero metrics rather than an error.
    pub fn summary(
        &self,
        week: Option<u32>,
        markets: Option<&HashSet<String>>,
    ) -> SummaryMetrics {
        // An empty market set is a missing filter, not an impossible one
        let markets = markets.filter(|m| !m.is_empty());

        let mut total_sales = 0;
        let mut total_goal = 0;
        for r in self.records() {
            if week.map_or(true, |w| r.week == w)
                && markets.map_or(true, |m| m.contains(r.market.name()))
            {
                total_sales += r.sales_volume;
                total_goal += r.goal;
            }
        }

        SummaryMetrics {
            total_sales,
            total_goal,
            gap_to_goal: total_goal - total_sales,
            attainment: attainment_pct(total_sales, total_goal),
        }
    }

    /// Per-market totals sorted by attainment descending. Markets with equal
    /// attainment keep their first-seen generation order (stable sort).
    pub fn territory_summary(&self, week: Option<u32>) -> Vec<TerritorySummary> {
        let mut seen_order: Vec<Market> = Vec::new();
        let mut totals: HashMap<Market, (i64, i64)> = HashMap::new();

        for r in self.records() {
            if week.map_or(true, |w| r.week == w) {
                if !totals.contains_key(&r.market) {
                    seen_order.push(r.market);
                }
                let entry = totals.entry(r.market).or_default();
                entry.0 += r.sales_volume;
                entry.1 += r.goal;
            }
        }

        let mut result: Vec<TerritorySummary> = seen_order
            .into_iter()
            .map(|market| {
                let (sales, goal) = totals[&market];
                TerritorySummary {
                    market,
                    sales,
                    goal,
                    attainment: attainment_pct(sales, goal),
                }
            })
            .collect();
        result.sort_by(|a, b| b.attainment.cmp(&a.attainment));

        result
    }

    /// Per-day sales totals over the filtered slice, dates ascending
    pub fn daily_trend(
        &self,
        week: Option<u32>,
        markets: Option<&HashSet<String>>,
    ) -> Vec<DailyTrendPoint> {
        let markets = markets.filter(|m| !m.is_empty());

        let mut daily_totals: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        for r in self.records() {
            if week.map_or(true, |w| r.week == w)
                && markets.map_or(true, |m| m.contains(r.market.name()))
            {
                *daily_totals.entry(r.date).or_default() += r.sales_volume;
            }
        }

        daily_totals
            .into_iter()
            .map(|(date, sales)| DailyTrendPoint { date, sales })
            .collect()
    }

    /// Distinct week numbers present in the dataset, ascending. Computed
    /// from the records so it tracks any change to the generation window.
    pub fn available_weeks(&self) -> Vec<u32> {
        let weeks: BTreeSet<u32> = self.records().iter().map(|r| r.week).collect();
        weeks.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn dataset() -> SalesDataset {
        SalesDataset::generate(42)
    }

    fn market_set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn unfiltered_summary_matches_record_fold() {
        let ds = dataset();
        let all = ds.filtered_records(None, None);
        let summary = ds.summary(None, None);

        let expected_sales: i64 = all.iter().map(|r| r.sales_volume).sum();
        let expected_goal: i64 = all.iter().map(|r| r.goal).sum();
        assert_eq!(summary.total_sales, expected_sales);
        assert_eq!(summary.total_goal, expected_goal);
        assert_eq!(summary.gap_to_goal, expected_goal - expected_sales);

        let expected_attainment = (Decimal::from(expected_sales) / Decimal::from(expected_goal)
            * Decimal::ONE_HUNDRED)
            .round_dp(1);
        assert_eq!(summary.attainment, expected_attainment);
    }

    #[test]
    fn filtered_records_applies_and_semantics() {
        let ds = dataset();
        let subset = ds.filtered_records(Some(1), Some("Dallas"));
        assert_eq!(subset.len(), 35);
        assert!(subset.iter().all(|r| r.week == 1 && r.market == Market::Dallas));

        // Filters compose with the full dataset, not each other's output
        assert_eq!(ds.filtered_records(Some(3), None).len(), 175);
        assert_eq!(ds.filtered_records(None, Some("Austin")).len(), 280);
    }

    #[test]
    fn unknown_filters_match_nothing() {
        let ds = dataset();
        assert!(ds.filtered_records(Some(99), None).is_empty());
        assert!(ds.filtered_records(None, Some("El Paso")).is_empty());

        let summary = ds.summary(None, Some(&market_set(&["El Paso"])));
        assert_eq!(
            summary,
            SummaryMetrics {
                total_sales: 0,
                total_goal: 0,
                gap_to_goal: 0,
                attainment: Decimal::ZERO,
            }
        );
    }

    #[test]
    fn empty_market_set_means_no_filter() {
        let ds = dataset();
        let empty = HashSet::new();
        assert_eq!(ds.summary(None, Some(&empty)), ds.summary(None, None));
    }

    #[test]
    fn week_one_dallas_end_to_end() {
        let ds = dataset();
        let subset = ds.filtered_records(Some(1), Some("Dallas"));
        assert_eq!(subset.len(), 35);

        let summary = ds.summary(Some(1), Some(&market_set(&["Dallas"])));
        let goal: i64 = subset.iter().map(|r| r.goal).sum();
        let sales: i64 = subset.iter().map(|r| r.sales_volume).sum();
        assert_eq!(summary.total_goal, goal);
        assert_eq!(summary.total_sales, sales);
        assert_eq!(
            summary.attainment,
            (Decimal::from(sales) / Decimal::from(goal) * dec!(100)).round_dp(1)
        );
    }

    #[test]
    fn territory_summary_covers_all_markets_sorted_by_attainment() {
        let ds = dataset();
        let territories = ds.territory_summary(None);
        assert_eq!(territories.len(), 5);

        for pair in territories.windows(2) {
            assert!(pair[0].attainment >= pair[1].attainment);
        }

        // Each market's rollup matches a single-market record filter
        for territory in &territories {
            let subset = ds.filtered_records(None, Some(territory.market.name()));
            assert_eq!(territory.sales, subset.iter().map(|r| r.sales_volume).sum::<i64>());
            assert_eq!(territory.goal, subset.iter().map(|r| r.goal).sum::<i64>());
        }
    }

    #[test]
    fn territory_summary_respects_week_filter() {
        let ds = dataset();
        let territories = ds.territory_summary(Some(2));
        assert_eq!(territories.len(), 5);

        let total_goal: i64 = territories.iter().map(|t| t.goal).sum();
        assert_eq!(total_goal, ds.summary(Some(2), None).total_goal);
    }

    #[test]
    fn daily_trend_dates_ascend_and_totals_match_summary() {
        let ds = dataset();
        let markets = market_set(&["Dallas", "Austin"]);

        let trend = ds.daily_trend(Some(2), Some(&markets));
        assert_eq!(trend.len(), 7);
        for pair in trend.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }

        let trend_total: i64 = trend.iter().map(|p| p.sales).sum();
        assert_eq!(trend_total, ds.summary(Some(2), Some(&markets)).total_sales);
    }

    #[test]
    fn unfiltered_trend_spans_every_generated_day() {
        let ds = dataset();
        let trend = ds.daily_trend(None, None);
        assert_eq!(trend.len(), 56);

        let trend_total: i64 = trend.iter().map(|p| p.sales).sum();
        assert_eq!(trend_total, ds.summary(None, None).total_sales);
    }

    #[test]
    fn available_weeks_are_computed_ascending() {
        let ds = dataset();
        assert_eq!(ds.available_weeks(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn attainment_rounds_to_one_decimal() {
        assert_eq!(attainment_pct(1, 3), dec!(33.3));
        assert_eq!(attainment_pct(2, 3), dec!(66.7));
        assert_eq!(attainment_pct(1, 1), dec!(100));
        assert_eq!(attainment_pct(0, 0), Decimal::ZERO);
    }
}
