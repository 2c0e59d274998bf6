use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::info;

use super::constants::{
    ACCOUNTS, ATTAINMENT_CEIL, ATTAINMENT_FLOOR, ATTAINMENT_MEAN, ATTAINMENT_STD_DEV, BRANDS,
    DAYS_PER_WEEK, DISPLAY_LIFT_MAX, DISPLAY_LIFT_MIN, EPOCH, GOAL_MAX, GOAL_MIN, MAX_DISPLAYS,
    MAX_PODS, MAX_VOIDS, REPS, WEEK_COUNT,
};
use super::record::{Market, SalesRecord};

/// The full synthetic dataset, built once at startup and read-only afterwards.
///
/// One record exists per (week, market, account, day-of-week) cell, so the
/// default parameters yield 8 x 5 x 5 x 7 = 1400 records in generation order.
pub struct SalesDataset {
    records: Vec<SalesRecord>,
}

impl SalesDataset {
    /// Generate the dataset from a seeded RNG. The same seed always yields
    /// the same records, so restarts serve identical demo data.
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let attainment_dist = Normal::new(ATTAINMENT_MEAN, ATTAINMENT_STD_DEV).unwrap();
        let (year, month, day) = EPOCH;
        let epoch = NaiveDate::from_ymd_opt(year, month, day).unwrap();

        let mut records = Vec::with_capacity(
            (WEEK_COUNT * Market::ALL.len() as u32 * ACCOUNTS.len() as u32 * DAYS_PER_WEEK)
                as usize,
        );

        for week in 1..=WEEK_COUNT {
            let week_start = epoch + Duration::weeks((week - 1) as i64);

            for market in Market::ALL {
                for account in ACCOUNTS {
                    for day_offset in 0..DAYS_PER_WEEK {
                        let date = week_start + Duration::days(day_offset as i64);

                        let goal = (rng.random_range(GOAL_MIN..=GOAL_MAX) as f64
                            * market.goal_multiplier()) as i64;

                        // Sales typically land near goal with some variance
                        let attainment = attainment_dist
                            .sample(&mut rng)
                            .clamp(ATTAINMENT_FLOOR, ATTAINMENT_CEIL);
                        let mut sales_volume = (goal as f64 * attainment) as i64;

                        // Each in-store display lifts sales a further 5-10%
                        let displays = rng.random_range(0..=MAX_DISPLAYS);
                        if displays > 0 {
                            let lift = 1.0
                                + displays as f64
                                    * rng.random_range(DISPLAY_LIFT_MIN..DISPLAY_LIFT_MAX);
                            sales_volume = (sales_volume as f64 * lift) as i64;
                        }

                        records.push(SalesRecord {
                            date,
                            week,
                            market,
                            account: account.to_string(),
                            brand: BRANDS.choose(&mut rng).unwrap().to_string(),
                            rep: REPS.choose(&mut rng).unwrap().to_string(),
                            goal,
                            sales_volume,
                            displays,
                            pods: rng.random_range(0..=MAX_PODS),
                            voids: rng.random_range(0..=MAX_VOIDS),
                        });
                    }
                }
            }
        }

        info!(record_count = records.len(), seed, "Sales dataset generated");
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }
}
