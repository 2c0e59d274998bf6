use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The five sales territories covered by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    Austin,
    Dallas,
    Houston,
    #[serde(rename = "San Antonio")]
    SanAntonio,
    #[serde(rename = "Fort Worth")]
    FortWorth,
}

impl Market {
    /// Generation order, fixed so the dataset layout is stable
    pub const ALL: [Market; 5] = [
        Market::Austin,
        Market::Dallas,
        Market::Houston,
        Market::SanAntonio,
        Market::FortWorth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Market::Austin => "Austin",
            Market::Dallas => "Dallas",
            Market::Houston => "Houston",
            Market::SanAntonio => "San Antonio",
            Market::FortWorth => "Fort Worth",
        }
    }

    /// Baseline performance multiplier applied to every goal drawn in this market
    pub fn goal_multiplier(&self) -> f64 {
        match self {
            Market::Dallas => 1.2,
            Market::Houston => 1.1,
            Market::Austin => 0.95,
            Market::SanAntonio => 0.85,
            Market::FortWorth => 0.9,
        }
    }
}

impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One synthetic sales observation: a single (week, market, account, day) cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub week: u32,
    pub market: Market,
    pub account: String,
    pub brand: String,
    pub rep: String,
    pub goal: i64,
    pub sales_volume: i64,
    pub displays: u32,
    pub pods: u32,
    pub voids: u32,
}
