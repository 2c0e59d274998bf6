use std::collections::HashSet;

use axum::{
    Json,
    extract::{Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::state::AppState;
use crate::data::{DailyTrendPoint, SalesRecord, SummaryMetrics, TerritorySummary};
use crate::error::ApiError;

#[derive(Debug, Clone, Deserialize)]
pub struct RecordParams {
    pub week: Option<u32>,
    pub market: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeekParams {
    pub week: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AggregateParams {
    pub week: Option<u32>,
    /// Comma-separated list of market names
    pub markets: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SalesResponse {
    pub data: Vec<SalesRecord>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct TerritoryResponse {
    pub data: Vec<TerritorySummary>,
}

#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub data: Vec<DailyTrendPoint>,
}

#[derive(Debug, Serialize)]
pub struct WeeksResponse {
    pub weeks: Vec<u32>,
}

/// Split a comma-separated markets parameter into a set. A missing or blank
/// parameter means "no filter".
fn parse_markets(raw: Option<&str>) -> Option<HashSet<String>> {
    let set: HashSet<String> = raw?
        .split(',')
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .collect();

    if set.is_empty() { None } else { Some(set) }
}

/// Health check endpoint
#[tracing::instrument(name = "GET /")]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Sales Dashboard API is running",
    })
}

/// Raw sales records with optional week/market filters
#[tracing::instrument(name = "GET /api/sales", skip(state))]
pub async fn get_sales(
    State(state): State<AppState>,
    Query(params): Query<RecordParams>,
) -> Json<SalesResponse> {
    info!(week = ?params.week, market = ?params.market, "Fetching sales records");

    let data = state
        .dataset
        .filtered_records(params.week, params.market.as_deref());
    Json(SalesResponse {
        count: data.len(),
        data,
    })
}

/// Aggregated metrics for the dashboard KPI cards
#[tracing::instrument(name = "GET /api/summary", skip(state))]
pub async fn get_summary(
    State(state): State<AppState>,
    Query(params): Query<AggregateParams>,
) -> Json<SummaryMetrics> {
    info!(week = ?params.week, markets = ?params.markets, "Computing summary metrics");

    let markets = parse_markets(params.markets.as_deref());
    Json(state.dataset.summary(params.week, markets.as_ref()))
}

/// Market-level rollup for the territory bar chart
#[tracing::instrument(name = "GET /api/territory", skip(state))]
pub async fn get_territory(
    State(state): State<AppState>,
    Query(params): Query<WeekParams>,
) -> Json<TerritoryResponse> {
    info!(week = ?params.week, "Computing territory summary");

    Json(TerritoryResponse {
        data: state.dataset.territory_summary(params.week),
    })
}

/// Daily sales totals for the trend line chart
#[tracing::instrument(name = "GET /api/trend", skip(state))]
pub async fn get_trend(
    State(state): State<AppState>,
    Query(params): Query<AggregateParams>,
) -> Json<TrendResponse> {
    info!(week = ?params.week, markets = ?params.markets, "Computing daily trend");

    let markets = parse_markets(params.markets.as_deref());
    Json(TrendResponse {
        data: state.dataset.daily_trend(params.week, markets.as_ref()),
    })
}

/// Distinct weeks present in the dataset, for the week selector dropdown
#[tracing::instrument(name = "GET /api/weeks", skip(state))]
pub async fn get_weeks(State(state): State<AppState>) -> Json<WeeksResponse> {
    Json(WeeksResponse {
        weeks: state.dataset.available_weeks(),
    })
}

/// Export filtered sales records as a CSV attachment
#[tracing::instrument(name = "GET /api/download", skip(state))]
pub async fn download_sales(
    State(state): State<AppState>,
    Query(params): Query<AggregateParams>,
) -> Result<impl IntoResponse, ApiError> {
    info!(week = ?params.week, markets = ?params.markets, "Exporting sales records as CSV");

    let markets = parse_markets(params.markets.as_deref());
    let mut data = state.dataset.filtered_records(params.week, None);
    if let Some(markets) = &markets {
        data.retain(|r| markets.contains(r.market.name()));
    }

    // An empty result still downloads, as an empty file
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in &data {
        writer.serialize(record)?;
    }
    let body = writer
        .into_inner()
        .map_err(|e| ApiError::Internal(e.to_string().into()))?;

    Ok((
        [
            (CONTENT_TYPE, "text/csv"),
            (
                CONTENT_DISPOSITION,
                "attachment; filename=sales_export.csv",
            ),
        ],
        body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_markets_splits_and_trims() {
        let set = parse_markets(Some("Dallas, Austin ,Houston")).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains("Dallas"));
        assert!(set.contains("Austin"));
        assert!(set.contains("Houston"));
    }

    #[test]
    fn parse_markets_treats_blank_as_absent() {
        assert_eq!(parse_markets(None), None);
        assert_eq!(parse_markets(Some("")), None);
        assert_eq!(parse_markets(Some(" , ,")), None);
    }
}
