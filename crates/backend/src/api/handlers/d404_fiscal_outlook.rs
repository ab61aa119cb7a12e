use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d404_fiscal_outlook::{
    FiscalSummaryResponse, FiscalViewRequest, FiscalViewResponse, GenerateInsightRequest,
    GenerateInsightResponse, InsightStatusResponse,
};

use crate::dashboards::d404_fiscal_outlook::service;

/// GET /api/d404/summary
pub async fn get_summary() -> Result<Json<FiscalSummaryResponse>, StatusCode> {
    match service::get_summary() {
        Ok(response) => {
            tracing::info!(
                "D404 Dashboard: Returning summary for {} records",
                response.stats.count
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D404 Dashboard: Failed to get summary: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/d404/records?search=lândia&sort=name
pub async fn get_records(
    Query(request): Query<FiscalViewRequest>,
) -> Result<Json<FiscalViewResponse>, StatusCode> {
    match service::get_view(request) {
        Ok(response) => {
            tracing::info!(
                "D404 Dashboard: Returning {} of {} records (search: {:?}, sort: {})",
                response.records.len(),
                response.total,
                response.search,
                response.sort.as_str()
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D404 Dashboard: Failed to build view: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/d404/insight/status
pub async fn get_insight_status() -> Result<Json<InsightStatusResponse>, StatusCode> {
    service::get_insight_status().map(Json).map_err(|e| {
        tracing::error!("D404 Dashboard: Failed to get insight status: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// POST /api/d404/insight
///
/// Remote failures are not HTTP errors: they come back as `outcome.status = "failed"`.
pub async fn generate_insight(
    Json(request): Json<GenerateInsightRequest>,
) -> Result<Json<GenerateInsightResponse>, StatusCode> {
    match service::generate_insight(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("D404 Dashboard: Failed to generate insight: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
