use anyhow::Result;
use chrono::Utc;
use contracts::dashboards::d404_fiscal_outlook::{
    build_view, compute_stats, FiscalSummaryResponse, FiscalViewRequest, FiscalViewResponse,
    GenerateInsightRequest, GenerateInsightResponse, InsightStatusResponse,
};

use super::insight::{self, InsightService};
use super::repository;

/// Stats plus the full record set for the dashboard start-up
pub fn get_summary() -> Result<FiscalSummaryResponse> {
    let store = repository::get_store()?;
    let configured = insight::get_service()
        .map(InsightService::is_configured)
        .unwrap_or(false);

    Ok(FiscalSummaryResponse {
        stats: compute_stats(store.records()),
        records: store.records().to_vec(),
        insight_configured: configured,
        generated_at: Utc::now(),
    })
}

/// Filtered and sorted view
pub fn get_view(request: FiscalViewRequest) -> Result<FiscalViewResponse> {
    let store = repository::get_store()?;
    let records = build_view(store.records(), &request.search, request.sort)
        .into_iter()
        .cloned()
        .collect();

    Ok(FiscalViewResponse {
        records,
        total: store.len(),
        search: request.search,
        sort: request.sort,
    })
}

pub fn get_insight_status() -> Result<InsightStatusResponse> {
    let service = insight::get_service()?;
    Ok(InsightStatusResponse {
        configured: service.is_configured(),
        provider: service.provider_name().map(str::to_string),
        model: service.model().map(str::to_string),
    })
}

/// One remote call per request; failures come back inside the outcome
pub async fn generate_insight(request: GenerateInsightRequest) -> Result<GenerateInsightResponse> {
    let service = insight::get_service()?;
    let request_id = uuid::Uuid::new_v4().to_string();

    tracing::info!(
        "D404 insight [{}]: requested for {}",
        request_id,
        request.record.name
    );

    let outcome = service.generate(&request.record, &request_id).await;

    Ok(GenerateInsightResponse {
        request_id,
        outcome,
    })
}
