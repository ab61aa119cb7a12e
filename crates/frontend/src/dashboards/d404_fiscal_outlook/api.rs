use crate::shared::api_utils::api_url;
use contracts::dashboards::d404_fiscal_outlook::{
    FiscalRecord, FiscalSummaryResponse, GenerateInsightRequest, GenerateInsightResponse,
};
use gloo_net::http::Request;

const API_BASE: &str = "/api/d404";

/// Получить набор муниципалитетов со сводными показателями
pub async fn get_summary() -> Result<FiscalSummaryResponse, String> {
    let url = api_url(&format!("{}/summary", API_BASE));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: FiscalSummaryResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Запросить стратегический инсайт для муниципалитета
pub async fn generate_insight(record: &FiscalRecord) -> Result<GenerateInsightResponse, String> {
    let url = api_url(&format!("{}/insight", API_BASE));
    let body = serde_json::to_string(&GenerateInsightRequest {
        record: record.clone(),
    })
    .map_err(|e| format!("Serialize error: {}", e))?;

    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| format!("Request build failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
