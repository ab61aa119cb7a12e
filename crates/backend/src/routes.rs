use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // D404 FISCAL OUTLOOK DASHBOARD
        // ========================================
        .route(
            "/api/d404/summary",
            get(handlers::d404_fiscal_outlook::get_summary),
        )
        .route(
            "/api/d404/records",
            get(handlers::d404_fiscal_outlook::get_records),
        )
        .route(
            "/api/d404/insight/status",
            get(handlers::d404_fiscal_outlook::get_insight_status),
        )
        .route(
            "/api/d404/insight",
            post(handlers::d404_fiscal_outlook::generate_insight),
        )
}
