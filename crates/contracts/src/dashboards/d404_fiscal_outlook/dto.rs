use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::insight::InsightOutcome;
use super::view::SortKey;

/// One municipality of the fiscal outlook dataset.
///
/// `name` is the only key. `definitive_variation2024` is supplied by the source
/// table and is authoritative: it is never recomputed from the IVA samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalRecord {
    pub name: String,
    pub iva2022: f64,
    pub iva2023: f64,
    pub iva_provisional2024: f64,
    pub iva2024: f64,
    /// Percentage change of the index, e.g. 36.6 for +36.6%
    pub definitive_variation2024: f64,
    pub ipm_projection2026: f64,
    /// Revenue transfer forecast, BRL
    pub revenue_projection: f64,
    /// Value-added contribution, BRL (may be zero)
    pub total_contribution: f64,
    pub ipm_increment: f64,
    /// Monthly fee, BRL
    pub monthly_fee: f64,
}

/// Single point of the IVA history chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IvaPoint {
    pub year: u16,
    pub iva: f64,
}

/// Direction badge shown next to a variation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl FiscalRecord {
    /// Definitive IVA samples for 2022..2024 (the provisional 2024 value is not charted)
    pub fn iva_history(&self) -> [IvaPoint; 3] {
        [
            IvaPoint { year: 2022, iva: self.iva2022 },
            IvaPoint { year: 2023, iva: self.iva2023 },
            IvaPoint { year: 2024, iva: self.iva2024 },
        ]
    }

    pub fn trend(&self) -> Trend {
        if self.definitive_variation2024 > 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// Aggregate figures over the whole record set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_revenue_projection: f64,
    /// Arithmetic mean of `definitive_variation2024`; NaN for an empty set
    pub average_growth: f64,
    pub total_contribution: f64,
    pub count: usize,
}

/// Response for GET /api/d404/summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiscalSummaryResponse {
    pub stats: AggregateStats,
    /// Full record set in source order
    pub records: Vec<FiscalRecord>,
    /// Whether the text insight service has a credential
    pub insight_configured: bool,
    pub generated_at: DateTime<Utc>,
}

/// Query for GET /api/d404/records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FiscalViewRequest {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: SortKey,
}

/// Response for GET /api/d404/records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiscalViewResponse {
    pub records: Vec<FiscalRecord>,
    /// Size of the unfiltered record set
    pub total: usize,
    pub search: String,
    pub sort: SortKey,
}

/// Response for GET /api/d404/insight/status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightStatusResponse {
    pub configured: bool,
    pub provider: Option<String>,
    pub model: Option<String>,
}

/// Body for POST /api/d404/insight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateInsightRequest {
    pub record: FiscalRecord,
}

/// Response for POST /api/d404/insight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateInsightResponse {
    /// Correlation id, also written to the backend log
    pub request_id: String,
    pub outcome: InsightOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_from_camel_case() {
        let json = r#"{
            "name": "Santaluz",
            "iva2022": 0.1352, "iva2023": 0.1822, "ivaProvisional2024": 0.2638, "iva2024": 0.2514,
            "definitiveVariation2024": 36.6, "ipmProjection2026": 0.2415,
            "revenueProjection": 28068170.22, "totalContribution": 0.0,
            "ipmIncrement": -0.0055, "monthlyFee": 10656.12
        }"#;
        let record: FiscalRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Santaluz");
        assert_eq!(record.iva_provisional2024, 0.2638);
        assert_eq!(record.definitive_variation2024, 36.6);
        assert_eq!(record.monthly_fee, 10656.12);
    }

    #[test]
    fn test_iva_history_and_trend() {
        let json = r#"{
            "name": "Catolândia",
            "iva2022": 0.006, "iva2023": 0.0064, "ivaProvisional2024": 0.006, "iva2024": 0.0056,
            "definitiveVariation2024": -3.39, "ipmProjection2026": 0.033,
            "revenueProjection": 3841271.06, "totalContribution": 0.0,
            "ipmIncrement": -0.0001, "monthlyFee": 234.86
        }"#;
        let record: FiscalRecord = serde_json::from_str(json).unwrap();
        let history = record.iva_history();
        assert_eq!(history.map(|p| p.year), [2022, 2023, 2024]);
        assert_eq!(history[2].iva, 0.0056);
        assert_eq!(record.trend(), Trend::Down);
    }

    #[test]
    fn test_zero_variation_is_not_up() {
        let mut record: FiscalRecord = serde_json::from_str(
            r#"{"name":"X","iva2022":0,"iva2023":0,"ivaProvisional2024":0,"iva2024":0,
                "definitiveVariation2024":0,"ipmProjection2026":0,"revenueProjection":0,
                "totalContribution":0,"ipmIncrement":0,"monthlyFee":0}"#,
        )
        .unwrap();
        assert_eq!(record.trend(), Trend::Down);
        record.definitive_variation2024 = 0.01;
        assert_eq!(record.trend(), Trend::Up);
    }
}
