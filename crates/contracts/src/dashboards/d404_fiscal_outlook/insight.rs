use serde::{Deserialize, Serialize};

use super::dto::FiscalRecord;

/// Credential for the text insight service is absent
pub const INSIGHT_NOT_CONFIGURED_MESSAGE: &str =
    "Análise inteligente não configurada. Defina a chave de API do serviço de insights.";
/// Remote call failed (network, non-2xx, malformed payload, timeout)
pub const INSIGHT_ERROR_MESSAGE: &str = "Erro ao processar insights estratégicos.";
/// Remote call succeeded but returned no usable text
pub const INSIGHT_UNAVAILABLE_MESSAGE: &str = "Análise estratégica indisponível.";
/// Browser could not reach the backend
pub const INSIGHT_LOAD_FAILED_MESSAGE: &str = "Não foi possível carregar o insight.";

/// Result of one insight call as it travels over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InsightOutcome {
    Resolved { text: String },
    Failed { message: String },
    NotConfigured { message: String },
}

impl InsightOutcome {
    pub fn resolved(text: impl Into<String>) -> Self {
        Self::Resolved { text: text.into() }
    }

    pub fn remote_error() -> Self {
        Self::Failed {
            message: INSIGHT_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn unavailable() -> Self {
        Self::Failed {
            message: INSIGHT_UNAVAILABLE_MESSAGE.to_string(),
        }
    }

    pub fn not_configured() -> Self {
        Self::NotConfigured {
            message: INSIGHT_NOT_CONFIGURED_MESSAGE.to_string(),
        }
    }

    pub fn transport_failure() -> Self {
        Self::Failed {
            message: INSIGHT_LOAD_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Observable state of the current insight request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum InsightState {
    /// Nothing selected
    #[default]
    Idle,
    Loading { record: String },
    Resolved { record: String, text: String },
    Failed { record: String, message: String },
}

impl InsightState {
    pub fn is_loading(&self) -> bool {
        matches!(self, InsightState::Loading { .. })
    }

    /// Name of the record this state belongs to
    pub fn record(&self) -> Option<&str> {
        match self {
            InsightState::Idle => None,
            InsightState::Loading { record }
            | InsightState::Resolved { record, .. }
            | InsightState::Failed { record, .. } => Some(record.as_str()),
        }
    }

    /// Text to display: commentary or fallback message
    pub fn text(&self) -> Option<&str> {
        match self {
            InsightState::Resolved { text, .. } => Some(text.as_str()),
            InsightState::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Handle for one in-flight request.
///
/// Carries the record to send and the sequence number captured at issue
/// time. Only the ticket returned by the latest `begin` can complete.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightTicket {
    seq: u64,
    record: FiscalRecord,
}

impl InsightTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn record(&self) -> &FiscalRecord {
        &self.record
    }
}

/// Per-selection request state machine: `idle -> loading -> resolved | failed`.
///
/// Every `begin` starts a brand-new instance and bumps the sequence number,
/// which invalidates all tickets issued before it. There is no cache: calling
/// `begin` for a record seen earlier issues a new ticket.
#[derive(Debug, Clone, Default)]
pub struct InsightLifecycle {
    seq: u64,
    in_flight: Option<u64>,
    state: InsightState,
}

impl InsightLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InsightState {
        &self.state
    }

    /// Start a request for `record`.
    ///
    /// Without a credential the state goes straight to the terminal
    /// "not configured" failure and no ticket is issued, so `Loading` is
    /// never observed.
    pub fn begin(&mut self, record: &FiscalRecord, configured: bool) -> Option<InsightTicket> {
        self.seq += 1;

        if !configured {
            self.in_flight = None;
            self.state = InsightState::Failed {
                record: record.name.clone(),
                message: INSIGHT_NOT_CONFIGURED_MESSAGE.to_string(),
            };
            return None;
        }

        self.in_flight = Some(self.seq);
        self.state = InsightState::Loading {
            record: record.name.clone(),
        };

        Some(InsightTicket {
            seq: self.seq,
            record: record.clone(),
        })
    }

    pub fn is_current(&self, ticket: &InsightTicket) -> bool {
        self.in_flight == Some(ticket.seq)
    }

    /// Apply the result of `ticket`'s call. Stale tickets are ignored.
    ///
    /// Returns `true` if the state changed.
    pub fn complete(&mut self, ticket: &InsightTicket, outcome: InsightOutcome) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        let record = ticket.record.name.clone();
        self.state = match outcome {
            InsightOutcome::Resolved { text } if text.trim().is_empty() => InsightState::Failed {
                record,
                message: INSIGHT_UNAVAILABLE_MESSAGE.to_string(),
            },
            InsightOutcome::Resolved { text } => InsightState::Resolved { record, text },
            InsightOutcome::Failed { message } | InsightOutcome::NotConfigured { message } => {
                InsightState::Failed { record, message }
            }
        };
        self.in_flight = None;

        true
    }

    /// Back to `Idle`; any in-flight ticket becomes stale
    pub fn reset(&mut self) {
        self.seq += 1;
        self.in_flight = None;
        self.state = InsightState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d404_fiscal_outlook::store::test_support::record;

    #[test]
    fn test_begin_enters_loading() {
        let mut lifecycle = InsightLifecycle::new();
        assert_eq!(lifecycle.state(), &InsightState::Idle);

        let ticket = lifecycle.begin(&record("X", 1.0, 1.0), true).unwrap();
        assert_eq!(ticket.record().name, "X");
        assert_eq!(
            lifecycle.state(),
            &InsightState::Loading { record: "X".into() }
        );
    }

    #[test]
    fn test_resolved_text_is_verbatim() {
        let mut lifecycle = InsightLifecycle::new();
        let ticket = lifecycle.begin(&record("X", 1.0, 1.0), true).unwrap();
        assert!(lifecycle.complete(&ticket, InsightOutcome::resolved("  Bom desempenho.\n")));
        assert_eq!(lifecycle.state().text(), Some("  Bom desempenho.\n"));
        assert!(!lifecycle.is_current(&ticket));
    }

    #[test]
    fn test_blank_text_maps_to_unavailable() {
        let mut lifecycle = InsightLifecycle::new();
        let ticket = lifecycle.begin(&record("X", 1.0, 1.0), true).unwrap();
        lifecycle.complete(&ticket, InsightOutcome::resolved("   "));
        assert_eq!(
            lifecycle.state(),
            &InsightState::Failed {
                record: "X".into(),
                message: INSIGHT_UNAVAILABLE_MESSAGE.into()
            }
        );
    }

    #[test]
    fn test_not_configured_skips_loading() {
        let mut lifecycle = InsightLifecycle::new();
        assert!(lifecycle.begin(&record("X", 1.0, 1.0), false).is_none());
        assert_eq!(
            lifecycle.state(),
            &InsightState::Failed {
                record: "X".into(),
                message: INSIGHT_NOT_CONFIGURED_MESSAGE.into()
            }
        );
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut lifecycle = InsightLifecycle::new();
        let first = lifecycle.begin(&record("A", 1.0, 1.0), true).unwrap();
        let second = lifecycle.begin(&record("B", 1.0, 1.0), true).unwrap();

        // B answers first, then the late answer for A arrives
        assert!(lifecycle.complete(&second, InsightOutcome::resolved("B text")));
        assert!(!lifecycle.complete(&first, InsightOutcome::resolved("A text")));
        assert_eq!(
            lifecycle.state(),
            &InsightState::Resolved {
                record: "B".into(),
                text: "B text".into()
            }
        );
    }

    #[test]
    fn test_stale_ticket_does_not_end_newer_loading() {
        let mut lifecycle = InsightLifecycle::new();
        let first = lifecycle.begin(&record("A", 1.0, 1.0), true).unwrap();
        let _second = lifecycle.begin(&record("B", 1.0, 1.0), true).unwrap();

        assert!(!lifecycle.complete(&first, InsightOutcome::remote_error()));
        assert_eq!(
            lifecycle.state(),
            &InsightState::Loading { record: "B".into() }
        );
    }

    #[test]
    fn test_reselecting_same_record_issues_new_ticket() {
        let mut lifecycle = InsightLifecycle::new();
        let x = record("X", 1.0, 1.0);
        let first = lifecycle.begin(&x, true).unwrap();
        lifecycle.complete(&first, InsightOutcome::remote_error());
        assert_eq!(lifecycle.state().text(), Some(INSIGHT_ERROR_MESSAGE));

        let retry = lifecycle.begin(&x, true).unwrap();
        assert!(retry.seq() > first.seq());
        assert!(lifecycle.state().is_loading());
        assert!(lifecycle.complete(&retry, InsightOutcome::resolved("ok")));
        assert_eq!(lifecycle.state().text(), Some("ok"));
    }

    #[test]
    fn test_reset_invalidates_in_flight() {
        let mut lifecycle = InsightLifecycle::new();
        let ticket = lifecycle.begin(&record("X", 1.0, 1.0), true).unwrap();
        lifecycle.reset();
        assert!(!lifecycle.complete(&ticket, InsightOutcome::resolved("late")));
        assert_eq!(lifecycle.state(), &InsightState::Idle);
    }

    #[test]
    fn test_not_configured_invalidates_earlier_ticket() {
        let mut lifecycle = InsightLifecycle::new();
        let ticket = lifecycle.begin(&record("A", 1.0, 1.0), true).unwrap();
        lifecycle.begin(&record("B", 1.0, 1.0), false);
        assert!(!lifecycle.complete(&ticket, InsightOutcome::resolved("late")));
        assert_eq!(lifecycle.state().record(), Some("B"));
    }

    #[test]
    fn test_outcome_wire_format() {
        let json = serde_json::to_value(InsightOutcome::resolved("texto")).unwrap();
        assert_eq!(json, serde_json::json!({"status": "resolved", "text": "texto"}));

        let parsed: InsightOutcome =
            serde_json::from_str(r#"{"status":"not_configured","message":"m"}"#).unwrap();
        assert_eq!(parsed, InsightOutcome::NotConfigured { message: "m".into() });
    }
}
