use crate::dashboards::d404_fiscal_outlook::api;
use contracts::dashboards::d404_fiscal_outlook::{
    DashboardSession, FiscalRecord, InsightOutcome, InsightState, InsightTicket, RecordStore,
    SortKey,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Реактивная обёртка над `DashboardSession`
///
/// Все изменения состояния проходят через методы этой структуры: операция
/// выполняется над сессией, а выданный ею тикет отправляется на backend.
/// Ответ применяется через `apply_insight`, устаревшие ответы сессия отбрасывает.
#[derive(Clone, Copy)]
pub struct FiscalOutlookContext {
    pub session: RwSignal<Option<DashboardSession>>,
    pub presentation: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl FiscalOutlookContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
            presentation: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Загрузка набора записей при открытии дашборда
    pub fn load(&self) {
        let this = *self;
        spawn_local(async move {
            match api::get_summary().await {
                Ok(summary) => match RecordStore::new(summary.records) {
                    Ok(store) => {
                        log::info!("D404: loaded {} municipalities", store.len());
                        this.session
                            .set(Some(DashboardSession::new(store, summary.insight_configured)));
                    }
                    Err(e) => {
                        log::error!("D404: invalid record set: {}", e);
                        this.error.set(Some(e.to_string()));
                    }
                },
                Err(e) => {
                    log::error!("Failed to load D404 summary: {}", e);
                    this.error.set(Some(e));
                }
            }
        });
    }

    pub fn is_ready(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn visible_records(&self) -> Vec<FiscalRecord> {
        self.session
            .with(|s| s.as_ref().map(|s| s.visible_records()).unwrap_or_default())
    }

    pub fn selected(&self) -> Option<FiscalRecord> {
        self.session
            .with(|s| s.as_ref().and_then(|s| s.selected().cloned()))
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.session
            .with(|s| s.as_ref().is_some_and(|s| s.is_selected(name)))
    }

    pub fn selected_position(&self) -> Option<usize> {
        self.session
            .with(|s| s.as_ref().and_then(|s| s.selected_position()))
    }

    pub fn insight_state(&self) -> InsightState {
        self.session.with(|s| {
            s.as_ref()
                .map(|s| s.insight_state().clone())
                .unwrap_or_default()
        })
    }

    pub fn set_search_term(&self, term: String) {
        self.session.update(|s| {
            if let Some(s) = s.as_mut() {
                s.set_search_term(term);
            }
        });
    }

    pub fn set_sort_key(&self, key: SortKey) {
        self.session.update(|s| {
            if let Some(s) = s.as_mut() {
                s.set_sort_key(key);
            }
        });
    }

    pub fn select(&self, name: String) {
        self.dispatch(move |s| s.select_by_name(&name));
    }

    pub fn next(&self) {
        self.dispatch(DashboardSession::next);
    }

    pub fn previous(&self) {
        self.dispatch(DashboardSession::previous);
    }

    pub fn clear(&self) {
        self.presentation.set(false);
        self.session.update(|s| {
            if let Some(s) = s.as_mut() {
                s.clear();
            }
        });
    }

    fn dispatch(&self, action: impl FnOnce(&mut DashboardSession) -> Option<InsightTicket>) {
        let mut ticket = None;
        self.session.update(|s| {
            if let Some(s) = s.as_mut() {
                ticket = action(s);
            }
        });
        if let Some(ticket) = ticket {
            self.request_insight(ticket);
        }
    }

    fn request_insight(&self, ticket: InsightTicket) {
        let session = self.session;
        spawn_local(async move {
            let outcome = match api::generate_insight(ticket.record()).await {
                Ok(response) => {
                    log::debug!(
                        "D404: insight {} for {} received",
                        response.request_id,
                        ticket.record().name
                    );
                    if matches!(response.outcome, InsightOutcome::NotConfigured { .. }) {
                        log::warn!("D404: insight service is not configured on the backend");
                    }
                    response.outcome
                }
                Err(e) => {
                    log::error!("D404: insight request for {} failed: {}", ticket.record().name, e);
                    InsightOutcome::transport_failure()
                }
            };

            // NotConfigured также выключает дальнейшие запросы в сессии
            session.update(|s| {
                if let Some(s) = s.as_mut() {
                    if !s.apply_insight(&ticket, outcome) {
                        log::debug!("D404: stale insight #{} dropped", ticket.seq());
                    }
                }
            });
        });
    }
}

impl Default for FiscalOutlookContext {
    fn default() -> Self {
        Self::new()
    }
}
