use super::dto::{AggregateStats, FiscalRecord};
use super::insight::{InsightLifecycle, InsightOutcome, InsightState, InsightTicket};
use super::selection::{Direction, SelectionController};
use super::stats::compute_stats;
use super::store::RecordStore;
use super::view::{build_view, position_in_view, SortKey};

/// State container of the fiscal outlook dashboard.
///
/// Owns everything the presentation layer reads (stats, view, selection,
/// insight state) and exposes the only mutating operations. Operations that
/// start an insight request return the ticket; the caller performs the remote
/// call and hands the result back through [`DashboardSession::apply_insight`].
#[derive(Debug, Clone)]
pub struct DashboardSession {
    store: RecordStore,
    search_term: String,
    sort_key: SortKey,
    selection: SelectionController,
    insight: InsightLifecycle,
    insight_configured: bool,
}

impl DashboardSession {
    pub fn new(store: RecordStore, insight_configured: bool) -> Self {
        Self {
            store,
            search_term: String::new(),
            sort_key: SortKey::default(),
            selection: SelectionController::new(),
            insight: InsightLifecycle::new(),
            insight_configured,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Recomputed on every call over the full record set
    pub fn stats(&self) -> AggregateStats {
        compute_stats(self.store.records())
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    pub fn insight_configured(&self) -> bool {
        self.insight_configured
    }

    /// Affects only requests started after the call
    pub fn set_insight_configured(&mut self, configured: bool) {
        self.insight_configured = configured;
    }

    /// Active view for the current search term and sort key
    pub fn view(&self) -> Vec<&FiscalRecord> {
        build_view(self.store.records(), &self.search_term, self.sort_key)
    }

    /// Owned copy of the active view, for reactive consumers
    pub fn visible_records(&self) -> Vec<FiscalRecord> {
        self.view().into_iter().cloned().collect()
    }

    pub fn selected(&self) -> Option<&FiscalRecord> {
        self.selection.current()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.is_selected(name)
    }

    /// 1-based ranking of the selected record in the active view
    pub fn selected_position(&self) -> Option<usize> {
        let current = self.selection.current()?;
        position_in_view(&self.view(), &current.name)
    }

    pub fn insight_state(&self) -> &InsightState {
        self.insight.state()
    }

    /// Select `record` and start a fresh insight request for it.
    ///
    /// Returns `None` when the insight service is not configured (the state is
    /// already terminal in that case).
    pub fn select(&mut self, record: FiscalRecord) -> Option<InsightTicket> {
        let ticket = self.insight.begin(&record, self.insight_configured);
        self.selection.select(record);
        ticket
    }

    /// `select` by key; unknown names leave the session untouched
    pub fn select_by_name(&mut self, name: &str) -> Option<InsightTicket> {
        let record = self.store.get(name)?.clone();
        self.select(record)
    }

    pub fn clear(&mut self) {
        self.selection.clear();
        self.insight.reset();
    }

    pub fn next(&mut self) -> Option<InsightTicket> {
        self.navigate(Direction::Next)
    }

    pub fn previous(&mut self) -> Option<InsightTicket> {
        self.navigate(Direction::Previous)
    }

    fn navigate(&mut self, direction: Direction) -> Option<InsightTicket> {
        let target = {
            let view = self.view();
            self.selection.neighbour(&view, direction)?.clone()
        };
        self.select(target)
    }

    /// Hand back the result of a ticket's remote call.
    ///
    /// Returns `false` when the ticket was superseded and the result dropped.
    /// A `NotConfigured` outcome switches the session to not configured even
    /// when superseded, so later selections fail without a request.
    pub fn apply_insight(&mut self, ticket: &InsightTicket, outcome: InsightOutcome) -> bool {
        if matches!(outcome, InsightOutcome::NotConfigured { .. }) {
            self.set_insight_configured(false);
        }
        self.insight.complete(ticket, outcome)
    }
}
