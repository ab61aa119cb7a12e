mod context;
mod dashboard;
mod detail;
mod iva_chart;
mod insight_panel;
mod overview;
mod presentation;
mod sidebar;

pub use context::FiscalOutlookContext;
pub use dashboard::FiscalOutlookDashboard;
