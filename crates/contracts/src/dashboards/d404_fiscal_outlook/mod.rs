pub mod dto;
pub mod format;
pub mod insight;
pub mod selection;
pub mod session;
pub mod stats;
pub mod store;
pub mod view;

pub use dto::*;
pub use insight::{
    InsightLifecycle, InsightOutcome, InsightState, InsightTicket, INSIGHT_ERROR_MESSAGE,
    INSIGHT_LOAD_FAILED_MESSAGE, INSIGHT_NOT_CONFIGURED_MESSAGE, INSIGHT_UNAVAILABLE_MESSAGE,
};
pub use selection::{Direction, SelectionController};
pub use session::DashboardSession;
pub use stats::compute_stats;
pub use store::{RecordStore, RecordStoreError};
pub use view::{build_view, collation_key, position_in_view, SortKey};
