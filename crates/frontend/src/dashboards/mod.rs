pub mod d404_fiscal_outlook;

pub use d404_fiscal_outlook::ui::FiscalOutlookDashboard;
