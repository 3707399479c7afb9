//! Page-level components.

mod diagnostics;
mod history;

pub use diagnostics::DiagnosticsPage;
pub use history::HistoryPage;
