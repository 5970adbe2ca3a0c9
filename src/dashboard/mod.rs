//! Dashboard module
//!
//! Summarizes the signed-in user's transactions into the entries, expenses
//! and total highlights plus a formatted transaction list. Also holds the
//! view model a client uses to reload the dashboard when it is shown or refocused.

mod aggregation;
mod handlers;
mod screen;
mod summary;

pub use aggregation::Totals;
pub use handlers::get_dashboard;
pub use screen::{DashboardEvent, DashboardScreen, LoadTicket, ScreenState};
pub use summary::{
    DashboardSummary, FormattedTransaction, HighlightFigure, Highlights, load_and_summarize,
    summarize,
};

#[cfg(test)]
pub(crate) use handlers::DashboardResponse;
