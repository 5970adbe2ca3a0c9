//! GoFinances is a personal finance dashboard.
//!
//! This library provides a JSON API that summarizes each signed-in user's
//! transactions into income, expense and total highlights, formatted for
//! Brazilian Portuguese and the Brazilian real.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod app_state;
mod auth;
mod dashboard;
mod db;
mod endpoints;
mod error;
mod format;
mod locale;
mod logging;
mod routing;
mod storage;
mod timezone;
mod transaction;
mod user;

pub use app_state::AppState;
pub use dashboard::{
    DashboardEvent, DashboardScreen, DashboardSummary, FormattedTransaction, HighlightFigure,
    Highlights, LoadTicket, ScreenState, Totals, load_and_summarize, summarize,
};
pub use db::initialize as initialize_db;
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use storage::{KeyValueStore, append_transaction, get_transactions, transactions_key};
pub use timezone::get_local_offset;
pub use transaction::{Category, RawTransaction, TransactionType};
pub use user::{UserId, UserProfile};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

#[cfg(test)]
mod tests {
    use time::UtcOffset;

    use crate::{
        DashboardSummary, FormattedTransaction, HighlightFigure, Highlights, Totals, summarize,
    };

    #[test]
    fn summary_fields_can_be_named_from_the_crate_root() {
        let summary: DashboardSummary = summarize(&[], UtcOffset::UTC).unwrap();

        let transactions: &[FormattedTransaction] = &summary.transactions;
        let highlights: &Highlights = &summary.highlights;
        let total: &HighlightFigure = &highlights.total;
        let totals: Totals = summary.totals;

        assert!(transactions.is_empty());
        assert_eq!(total.amount, "R$\u{a0}0,00");
        assert_eq!(totals, Totals::default());
    }
}
