//! Dashboard HTTP handler.

use std::sync::{Arc, Mutex};

use axum::{
    Extension, Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    dashboard::summary::{FormattedTransaction, Highlights, load_and_summarize},
    timezone::get_local_offset,
    user::UserProfile,
};

/// The state needed for displaying the dashboard.
///
/// Contains the database connection and timezone information required
/// by dashboard handlers.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The greeting shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardUser {
    /// The user's display name.
    pub name: String,
    /// URL of the user's photo.
    pub photo: String,
}

/// Everything the dashboard screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Who is signed in.
    pub user: DashboardUser,
    /// The entries, expenses and total cards.
    pub highlights: Highlights,
    /// The transaction list, in stored order.
    pub transactions: Vec<FormattedTransaction>,
}

/// Summarize the signed-in user's transactions for the dashboard.
///
/// # Errors
///
/// Returns:
/// - [Error::InvalidTimezoneError] if the server's timezone is not valid.
/// - [Error::DatabaseLockError] if the database connection could not be locked.
/// - [Error::MalformedData] if the user's stored transactions cannot be parsed.
pub async fn get_dashboard(
    State(state): State<DashboardState>,
    Extension(user): Extension<UserProfile>,
) -> Result<Json<DashboardResponse>, Error> {
    let local_offset = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;

    let summary = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        load_and_summarize(&*connection, &user.id, local_offset)?
    };

    Ok(Json(DashboardResponse {
        user: DashboardUser {
            name: user.name,
            photo: user.photo,
        },
        highlights: summary.highlights,
        transactions: summary.transactions,
    }))
}
