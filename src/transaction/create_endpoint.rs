//! Defines the endpoint for adding a transaction to the signed-in user's list.
use std::sync::{Arc, Mutex};

use axum::{
    Extension, Json,
    extract::{FromRef, State},
    http::StatusCode,
};
use rusqlite::Connection;

use crate::{
    AppState, Error, storage::append_transaction, transaction::RawTransaction, user::UserProfile,
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler for storing a new transaction, responds with the stored transaction.
///
/// # Errors
///
/// Returns [Error::InvalidTransaction] if the transaction's amount, date, ID
/// or name is not valid, or an internal error if the user's existing
/// transactions could not be read or written.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Extension(user): Extension<UserProfile>,
    Json(transaction): Json<RawTransaction>,
) -> Result<(StatusCode, Json<RawTransaction>), Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    append_transaction(&*connection, &user.id, transaction.clone())?;

    tracing::info!("Stored transaction {} for user {}", transaction.id, user.id);

    Ok((StatusCode::CREATED, Json(transaction)))
}
