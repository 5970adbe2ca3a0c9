//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The stored transactions for a user are present but could not be read,
    /// or one of them has an amount or date that cannot be parsed.
    ///
    /// The whole load fails; there is no partial recovery. The client may retry.
    #[error("the stored data is malformed: {0}")]
    MalformedData(String),

    /// A transaction submitted for storage is not valid.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    /// An empty string was used as a user ID.
    #[error("the user ID cannot be empty")]
    EmptyUserId,

    /// The request does not carry a valid, unexpired session.
    #[error("not signed in")]
    Unauthenticated,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// Could not acquire the lock on what the dashboard screen displays.
    #[error("could not acquire the dashboard screen state lock")]
    ScreenStateLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

/// The body of every error response.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

impl Error {
    /// A description of the error that is safe to show to the user.
    ///
    /// Details that are only useful for debugging are left out.
    pub fn user_message(&self) -> String {
        match self {
            Error::MalformedData(_) => {
                "Your transactions could not be loaded. Please try again.".to_owned()
            }
            Error::InvalidTransaction(reason) => format!("Invalid transaction: {reason}."),
            Error::EmptyUserId => "The user ID cannot be empty.".to_owned(),
            Error::Unauthenticated => "You need to sign in.".to_owned(),
            Error::InvalidTimezoneError(timezone) => format!(
                "Could not get local timezone \"{timezone}\". Check your server settings and \
                ensure the timezone has been set to valid, canonical timezone string"
            ),
            _ => "An unexpected error occurred, check the server logs for more details."
                .to_owned(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidTransaction(_) | Error::EmptyUserId => StatusCode::BAD_REQUEST,
            Error::Unauthenticated => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!("An unexpected error occurred: {}", self);
        }

        (
            status_code,
            Json(ErrorBody {
                error: self.user_message(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::Error;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(
            Error::InvalidTransaction("bad".to_owned())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::Unauthenticated.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn malformed_data_maps_to_500_without_details() {
        let error = Error::MalformedData("transaction 3: \"x\" is not a number".to_owned());

        assert!(!error.user_message().contains("transaction 3"));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
