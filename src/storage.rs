//! Key-value persistence of each user's transactions.
//!
//! Every user's transactions are stored as one JSON array under a key scoped to
//! the user's ID, see [transactions_key].

use rusqlite::{Connection, OptionalExtension};

use crate::{Error, transaction::RawTransaction, user::UserId};

/// Namespaces the transaction lists of different users.
const TRANSACTIONS_KEY_PREFIX: &str = "transactions_user:";

/// A string key-value store.
pub trait KeyValueStore {
    /// Get the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store could not be read.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Store `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store could not be written.
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}

/// Create the table backing [KeyValueStore] for SQLite connections.
///
/// # Errors
///
/// This function will return an error if the SQL query failed.
pub fn create_key_value_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS key_value (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

impl KeyValueStore for Connection {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        self.query_row("SELECT value FROM key_value WHERE key = ?1", (key,), |row| {
            row.get(0)
        })
        .optional()
        .map_err(Error::from)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.execute(
            "INSERT INTO key_value (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (key, value),
        )?;

        Ok(())
    }
}

/// The key under which `user_id`'s transactions are stored, e.g. "transactions_user:42".
pub fn transactions_key(user_id: &UserId) -> String {
    format!("{TRANSACTIONS_KEY_PREFIX}{user_id}")
}

/// Get all of `user_id`'s stored transactions in the order they were stored.
///
/// A user with nothing stored has no transactions.
///
/// # Errors
///
/// Returns [Error::MalformedData] if the stored value is not a JSON list of
/// transactions, or any error from the store itself.
pub fn get_transactions(
    store: &impl KeyValueStore,
    user_id: &UserId,
) -> Result<Vec<RawTransaction>, Error> {
    let key = transactions_key(user_id);

    match store.get(&key)? {
        Some(value) => serde_json::from_str(&value).map_err(|error| {
            Error::MalformedData(format!("the value stored under {key} could not be read: {error}"))
        }),
        None => Ok(Vec::new()),
    }
}

/// Add `transaction` to the end of `user_id`'s stored transactions.
///
/// # Errors
///
/// Returns:
/// - [Error::InvalidTransaction] if `transaction` fails validation.
/// - [Error::MalformedData] if the existing stored value cannot be parsed.
/// - [Error::JSONSerializationError] if the updated list cannot be serialized.
pub fn append_transaction(
    store: &impl KeyValueStore,
    user_id: &UserId,
    transaction: RawTransaction,
) -> Result<(), Error> {
    transaction.validate()?;

    let mut transactions = get_transactions(store, user_id)?;
    transactions.push(transaction);

    let value = serde_json::to_string(&transactions)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

    store.set(&transactions_key(user_id), &value)
}
