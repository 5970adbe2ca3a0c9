//! Database initialisation.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::storage::create_key_value_table;

/// Create the tables the application needs if they do not already exist.
///
/// # Errors
///
/// Returns an error if the tables could not be created.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_key_value_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
