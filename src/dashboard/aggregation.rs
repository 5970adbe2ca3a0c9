//! Running totals and most recent dates over a user's transactions.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{Error, transaction::TransactionType};

/// The sums behind the three highlight figures, before formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all positive transactions.
    pub entries: f64,
    /// Sum of all negative transactions, as a positive number.
    pub expenses: f64,
    /// `entries - expenses`.
    pub total: f64,
}

impl Totals {
    /// Add `amount` to the side given by `transaction_type` and update the total.
    ///
    /// # Errors
    ///
    /// Returns [Error::MalformedData] if a sum is no longer a finite number.
    pub(super) fn add(
        &mut self,
        transaction_type: TransactionType,
        amount: f64,
    ) -> Result<(), Error> {
        match transaction_type {
            TransactionType::Positive => self.entries += amount,
            TransactionType::Negative => self.expenses += amount,
        }

        self.total = self.entries - self.expenses;

        if [self.entries, self.expenses, self.total]
            .iter()
            .all(|sum| sum.is_finite())
        {
            Ok(())
        } else {
            Err(Error::MalformedData(format!(
                "the transaction amounts add up to more than can be represented: {self:?}"
            )))
        }
    }
}

/// The fields of a parsed transaction needed to find the most recent one of each type.
#[derive(Debug, Clone, Copy)]
pub(super) struct DatedTransaction {
    pub transaction_type: TransactionType,
    pub date_time: OffsetDateTime,
}

/// The local calendar date of the most recent transaction of `transaction_type`.
///
/// Transactions are compared by their parsed point in time, never by the text
/// they were stored as.
///
/// # Returns
/// `None` if there are no transactions of `transaction_type`.
pub(super) fn last_transaction_date(
    transactions: &[DatedTransaction],
    transaction_type: TransactionType,
) -> Option<Date> {
    transactions
        .iter()
        .filter(|transaction| transaction.transaction_type == transaction_type)
        .map(|transaction| transaction.date_time)
        .max()
        .map(|date_time| date_time.date())
}
