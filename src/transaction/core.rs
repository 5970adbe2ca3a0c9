//! The transaction record as persisted by the app, and parsing of its stored fields.

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, UtcOffset,
    format_description::{
        BorrowedFormatItem,
        well_known::{Iso8601, Rfc3339},
    },
    macros::format_description,
};

use crate::Error;

/// Date format for calendar dates without a time, e.g. "2021-04-13".
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Income, counted towards the entries highlight.
    Positive,
    /// An expense, counted towards the expenses highlight.
    Negative,
}

/// The category a transaction was filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// The display name, e.g. "Alimentação".
    pub name: String,
    /// The name of the icon shown next to the category, e.g. "coffee".
    pub icon: String,
}

/// A transaction exactly as it is stored for a user.
///
/// The amount and date are kept as the strings that were stored. Use
/// [RawTransaction::amount_value] and [RawTransaction::date_time] to get
/// values that can be summed and compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Unique within the user's transactions.
    pub id: String,
    /// A short description, e.g. "Desenvolvimento de Site".
    pub name: String,
    /// A non-negative numeric literal, e.g. "1000" or "59.90".
    pub amount: String,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The category the transaction was filed under.
    pub category: Category,
    /// A calendar date ("2021-04-13") or an ISO 8601 timestamp, with or without an offset.
    pub date: String,
}

impl RawTransaction {
    /// The amount as a number.
    ///
    /// # Errors
    ///
    /// Returns [Error::MalformedData] if the amount is not a finite, non-negative number.
    pub fn amount_value(&self) -> Result<f64, Error> {
        parse_amount(&self.amount)
            .map_err(|reason| Error::MalformedData(format!("transaction {}: {reason}", self.id)))
    }

    /// The point in time of the transaction, in `local_offset`.
    ///
    /// Calendar dates without a time are taken as local midnight.
    ///
    /// # Errors
    ///
    /// Returns [Error::MalformedData] if the date cannot be parsed.
    pub fn date_time(&self, local_offset: UtcOffset) -> Result<OffsetDateTime, Error> {
        parse_date_time(&self.date, local_offset)
            .map_err(|reason| Error::MalformedData(format!("transaction {}: {reason}", self.id)))
    }

    /// Check that the transaction can be stored and later summarized.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidTransaction] if the ID or name is empty, or the amount
    /// or date cannot be parsed.
    pub fn validate(&self) -> Result<(), Error> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidTransaction("the ID cannot be empty".to_owned()));
        }

        if self.name.trim().is_empty() {
            return Err(Error::InvalidTransaction(
                "the name cannot be empty".to_owned(),
            ));
        }

        parse_amount(&self.amount).map_err(Error::InvalidTransaction)?;
        parse_date_time(&self.date, UtcOffset::UTC).map_err(Error::InvalidTransaction)?;

        Ok(())
    }
}

fn parse_amount(amount: &str) -> Result<f64, String> {
    let value: f64 = amount
        .trim()
        .parse()
        .map_err(|_| format!("\"{amount}\" is not a number"))?;

    if !value.is_finite() || value < 0.0 {
        return Err(format!("\"{amount}\" is not a finite, non-negative amount"));
    }

    Ok(value)
}

fn parse_date_time(date: &str, local_offset: UtcOffset) -> Result<OffsetDateTime, String> {
    if let Ok(date_time) = OffsetDateTime::parse(date, &Rfc3339) {
        return Ok(date_time.to_offset(local_offset));
    }

    if let Ok(date_time) = OffsetDateTime::parse(date, &Iso8601::DEFAULT) {
        return Ok(date_time.to_offset(local_offset));
    }

    // A timestamp without an offset is a local time.
    if let Ok(date_time) = PrimitiveDateTime::parse(date, &Iso8601::DEFAULT) {
        return Ok(date_time.assume_offset(local_offset));
    }

    Date::parse(date, DATE_FORMAT)
        .map(|date| date.midnight().assume_offset(local_offset))
        .map_err(|_| format!("\"{date}\" is not a valid date"))
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::{Category, RawTransaction, TransactionType};

    /// Create a transaction with placeholder ID, name and category.
    pub(crate) fn raw_transaction(
        amount: &str,
        transaction_type: TransactionType,
        date: &str,
    ) -> RawTransaction {
        RawTransaction {
            id: format!("{amount}-{date}"),
            name: "Test transaction".to_owned(),
            amount: amount.to_owned(),
            transaction_type,
            category: Category {
                name: "Vendas".to_owned(),
                icon: "dollar-sign".to_owned(),
            },
            date: date.to_owned(),
        }
    }
}
