//! Turns a user's stored transactions into the figures shown on the dashboard.
//!
//! The summary is a pure function of the stored transactions: loading it twice
//! without the stored data changing gives identical results.

use serde::{Deserialize, Serialize};
use time::{Date, UtcOffset};

use crate::{
    Error,
    dashboard::aggregation::{DatedTransaction, Totals, last_transaction_date},
    format::{format_currency, format_day_and_month, format_short_date},
    locale::{LAST_ENTRY_PREFIX, LAST_EXPENSE_PREFIX, NO_TRANSACTIONS_LABEL, TOTAL_INTERVAL_PREFIX},
    storage::{KeyValueStore, get_transactions},
    transaction::{Category, RawTransaction, TransactionType},
    user::UserId,
};

/// A transaction with its amount and date formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTransaction {
    /// The stored transaction's ID.
    pub id: String,
    /// The stored transaction's name.
    pub name: String,
    /// The amount as currency, e.g. "R$\u{a0}1.000,00".
    pub amount: String,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The stored transaction's category.
    pub category: Category,
    /// The short local date, e.g. "13/04/21".
    pub date: String,
}

/// One of the summary cards: a formatted amount and a label saying how recent it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightFigure {
    /// The amount as currency.
    pub amount: String,
    /// e.g. "Última entrada dia 13 de abril".
    pub last_transaction: String,
}

/// The entries, expenses and total summary cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlights {
    /// Income.
    pub entries: HighlightFigure,
    /// Spending.
    pub expenses: HighlightFigure,
    /// Income minus spending.
    pub total: HighlightFigure,
}

/// Everything the dashboard displays about a user's transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// All transactions, in the order they were stored.
    pub transactions: Vec<FormattedTransaction>,
    /// The three summary cards.
    pub highlights: Highlights,
    /// The numbers behind the summary cards.
    pub totals: Totals,
}

/// Read `user_id`'s transactions from `store` and summarize them.
///
/// A user with no stored transactions gets an empty summary.
///
/// # Errors
///
/// Returns [Error::MalformedData] if the stored transactions cannot be parsed,
/// or any error from reading the store.
pub fn load_and_summarize(
    store: &impl KeyValueStore,
    user_id: &UserId,
    local_offset: UtcOffset,
) -> Result<DashboardSummary, Error> {
    let transactions = get_transactions(store, user_id)?;

    let summary = summarize(&transactions, local_offset)?;

    tracing::debug!(
        "summarized {} transactions for user {user_id}",
        summary.transactions.len()
    );

    Ok(summary)
}

/// Summarize `transactions`, with dates shown in `local_offset`.
///
/// # Errors
///
/// Returns [Error::MalformedData] if any amount or date cannot be parsed, or
/// the amounts add up to more than can be shown.
pub fn summarize(
    transactions: &[RawTransaction],
    local_offset: UtcOffset,
) -> Result<DashboardSummary, Error> {
    let mut totals = Totals::default();
    let mut formatted = Vec::with_capacity(transactions.len());
    let mut dated = Vec::with_capacity(transactions.len());

    for transaction in transactions {
        let amount = transaction.amount_value()?;
        let date_time = transaction.date_time(local_offset)?;

        totals.add(transaction.transaction_type, amount)?;
        formatted.push(format_transaction(transaction, amount, date_time.date())?);
        dated.push(DatedTransaction {
            transaction_type: transaction.transaction_type,
            date_time,
        });
    }

    let last_entry = last_transaction_date(&dated, TransactionType::Positive);
    let last_expense = last_transaction_date(&dated, TransactionType::Negative);

    let highlights = Highlights {
        entries: HighlightFigure {
            amount: format_currency(totals.entries)?,
            last_transaction: last_transaction_label(LAST_ENTRY_PREFIX, last_entry),
        },
        expenses: HighlightFigure {
            amount: format_currency(totals.expenses)?,
            last_transaction: last_transaction_label(LAST_EXPENSE_PREFIX, last_expense),
        },
        total: HighlightFigure {
            amount: format_currency(totals.total)?,
            last_transaction: total_interval_label(last_expense),
        },
    };

    Ok(DashboardSummary {
        transactions: formatted,
        highlights,
        totals,
    })
}

fn format_transaction(
    transaction: &RawTransaction,
    amount: f64,
    date: Date,
) -> Result<FormattedTransaction, Error> {
    Ok(FormattedTransaction {
        id: transaction.id.clone(),
        name: transaction.name.clone(),
        amount: format_currency(amount)?,
        transaction_type: transaction.transaction_type,
        category: transaction.category.clone(),
        date: format_short_date(date),
    })
}

fn last_transaction_label(prefix: &str, date: Option<Date>) -> String {
    match date {
        Some(date) => format!("{prefix} {}", format_day_and_month(date)),
        None => NO_TRANSACTIONS_LABEL.to_owned(),
    }
}

/// The period label of the total card.
///
/// The period ends at the most recent *expense*, not the most recent
/// transaction of either type, so a user with only income sees the
/// no-transactions label here.
fn total_interval_label(last_expense: Option<Date>) -> String {
    match last_expense {
        Some(date) => format!("{TOTAL_INTERVAL_PREFIX} {}", format_day_and_month(date)),
        None => NO_TRANSACTIONS_LABEL.to_owned(),
    }
}
