//! Locale-sensitive formatting of amounts and dates for display.

use time::Date;

use crate::{
    Error,
    locale::{CURRENCY_SPACE, CURRENCY_SYMBOL, DECIMAL_SEPARATOR, THOUSANDS_SEPARATOR, month_name},
};

/// Format `number` as Brazilian Real, e.g. "R$\u{a0}1.000,00" or "-R$\u{a0}50,00".
///
/// The amount is rounded to the nearest cent first so that the integer part and
/// the cents always agree, e.g. 0.999 is "R$\u{a0}1,00".
///
/// # Errors
///
/// Returns [Error::MalformedData] if `number` is not finite or has more whole
/// cents than fit in a `u128`.
pub fn format_currency(number: f64) -> Result<String, Error> {
    let cents = (number.abs() * 100.0).round();

    // `u128::MAX as f64` rounds up to 2^128, which is itself out of range.
    if !cents.is_finite() || cents >= u128::MAX as f64 {
        return Err(Error::MalformedData(format!("{number} is too large to show as currency")));
    }

    let cents = cents as u128;
    let whole = cents / 100;
    let fraction = cents % 100;

    let sign = if number < 0.0 && cents != 0 { "-" } else { "" };

    Ok(format!(
        "{sign}{CURRENCY_SYMBOL}{CURRENCY_SPACE}{}{DECIMAL_SEPARATOR}{fraction:02}",
        group_thousands(whole)
    ))
}

/// Insert the thousands separator into a whole number, e.g. 12000 -> "12.000".
fn group_thousands(whole: u128) -> String {
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }

        grouped.push(digit);
    }

    grouped
}

/// Format `date` as a two digit day, month and year, e.g. "13/04/21".
pub fn format_short_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{:02}",
        date.day(),
        u8::from(date.month()),
        date.year().rem_euclid(100)
    )
}

/// Format `date` as the day of the month followed by the long month name, e.g. "13 de abril".
pub fn format_day_and_month(date: Date) -> String {
    format!("{} de {}", date.day(), month_name(date.month()))
}
