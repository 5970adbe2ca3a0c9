//! Fixed display settings for the Brazilian Portuguese locale and the Brazilian Real.
//!
//! The dashboard always renders amounts and dates for pt-BR/BRL, so these are
//! compile-time constants rather than user settings.

use time::Month;

/// The symbol placed before every currency amount.
pub const CURRENCY_SYMBOL: &str = "R$";

/// The no-break space between the currency symbol and the digits.
pub const CURRENCY_SPACE: char = '\u{a0}';

/// Groups the integer part of amounts, e.g. "1.000".
pub const THOUSANDS_SEPARATOR: char = '.';

/// Separates the integer part from the cents, e.g. "50,00".
pub const DECIMAL_SEPARATOR: char = ',';

/// Shown in place of a date when a highlight has no qualifying transactions.
pub const NO_TRANSACTIONS_LABEL: &str = "Não há transações";

/// Prefix of the entries highlight's last transaction label.
pub const LAST_ENTRY_PREFIX: &str = "Última entrada dia";

/// Prefix of the expenses highlight's last transaction label.
pub const LAST_EXPENSE_PREFIX: &str = "Última saída dia";

/// Prefix of the total highlight's interval label.
pub const TOTAL_INTERVAL_PREFIX: &str = "01 à";

/// The long, lowercase pt-BR name of `month`, e.g. "abril".
pub fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "janeiro",
        Month::February => "fevereiro",
        Month::March => "março",
        Month::April => "abril",
        Month::May => "maio",
        Month::June => "junho",
        Month::July => "julho",
        Month::August => "agosto",
        Month::September => "setembro",
        Month::October => "outubro",
        Month::November => "novembro",
        Month::December => "dezembro",
    }
}
