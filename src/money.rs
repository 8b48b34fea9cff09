//! Currency formatting for money inputs and read-only amounts.
//!
//! Two unrelated jobs share this module because both speak "money":
//!
//! - [`format_money_input`] rewrites what the user typed into a `.money-input`
//!   field as a plain `0.00` amount, treating the digits as cents.
//! - [`format_money`] renders an amount for display using pt-BR conventions
//!   (`R$ 1.234,50`), the way `Intl.NumberFormat('pt-BR')` does.
//!
//! Both are pure so the page wiring and other scripts can share them.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// Default ISO 4217 code for display formatting.
pub const DEFAULT_CURRENCY: &str = "BRL";

/// Separates the currency symbol from the amount (U+00A0).
const NBSP: char = '\u{a0}';

/// Error returned by [`format_money`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    /// The currency code is not three ASCII letters.
    #[error("invalid currency code: {0:?}")]
    InvalidCurrency(String),
}

/// What an input with no digits at all turns into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyAmount {
    /// Render `0.00`.
    #[default]
    Zero,
    /// Render `NaN`, matching the legacy page script.
    Nan,
}

/// Element kinds a `.money-input` can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Input,
    TextArea,
}

impl FieldKind {
    /// Classify an element by its tag name; `None` for elements without a value.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("input") {
            Some(Self::Input)
        } else if tag.eq_ignore_ascii_case("textarea") {
            Some(Self::TextArea)
        } else {
            None
        }
    }
}

/// Reformat raw money-input text as cents divided by 100.
///
/// Every non-digit is dropped, the remaining digits are read as a count of
/// cents and the result has exactly two decimals with a `.` separator. The
/// division happens on the digit string, so long inputs stay exact.
pub fn format_money_input(raw: &str, empty: EmptyAmount) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return match empty {
            EmptyAmount::Zero => "0.00".to_owned(),
            EmptyAmount::Nan => "NaN".to_owned(),
        };
    }

    let significant = digits.trim_start_matches('0');
    let padded = format!("{significant:0>3}");
    let (units, cents) = padded.split_at(padded.len() - 2);
    format!("{units}.{cents}")
}

/// Format `value` as a pt-BR currency string for the ISO 4217 `currency`.
///
/// `format_money(1234.5, "BRL")` is `"R$\u{a0}1.234,50"`.
///
/// # Errors
///
/// Returns [`MoneyError::InvalidCurrency`] when `currency` is not three
/// ASCII letters.
pub fn format_money(value: f64, currency: &str) -> Result<String, MoneyError> {
    if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(MoneyError::InvalidCurrency(currency.to_owned()));
    }
    let code = currency.to_ascii_uppercase();
    let (symbol, fraction_digits) = currency_info(&code);
    Ok(render(value, symbol.unwrap_or(&code), fraction_digits))
}

/// Format `value` in Brazilian reais.
pub fn format_currency(value: f64) -> String {
    render(value, "R$", 2)
}

/// pt-BR display symbol and ISO 4217 minor units for an upper-case code.
///
/// Codes without a dedicated symbol return `None` and display as themselves.
fn currency_info(code: &str) -> (Option<&'static str>, usize) {
    let symbol = match code {
        "BRL" => Some("R$"),
        "USD" => Some("US$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("JP¥"),
        "CAD" => Some("CA$"),
        "AUD" => Some("AU$"),
        "CNY" => Some("CN¥"),
        "MXN" => Some("MX$"),
        "HKD" => Some("HK$"),
        "NZD" => Some("NZ$"),
        "TWD" => Some("NT$"),
        "KRW" => Some("₩"),
        "ILS" => Some("₪"),
        "INR" => Some("₹"),
        "VND" => Some("₫"),
        _ => None,
    };
    (symbol, minor_units(code))
}

/// ISO 4217 minor units. Everything not listed uses two.
fn minor_units(code: &str) -> usize {
    match code {
        "BIF" | "CLP" | "DJF" | "GNF" | "ISK" | "JPY" | "KMF" | "KRW" | "PYG" | "RWF" | "UGX" | "UYI" | "VND"
        | "VUV" | "XAF" | "XOF" | "XPF" => 0,
        "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
        "CLF" | "UYW" => 4,
        _ => 2,
    }
}

fn render(value: f64, symbol: &str, fraction_digits: usize) -> String {
    let sign = if value.is_sign_negative() && !value.is_nan() { "-" } else { "" };
    let body = if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        "∞".to_owned()
    } else {
        decimal_body(value.abs(), fraction_digits)
    };
    format!("{sign}{symbol}{NBSP}{body}")
}

/// Round half away from zero and lay out with `.` grouping and `,` decimals.
///
/// Rounding works on the shortest decimal form of `abs` (what `Display`
/// prints, never in exponent form), so `1.005` rounds to `1.01` even though
/// the nearest double sits just below it.
fn decimal_body(abs: f64, fraction_digits: usize) -> String {
    let shortest = format!("{abs}");
    let (int_digits, frac_digits) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_digits
        .bytes()
        .chain(frac_digits.bytes().chain(std::iter::repeat(b'0')).take(fraction_digits))
        .collect();
    if frac_digits.as_bytes().get(fraction_digits).is_some_and(|&d| d >= b'5') {
        increment_digits(&mut digits);
    }

    let split = digits.len() - fraction_digits;
    let int_part: String = digits[..split].iter().map(|&d| char::from(d)).collect();
    let frac_part: String = digits[split..].iter().map(|&d| char::from(d)).collect();

    let grouped = group_thousands(&int_part);
    if frac_part.is_empty() {
        grouped
    } else {
        format!("{grouped},{frac_part}")
    }
}

/// Add one to an ASCII decimal digit string, carrying leftward.
fn increment_digits(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
