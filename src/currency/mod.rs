//! Display formatting for amounts, percentages, and dates.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::ledger::month::month_label;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub date_format: DateFormatStyle,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            date_format: DateFormatStyle::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateFormatStyle {
    Short,
    Medium,
    Long,
}

fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

fn minor_units_for(code: &str) -> u32 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Renders `value` with a fixed number of decimals and grouped thousands.
pub fn format_number(locale: &LocaleConfig, value: Decimal, precision: u32) -> String {
    let rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.*}", precision as usize, rounded.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };

    let mut out = String::new();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, locale.grouping_separator));
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// `$1,234.56` style; negatives carry a leading minus before the symbol.
pub fn format_currency(amount: Decimal, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format_number(locale, amount.abs(), precision);
    let symbol = symbol_for(code.as_str());
    let negative = amount.is_sign_negative()
        && !amount
            .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
            .is_zero();
    let separator = if symbol.chars().all(char::is_alphabetic) { " " } else { "" };
    if negative {
        format!("-{}{}{}", symbol, separator, body)
    } else {
        format!("{}{}{}", symbol, separator, body)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// `January 2025`.
pub fn format_month_heading(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub fn format_date(locale: &LocaleConfig, date: NaiveDate) -> String {
    match locale.date_format {
        DateFormatStyle::Short => date.format("%Y-%m-%d").to_string(),
        DateFormatStyle::Medium => format!(
            "{} {:02}, {}",
            month_label(date.month()),
            date.day(),
            date.year()
        ),
        DateFormatStyle::Long => date.format("%A, %B %-d, %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(value: &str) -> String {
        format_currency(
            value.parse().unwrap(),
            &CurrencyCode::default(),
            &LocaleConfig::default(),
        )
    }

    #[test]
    fn formats_dollars_with_grouping() {
        assert_eq!(usd("1234.56"), "$1,234.56");
        assert_eq!(usd("1000000"), "$1,000,000.00");
        assert_eq!(usd("0.005"), "$0.01");
        assert_eq!(usd("-12"), "-$12.00");
        assert_eq!(usd("-0.001"), "$0.00");
    }

    #[test]
    fn respects_minor_units_and_separators() {
        let locale = LocaleConfig {
            decimal_separator: ',',
            grouping_separator: '.',
            ..LocaleConfig::default()
        };
        assert_eq!(
            format_currency(Decimal::new(123456789, 2), &CurrencyCode::new("eur"), &locale),
            "€1.234.567,89"
        );
        assert_eq!(
            format_currency(Decimal::new(1500, 0), &CurrencyCode::new("JPY"), &LocaleConfig::default()),
            "¥1,500"
        );
        assert_eq!(
            format_currency(Decimal::new(5, 0), &CurrencyCode::new("CHF"), &LocaleConfig::default()),
            "CHF 5.00"
        );
    }

    #[test]
    fn formats_dates_and_headings() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        assert_eq!(format_month_heading(date), "January 2025");
        assert_eq!(format_date(&LocaleConfig::default(), date), "Jan 07, 2025");
        let long = LocaleConfig {
            date_format: DateFormatStyle::Long,
            ..LocaleConfig::default()
        };
        assert_eq!(format_date(&long, date), "Tuesday, January 7, 2025");
        assert_eq!(format_percent(42.857), "42.9%");
    }
}
