//! Formatting and Validation Helpers
//!
//! Portuguese-locale formatting (currency, dates), NIF validation and the
//! sale totals arithmetic shared by the pages.

use chrono::{NaiveDate, NaiveDateTime};

/// Default IVA rate in percent.
pub const DEFAULT_TAX_RATE: f64 = 23.0;

/// Stock thresholds applied when a product does not carry its own.
pub const DEFAULT_MIN_STOCK: i32 = 5;
pub const DEFAULT_MAX_STOCK: i32 = 100;

/// Format a value as pt-PT currency: grouped thousands with `.`, comma
/// decimals, trailing euro symbol. `1234.5` becomes `"1.234,50 €"`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{},{:02} €", sign, grouped, fraction)
}

/// Format a date the Portuguese way: `dd/mm/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a date and time the Portuguese way: `dd/mm/yyyy HH:MM`.
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%d/%m/%Y %H:%M").to_string()
}

/// Validate a Portuguese tax number (NIF). Empty input is valid, the field
/// is optional. Non-digits are ignored, so `"123 456 789"` passes.
pub fn validate_nif(tax_number: &str) -> bool {
    if tax_number.trim().is_empty() {
        return true;
    }

    let digits: Vec<u32> = tax_number.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 9 {
        return false;
    }

    let check_sum: u32 = digits[..8]
        .iter()
        .enumerate()
        .map(|(i, digit)| digit * (9 - i as u32))
        .sum();
    let mut check_digit = 11 - (check_sum % 11);
    if check_digit >= 10 {
        check_digit = 0;
    }

    check_digit == digits[8]
}

/// One line of a sale, as entered in the sale form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineItem {
    pub quantity: u32,
    pub unit_price: f64,
    pub tax_rate: f64,
}

/// Subtotal, IVA amount and grand total for a set of line items.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub tax_total: f64,
    pub total: f64,
}

/// Compute sale totals: per-item total is quantity × unit price, IVA is
/// applied per item at its own rate.
pub fn calculate_totals(items: &[LineItem]) -> Totals {
    let mut totals = Totals::default();

    for item in items {
        let item_total = item.quantity as f64 * item.unit_price;
        totals.subtotal += item_total;
        totals.tax_total += item_total * (item.tax_rate / 100.0);
    }

    totals.total = totals.subtotal + totals.tax_total;
    totals
}

/// Stock level classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockStatus {
    Baixo,
    Normal,
    Alto,
}

impl StockStatus {
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Baixo => "Stock Baixo",
            StockStatus::Normal => "Stock Normal",
            StockStatus::Alto => "Stock Alto",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StockStatus::Baixo => "text-red-400",
            StockStatus::Normal => "text-green-400",
            StockStatus::Alto => "text-yellow-400",
        }
    }
}

/// Classify a stock quantity against its thresholds.
pub fn stock_status(quantity: i32, min_stock: i32, max_stock: i32) -> StockStatus {
    if quantity <= min_stock {
        StockStatus::Baixo
    } else if quantity >= max_stock {
        StockStatus::Alto
    } else {
        StockStatus::Normal
    }
}

/// Parse a form field as f64, falling back on empty or malformed input.
pub fn safe_f64(value: &str, default: f64) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return default;
    }
    // Accept a comma decimal separator, the way users type prices here
    trimmed.replace(',', ".").parse().unwrap_or(default)
}

/// Parse a form field as u32, falling back on empty or malformed input.
pub fn safe_u32(value: &str, default: u32) -> u32 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return default;
    }
    trimmed.parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands_and_uses_comma_decimals() {
        assert_eq!(format_currency(1234.5), "1.234,50 €");
        assert_eq!(format_currency(0.0), "0,00 €");
        assert_eq!(format_currency(7.125), "7,13 €");
        assert_eq!(format_currency(1_000_000.0), "1.000.000,00 €");
    }

    #[test]
    fn currency_handles_negative_amounts() {
        assert_eq!(format_currency(-1234.5), "-1.234,50 €");
    }

    #[test]
    fn dates_format_portuguese_style() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date(date), "07/03/2025");

        let datetime = date.and_hms_opt(14, 5, 0).unwrap();
        assert_eq!(format_datetime(datetime), "07/03/2025 14:05");
    }

    #[test]
    fn nif_check_digit_is_validated() {
        assert!(validate_nif("123456789"));
        assert!(validate_nif("123 456 789"));
        assert!(!validate_nif("123456780"));
        assert!(!validate_nif("12345"));
    }

    #[test]
    fn empty_nif_is_accepted() {
        assert!(validate_nif(""));
        assert!(validate_nif("   "));
    }

    #[test]
    fn totals_apply_per_item_tax() {
        let items = [
            LineItem {
                quantity: 2,
                unit_price: 10.0,
                tax_rate: 23.0,
            },
            LineItem {
                quantity: 1,
                unit_price: 100.0,
                tax_rate: 6.0,
            },
        ];

        let totals = calculate_totals(&items);
        assert!((totals.subtotal - 120.0).abs() < 1e-9);
        assert!((totals.tax_total - (20.0 * 0.23 + 100.0 * 0.06)).abs() < 1e-9);
        assert!((totals.total - (totals.subtotal + totals.tax_total)).abs() < 1e-9);
    }

    #[test]
    fn empty_sale_has_zero_totals() {
        assert_eq!(calculate_totals(&[]), Totals::default());
    }

    #[test]
    fn stock_is_classified_against_thresholds() {
        assert_eq!(stock_status(3, 5, 100), StockStatus::Baixo);
        assert_eq!(stock_status(5, 5, 100), StockStatus::Baixo);
        assert_eq!(stock_status(50, 5, 100), StockStatus::Normal);
        assert_eq!(stock_status(100, 5, 100), StockStatus::Alto);
    }

    #[test]
    fn lenient_parsing_accepts_comma_decimals() {
        assert_eq!(safe_f64("12,50", 0.0), 12.5);
        assert_eq!(safe_f64("12.50", 0.0), 12.5);
        assert_eq!(safe_f64("", 4.0), 4.0);
        assert_eq!(safe_f64("abc", 4.0), 4.0);

        assert_eq!(safe_u32("7", 1), 7);
        assert_eq!(safe_u32("", 1), 1);
        assert_eq!(safe_u32("-2", 1), 1);
    }
}
