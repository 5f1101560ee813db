//! Display formatting for amounts and dates.
//!
//! Amounts follow the Indian numbering system (lakh/crore grouping), so
//! `1234567.5` renders as `₹12,34,567.50`.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as Indian rupees with two decimals.
#[must_use]
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if negative { "-" } else { "" };
    format!("{sign}₹{}.{fraction}", group_indian(whole))
}

/// Groups the integer part as `XX,XX,XXX`.
fn group_indian(whole: &str) -> String {
    if whole.len() <= 3 {
        return whole.to_string();
    }

    let (head, tail) = whole.split_at(whole.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

/// Formats a date as `01 Apr 2024`.
#[must_use]
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "₹0.00")]
    #[case(dec!(5), "₹5.00")]
    #[case(dec!(999.9), "₹999.90")]
    #[case(dec!(1000), "₹1,000.00")]
    #[case(dec!(100000), "₹1,00,000.00")]
    #[case(dec!(1234567.5), "₹12,34,567.50")]
    #[case(dec!(123456789.123), "₹12,34,56,789.12")]
    #[case(dec!(-1180), "-₹1,180.00")]
    fn test_format_inr(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_inr(amount), expected);
    }

    #[test]
    fn test_format_inr_rounds_half_away_from_zero() {
        assert_eq!(format_inr(dec!(10.005)), "₹10.01");
        assert_eq!(format_inr(dec!(-0.001)), "₹0.00");
    }

    #[test]
    fn test_format_display_date() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        assert_eq!(format_display_date(date), "01 Apr 2024");
    }
}
