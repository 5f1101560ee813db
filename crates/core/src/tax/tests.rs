//! Tests for tax calculation.

use mandap_shared::types::TaxRateId;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::book::TaxRateBook;
use super::error::TaxError;
use super::service::TaxCalculator;
use super::types::{TaxCalculation, TaxSelection};

#[test]
fn test_eighteen_percent_split() {
    let result = TaxCalculator::calculate(dec!(1000), dec!(18)).unwrap();

    assert_eq!(result.base_amount, dec!(1000));
    assert_eq!(result.tax_percentage, dec!(18));
    assert_eq!(result.tax_amount, dec!(180));
    assert_eq!(result.cgst_amount, dec!(90));
    assert_eq!(result.sgst_amount, dec!(90));
    assert_eq!(result.total_amount, dec!(1180));
}

#[test]
fn test_fractional_amounts_stay_exact() {
    let result = TaxCalculator::calculate(dec!(999.99), dec!(5)).unwrap();

    assert_eq!(result.tax_amount, dec!(49.9995));
    assert_eq!(result.cgst_amount, dec!(24.99975));
    assert_eq!(result.total_amount, dec!(1049.9895));
}

#[test]
fn test_negative_inputs_rejected() {
    assert_eq!(
        TaxCalculator::calculate(dec!(-1), dec!(18)),
        Err(TaxError::NegativeAmount(dec!(-1)))
    );
    assert_eq!(
        TaxCalculator::calculate(dec!(100), dec!(-18)),
        Err(TaxError::NegativePercentage(dec!(-18)))
    );
}

#[test]
fn test_no_tax_selection() {
    let book = TaxRateBook::new();
    let result = TaxCalculator::calculate_for(dec!(1000), TaxSelection::None, &book).unwrap();

    assert_eq!(result, TaxCalculation::untaxed(dec!(1000)));
    assert_eq!(result.tax_amount, Decimal::ZERO);
    assert_eq!(result.cgst_amount, Decimal::ZERO);
    assert_eq!(result.sgst_amount, Decimal::ZERO);
    assert_eq!(result.total_amount, dec!(1000));
}

#[test]
fn test_unknown_rate_means_no_tax() {
    let mut book = TaxRateBook::new();
    book.add("GST 18%", dec!(18)).unwrap();

    let result =
        TaxCalculator::calculate_for(dec!(1000), TaxSelection::Rate(TaxRateId::new()), &book)
            .unwrap();

    assert_eq!(result, TaxCalculation::untaxed(dec!(1000)));
}

#[test]
fn test_selected_rate_applies() {
    let mut book = TaxRateBook::new();
    let rate = book.add("GST 12%", dec!(12)).unwrap();

    let result =
        TaxCalculator::calculate_for(dec!(2500), TaxSelection::Rate(rate.id), &book).unwrap();

    assert_eq!(result.tax_amount, dec!(300));
    assert_eq!(result.cgst_amount, dec!(150));
    assert_eq!(result.total_amount, dec!(2800));
}

#[test]
fn test_recalculates_after_rate_removed() {
    let mut book = TaxRateBook::new();
    let rate = book.add("GST 18%", dec!(18)).unwrap();
    let selection = TaxSelection::Rate(rate.id);

    let before = TaxCalculator::calculate_for(dec!(1000), selection, &book).unwrap();
    book.remove(rate.id);
    let after = TaxCalculator::calculate_for(dec!(1000), selection, &book).unwrap();

    assert_eq!(before.total_amount, dec!(1180));
    assert_eq!(after.total_amount, dec!(1000));
}

#[test]
fn test_selection_parsing() {
    assert_eq!("none".parse::<TaxSelection>().unwrap(), TaxSelection::None);
    assert_eq!("NONE".parse::<TaxSelection>().unwrap(), TaxSelection::None);
    assert_eq!("".parse::<TaxSelection>().unwrap(), TaxSelection::None);

    let id = TaxRateId::new();
    assert_eq!(
        id.to_string().parse::<TaxSelection>().unwrap(),
        TaxSelection::Rate(id)
    );
    assert!("gst".parse::<TaxSelection>().is_err());
    assert_eq!(TaxSelection::None.to_string(), "none");
    assert_eq!(TaxSelection::from(Some(id)), TaxSelection::Rate(id));
    assert_eq!(TaxSelection::from(None::<TaxRateId>), TaxSelection::None);
}

/// Strategy to generate non-negative amounts with paise (0.00 to 10,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000).prop_map(|paise| Decimal::new(paise, 2))
}

/// Strategy to generate whole-percent rates (0 to 100).
fn percentage() -> impl Strategy<Value = Decimal> {
    (0i64..=100).prop_map(Decimal::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// CGST and SGST are equal halves of the tax, and total = base + tax.
    #[test]
    fn prop_split_is_even_and_total_adds_up(base in amount(), pct in percentage()) {
        let result = TaxCalculator::calculate(base, pct).unwrap();

        prop_assert_eq!(result.cgst_amount, result.sgst_amount);
        prop_assert_eq!(result.cgst_amount + result.sgst_amount, result.tax_amount);
        prop_assert_eq!(result.total_amount, base + result.tax_amount);
        prop_assert_eq!(result.tax_amount * dec!(100), base * pct);
    }

    /// A zero rate never adds tax.
    #[test]
    fn prop_zero_rate_is_untaxed(base in amount()) {
        let result = TaxCalculator::calculate(base, Decimal::ZERO).unwrap();
        prop_assert_eq!(result.tax_amount, Decimal::ZERO);
        prop_assert_eq!(result.total_amount, base);
    }
}
