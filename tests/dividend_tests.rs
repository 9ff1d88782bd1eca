#![cfg(feature = "dividend")]

//! Dividend-run scenarios: the per-member amounts a general assembly
//! decision turns into payment and fiscal-document lines.

use begiro::dividend::{self, DividendSplit, REDUCED_WITHHOLDING_VVPRBIS, STANDARD_WITHHOLDING};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn assembly_approved_run() {
    // 4% dividend on a 250 EUR share, standard withholding
    let s = dividend::split(dec!(250), dec!(0.04), STANDARD_WITHHOLDING);
    assert_eq!(s.gross, dec!(10.00));
    assert_eq!(s.tax, dec!(3.00));
    assert_eq!(s.net, dec!(7.00));
}

#[test]
fn per_member_rounding_is_independent() {
    // rounding happens per member line, not on the aggregated total
    let values = [dec!(12.34), dec!(56.78), dec!(91.01)];
    let splits: Vec<DividendSplit> = values
        .iter()
        .map(|v| dividend::split(*v, dec!(0.0375), STANDARD_WITHHOLDING))
        .collect();

    for s in &splits {
        assert_eq!(s.net, s.gross - s.tax);
        assert!(s.gross.scale() <= 2);
    }

    let total_net: Decimal = splits.iter().map(|s| s.net).sum();
    let total_gross: Decimal = splits.iter().map(|s| s.gross).sum();
    let total_tax: Decimal = splits.iter().map(|s| s.tax).sum();
    assert_eq!(total_net, total_gross - total_tax);
}

#[test]
fn vvprbis_halves_the_withholding() {
    let standard = dividend::split(dec!(1000), dec!(0.05), STANDARD_WITHHOLDING);
    let reduced = dividend::split(dec!(1000), dec!(0.05), REDUCED_WITHHOLDING_VVPRBIS);
    assert_eq!(standard.gross, reduced.gross);
    assert_eq!(standard.tax, dec!(15.00));
    assert_eq!(reduced.tax, dec!(7.50));
}

#[test]
fn split_serde_round_trip() {
    let s = dividend::split(dec!(100), dec!(0.05), dec!(0.30));
    let json = serde_json::to_string(&s).unwrap();
    let back: DividendSplit = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}
