use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Standard Belgian withholding tax rate on dividends (30%).
pub const STANDARD_WITHHOLDING: Decimal = dec!(0.30);

/// Reduced VVPR-bis withholding rate for qualifying small-company
/// shares held long enough (15%).
pub const REDUCED_WITHHOLDING_VVPRBIS: Decimal = dec!(0.15);

/// Gross/tax/net amounts of one dividend payment, each rounded to the
/// cent. `net` is always exactly `gross - tax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividendSplit {
    /// Gross dividend before withholding.
    pub gross: Decimal,
    /// Withholding tax deducted at source.
    pub tax: Decimal,
    /// Net amount paid to the member.
    pub net: Decimal,
}

/// Split a dividend into gross, withholding tax and net.
///
/// `gross = share_value * dividend_rate` and `tax = gross *
/// withholding_rate`, each rounded to 2 decimals half-away-from-zero
/// BEFORE the subtraction. The rounded values are what compliance
/// documents report per line, so `net` must be their exact difference —
/// rounding only a precisely computed net can differ by a cent.
pub fn split(share_value: Decimal, dividend_rate: Decimal, withholding_rate: Decimal) -> DividendSplit {
    let gross = round_cent(share_value * dividend_rate);
    let tax = round_cent(gross * withholding_rate);
    DividendSplit {
        gross,
        tax,
        net: gross - tax,
    }
}

fn round_cent(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
