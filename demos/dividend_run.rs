//! Compute the per-member amounts of a dividend run at both withholding
//! rates.
//!
//! Run with: `cargo run --example dividend_run --features dividend`

use begiro::dividend::{self, REDUCED_WITHHOLDING_VVPRBIS, STANDARD_WITHHOLDING};
use rust_decimal_macros::dec;

fn main() {
    let share_value = dec!(250);
    let rate = dec!(0.04); // approved by the general assembly

    for (label, withholding) in [
        ("standard 30%", STANDARD_WITHHOLDING),
        ("VVPR-bis 15%", REDUCED_WITHHOLDING_VVPRBIS),
    ] {
        let s = dividend::split(share_value, rate, withholding);
        println!(
            "{label}: gross {:.2}  tax {:.2}  net {:.2}",
            s.gross, s.tax, s.net
        );
    }
}
