//! Dividend gross/tax/net split arithmetic.
//!
//! Computes the amounts a dividend run reports per member: the gross
//! dividend on a share, the withholding tax ("roerende voorheffing")
//! deducted at source, and the net amount paid out.
//!
//! # Example
//!
//! ```
//! use begiro::dividend;
//! use rust_decimal_macros::dec;
//!
//! let split = dividend::split(dec!(100), dec!(0.05), dividend::STANDARD_WITHHOLDING);
//! assert_eq!(split.gross, dec!(5.00));
//! assert_eq!(split.tax, dec!(1.50));
//! assert_eq!(split.net, dec!(3.50));
//! ```

mod split;

pub use split::{DividendSplit, REDUCED_WITHHOLDING_VVPRBIS, STANDARD_WITHHOLDING, split};
