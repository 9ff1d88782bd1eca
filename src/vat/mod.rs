//! Belgian BTW/TVA (VAT) number validation and formatting.
//!
//! Enterprise numbers are 10 digits starting with `0` or `1`; only that
//! structural rule is checked here. Whether the number belongs to a real,
//! registered enterprise is a registry question, not a codec one.
//!
//! # Example
//!
//! ```
//! use begiro::vat;
//!
//! assert!(vat::validate("BE 0876.543.210"));
//! assert!(!vat::validate("9876543210"));
//! assert_eq!(vat::format("0876543210"), "BE 0876.543.210");
//! ```

mod format;

pub use format::{format, validate};
