//! IBAN validation and display formatting.
//!
//! Validation applies the universal ISO 7064 MOD97-10 checksum plus the
//! generic structural envelope (2 letters, 2 check digits, 4..=30
//! alphanumerics). No per-country BBAN length table is consulted — a
//! checksum-valid IBAN from any country passes.
//!
//! # Example
//!
//! ```
//! use begiro::iban;
//!
//! assert!(iban::validate("BE68539007547034"));
//! assert!(!iban::validate("BE68539007547035"));
//! assert_eq!(iban::format("be68539007547034"), "BE68 5390 0754 7034");
//! ```

mod check;

pub use check::{format, normalize, validate};
