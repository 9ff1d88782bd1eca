//! # begiro
//!
//! Belgian payment-identifier codecs for cooperative shareholding and SEPA
//! workflows: OGM structured communication, IBAN, Rijksregisternummer,
//! BTW (VAT) numbers, EPC QR payloads, and dividend withholding arithmetic.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Every operation is a pure function over immutable inputs: no I/O, no
//! state, no configuration. Validators return `bool`, formatters pass
//! malformed input through unchanged, and only generators return errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use begiro::{iban, ogm};
//!
//! // Issue a structured payment reference for member 42.
//! let code = ogm::generate("001", 42).unwrap();
//! assert_eq!(code, "+++001/0000/04221+++");
//! assert!(ogm::validate(&code));
//!
//! // Incoming transfers carry the reference back, often mangled.
//! assert!(ogm::validate("001 0000 04221"));
//! assert_eq!(ogm::parse("+++001/0000/04221+++"), "001000004221");
//!
//! assert!(iban::validate("BE68 5390 0754 7034"));
//! assert_eq!(iban::format("be68539007547034"), "BE68 5390 0754 7034");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | OGM codec, IBAN, Rijksregisternummer, BTW validation |
//! | `epc` | EPC QR (SCT) payload builder |
//! | `dividend` | Dividend gross/tax/net split calculator |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod ogm;

#[cfg(feature = "core")]
pub mod iban;

#[cfg(feature = "core")]
pub mod rijksregister;

#[cfg(feature = "core")]
pub mod vat;

#[cfg(feature = "epc")]
pub mod epc;

#[cfg(feature = "dividend")]
pub mod dividend;
