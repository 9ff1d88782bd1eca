//! EPC QR (SCT) payload generation.
//!
//! Serializes SEPA Credit Transfer parameters into the fixed 11-line EPC
//! QR text payload. The output is opaque bytes for any QR image encoder.
//!
//! Building is deliberately separate from validating: reconciliation and
//! preview flows construct payloads from values that have not been (or
//! will never be) validated, so nothing here checks the BIC, the IBAN or
//! the sign of the amount. Validate with [`crate::iban`] / [`crate::ogm`]
//! before showing a payload to a payer.
//!
//! # Example
//!
//! ```
//! use begiro::epc::EpcPayment;
//! use rust_decimal_macros::dec;
//!
//! let payload = EpcPayment::new("BBRUBEBB", "Test Coop", "BE68539007547034", dec!(10.5))
//!     .reference("+++001/0000/04221+++")
//!     .build_payload();
//! assert_eq!(payload.split('\n').count(), 11);
//! ```

mod payload;

pub use payload::EpcPayment;
