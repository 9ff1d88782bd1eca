//! Rijksregisternummer (Belgian national ID) validation and formatting.
//!
//! The number is 11 digits: a 6-digit birth-date part, a 3-digit serial
//! and a 2-digit check. The check is `97 - (first-9-digits mod 97)`; for
//! people born in or after 2000 the formula is applied with a `2`
//! prefixed to the 9-digit base. The date part alone cannot tell the two
//! centuries apart, so validation accepts either formula.

mod check;

pub use check::{format, validate};
