//! OGM structured communication ("gestructureerde mededeling") codec.
//!
//! The OGM is the Belgian standardized payment reference printed as
//! `+++090/9337/55493+++`. The 10 leading digits are a free-form base
//! (here: a 3-digit issue prefix plus a 7-digit member sequence) and the
//! final 2 digits are `base mod 97`, with a remainder of 0 written as 97.
//! Banks carry the reference through unchanged, which is what makes
//! automatic matching of incoming transfers possible.
//!
//! # Example
//!
//! ```
//! use begiro::ogm;
//!
//! let code = ogm::generate("090", 9_337_554).unwrap();
//! assert!(ogm::validate(&code));
//! assert!(!ogm::validate("+++090/9337/55400+++"));
//! ```

mod codec;
mod error;

pub use codec::{OgmCode, format, generate, parse, validate};
pub use error::OgmError;
