use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::OgmError;

/// Upper bound (exclusive) for the 7-digit sequence slot.
const SEQUENCE_LIMIT: u64 = 10_000_000;

/// A parsed, checksum-verified OGM structured communication.
///
/// The canonical textual form is `+++PPP/SSSS/SSSSS+++`: a 3-digit prefix,
/// a 7-digit zero-padded sequence, and the 2-digit check value re-sliced
/// into 3/4/5 display groups. The check alphabet is 1..=97 — never 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OgmCode {
    /// Issue prefix, 0..=999 (displayed zero-padded to 3 digits).
    pub prefix: u16,
    /// Member/obligation sequence, 0..=9_999_999.
    pub sequence: u32,
    /// Check value, `base mod 97` with 0 represented as 97.
    pub check: u8,
}

impl OgmCode {
    /// Parse formatted or raw text into a verified [`OgmCode`].
    ///
    /// Returns `None` when the stripped text is not 12 digits or the
    /// checksum does not hold. Use [`parse`] for the raw key without
    /// verification.
    pub fn parse(text: &str) -> Option<Self> {
        let raw = strip(text);
        if raw.len() != 12 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let base: u64 = raw[..10].parse().ok()?;
        let claimed: u8 = raw[10..].parse().ok()?;
        if check_of(base) != claimed {
            return None;
        }
        Some(Self {
            prefix: (base / SEQUENCE_LIMIT) as u16,
            sequence: (base % SEQUENCE_LIMIT) as u32,
            check: claimed,
        })
    }

    /// The 10-digit numeric base (prefix and sequence combined).
    pub fn base(&self) -> u64 {
        u64::from(self.prefix) * SEQUENCE_LIMIT + u64::from(self.sequence)
    }

    /// The raw 12-digit key, without display grouping.
    pub fn raw(&self) -> String {
        format!("{:010}{:02}", self.base(), self.check)
    }
}

impl fmt::Display for OgmCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&group(&self.raw()))
    }
}

/// Generate a canonical OGM reference for a prefix and sequence.
///
/// The prefix must be exactly 3 decimal digits and the sequence must fit
/// in 7 digits; out-of-range input is an error, never a truncation.
///
/// # Example
///
/// ```
/// use begiro::ogm;
///
/// assert_eq!(ogm::generate("001", 42).unwrap(), "+++001/0000/04221+++");
/// assert!(ogm::generate("001", 10_000_000).is_err());
/// ```
pub fn generate(prefix: &str, sequence: u64) -> Result<String, OgmError> {
    if prefix.len() != 3 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OgmError::InvalidPrefix(prefix.to_string()));
    }
    if sequence >= SEQUENCE_LIMIT {
        return Err(OgmError::SequenceOutOfRange(sequence));
    }
    let prefix_num: u64 = prefix
        .parse()
        .map_err(|_| OgmError::InvalidPrefix(prefix.to_string()))?;
    let base = prefix_num * SEQUENCE_LIMIT + sequence;
    Ok(group(&format!("{base:010}{:02}", check_of(base))))
}

/// Validate an OGM reference, formatted or raw.
///
/// Strips `+`, `/` and whitespace, requires exactly 12 remaining decimal
/// digits, and recomputes the checksum. Malformed input is simply `false`.
pub fn validate(text: &str) -> bool {
    let raw = strip(text);
    if raw.len() != 12 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let Ok(base) = raw[..10].parse::<u64>() else {
        return false;
    };
    let Ok(claimed) = raw[10..].parse::<u8>() else {
        return false;
    };
    check_of(base) == claimed
}

/// Strip display formatting and return the raw digit key.
///
/// No validation is performed — reconciliation wants the raw key even for
/// references that fail the checksum.
pub fn parse(text: &str) -> String {
    strip(text)
}

/// Regroup a raw 12-digit key into the canonical `+++XXX/XXXX/XXXXX+++`
/// display form. Anything that is not exactly 12 digits is returned
/// unchanged; this is a display helper, not a validator.
pub fn format(raw: &str) -> String {
    if raw.len() == 12 && raw.bytes().all(|b| b.is_ascii_digit()) {
        group(raw)
    } else {
        raw.to_string()
    }
}

fn strip(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '+' | '/') && !c.is_whitespace())
        .collect()
}

fn check_of(base: u64) -> u8 {
    match (base % 97) as u8 {
        0 => 97,
        r => r,
    }
}

fn group(raw12: &str) -> String {
    format!("+++{}/{}/{}+++", &raw12[..3], &raw12[3..7], &raw12[7..12])
}
