/// Strip all whitespace and uppercase, producing the raw comparison key.
pub fn normalize(iban: &str) -> String {
    iban.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Format an IBAN for display: uppercase, a space every 4 characters,
/// no trailing space. Performs no validation and never fails.
pub fn format(iban: &str) -> String {
    let raw = normalize(iban);
    let mut out = String::with_capacity(raw.len() + raw.len() / 4);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Validate an IBAN via ISO 7064 MOD97-10.
///
/// Normalizes, checks the structural envelope, moves the first 4
/// characters to the end, expands letters to their two-digit values
/// (A=10 .. Z=35) and reduces the digit string modulo 97. Valid iff the
/// remainder is 1.
pub fn validate(iban: &str) -> bool {
    let raw = normalize(iban);
    if !envelope_ok(&raw) {
        return false;
    }
    // envelope_ok guarantees ASCII, so byte slicing is char slicing
    let rearranged = [&raw[4..], &raw[..4]].concat();
    let mut digits = String::with_capacity(rearranged.len() * 2);
    for b in rearranged.bytes() {
        if b.is_ascii_digit() {
            digits.push(b as char);
        } else {
            let v = u32::from(b - b'A') + 10;
            digits.push_str(&v.to_string());
        }
    }
    mod97(&digits) == 1
}

/// Generic envelope: `[A-Z]{2}[0-9]{2}[A-Z0-9]{4,30}`.
fn envelope_ok(raw: &str) -> bool {
    let b = raw.as_bytes();
    (8..=34).contains(&b.len())
        && b[..2].iter().all(u8::is_ascii_uppercase)
        && b[2..4].iter().all(u8::is_ascii_digit)
        && b[4..]
            .iter()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
}

/// Reduce a decimal digit string modulo 97 in chunks of at most 9 digits,
/// folding the running remainder back in. A 2-digit remainder plus 9 fresh
/// digits stays far inside u64 range.
fn mod97(digits: &str) -> u64 {
    let mut rem: u64 = 0;
    for chunk in digits.as_bytes().chunks(9) {
        for &b in chunk {
            rem = rem * 10 + u64::from(b - b'0');
        }
        rem %= 97;
    }
    rem
}
