/// Century marker prefixed to the 9-digit base for post-2000 numbers.
const POST_2000_OFFSET: u64 = 2_000_000_000;

/// Format a national ID for display: `NN.NN.NN-NNN.NN`.
///
/// Input that does not strip to exactly 11 digits is returned unchanged.
/// This is a display helper only — it does not verify the checksum.
pub fn format(id: &str) -> String {
    let raw = strip(id);
    if raw.len() != 11 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return id.to_string();
    }
    format!(
        "{}.{}.{}-{}.{}",
        &raw[..2],
        &raw[2..4],
        &raw[4..6],
        &raw[6..9],
        &raw[9..]
    )
}

/// Validate a national ID, formatted or raw.
///
/// The pre-2000 and post-2000 checksum formulas are both tried; either
/// matching makes the number valid. No attempt is made to disambiguate
/// using the embedded birth year — registration practice allows serials
/// under both formulas and downstream matching tolerates the overlap.
pub fn validate(id: &str) -> bool {
    let raw = strip(id);
    if raw.len() != 11 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let Ok(base9) = raw[..9].parse::<u64>() else {
        return false;
    };
    let Ok(check) = raw[9..].parse::<u64>() else {
        return false;
    };
    check == 97 - base9 % 97 || check == 97 - (POST_2000_OFFSET + base9) % 97
}

fn strip(id: &str) -> String {
    id.chars()
        .filter(|c| !matches!(c, '.' | '-') && !c.is_whitespace())
        .collect()
}
