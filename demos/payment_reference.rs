//! Issue OGM payment references for a batch of members and match a
//! mangled reference back, the way statement reconciliation does.
//!
//! Run with: `cargo run --example payment_reference`

use begiro::ogm;

fn main() -> Result<(), ogm::OgmError> {
    // issue prefix 001 = share capital calls
    println!("issued references:");
    for member in [1u64, 42, 9_337_554] {
        let code = ogm::generate("001", member)?;
        println!("  member {member:>7} -> {code}");
    }

    // a statement line rarely comes back in canonical shape
    let from_statement = "001 0000 04221";
    println!("\nstatement carried: {from_statement:?}");
    println!("  valid:   {}", ogm::validate(from_statement));
    println!("  raw key: {}", ogm::parse(from_statement));
    println!("  display: {}", ogm::format(&ogm::parse(from_statement)));

    if let Some(code) = ogm::OgmCode::parse(from_statement) {
        println!("  matched member sequence {}", code.sequence);
    }

    Ok(())
}
