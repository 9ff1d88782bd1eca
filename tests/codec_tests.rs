//! Cross-cutting scenarios as the application layer uses the codecs:
//! reference issuance, reconciliation lookups, compliance rendering.

use begiro::{iban, ogm, rijksregister, vat};

// --- OGM issuance and reconciliation ---

#[test]
fn issued_reference_survives_bank_round_trip() {
    let code = ogm::generate("001", 42).unwrap();
    assert_eq!(code, "+++001/0000/04221+++");

    // statements come back in all kinds of shapes
    assert!(ogm::validate(&code));
    assert!(ogm::validate("001000004221"));
    assert!(ogm::validate("+++ 001/0000/04221 +++"));

    // reconciliation keys on the raw digits regardless of validity
    assert_eq!(ogm::parse(&code), "001000004221");
    assert_eq!(ogm::format("001000004221"), code);
}

#[test]
fn sequential_issuance_yields_distinct_valid_codes() {
    let mut seen = std::collections::HashSet::new();
    for seq in 0..500 {
        let code = ogm::generate("090", seq).unwrap();
        assert!(ogm::validate(&code), "sequence {seq} produced invalid {code}");
        assert!(seen.insert(code));
    }
}

#[test]
fn typed_code_exposes_issue_prefix() {
    let code = ogm::OgmCode::parse(&ogm::generate("090", 1234).unwrap()).unwrap();
    assert_eq!(code.prefix, 90);
    assert_eq!(code.sequence, 1234);
}

#[test]
fn generator_refuses_out_of_range_input() {
    assert!(matches!(
        ogm::generate("001", 10_000_000),
        Err(ogm::OgmError::SequenceOutOfRange(_))
    ));
    assert!(matches!(
        ogm::generate("1", 1),
        Err(ogm::OgmError::InvalidPrefix(_))
    ));
}

// --- IBAN ---

#[test]
fn iban_checksum_scenarios() {
    assert!(iban::validate("BE68539007547034"));
    assert!(!iban::validate("BE68539007547035"));
}

#[test]
fn iban_display_formatting() {
    assert_eq!(iban::format("BE68539007547034"), "BE68 5390 0754 7034");
    // formatting never validates: a broken checksum still formats
    assert_eq!(iban::format("BE68539007547035"), "BE68 5390 0754 7035");
}

// --- National ID ---

#[test]
fn national_id_display_formatting() {
    assert_eq!(rijksregister::format("90020112345"), "90.02.01-123.45");
}

#[test]
fn national_id_century_fallback() {
    assert!(rijksregister::validate("90020112305")); // 1990 formula
    assert!(rijksregister::validate("05020112392")); // 2005 formula
    assert!(!rijksregister::validate("05020112300"));
}

// --- VAT ---

#[test]
fn vat_structural_scenarios() {
    assert!(!vat::validate("9876543210"));
    assert!(vat::validate("0876543210"));
    assert_eq!(vat::format("0876543210"), "BE 0876.543.210");
}

// --- Serde: value types travel through the application layer ---

#[test]
fn ogm_code_serde_round_trip() {
    let code = ogm::OgmCode::parse("+++001/0000/04221+++").unwrap();
    let json = serde_json::to_string(&code).unwrap();
    let back: ogm::OgmCode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, code);
}
