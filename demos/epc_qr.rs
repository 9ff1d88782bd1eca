//! Build an EPC QR payload for a share payment: validate the parts,
//! then serialize. The printed text is what a QR image encoder receives.
//!
//! Run with: `cargo run --example epc_qr --features epc`

use begiro::epc::EpcPayment;
use begiro::{iban, ogm};
use rust_decimal_macros::dec;

fn main() {
    let account = "BE68 5390 0754 7034";
    let reference = ogm::generate("001", 42).expect("fixed prefix and small sequence");

    // building never validates — do that first, explicitly
    assert!(iban::validate(account));
    assert!(ogm::validate(&reference));

    let payload = EpcPayment::new("BBRUBEBB", "Coöperatie De Link CV", account, dec!(250))
        .reference(&reference)
        .build_payload();

    println!("{payload}");
}
