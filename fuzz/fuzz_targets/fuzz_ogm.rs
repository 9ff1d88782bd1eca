#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — invalid input is just `false` / pass-through.
        let _ = begiro::ogm::validate(s);
        let _ = begiro::ogm::parse(s);
        let _ = begiro::ogm::format(s);
        let _ = begiro::ogm::OgmCode::parse(s);
    }
});
