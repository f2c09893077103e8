#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — `None` is fine, panics are bugs.
        let split = s.char_indices().nth(2).map_or(s.len(), |(i, _)| i);
        let (country, _) = s.split_at(split);
        let _ = vatnum::core::matches_structure(country, s);
        let _ = vatnum::vat::strip_country_prefix(country, s);
    }
});
