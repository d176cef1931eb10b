// Run with: cargo fuzz run fuzz_header_color
#![no_main]

use letterpress::domain::HeaderColor;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, f64, f64, f64)| {
    let (hex, red, green, blue) = data;

    if let Ok(color) = HeaderColor::parse_hex(hex) {
        assert_eq!(HeaderColor::parse_hex(&color.to_hex()), Ok(color));
    }

    let hex = HeaderColor::from_fractions(red, green, blue).to_hex();
    assert_eq!(hex.len(), 7);
    assert!(hex.starts_with('#'));
});
