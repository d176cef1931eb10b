// Run with: cargo fuzz run fuzz_newsletter_name
#![no_main]

use letterpress::domain::NewsletterName;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: String| {
    if let Ok(name) = NewsletterName::parse(input) {
        let inner = name.as_ref();
        assert!(!inner.is_empty());
        assert_eq!(inner, inner.trim());
    }
});
