// Run with: cargo fuzz run fuzz_save_newsletter_json
// Arbitrary JSON -> SaveNewsletterPayload -> NewsletterRecord validation.
#![no_main]

use letterpress::domain::{NewsletterRecord, SaveNewsletterPayload};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = serde_json::from_slice::<SaveNewsletterPayload>(data) {
        if let Ok(record) = NewsletterRecord::try_from(payload) {
            assert!(record.id >= 0);
            assert!(record.active);
            assert!(!record.name.trim().is_empty());
        }
    }
});
