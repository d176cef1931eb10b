// Run with: cargo fuzz run fuzz_extract_document
// Extraction must never panic on arbitrary markup.
#![no_main]

use letterpress::templating::{extract_company_name, extract_content};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|document: &str| {
    let content = extract_content(document);
    assert!(content.len() <= document.len());
    let _ = extract_company_name(document);
});
