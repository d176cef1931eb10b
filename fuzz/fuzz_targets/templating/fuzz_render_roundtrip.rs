// Run with: cargo fuzz run fuzz_render_roundtrip
// Rendered body content comes back out of extract_content unchanged.
#![no_main]

use arbitrary::Arbitrary;
use chrono::NaiveDate;
use letterpress::templating::{DocumentParts, extract_content, render_document_on};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    title: Option<&'a str>,
    company: Option<&'a str>,
    content: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    // A cell terminator in the body, or a surviving placeholder anywhere,
    // defeats extraction.
    let fields = [input.title, input.company, Some(input.content)];
    if input.content.contains("</td>")
        || fields.iter().flatten().any(|f| f.contains("{{CONTENT}}"))
    {
        return;
    }
    let Some(date) = NaiveDate::from_ymd_opt(2025, 3, 5) else {
        return;
    };

    let parts = DocumentParts {
        title: input.title,
        company: input.company,
        content: Some(input.content),
        header_color: None,
    };
    let document = render_document_on(&parts, date);
    assert_eq!(extract_content(&document), input.content);
});
