#![no_main]

use libfuzzer_sys::fuzz_target;
use pharma_paper_fetcher::Source;
use pharma_paper_fetcher::normalize::normalize_document;
use pharma_paper_fetcher::xml::parse_document;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as an Atom feed: parse errors are fine, panics are not
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(feed) = parse_document(text) {
            let _ = normalize_document(Source::Arxiv, &feed);
        }
    }
});
