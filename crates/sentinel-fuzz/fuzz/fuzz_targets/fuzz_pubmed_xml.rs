#![no_main]

use libfuzzer_sys::fuzz_target;
use pharma_paper_fetcher::Source;
use pharma_paper_fetcher::normalize::normalize_document;
use pharma_paper_fetcher::xml::parse_document;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(set) = parse_document(text) {
            for record in normalize_document(Source::PubMed, &set) {
                // Every surviving record must carry a title
                assert!(!record.title.is_empty());
            }
        }
    }
});
