#![no_main]

use libfuzzer_sys::fuzz_target;
use pharma_paper_fetcher::classifier::classify;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let lower = text.to_lowercase();

    // Classification is case-insensitive
    assert_eq!(
        classify(Some(text.as_ref())),
        classify(Some(lower.as_str()))
    );
});
