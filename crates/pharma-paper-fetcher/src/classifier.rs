//! Pharmaceutical / biotech affiliation classifier.
//!
//! Affiliations are matched in two tiers:
//!
//! 1. A closed vocabulary of company names and domain terms, matched as
//!    case-insensitive substrings.
//! 2. Corporate-entity patterns (`<word> therapeutics`, `... inc`, `... corp`),
//!    accepted only when the text also contains a domain keyword, so that a
//!    plain "Acme Corp" does not qualify.
//!
//! Records are judged by source: PubMed records only by their affiliations,
//! arXiv records (which carry no affiliations) by keywords in title and abstract.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{PaperRecord, Source};

/// Company names and generic domain terms.
pub const COMPANY_VOCABULARY: &[&str] = &[
    // Major pharmaceutical companies
    "pfizer",
    "moderna",
    "johnson & johnson",
    "j&j",
    "roche",
    "novartis",
    "merck",
    "gsk",
    "glaxosmithkline",
    "sanofi",
    "bayer",
    "abbvie",
    "bristol myers squibb",
    "bms",
    "astrazeneca",
    "eli lilly",
    "lilly",
    "boehringer ingelheim",
    "takeda",
    "gilead",
    "amgen",
    "biogen",
    "celgene",
    "regeneron",
    "vertex",
    "alexion",
    // Biotech, diagnostics and instrument makers
    "genentech",
    "illumina",
    "thermo fisher",
    "agilent",
    "waters",
    "bio-rad",
    "qiagen",
    "invitrogen",
    "applied biosystems",
    "becton dickinson",
    "bd",
    "danaher",
    "medtronic",
    "abbott",
    "stryker",
    "intuitive surgical",
    // Vaccine makers
    "biontech",
    "curevac",
    "translate bio",
    "arcturus",
    "novavax",
    // Generic terms
    "pharmaceuticals",
    "pharmaceutical",
    "biotech",
    "biotechnology",
    "biopharmaceutical",
    "biopharma",
    "life sciences",
    "drug discovery",
    "therapeutics",
    "pharma",
    "medicines",
    "clinical research",
    "pharmaceutical research",
    "drug development",
    "medicinal chemistry",
    "pharmaceutical sciences",
];

/// Corporate-entity shapes, evaluated in order.
pub const COMPANY_PATTERNS: &[&str] = &[
    r"\b\w+\s+pharmaceuticals?\b",
    r"\b\w+\s+biotech\b",
    r"\b\w+\s+therapeutics?\b",
    r"\b\w+\s+biopharma\b",
    r"\b\w+\s+life\s+sciences?\b",
    r"\b\w+\s+medicines?\b",
    r"\binc\.?\b",
    r"\bcorp\.?\b",
    r"\bltd\.?\b",
    r"\bco\.?\b",
    r"\bcompany\b",
];

/// A pattern match only counts if one of these also appears somewhere in the text.
pub const PATTERN_KEYWORDS: &[&str] =
    &["pharma", "biotech", "therapeutic", "medicine", "drug", "clinical"];

/// Title/abstract keywords for records without affiliations (arXiv).
pub const TEXT_KEYWORDS: &[&str] = &[
    "pharmaceutical",
    "biotech",
    "drug discovery",
    "therapeutics",
    "clinical trial",
    "medicine",
    "pharma",
    "biopharma",
];

static SHARED: LazyLock<AffiliationClassifier> = LazyLock::new(AffiliationClassifier::new);

/// Heuristic classifier for pharmaceutical / biotech association.
#[derive(Debug, Clone)]
pub struct AffiliationClassifier {
    vocabulary: &'static [&'static str],
    patterns: Vec<Regex>,
    pattern_keywords: &'static [&'static str],
    text_keywords: &'static [&'static str],
}

impl AffiliationClassifier {
    /// Build a classifier with the built-in vocabulary and patterns.
    #[must_use]
    pub fn new() -> Self {
        let patterns = COMPANY_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("valid company pattern"))
            .collect();

        Self {
            vocabulary: COMPANY_VOCABULARY,
            patterns,
            pattern_keywords: PATTERN_KEYWORDS,
            text_keywords: TEXT_KEYWORDS,
        }
    }

    /// Process-wide classifier, compiled on first use.
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Classify optional affiliation text; absent or empty text never qualifies.
    #[must_use]
    pub fn classify(&self, affiliation: Option<&str>) -> bool {
        affiliation.is_some_and(|text| self.is_pharma_biotech_affiliation(text))
    }

    /// Check if an affiliation names a pharmaceutical or biotech organization.
    #[must_use]
    pub fn is_pharma_biotech_affiliation(&self, affiliation: &str) -> bool {
        if affiliation.is_empty() {
            return false;
        }

        let lower = affiliation.to_lowercase();

        if self.vocabulary.iter().any(|term| lower.contains(term)) {
            return true;
        }

        self.patterns.iter().any(|pattern| pattern.is_match(&lower))
            && self.pattern_keywords.iter().any(|keyword| lower.contains(keyword))
    }

    /// Decide whether a record is linked to a pharmaceutical or biotech organization.
    ///
    /// PubMed records are judged only by their affiliations, even though they also
    /// carry a title and abstract. arXiv records fall back to title/abstract keywords.
    #[must_use]
    pub fn paper_is_pharma_biotech(&self, record: &PaperRecord) -> bool {
        if record.affiliations.iter().any(|a| self.is_pharma_biotech_affiliation(a)) {
            return true;
        }

        match record.source {
            Source::Arxiv => {
                let text = format!("{} {}", record.title, record.r#abstract).to_lowercase();
                self.text_keywords.iter().any(|keyword| text.contains(keyword))
            }
            Source::PubMed => false,
        }
    }

    /// Keep qualifying records, preserving their order.
    #[must_use]
    pub fn filter(&self, records: Vec<PaperRecord>) -> Vec<PaperRecord> {
        records.into_iter().filter(|r| self.paper_is_pharma_biotech(r)).collect()
    }
}

impl Default for AffiliationClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify affiliation text with the shared classifier.
#[must_use]
pub fn classify(affiliation: Option<&str>) -> bool {
    AffiliationClassifier::shared().classify(affiliation)
}

/// Judge a record with the shared classifier.
#[must_use]
pub fn paper_is_pharma_biotech(record: &PaperRecord) -> bool {
    AffiliationClassifier::shared().paper_is_pharma_biotech(record)
}
