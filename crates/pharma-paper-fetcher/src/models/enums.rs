//! Enumeration types for sources.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Upstream literature source a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// NCBI PubMed citation database.
    #[serde(rename = "PubMed")]
    PubMed,
    /// arXiv preprint repository.
    #[serde(rename = "arXiv")]
    Arxiv,
}

impl Source {
    /// All sources, in the order the pipeline queries them.
    pub const ALL: [Self; 2] = [Self::PubMed, Self::Arxiv];

    /// Label written to the `source` column.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PubMed => "PubMed",
            Self::Arxiv => "arXiv",
        }
    }

    /// Name accepted on the command line.
    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::PubMed => "pubmed",
            Self::Arxiv => "arxiv",
        }
    }

    /// XML element that holds one upstream entry.
    #[must_use]
    pub const fn entry_tag(self) -> &'static str {
        match self {
            Self::PubMed => "PubmedArticle",
            Self::Arxiv => "entry",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pubmed" => Ok(Self::PubMed),
            "arxiv" => Ok(Self::Arxiv),
            other => Err(format!("unknown source '{other}' (expected 'pubmed' or 'arxiv')")),
        }
    }
}
