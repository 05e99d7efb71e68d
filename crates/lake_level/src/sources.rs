use std::collections::BTreeMap;

use url::Url;

const DEFAULT_ORIGIN: &str = "https://www.groupe-e.ch";
const OVERVIEW_PATH: &str = "/fr/univers-groupe-e/niveau-lacs";

/// Lakes whose dedicated page carries a full min/max history, by summary name.
const DETAIL_PAGES: &[(&str, &str)] = &[
    ("La Gruyère", "/fr/univers-groupe-e/niveau-lacs/gruyere"),
    ("Schiffenen", "/fr/univers-groupe-e/niveau-lacs/schiffenen"),
];

/// Where the lake tables are published.
///
/// `details` maps a lake name, as it reads in the summary table once markers
/// are stripped, to the URL of its detail page. Lakes without an entry keep
/// only the two summary readings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LakeSources {
    pub overview_url: String,
    pub details: BTreeMap<String, String>,
}

impl LakeSources {
    /// The published page layout rooted at another origin, e.g. a test server.
    pub fn with_base_url(base: &str) -> Result<Self, url::ParseError> {
        let base = Url::parse(base)?;
        let overview_url = base.join(OVERVIEW_PATH)?.to_string();
        let details = DETAIL_PAGES
            .iter()
            .map(|(name, path)| Ok((name.to_string(), base.join(path)?.to_string())))
            .collect::<Result<_, url::ParseError>>()?;
        Ok(Self {
            overview_url,
            details,
        })
    }

    /// Only the overview page; no lake gets a detail fetch.
    pub fn overview_only(overview_url: impl Into<String>) -> Self {
        Self {
            overview_url: overview_url.into(),
            details: BTreeMap::new(),
        }
    }

    pub fn with_detail(mut self, lake: impl Into<String>, url: impl Into<String>) -> Self {
        self.details.insert(lake.into(), url.into());
        self
    }

    pub fn detail_url(&self, lake: &str) -> Option<&str> {
        self.details.get(lake).map(String::as_str)
    }
}

impl Default for LakeSources {
    fn default() -> Self {
        let details = DETAIL_PAGES
            .iter()
            .map(|(name, path)| (name.to_string(), format!("{DEFAULT_ORIGIN}{path}")))
            .collect();
        Self {
            overview_url: format!("{DEFAULT_ORIGIN}{OVERVIEW_PATH}"),
            details,
        }
    }
}
