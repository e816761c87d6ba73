use serde::{Deserialize, Serialize};

/// Salary fields extracted from one listing by a source adapter.
///
/// Both bounds are optional; the source APIs also encode "not provided"
/// as `0`, which the normalizer treats the same as an absent bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryOffer {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub currency: String,
}

/// One job posting, reduced to the fields the pipeline cares about.
/// `salary` is `None` when the posting published no salary section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub salary: Option<SalaryOffer>,
}

/// One page of search results as reported by a source.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    pub listings: Vec<Listing>,
    pub page: u32,
    /// Total page count: taken directly from the payload when the source
    /// reports it, otherwise derived by the adapter from the item total.
    pub pages_total: u32,
    pub total_found: u64,
}

/// Aggregated statistics for one category on one source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub found: u64,
    pub processed: u64,
    /// `Some` only when `processed > 0`; truncated toward zero.
    pub average_salary: Option<u64>,
}

impl CategorySummary {
    /// Marker summary recorded for a category whose fetch failed and was
    /// skipped instead of aborting the run.
    pub fn empty() -> Self {
        Self {
            found: 0,
            processed: 0,
            average_salary: None,
        }
    }
}

/// One table worth of results: rows keep the input category order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceStatistics {
    pub label: String,
    pub rows: Vec<(String, CategorySummary)>,
}
