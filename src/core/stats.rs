use crate::core::salary::SalaryNormalizer;
use crate::domain::model::{CategorySummary, Listing};

/// Folds fetched listings into one [`CategorySummary`].
///
/// `average_salary` is the mean of the estimable values truncated toward
/// zero (reference semantics), and `None` when nothing was estimable —
/// never a division by zero.
pub fn summarize(
    listings: &[Listing],
    total_found: u64,
    normalizer: &SalaryNormalizer,
    expected_currency: &str,
) -> CategorySummary {
    let salaries: Vec<f64> = listings
        .iter()
        .filter_map(|listing| normalizer.estimate(listing.salary.as_ref(), expected_currency))
        .collect();

    let average_salary = if salaries.is_empty() {
        None
    } else {
        Some((salaries.iter().sum::<f64>() / salaries.len() as f64) as u64)
    };

    CategorySummary {
        found: total_found,
        processed: salaries.len() as u64,
        average_salary,
    }
}
