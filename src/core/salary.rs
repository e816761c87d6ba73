use crate::config::SalaryConfig;
use crate::domain::model::SalaryOffer;

/// Turns a partial salary range into a single comparable figure.
///
/// Listings denominated in a foreign currency are never estimable; no
/// conversion is attempted. When only one bound is published the estimate
/// is scaled by a tunable coefficient: a published floor tends to
/// undershoot the real offer, a published ceiling tends to overshoot it.
#[derive(Debug, Clone)]
pub struct SalaryNormalizer {
    lower_coefficient: f64,
    upper_coefficient: f64,
}

impl SalaryNormalizer {
    pub fn new(config: &SalaryConfig) -> Self {
        Self {
            lower_coefficient: config.lower_bound_coefficient,
            upper_coefficient: config.upper_bound_coefficient,
        }
    }

    /// Returns `None` when the listing is not estimable: no salary section,
    /// wrong currency, or neither bound present.
    pub fn estimate(&self, offer: Option<&SalaryOffer>, expected_currency: &str) -> Option<f64> {
        let offer = offer?;
        if offer.currency != expected_currency {
            return None;
        }

        // The source payloads encode "not provided" as 0 as well as null,
        // so a zero bound counts as absent.
        let lower = positive(offer.lower);
        let upper = positive(offer.upper);

        match (lower, upper) {
            (Some(lower), Some(upper)) => Some((lower + upper) / 2.0),
            (Some(lower), None) => Some(lower * self.lower_coefficient),
            (None, Some(upper)) => Some(upper * self.upper_coefficient),
            (None, None) => None,
        }
    }
}

fn positive(bound: Option<f64>) -> Option<f64> {
    bound.filter(|value| *value > 0.0)
}
