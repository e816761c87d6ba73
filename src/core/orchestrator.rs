use crate::core::paginate::fetch_all;
use crate::core::salary::SalaryNormalizer;
use crate::core::stats::summarize;
use crate::domain::model::{CategorySummary, SourceStatistics};
use crate::domain::ports::VacancySource;
use crate::utils::error::{Result, VacancyError};
use clap::ValueEnum;

/// What to do when one category/source combination fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicy {
    /// First error ends the whole run.
    Abort,
    /// Log a warning, record an empty summary and continue.
    Skip,
}

/// Sequencing shell: drives each source through each category in order and
/// collects the summaries. No business logic lives here.
pub struct Orchestrator {
    sources: Vec<Box<dyn VacancySource>>,
    normalizer: SalaryNormalizer,
    policy: FailurePolicy,
    max_pages: Option<u32>,
}

impl Orchestrator {
    pub fn new(
        sources: Vec<Box<dyn VacancySource>>,
        normalizer: SalaryNormalizer,
        policy: FailurePolicy,
        max_pages: Option<u32>,
    ) -> Self {
        Self {
            sources,
            normalizer,
            policy,
            max_pages,
        }
    }

    /// One table per source, rows in the given category order.
    pub async fn run(&self, categories: &[String]) -> Result<Vec<SourceStatistics>> {
        let mut statistics = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            tracing::info!(source = source.name(), "collecting statistics");
            let mut rows = Vec::with_capacity(categories.len());

            for category in categories {
                tracing::debug!(source = source.name(), category, "fetching vacancies");
                let summary = match self.collect(source.as_ref(), category).await {
                    Ok(summary) => summary,
                    Err(err) => match self.policy {
                        FailurePolicy::Abort => return Err(err),
                        FailurePolicy::Skip => {
                            tracing::warn!(
                                source = source.name(),
                                category,
                                error = %err,
                                "skipping category"
                            );
                            CategorySummary::empty()
                        }
                    },
                };
                rows.push((category.clone(), summary));
            }

            statistics.push(SourceStatistics {
                label: source.label().to_string(),
                rows,
            });
        }

        Ok(statistics)
    }

    async fn collect(&self, source: &dyn VacancySource, category: &str) -> Result<CategorySummary> {
        let (listings, total_found) = fetch_all(source, category, self.max_pages).await?;
        let summary = summarize(&listings, total_found, &self.normalizer, source.currency());

        if summary.processed == 0 {
            let err = VacancyError::NoEstimableSalaries {
                source_name: source.name().to_string(),
                category: category.to_string(),
            };
            match self.policy {
                FailurePolicy::Abort => return Err(err),
                // Keep the real found/processed counts; only the average
                // stays undefined.
                FailurePolicy::Skip => tracing::warn!(error = %err, "no average for category"),
            }
        }

        Ok(summary)
    }
}
