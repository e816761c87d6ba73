use crate::domain::model::FetchedPage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A paginated job-board search API.
///
/// Implementations own their wire schema and query conventions; the rest
/// of the pipeline only sees extracted [`FetchedPage`]s. Adding a third
/// job board means adding one implementation, nothing else changes.
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &str;

    /// Human-readable table title, e.g. "HeadHunter Moscow".
    fn label(&self) -> &str;

    /// Currency code this source publishes salaries in; listings in any
    /// other currency are not estimable.
    fn currency(&self) -> &str;

    async fn fetch_page(&self, category: &str, page: u32) -> Result<FetchedPage>;
}
