use crate::domain::model::Listing;
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;

/// Drains every page of a source for one category.
///
/// The loop bound is whatever the source last reported: sources that
/// publish a page count feed it through directly, sources that publish an
/// item total have their adapter derive the count. `total_found` is taken
/// from the last page read (sources repeat the same value on every page).
pub async fn fetch_all(
    source: &dyn VacancySource,
    category: &str,
    max_pages: Option<u32>,
) -> Result<(Vec<Listing>, u64)> {
    let mut listings = Vec::new();
    let mut total_found = 0u64;
    let mut pages_total = 1u32;
    let mut page = 0u32;

    while page < pages_total {
        let fetched = source.fetch_page(category, page).await?;
        tracing::debug!(
            source = source.name(),
            category,
            page,
            listings = fetched.listings.len(),
            "processed page"
        );

        listings.extend(fetched.listings);
        total_found = fetched.total_found;
        pages_total = fetched.pages_total;
        if let Some(cap) = max_pages {
            pages_total = pages_total.min(cap);
        }

        page += 1;
    }

    Ok((listings, total_found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FetchedPage;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Serves pre-built pages and counts how many requests were made.
    struct ScriptedSource {
        pages: Vec<FetchedPage>,
        requests: AtomicU32,
    }

    impl ScriptedSource {
        fn new(pages: Vec<FetchedPage>) -> Self {
            Self {
                pages,
                requests: AtomicU32::new(0),
            }
        }

        fn requests(&self) -> u32 {
            self.requests.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl VacancySource for ScriptedSource {
        fn name(&self) -> &str {
            "scripted"
        }

        fn label(&self) -> &str {
            "Scripted"
        }

        fn currency(&self) -> &str {
            "RUR"
        }

        async fn fetch_page(&self, _category: &str, page: u32) -> Result<FetchedPage> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Ok(self.pages[page as usize].clone())
        }
    }

    fn page(page: u32, pages_total: u32, total_found: u64, listings: usize) -> FetchedPage {
        FetchedPage {
            listings: vec![Listing { salary: None }; listings],
            page,
            pages_total,
            total_found,
        }
    }

    #[tokio::test]
    async fn test_fetches_exactly_the_reported_page_count() {
        let source = ScriptedSource::new(vec![
            page(0, 3, 250, 100),
            page(1, 3, 250, 100),
            page(2, 3, 250, 50),
        ]);

        let (listings, total_found) = fetch_all(&source, "python", None).await.unwrap();

        assert_eq!(source.requests(), 3);
        assert_eq!(listings.len(), 250);
        assert_eq!(total_found, 250);
    }

    #[tokio::test]
    async fn test_single_page_makes_one_request() {
        let source = ScriptedSource::new(vec![page(0, 1, 2, 2)]);

        let (listings, total_found) = fetch_all(&source, "python", None).await.unwrap();

        assert_eq!(source.requests(), 1);
        assert_eq!(listings.len(), 2);
        assert_eq!(total_found, 2);
    }

    #[tokio::test]
    async fn test_zero_reported_pages_stops_after_first_fetch() {
        let source = ScriptedSource::new(vec![page(0, 0, 0, 0)]);

        let (listings, total_found) = fetch_all(&source, "python", None).await.unwrap();

        assert_eq!(source.requests(), 1);
        assert!(listings.is_empty());
        assert_eq!(total_found, 0);
    }

    #[tokio::test]
    async fn test_max_pages_caps_the_loop() {
        let source = ScriptedSource::new(vec![
            page(0, 5, 500, 100),
            page(1, 5, 500, 100),
            page(2, 5, 500, 100),
            page(3, 5, 500, 100),
            page(4, 5, 500, 100),
        ]);

        let (listings, total_found) = fetch_all(&source, "python", Some(2)).await.unwrap();

        assert_eq!(source.requests(), 2);
        assert_eq!(listings.len(), 200);
        // found still reports what the source counted, not what was fetched
        assert_eq!(total_found, 500);
    }
}
