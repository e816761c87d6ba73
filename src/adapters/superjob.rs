use crate::config::SuperJobConfig;
use crate::domain::model::{FetchedPage, Listing, SalaryOffer};
use crate::domain::ports::VacancySource;
use crate::utils::error::{Result, VacancyError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const SOURCE_NAME: &str = "superjob";
const TOKEN_HEADER: &str = "X-Api-App-Id";

// keywords[1] search block: search everywhere, any-word match.
const KEYWORD_SECTION: &str = "1";
const KEYWORD_MATCH_MODE: &str = "or";

/// SuperJob vacancy search. Only reports a total item count, so the page
/// count is derived here with a ceiling division by the page size.
pub struct SuperJobSource {
    client: Client,
    config: SuperJobConfig,
    page_size: u32,
    token: String,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    objects: Vec<RawVacancy>,
    total: u64,
}

#[derive(Debug, Deserialize)]
struct RawVacancy {
    payment_from: Option<f64>,
    payment_to: Option<f64>,
    currency: Option<String>,
}

impl From<RawVacancy> for Listing {
    fn from(raw: RawVacancy) -> Self {
        Listing {
            salary: Some(SalaryOffer {
                lower: raw.payment_from,
                upper: raw.payment_to,
                currency: raw.currency.unwrap_or_default(),
            }),
        }
    }
}

impl SuperJobSource {
    pub fn new(client: Client, config: SuperJobConfig, page_size: u32, token: String) -> Self {
        Self {
            client,
            config,
            page_size,
            token,
        }
    }
}

#[async_trait]
impl VacancySource for SuperJobSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn label(&self) -> &str {
        &self.config.label
    }

    fn currency(&self) -> &str {
        &self.config.currency
    }

    async fn fetch_page(&self, category: &str, page: u32) -> Result<FetchedPage> {
        let query = [
            ("keywords[1][srws]", KEYWORD_SECTION.to_string()),
            ("keywords[1][skws]", KEYWORD_MATCH_MODE.to_string()),
            ("keywords[1][keys]", category.to_string()),
            ("count", self.page_size.to_string()),
            ("catalogues", self.config.catalogue.to_string()),
            ("town", self.config.town.to_string()),
            ("page", page.to_string()),
        ];

        let response = self
            .client
            .get(&self.config.endpoint)
            .header(TOKEN_HEADER, &self.token)
            .query(&query)
            .send()
            .await
            .map_err(|e| VacancyError::transport(SOURCE_NAME, category, page, e))?
            .error_for_status()
            .map_err(|e| VacancyError::transport(SOURCE_NAME, category, page, e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| VacancyError::transport(SOURCE_NAME, category, page, e))?;
        let payload: SearchPage = serde_json::from_slice(&body)
            .map_err(|e| VacancyError::malformed(SOURCE_NAME, category, page, e.to_string()))?;

        let pages_total = payload.total.div_ceil(self.page_size as u64) as u32;

        Ok(FetchedPage {
            listings: payload.objects.into_iter().map(Listing::from).collect(),
            page,
            pages_total,
            total_found: payload.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn source(endpoint: String, page_size: u32) -> SuperJobSource {
        let config = SuperJobConfig {
            endpoint,
            ..SuperJobConfig::default()
        };
        SuperJobSource::new(Client::new(), config, page_size, "test-token".to_string())
    }

    #[tokio::test]
    async fn test_fetch_page_sends_keyword_block_and_token_header() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/2.0/vacancies/")
                .header("X-Api-App-Id", "test-token")
                .query_param("keywords[1][srws]", "1")
                .query_param("keywords[1][skws]", "or")
                .query_param("keywords[1][keys]", "python")
                .query_param("count", "100")
                .query_param("catalogues", "48")
                .query_param("town", "4")
                .query_param("page", "0");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "objects": [],
                    "total": 0
                }));
        });

        let source = source(server.url("/2.0/vacancies/"), 100);
        let fetched = source.fetch_page("python", 0).await.unwrap();

        api_mock.assert();
        assert_eq!(fetched.total_found, 0);
        assert_eq!(fetched.pages_total, 0);
    }

    #[tokio::test]
    async fn test_page_count_is_derived_from_the_item_total() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/2.0/vacancies/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "objects": [],
                    "total": 250
                }));
        });

        let source = source(server.url("/2.0/vacancies/"), 100);
        let fetched = source.fetch_page("python", 0).await.unwrap();

        // ceil(250 / 100) = 3
        assert_eq!(fetched.pages_total, 3);
        assert_eq!(fetched.total_found, 250);
    }

    #[tokio::test]
    async fn test_fetch_page_extracts_flat_salary_fields() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/2.0/vacancies/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "objects": [
                        {"payment_from": 0, "payment_to": 1000, "currency": "rub"},
                        {"payment_from": 50000, "payment_to": null, "currency": "rub"}
                    ],
                    "total": 2
                }));
        });

        let source = source(server.url("/2.0/vacancies/"), 100);
        let fetched = source.fetch_page("python", 0).await.unwrap();

        assert_eq!(fetched.listings.len(), 2);
        // Zero comes through as-is; the normalizer decides it means absent.
        assert_eq!(
            fetched.listings[0].salary,
            Some(SalaryOffer {
                lower: Some(0.0),
                upper: Some(1000.0),
                currency: "rub".to_string(),
            })
        );
        assert_eq!(fetched.listings[1].salary.as_ref().unwrap().upper, None);
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_transport_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/2.0/vacancies/");
            then.status(403);
        });

        let source = source(server.url("/2.0/vacancies/"), 100);
        let err = source.fetch_page("python", 0).await.unwrap_err();

        assert!(matches!(err, VacancyError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_missing_total_is_a_malformed_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/2.0/vacancies/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"objects": []}));
        });

        let source = source(server.url("/2.0/vacancies/"), 100);
        let err = source.fetch_page("python", 0).await.unwrap_err();

        assert!(matches!(err, VacancyError::MalformedResponse { .. }));
    }
}
