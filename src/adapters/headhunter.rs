use crate::config::HeadHunterConfig;
use crate::domain::model::{FetchedPage, Listing, SalaryOffer};
use crate::domain::ports::VacancySource;
use crate::utils::error::{Result, VacancyError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const SOURCE_NAME: &str = "headhunter";

/// HeadHunter vacancy search. Reports its total page count directly in
/// every response, so pagination reads `pages` as the loop bound.
pub struct HeadHunterSource {
    client: Client,
    config: HeadHunterConfig,
    page_size: u32,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    items: Vec<RawVacancy>,
    pages: u32,
    found: u64,
}

#[derive(Debug, Deserialize)]
struct RawVacancy {
    salary: Option<RawSalary>,
}

#[derive(Debug, Deserialize)]
struct RawSalary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

impl From<RawVacancy> for Listing {
    fn from(raw: RawVacancy) -> Self {
        Listing {
            salary: raw.salary.map(|salary| SalaryOffer {
                lower: salary.from,
                upper: salary.to,
                currency: salary.currency.unwrap_or_default(),
            }),
        }
    }
}

impl HeadHunterSource {
    pub fn new(client: Client, config: HeadHunterConfig, page_size: u32) -> Self {
        Self {
            client,
            config,
            page_size,
        }
    }
}

#[async_trait]
impl VacancySource for HeadHunterSource {
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
            ("area", self.config.area.to_string()),
            ("specialization", self.config.specialization.clone()),
            ("period", self.config.period_days.to_string()),
            ("per_page", self.page_size.to_string()),
            ("page", page.to_string()),
            ("text", category.to_string()),
        ];

        let response = self
            .client
            .get(&self.config.endpoint)
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

        Ok(FetchedPage {
            listings: payload.items.into_iter().map(Listing::from).collect(),
            page,
            pages_total: payload.pages,
            total_found: payload.found,
        })
    }
}
