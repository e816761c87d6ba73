use crate::config::AppConfig;
use crate::utils::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// TOML overlay: every field optional, only present values override the
/// built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub languages: Option<Vec<String>>,
    pub fetch: Option<FetchOverlay>,
    pub salary: Option<SalaryOverlay>,
    pub headhunter: Option<HeadHunterOverlay>,
    pub superjob: Option<SuperJobOverlay>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchOverlay {
    pub page_size: Option<u32>,
    pub max_pages: Option<u32>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalaryOverlay {
    pub lower_bound_coefficient: Option<f64>,
    pub upper_bound_coefficient: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeadHunterOverlay {
    pub endpoint: Option<String>,
    pub area: Option<u32>,
    pub specialization: Option<String>,
    pub period_days: Option<u32>,
    pub currency: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuperJobOverlay {
    pub endpoint: Option<String>,
    pub catalogue: Option<u32>,
    pub town: Option<u32>,
    pub currency: Option<String>,
    pub label: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn apply(self, config: &mut AppConfig) {
        if let Some(languages) = self.languages {
            config.languages = languages;
        }

        if let Some(fetch) = self.fetch {
            if let Some(page_size) = fetch.page_size {
                config.fetch.page_size = page_size;
            }
            if let Some(max_pages) = fetch.max_pages {
                config.fetch.max_pages = Some(max_pages);
            }
            if let Some(timeout) = fetch.request_timeout_secs {
                config.fetch.request_timeout_secs = timeout;
            }
        }

        if let Some(salary) = self.salary {
            if let Some(lower) = salary.lower_bound_coefficient {
                config.salary.lower_bound_coefficient = lower;
            }
            if let Some(upper) = salary.upper_bound_coefficient {
                config.salary.upper_bound_coefficient = upper;
            }
        }

        if let Some(headhunter) = self.headhunter {
            if let Some(endpoint) = headhunter.endpoint {
                config.headhunter.endpoint = endpoint;
            }
            if let Some(area) = headhunter.area {
                config.headhunter.area = area;
            }
            if let Some(specialization) = headhunter.specialization {
                config.headhunter.specialization = specialization;
            }
            if let Some(period_days) = headhunter.period_days {
                config.headhunter.period_days = period_days;
            }
            if let Some(currency) = headhunter.currency {
                config.headhunter.currency = currency;
            }
            if let Some(label) = headhunter.label {
                config.headhunter.label = label;
            }
        }

        if let Some(superjob) = self.superjob {
            if let Some(endpoint) = superjob.endpoint {
                config.superjob.endpoint = endpoint;
            }
            if let Some(catalogue) = superjob.catalogue {
                config.superjob.catalogue = catalogue;
            }
            if let Some(town) = superjob.town {
                config.superjob.town = town;
            }
            if let Some(currency) = superjob.currency {
                config.superjob.currency = currency;
            }
            if let Some(label) = superjob.label {
                config.superjob.label = label;
            }
        }
    }
}
