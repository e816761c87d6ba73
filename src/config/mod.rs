pub mod file;

use crate::core::orchestrator::FailurePolicy;
use crate::utils::error::{Result, VacancyError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_float, validate_positive_number, validate_url,
    Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SUPERJOB_TOKEN_VAR: &str = "SUPERJOB_TOKEN";

#[derive(Debug, Parser)]
#[command(name = "vacancy-stats")]
#[command(about = "Average-salary statistics for programming-language vacancies")]
pub struct Cli {
    #[arg(long, value_delimiter = ',', help = "Languages to collect statistics for")]
    pub languages: Option<Vec<String>>,

    #[arg(long, value_name = "FILE", help = "Optional TOML config overlay")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub page_size: Option<u32>,

    #[arg(long, help = "Cap on pages fetched per category")]
    pub max_pages: Option<u32>,

    #[arg(long)]
    pub request_timeout_secs: Option<u64>,

    #[arg(long, value_enum, default_value_t = FailurePolicy::Skip)]
    pub on_error: FailurePolicy,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub languages: Vec<String>,
    pub fetch: FetchConfig,
    pub salary: SalaryConfig,
    pub headhunter: HeadHunterConfig,
    pub superjob: SuperJobConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub page_size: u32,
    pub max_pages: Option<u32>,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryConfig {
    /// Applied when only the lower bound is published.
    pub lower_bound_coefficient: f64,
    /// Applied when only the upper bound is published.
    pub upper_bound_coefficient: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadHunterConfig {
    pub endpoint: String,
    pub area: u32,
    pub specialization: String,
    pub period_days: u32,
    pub currency: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobConfig {
    pub endpoint: String,
    pub catalogue: u32,
    pub town: u32,
    pub currency: String,
    pub label: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            languages: [
                "python",
                "java",
                "javascript",
                "C#",
                "C++",
                "PHP",
                "Typescript",
                "Ruby",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            fetch: FetchConfig::default(),
            salary: SalaryConfig::default(),
            headhunter: HeadHunterConfig::default(),
            superjob: SuperJobConfig::default(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_size: 100,
            max_pages: None,
            request_timeout_secs: 30,
        }
    }
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            lower_bound_coefficient: 1.2,
            upper_bound_coefficient: 0.8,
        }
    }
}

impl Default for HeadHunterConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.hh.ru/vacancies".to_string(),
            area: 1,
            specialization: "1.221".to_string(),
            period_days: 30,
            currency: "RUR".to_string(),
            label: "HeadHunter Moscow".to_string(),
        }
    }
}

impl Default for SuperJobConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            catalogue: 48,
            town: 4,
            currency: "rub".to_string(),
            label: "SuperJob Moscow".to_string(),
        }
    }
}

impl AppConfig {
    /// Builds the effective configuration: built-in defaults, then the TOML
    /// overlay if one was given, then explicit CLI flags.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = &cli.config {
            let overlay = file::FileConfig::from_file(path)?;
            overlay.apply(&mut config);
        }

        if let Some(languages) = &cli.languages {
            config.languages = languages.clone();
        }
        if let Some(page_size) = cli.page_size {
            config.fetch.page_size = page_size;
        }
        if let Some(max_pages) = cli.max_pages {
            config.fetch.max_pages = Some(max_pages);
        }
        if let Some(timeout) = cli.request_timeout_secs {
            config.fetch.request_timeout_secs = timeout;
        }

        Ok(config)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            return Err(VacancyError::ConfigError {
                message: "at least one language is required".to_string(),
            });
        }
        for language in &self.languages {
            validate_non_empty_string("languages", language)?;
        }

        validate_positive_number("fetch.page_size", self.fetch.page_size as usize, 1)?;
        validate_positive_number(
            "fetch.request_timeout_secs",
            self.fetch.request_timeout_secs as usize,
            1,
        )?;

        validate_positive_float(
            "salary.lower_bound_coefficient",
            self.salary.lower_bound_coefficient,
        )?;
        validate_positive_float(
            "salary.upper_bound_coefficient",
            self.salary.upper_bound_coefficient,
        )?;

        validate_url("headhunter.endpoint", &self.headhunter.endpoint)?;
        validate_non_empty_string("headhunter.currency", &self.headhunter.currency)?;
        validate_non_empty_string("headhunter.label", &self.headhunter.label)?;

        validate_url("superjob.endpoint", &self.superjob.endpoint)?;
        validate_non_empty_string("superjob.currency", &self.superjob.currency)?;
        validate_non_empty_string("superjob.label", &self.superjob.label)?;

        Ok(())
    }
}

/// Reads the SuperJob API token from the environment. Checked at startup,
/// before any network call is made.
pub fn superjob_token() -> Result<String> {
    match std::env::var(SUPERJOB_TOKEN_VAR) {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(VacancyError::MissingCredential {
            name: SUPERJOB_TOKEN_VAR.to_string(),
        }),
    }
}
