use thiserror::Error;

#[derive(Error, Debug)]
pub enum VacancyError {
    #[error("request to {source_name} failed (category {category}, page {page}): {cause}")]
    Transport {
        source_name: String,
        category: String,
        page: u32,
        #[source]
        cause: reqwest::Error,
    },

    #[error("malformed response from {source_name} (category {category}, page {page}): {reason}")]
    MalformedResponse {
        source_name: String,
        category: String,
        page: u32,
        reason: String,
    },

    #[error("no estimable salaries for {category} on {source_name}")]
    NoEstimableSalaries {
        source_name: String,
        category: String,
    },

    #[error("missing credential: {name} is not set")]
    MissingCredential { name: String },

    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl VacancyError {
    pub fn transport(source_name: &str, category: &str, page: u32, cause: reqwest::Error) -> Self {
        Self::Transport {
            source_name: source_name.to_string(),
            category: category.to_string(),
            page,
            cause,
        }
    }

    pub fn malformed(
        source_name: &str,
        category: &str,
        page: u32,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedResponse {
            source_name: source_name.to_string(),
            category: category.to_string(),
            page,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VacancyError>;
