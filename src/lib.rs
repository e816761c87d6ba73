pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

pub use adapters::{HeadHunterSource, SuperJobSource};
pub use config::{AppConfig, Cli};
pub use core::orchestrator::{FailurePolicy, Orchestrator};
pub use core::salary::SalaryNormalizer;
pub use utils::error::{Result, VacancyError};
