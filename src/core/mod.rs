pub mod orchestrator;
pub mod paginate;
pub mod salary;
pub mod stats;

pub use crate::domain::model::{CategorySummary, FetchedPage, Listing, SalaryOffer};
pub use crate::domain::ports::VacancySource;
pub use crate::utils::error::Result;
