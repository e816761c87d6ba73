// Adapters layer: one module per job-board API. Each owns its wire schema
// and pagination convention behind the VacancySource port.

pub mod headhunter;
pub mod superjob;

pub use headhunter::HeadHunterSource;
pub use superjob::SuperJobSource;
