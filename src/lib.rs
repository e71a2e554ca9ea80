pub mod constants;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod parser;
pub mod report;
pub mod types;

// Application ports/use cases and their infrastructure adapters
pub mod app;
pub mod infra;

pub use app::scrape_use_case::StandingsScraper;
pub use error::FetchError;
pub use fetcher::{DocumentFetcher, RetryPolicy};
pub use types::{Conference, ConferenceTable, Standings, StandingsRow};
