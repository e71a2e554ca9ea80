use crate::app::ports::PageTransport;
use crate::error::FetchError;
use crate::fetcher::DocumentFetcher;
use crate::parser;
use crate::types::ConferenceTable;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

/// Fetch-then-extract over the standings page.
pub struct StandingsScraper<T> {
    fetcher: DocumentFetcher<T>,
}

impl<T: PageTransport> StandingsScraper<T> {
    pub fn new(fetcher: DocumentFetcher<T>) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &DocumentFetcher<T> {
        &self.fetcher
    }

    /// Returns (East, West). Any fetch failure ends the call with no partial result.
    #[instrument(skip_all, fields(url = %self.fetcher.url()))]
    pub async fn execute_scrape(
        &self,
        cancel: &CancellationToken,
    ) -> Result<(ConferenceTable, ConferenceTable), FetchError> {
        let doc = self.fetcher.fetch(cancel).await?;
        let (east, west) = parser::extract(&doc);
        info!(east_rows = east.len(), west_rows = west.len(), "Scrape complete");
        Ok((east, west))
    }
}
