use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use standings_scraper::config::Config;
use standings_scraper::fetcher::DocumentFetcher;
use standings_scraper::infra::http_client::ReqwestTransport;
use standings_scraper::logging;
use standings_scraper::report::{self, OutputFormat};
use standings_scraper::{Standings, StandingsScraper};

#[derive(Parser)]
#[command(name = "standings_scraper")]
#[command(about = "Scrape East/West conference standings from basketball-reference.com")]
#[command(version)]
struct Cli {
    /// Path to the TOML config file; defaults apply if it does not exist
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Output format for the extracted standings
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter used when RUST_LOG is unset (e.g. "debug")
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    // Held until exit so the file writer flushes
    let _log_guard = logging::init_logging(&config.logging);

    let transport = ReqwestTransport::new(&config.http).context("building HTTP client")?;
    let scraper = StandingsScraper::new(DocumentFetcher::new(transport));

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Shutdown requested; cancelling scrape");
            shutdown.cancel();
        }
    });

    info!(url = scraper.fetcher().url(), "Starting standings scrape");
    let standings = match scraper.execute_scrape(&cancel).await {
        Ok(pair) => Standings::from(pair),
        Err(e) => {
            error!(kind = e.kind(), "Standings scrape failed: {}", e);
            return Err(e.into());
        }
    };

    let output = report::render(&standings, cli.format)?;
    print!("{}", output);
    Ok(())
}
