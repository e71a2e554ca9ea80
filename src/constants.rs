//! Fixed scrape target and selector identifiers. The target page is not runtime-configurable.

// Page carrying both conference standings tables
pub const STANDINGS_URL: &str = "https://www.basketball-reference.com/boxscores/";

// Table element ids on the standings page
pub const EAST_TABLE_ID: &str = "confs_standings_E";
pub const WEST_TABLE_ID: &str = "confs_standings_W";

// Fetch retry budget
pub const MAX_ATTEMPTS: u32 = 3;
pub const RETRY_DELAY_MS: u64 = 2000;

// Per-request HTTP defaults (overridable from config.toml)
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("standings_scraper/", env!("CARGO_PKG_VERSION"));
