use anyhow::{anyhow, Context, Result};

use crate::search::ordering::ResultOrder;
use crate::search::pagination::DEFAULT_PAGE_SIZE;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub candidates_path: String,
    /// When set, the fixture is fetched over HTTP instead of read from `candidates_path`.
    pub candidates_url: Option<String>,
    pub page_size: usize,
    pub result_order: ResultOrder,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let shuffle_seed = lookup("SHUFFLE_SEED")
            .map(|s| s.parse::<u64>())
            .transpose()
            .context("SHUFFLE_SEED must be an unsigned integer")?;

        let order_kind = lookup("RESULT_ORDER").unwrap_or_else(|| "shuffled".to_string());
        let result_order = ResultOrder::parse(&order_kind, shuffle_seed).ok_or_else(|| {
            anyhow!("RESULT_ORDER must be 'identity' or 'shuffled', got '{order_kind}'")
        })?;

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            candidates_path: lookup("CANDIDATES_PATH")
                .unwrap_or_else(|| "data/candidates.json".to_string()),
            candidates_url: lookup("CANDIDATES_URL").filter(|u| !u.trim().is_empty()),
            page_size: lookup("PAGE_SIZE")
                .map(|s| s.parse::<usize>())
                .transpose()
                .context("PAGE_SIZE must be a positive integer")?
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .max(1),
            result_order,
        })
    }
}
