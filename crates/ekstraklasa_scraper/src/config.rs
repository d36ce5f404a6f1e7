use std::path::PathBuf;

use crate::error::ScrapeError;

/// Run settings, read from the environment (`.env` is loaded by the binaries).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    /// `EKSTRAKLASA_SEASON`, index into [`crate::SEASONS`].
    pub season_index: usize,
    /// `SCRAPE_OUTPUT_DIR`
    pub output_dir: PathBuf,
    /// `SCRAPE_LOG_DIR`, JSONL event stream
    pub log_dir: PathBuf,
    /// `CHROME_HEADLESS`
    pub headless: bool,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            season_index: 0,
            output_dir: PathBuf::from("."),
            log_dir: PathBuf::from("logs"),
            headless: true,
        }
    }
}

impl ScrapeConfig {
    pub fn from_env() -> Result<Self, ScrapeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ScrapeError> {
        let mut cfg = Self::default();

        if let Some(v) = lookup("EKSTRAKLASA_SEASON") {
            cfg.season_index = v.trim().parse().map_err(|_| ScrapeError::InvalidConfig {
                key: "EKSTRAKLASA_SEASON",
                value: v.clone(),
                reason: "expected a season index (0, 1, 2)",
            })?;
        }
        if let Some(v) = lookup("SCRAPE_OUTPUT_DIR") {
            cfg.output_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("SCRAPE_LOG_DIR") {
            cfg.log_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup("CHROME_HEADLESS") {
            cfg.headless = match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ScrapeError::InvalidConfig {
                        key: "CHROME_HEADLESS",
                        value: v,
                        reason: "expected true/false",
                    })
                }
            };
        }

        Ok(cfg)
    }
}
