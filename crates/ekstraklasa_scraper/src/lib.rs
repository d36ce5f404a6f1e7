//! Ekstraklasa.org season scraper
//!
//! Drives a Chrome tab through the terminarz (fixture list), round by round,
//! and collects team names, score and the 13 team-comparison statistics of
//! every match into one CSV per season.
//!
//! Page layout:
//! <https://www.ekstraklasa.org/terminarz>
//!   schedule widget  → round label "N. kolejka" + match cards
//!   match detail     → team headers, "A:B" score, tabs (3rd = statistics)
//!   statistics tab   → `<app-teams-comparison-bar>` × 13

pub mod chrome;
pub mod config;
pub mod dataset;
pub mod driver;
pub mod error;
pub mod record;
pub mod scrape;
pub mod season;
pub mod selectors;
pub mod stats;

pub use chrome::ChromeDriver;
pub use config::ScrapeConfig;
pub use dataset::Dataset;
pub use driver::Driver;
pub use error::{DriverError, ScrapeError};
pub use record::{parse_score, MatchRecord, StatPair, MISSING_MARKER};
pub use scrape::{RoundAdvance, SeasonScraper, FINAL_ROUND_LABEL, ROUND_CHANGE_ATTEMPTS};
pub use season::{Season, SEASONS};
pub use stats::{column_names, parse_comparison, Comparison, Statistic};
