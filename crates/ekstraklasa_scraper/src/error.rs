use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failures reported by a [`crate::Driver`].
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("element `{selector}` not found within {timeout:?}")]
    ElementNotFound { selector: String, timeout: Duration },

    /// Another element sits on top of the click target.
    #[error("click on `{selector}` was intercepted by another element")]
    ClickIntercepted { selector: String },

    #[error("element `{selector}`[{index}] requested but only {found} present")]
    MissingElement {
        selector: String,
        index: usize,
        found: usize,
    },

    #[error(transparent)]
    Browser(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error("malformed score {0:?}, expected \"A:B\"")]
    MalformedScore(String),

    #[error("unmapped statistic title {0:?}")]
    UnmappedStatistic(String),

    #[error("malformed comparison widget: {0}")]
    MalformedComparison(String),

    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("unknown season index {index}, the site lists only {known} seasons")]
    UnknownSeason { index: usize, known: usize },

    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("dataset i/o on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl ScrapeError {
    /// True for the "element did not show up in time" class of failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScrapeError::Driver(DriverError::ElementNotFound { .. }))
    }
}
