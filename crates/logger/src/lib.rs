/// EkstraklasaScrape — Logger
/// JSONL event stream of a scrape run

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct EventLogger {
    log_dir: PathBuf,
}

impl EventLogger {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        let dir = log_dir.into();
        fs::create_dir_all(&dir).ok();
        Self { log_dir: dir }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn log<T: Serialize>(&self, event: &T) -> Result<()> {
        let date  = Utc::now().format("%Y-%m-%d").to_string();
        let path  = self.log_dir.join(format!("{date}.jsonl"));
        let line  = serde_json::to_string(event)?;
        let mut f = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(f, "{line}")?;
        Ok(())
    }

    /// Like [`EventLogger::log`], but a failed write only warns; the event
    /// stream must never abort a scrape.
    pub fn record<T: Serialize>(&self, event: &T) {
        if let Err(e) = self.log(event) {
            tracing::warn!("event log write failed in {:?}: {}", self.log_dir, e);
        }
    }
}

pub fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

// ── Event typy ────────────────────────────────────────────────────────────────

#[derive(Serialize, Debug)]
pub struct RunStartedEvent {
    pub ts:       String,
    pub event:    &'static str,   // "RUN_STARTED"
    pub season:   String,
    pub url:      String,
}

#[derive(Serialize, Debug)]
pub struct RoundEnteredEvent {
    pub ts:          String,
    pub event:       &'static str,   // "ROUND_ENTERED"
    pub round_index: usize,          // number of advance clicks from the default round
    pub round_label: String,
    pub match_count: usize,
}

#[derive(Serialize, Debug)]
pub struct MatchScrapedEvent {
    pub ts:          String,
    pub event:       &'static str,   // "MATCH_SCRAPED"
    pub round_label: String,
    pub match_index: usize,
    pub team_1st:    String,
    pub team_2nd:    String,
    pub score_1st:   u32,
    pub score_2nd:   u32,
    pub stats_found: usize,
}

#[derive(Serialize, Debug)]
pub struct StatsMissingEvent {
    pub ts:          String,
    pub event:       &'static str,   // "STATS_MISSING"
    pub round_label: String,
    pub match_index: usize,
    pub team_1st:    String,
    pub team_2nd:    String,
}

#[derive(Serialize, Debug)]
pub struct RoundChangeGaveUpEvent {
    pub ts:       String,
    pub event:    &'static str,   // "ROUND_CHANGE_GAVE_UP"
    pub attempts: u32,
    pub last_label: String,
}

#[derive(Serialize, Debug)]
pub struct DatasetWrittenEvent {
    pub ts:      String,
    pub event:   &'static str,   // "DATASET_WRITTEN"
    pub season:  String,
    pub path:    String,
    pub rows:    usize,
    pub partial_rows: usize,
}
