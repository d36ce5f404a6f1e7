//! Season traversal: bootstrap, round iteration and per-match extraction.
//!
//! The schedule starts on the most recent round; each click on the round
//! changer moves one round back. Leaving a match detail view resets the
//! schedule to the most recent round, so round `k` is re-reached before every
//! match by replaying `k` clicks. The run ends once the round label reads
//! `"1"`.
//!
//! Known limitations, kept as is:
//! - rounds must count down to a label of exactly `"1"`, otherwise the loop
//!   never ends;
//! - after a round change gives up, the page and the logical round index are
//!   out of step and nothing corrects it.

use std::path::{Path, PathBuf};

use logger::{
    now_iso, DatasetWrittenEvent, EventLogger, MatchScrapedEvent, RoundChangeGaveUpEvent,
    RoundEnteredEvent, RunStartedEvent, StatsMissingEvent,
};
use tracing::{debug, info, warn};

use crate::dataset::Dataset;
use crate::driver::Driver;
use crate::error::{DriverError, ScrapeError};
use crate::record::{parse_score, MatchRecord};
use crate::season::Season;
use crate::selectors::{self, timeout};
use crate::stats::parse_comparison;

/// Click attempts on the round changer before giving up.
pub const ROUND_CHANGE_ATTEMPTS: u32 = 5;

/// Label of the oldest round; reaching it ends the season.
pub const FINAL_ROUND_LABEL: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAdvance {
    Advanced,
    /// Every attempt was intercepted; the round did not change.
    GaveUp { attempts: u32 },
}

/// `"12. kolejka"` → `"12"`.
pub fn round_label_from_text(text: &str) -> String {
    text.split('.').next().unwrap_or_default().trim().to_string()
}

pub struct SeasonScraper<D: Driver> {
    driver: D,
    season: Season,
    round_label: String,
    logger: EventLogger,
}

impl<D: Driver> SeasonScraper<D> {
    pub fn new(driver: D, season: Season, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            driver,
            season,
            round_label: String::new(),
            logger: EventLogger::new(log_dir),
        }
    }

    /// Last round label read from the page; empty before the first round.
    pub fn round_label(&self) -> &str {
        &self.round_label
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Opens the fixture list, accepts cookies and switches to the season.
    pub fn bootstrap(&mut self) -> Result<(), ScrapeError> {
        info!("Opening {} for season {}", selectors::FIXTURES_URL, self.season);
        self.driver.navigate_to(selectors::FIXTURES_URL)?;
        self.driver.reload()?;
        self.driver.settle(timeout::PAGE_SETTLE);

        // The consent overlay swallows clicks meant for the schedule.
        self.driver
            .wait_and_click(selectors::CONSENT_BUTTON, timeout::CONSENT)?;

        self.driver
            .wait_and_click(selectors::SEASON_INPUT, timeout::SEASON_PICKER)?;
        let options = self
            .driver
            .wait_for_all(selectors::SEASON_OPTIONS, timeout::SEASON_PICKER)?;
        debug!("season picker offers {} options", options);
        self.driver
            .click(selectors::SEASON_OPTIONS, self.season.list_position())?;
        self.driver.settle(timeout::PAGE_SETTLE);

        Ok(())
    }

    /// Clicks the round changer, retrying intercepted clicks. Giving up is not
    /// an error; any other driver failure is.
    pub fn advance_round(&mut self) -> Result<RoundAdvance, ScrapeError> {
        for attempt in 1..=ROUND_CHANGE_ATTEMPTS {
            match self
                .driver
                .wait_and_click(selectors::ROUND_CHANGER, timeout::ROUND_CHANGER)
            {
                Ok(()) => return Ok(RoundAdvance::Advanced),
                Err(DriverError::ClickIntercepted { .. }) => {
                    warn!("Round change intercepted, retrying (attempt {attempt}/{ROUND_CHANGE_ATTEMPTS})");
                }
                Err(e) => return Err(e.into()),
            }
        }

        warn!("Too many tries to change round, staying on {:?}", self.round_label);
        self.logger.record(&RoundChangeGaveUpEvent {
            ts: now_iso(),
            event: "ROUND_CHANGE_GAVE_UP",
            attempts: ROUND_CHANGE_ATTEMPTS,
            last_label: self.round_label.clone(),
        });
        Ok(RoundAdvance::GaveUp {
            attempts: ROUND_CHANGE_ATTEMPTS,
        })
    }

    /// Reads the ordinal of the round currently shown by the schedule.
    pub fn read_round_label(&mut self) -> Result<String, ScrapeError> {
        self.driver
            .wait_for_all(selectors::ROUND_LABEL, timeout::ROUND_LABEL)?;
        let text = self.driver.inner_text(selectors::ROUND_LABEL, 0)?;
        Ok(round_label_from_text(&text))
    }

    /// Replays `clicks` round changes from the default (most recent) round.
    pub fn seek_round(&mut self, clicks: usize) -> Result<(), ScrapeError> {
        for _ in 0..clicks {
            self.advance_round()?;
        }
        Ok(())
    }

    pub fn match_count(&mut self) -> Result<usize, ScrapeError> {
        Ok(self
            .driver
            .wait_for_all(selectors::MATCH_CARDS, timeout::MATCH_CARDS)?)
    }

    /// Scrapes the `index`-th match card of the round on screen and returns
    /// to the schedule. A match without a statistics panel yields a record
    /// with identity and score only.
    pub fn extract_match(&mut self, index: usize) -> Result<MatchRecord, ScrapeError> {
        self.driver.wait_for_all(selectors::MATCH_CARDS, timeout::MATCH_CARDS)?;
        self.driver.click(selectors::MATCH_CARDS, index)?;

        self.driver
            .wait_for_all(selectors::TEAM_NAMES, timeout::TEAM_NAMES)?;
        let team_1st = self.driver.inner_text(selectors::TEAM_NAMES, 0)?;
        let team_2nd = self.driver.inner_text(selectors::TEAM_NAMES, 1)?;

        self.driver
            .wait_for_all(selectors::MATCH_SCORE, timeout::MATCH_SCORE)?;
        let score_text = self.driver.inner_text(selectors::MATCH_SCORE, 0)?;
        let score = parse_score(&score_text)?;

        let mut record = MatchRecord::new(team_1st, team_2nd, score);

        self.driver
            .wait_and_click(selectors::STATS_TAB, timeout::STATS_TAB)?;

        let bars = match self
            .driver
            .wait_for_all(selectors::COMPARISON_BARS, timeout::COMPARISONS)
        {
            Ok(n) => n,
            Err(DriverError::ElementNotFound { .. }) => {
                warn!(
                    "⚠️ No statistics for match {} of round {:?}: {} vs {}",
                    index, self.round_label, record.team_1st, record.team_2nd
                );
                self.logger.record(&StatsMissingEvent {
                    ts: now_iso(),
                    event: "STATS_MISSING",
                    round_label: self.round_label.clone(),
                    match_index: index,
                    team_1st: record.team_1st.clone(),
                    team_2nd: record.team_2nd.clone(),
                });
                self.driver.back()?;
                return Ok(record);
            }
            Err(e) => return Err(e.into()),
        };

        for bar in 0..bars {
            let html = self.driver.inner_html(selectors::COMPARISON_BARS, bar)?;
            record.set_comparison(parse_comparison(&html)?);
        }

        self.driver.back()?;
        Ok(record)
    }

    /// Visits every match of the round `round_index` clicks back from the
    /// default one, appending a record per match.
    pub fn scrape_round(
        &mut self,
        round_index: usize,
        dataset: &mut Dataset,
    ) -> Result<(), ScrapeError> {
        self.seek_round(round_index)?;
        self.round_label = self.read_round_label()?;
        let matches = self.match_count()?;

        info!("📅 Round {} ({} matches)", self.round_label, matches);
        self.logger.record(&RoundEnteredEvent {
            ts: now_iso(),
            event: "ROUND_ENTERED",
            round_index,
            round_label: self.round_label.clone(),
            match_count: matches,
        });

        for index in 0..matches {
            if index > 0 {
                self.seek_round(round_index)?;
                self.round_label = self.read_round_label()?;
            }

            let record = self.extract_match(index).map_err(|e| {
                warn!("Match {} of round {:?} failed: {}", index, self.round_label, e);
                e
            })?;

            info!(
                "⚽ {} {}:{} {} ({} stats)",
                record.team_1st,
                record.score_1st,
                record.score_2nd,
                record.team_2nd,
                record.stats_found()
            );
            self.logger.record(&MatchScrapedEvent {
                ts: now_iso(),
                event: "MATCH_SCRAPED",
                round_label: self.round_label.clone(),
                match_index: index,
                team_1st: record.team_1st.clone(),
                team_2nd: record.team_2nd.clone(),
                score_1st: record.score_1st,
                score_2nd: record.score_2nd,
                stats_found: record.stats_found(),
            });

            dataset.push(record);
        }

        Ok(())
    }

    /// Bootstraps the session and walks rounds until the final one.
    pub fn scrape_season(&mut self) -> Result<Dataset, ScrapeError> {
        self.bootstrap()?;

        let mut dataset = Dataset::new();
        let mut round_index = 0;
        loop {
            self.scrape_round(round_index, &mut dataset)?;
            round_index += 1;

            if self.round_label == FINAL_ROUND_LABEL {
                break;
            }
        }

        info!(
            "Season {} done: {} rounds, {} matches ({} without statistics)",
            self.season,
            round_index,
            dataset.len(),
            dataset.partial_rows()
        );
        Ok(dataset)
    }

    /// Full run: scrape the season, then write `data_<season>.csv` into
    /// `output_dir`. Nothing is written if the scrape fails.
    pub fn scrape_and_save(&mut self, output_dir: &Path) -> Result<PathBuf, ScrapeError> {
        self.logger.record(&RunStartedEvent {
            ts: now_iso(),
            event: "RUN_STARTED",
            season: self.season.label().to_string(),
            url: selectors::FIXTURES_URL.to_string(),
        });

        let dataset = self.scrape_season()?;
        let path = dataset.save(output_dir, self.season)?;

        self.logger.record(&DatasetWrittenEvent {
            ts: now_iso(),
            event: "DATASET_WRITTEN",
            season: self.season.label().to_string(),
            path: path.display().to_string(),
            rows: dataset.len(),
            partial_rows: dataset.partial_rows(),
        });
        Ok(path)
    }
}
