//! Scripted stand-in for ekstraklasa.org, answering the scraper's selectors.

#![allow(dead_code)]

use std::time::Duration;

use ekstraklasa_scraper::selectors::*;
use ekstraklasa_scraper::{Driver, DriverError, Statistic};

pub struct FakeMatch {
    pub home: String,
    pub away: String,
    pub score: String,
    /// Inner HTML of each comparison bar; empty = statistics never render.
    pub comparisons: Vec<String>,
}

pub struct FakeRound {
    /// Full label text, e.g. "2. kolejka".
    pub label: String,
    pub matches: Vec<FakeMatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Blank,
    Schedule,
    Detail { round: usize, game: usize },
    Stats { round: usize, game: usize },
    /// History went back but the schedule has not rendered yet.
    Returning,
}

pub struct FakeSite {
    /// Index 0 is the round the schedule opens on (most recent).
    rounds: Vec<FakeRound>,
    season_options: usize,
    view: View,
    consent_accepted: bool,
    picker_open: bool,

    pub consent_present: bool,
    pub round_position: usize,
    pub selected_season: Option<usize>,
    /// Round changer clicks still to be intercepted.
    pub intercept_round_clicks: u32,
    /// `back` leaves the schedule unrendered until the next wait.
    pub lazy_back: bool,
    /// The statistics wait fails with a protocol error.
    pub broken_stats_wait: bool,
    pub round_click_attempts: u32,
    pub navigations: Vec<String>,
    pub backs: u32,
    pub settled: Duration,
}

impl FakeSite {
    pub fn new(rounds: Vec<FakeRound>) -> Self {
        Self {
            rounds,
            season_options: 3,
            view: View::Blank,
            consent_accepted: false,
            picker_open: false,
            consent_present: true,
            round_position: 0,
            selected_season: None,
            intercept_round_clicks: 0,
            lazy_back: false,
            broken_stats_wait: false,
            round_click_attempts: 0,
            navigations: Vec::new(),
            backs: 0,
            settled: Duration::ZERO,
        }
    }

    /// Fake positioned on the schedule as after a bootstrap.
    pub fn on_schedule(rounds: Vec<FakeRound>) -> Self {
        let mut site = Self::new(rounds);
        site.view = View::Schedule;
        site.consent_accepted = true;
        site
    }

    fn current_match(&self) -> Option<&FakeMatch> {
        match self.view {
            View::Detail { round, game } | View::Stats { round, game } => {
                self.rounds.get(round).and_then(|r| r.matches.get(game))
            }
            _ => None,
        }
    }

    fn on_detail(&self) -> bool {
        matches!(self.view, View::Detail { .. } | View::Stats { .. })
    }

    fn count(&self, selector: &str) -> usize {
        let schedule = self.view == View::Schedule;
        match selector {
            CONSENT_BUTTON => usize::from(self.view != View::Blank && self.consent_present && !self.consent_accepted),
            SEASON_INPUT | ROUND_LABEL | ROUND_CHANGER => usize::from(schedule),
            SEASON_OPTIONS if self.picker_open => self.season_options,
            MATCH_CARDS if schedule => self.rounds[self.round_position].matches.len(),
            TEAM_NAMES if self.on_detail() => 2,
            MATCH_SCORE | STATS_TAB if self.on_detail() => 1,
            COMPARISON_BARS => match self.view {
                View::Stats { .. } => self.current_match().map_or(0, |m| m.comparisons.len()),
                _ => 0,
            },
            _ => 0,
        }
    }

    fn check(&self, selector: &str, index: usize) -> Result<(), DriverError> {
        let found = self.count(selector);
        if index >= found {
            return Err(DriverError::MissingElement {
                selector: selector.to_string(),
                index,
                found,
            });
        }
        Ok(())
    }
}

impl Driver for FakeSite {
    fn navigate_to(&mut self, url: &str) -> Result<(), DriverError> {
        self.navigations.push(url.to_string());
        self.view = View::Schedule;
        self.round_position = 0;
        Ok(())
    }

    fn reload(&mut self) -> Result<(), DriverError> {
        self.view = View::Schedule;
        self.round_position = 0;
        Ok(())
    }

    fn back(&mut self) -> Result<(), DriverError> {
        self.backs += 1;
        // The site re-renders the schedule on its default round.
        self.view = if self.lazy_back { View::Returning } else { View::Schedule };
        self.round_position = 0;
        Ok(())
    }

    fn wait_for_all(&mut self, selector: &str, timeout: Duration) -> Result<usize, DriverError> {
        if self.view == View::Returning {
            self.view = View::Schedule;
        }
        if selector == COMPARISON_BARS && self.broken_stats_wait {
            return Err(DriverError::Browser(anyhow::anyhow!("websocket connection closed")));
        }
        match self.count(selector) {
            0 => Err(DriverError::ElementNotFound {
                selector: selector.to_string(),
                timeout,
            }),
            n => Ok(n),
        }
    }

    fn click(&mut self, selector: &str, index: usize) -> Result<(), DriverError> {
        if selector == ROUND_CHANGER {
            self.round_click_attempts += 1;
        }
        self.check(selector, index)?;

        match selector {
            CONSENT_BUTTON => self.consent_accepted = true,
            SEASON_INPUT => self.picker_open = true,
            SEASON_OPTIONS => {
                self.selected_season = Some(index);
                self.picker_open = false;
                self.round_position = 0;
            }
            ROUND_CHANGER => {
                if self.intercept_round_clicks > 0 {
                    self.intercept_round_clicks -= 1;
                    return Err(DriverError::ClickIntercepted {
                        selector: selector.to_string(),
                    });
                }
                if self.round_position + 1 < self.rounds.len() {
                    self.round_position += 1;
                }
            }
            MATCH_CARDS => {
                self.view = View::Detail {
                    round: self.round_position,
                    game: index,
                }
            }
            STATS_TAB => {
                if let View::Detail { round, game } = self.view {
                    self.view = View::Stats { round, game };
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn inner_text(&mut self, selector: &str, index: usize) -> Result<String, DriverError> {
        self.check(selector, index)?;
        let text = match selector {
            ROUND_LABEL => self.rounds[self.round_position].label.clone(),
            TEAM_NAMES => {
                let m = self.current_match().expect("detail view has a match");
                if index == 0 { m.home.clone() } else { m.away.clone() }
            }
            MATCH_SCORE => self.current_match().expect("detail view has a match").score.clone(),
            other => panic!("no text scripted for `{other}`"),
        };
        Ok(text)
    }

    fn inner_html(&mut self, selector: &str, index: usize) -> Result<String, DriverError> {
        self.check(selector, index)?;
        assert_eq!(selector, COMPARISON_BARS, "only comparison bars are read as HTML");
        Ok(self.current_match().expect("stats view has a match").comparisons[index].clone())
    }

    fn settle(&mut self, pause: Duration) {
        self.settled += pause;
    }
}

// ── Builders ─────────────────────────────────────────────────────────────────

/// Titles as the site renders them (mixed case).
pub const SITE_TITLES: [(Statistic, &str); 13] = [
    (Statistic::Possession, "Posiadanie piłki %"),
    (Statistic::Shots, "Strzały"),
    (Statistic::ShotsOnTarget, "Celne strzały"),
    (Statistic::Corners, "Rzuty rożne"),
    (Statistic::Passes, "Podania"),
    (Statistic::AccuratePasses, "Podania celne"),
    (Statistic::Crosses, "Dośrodkowania"),
    (Statistic::AccurateCrosses, "Dośrodkowania celne"),
    (Statistic::SuccessfulTackles, "Odbiory udane"),
    (Statistic::Fouls, "Faule"),
    (Statistic::Offsides, "Spalone"),
    (Statistic::YellowCards, "Żółte kartki"),
    (Statistic::RedCards, "Czerwone kartki"),
];

pub fn comparison_bar(title: &str, first: &str, second: &str) -> String {
    format!(
        r#"<div class="flex items-center justify-between">
             <span class="text-cyan text-2xl font-bold"> {first} </span>
             <div class="w-full px-4 text-center"><span class="text-sm"> {title} </span></div>
             <span class="text-2xl font-bold"> {second} </span>
           </div>"#
    )
}

/// All 13 bars; values are `"<i>"` for the home side and `"<i+10>"` away.
pub fn full_statistics() -> Vec<String> {
    SITE_TITLES
        .iter()
        .enumerate()
        .map(|(i, (_, title))| comparison_bar(title, &i.to_string(), &(i + 10).to_string()))
        .collect()
}

pub fn game(home: &str, away: &str, score: &str, comparisons: Vec<String>) -> FakeMatch {
    FakeMatch {
        home: home.to_string(),
        away: away.to_string(),
        score: score.to_string(),
        comparisons,
    }
}

pub fn round(ordinal: u32, matches: Vec<FakeMatch>) -> FakeRound {
    FakeRound {
        label: format!("{ordinal}. kolejka"),
        matches,
    }
}
