//! CSS selectors for ekstraklasa.org/terminarz.
//!
//! The site is an Angular app (Taiga UI widgets) with no stable ids, so
//! everything hangs off component tags and utility classes. When the site
//! changes, this module is the only place to touch.

pub const FIXTURES_URL: &str = "https://www.ekstraklasa.org/terminarz";

// ── Bootstrap ────────────────────────────────────────────────────────────────

/// "Accept" button of the cookie consent dialog.
pub const CONSENT_BUTTON: &str = r#"[data-appearance="primary"]"#;
pub const SEASON_INPUT: &str = "input.t-input";
pub const SEASON_OPTIONS: &str = "tui-data-list button";

// ── Schedule (round view) ────────────────────────────────────────────────────

pub const ROUND_LABEL: &str = "app-league-widget-schedule:first-of-type span.text-center";
/// Arrow icon switching the schedule to the previous matchday.
pub const ROUND_CHANGER: &str = "app-league-widget-schedule:first-of-type tui-svg";
pub const MATCH_CARDS: &str = "app-league-widget-schedule:first-of-type \
                               app-league-widget-schedule-match \
                               .theme-gradient.cursor-pointer";

// ── Match detail ─────────────────────────────────────────────────────────────

pub const TEAM_NAMES: &str = "app-upcoming-match-highlight span.flex.justify-end.uppercase.hidden";
pub const MATCH_SCORE: &str =
    "app-upcoming-match-highlight .mx-2.py-4.text-center.text-white.theme-gradient span";
/// Third tab of the match section ("Statystyki").
pub const STATS_TAB: &str = "app-section tui-tabs button:nth-child(3)";
pub const COMPARISON_BARS: &str = "app-teams-comparison-bar";

// ── Inside one comparison bar (parsed with `scraper`) ────────────────────────

pub const COMPARISON_TITLE: &str = "div.w-full.px-4.text-center span";
pub const COMPARISON_VALUES: &str = "span.text-cyan, span.text-2xl";

/// Wait bounds per step. Everything else fails fast.
pub mod timeout {
    use std::time::Duration;

    pub const CONSENT: Duration = Duration::from_secs(2);
    pub const SEASON_PICKER: Duration = Duration::from_secs(2);
    /// Fixed pause after a full page load / season switch.
    pub const PAGE_SETTLE: Duration = Duration::from_secs(2);
    pub const MATCH_CARDS: Duration = Duration::from_secs(10);
    pub const ROUND_CHANGER: Duration = Duration::from_secs(5);
    pub const ROUND_LABEL: Duration = Duration::from_secs(5);
    pub const TEAM_NAMES: Duration = Duration::from_secs(5);
    pub const MATCH_SCORE: Duration = Duration::from_secs(5);
    pub const STATS_TAB: Duration = Duration::from_secs(8);
    pub const COMPARISONS: Duration = Duration::from_secs(3);
}
