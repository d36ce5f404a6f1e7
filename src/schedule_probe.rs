//! Test binary for the ekstraklasa.org selectors
//! Run: cargo run --bin schedule-probe
//!
//! Bootstraps a session, reads the current round and extracts its first match.
//! Writes no dataset; useful after the site ships a new frontend.

use anyhow::{Context, Result};
use dotenv::dotenv;
use ekstraklasa_scraper::{ChromeDriver, ScrapeConfig, Season, SeasonScraper, Statistic};
use tokio::task;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let cfg = ScrapeConfig::from_env()?;
    let season = Season::from_index(cfg.season_index)?;

    info!("🩺 Probing ekstraklasa.org terminarz, season {}", season);

    task::spawn_blocking(move || probe(cfg, season))
        .await
        .context("Probe task panicked")??;

    info!("Probe completed.");
    Ok(())
}

fn probe(cfg: ScrapeConfig, season: Season) -> Result<()> {
    let driver = ChromeDriver::launch(cfg.headless)?;
    let mut scraper = SeasonScraper::new(driver, season, &cfg.log_dir);

    scraper.bootstrap().context("Bootstrap failed")?;

    let label = scraper.read_round_label().context("Round label not readable")?;
    let matches = scraper.match_count().context("No match cards")?;
    info!("Round {:?}: {} match cards", label, matches);

    let record = scraper.extract_match(0).context("First match extraction failed")?;
    info!("  Teams: {} vs {}", record.team_1st, record.team_2nd);
    info!("  Score: {}:{}", record.score_1st, record.score_2nd);

    if record.is_partial() {
        warn!("  No statistics panel for this match");
        return Ok(());
    }

    for stat in Statistic::ALL {
        let pair = record.statistic(stat);
        match (&pair.first, &pair.second) {
            (Some(a), Some(b)) => info!("  {:<20} {:>6} | {:<6}", stat.column_stem(), a, b),
            _ => warn!("  {:<20} not rendered", stat.column_stem()),
        }
    }

    Ok(())
}
