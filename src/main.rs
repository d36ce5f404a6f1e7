/// EkstraklasaScrape — Season Scraper
///
/// What it does:
///   1. Opens ekstraklasa.org/terminarz in Chrome, accepts cookies, picks the season
///   2. Walks the schedule round by round back to round 1
///   3. Opens every match, reads teams, score and the 13 comparison statistics
///   4. Writes data_<season>.csv once the whole season is in
///
/// Run:
///   EKSTRAKLASA_SEASON=0 cargo run --bin scrape-season

use anyhow::{Context, Result};
use dotenv::dotenv;
use ekstraklasa_scraper::{ChromeDriver, ScrapeConfig, Season, SeasonScraper};
use std::env;
use std::fs::File;
use std::path::PathBuf;
use tokio::task;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cfg = ScrapeConfig::from_env().context("Invalid scrape configuration")?;
    let season = Season::from_index(cfg.season_index)?;

    info!("=== EkstraklasaScrape — season {} ===", season);
    info!("Output: {:?}", cfg.output_dir.join(season.output_file_name()));
    info!("Events: {:?}", cfg.log_dir);
    info!("Chrome headless: {}", cfg.headless);

    // Single instance lock: one browser session, one season at a time
    let lock_file_path = env::temp_dir().join("ekstraklasa_scrape.lock");
    let lock_file = match File::create(&lock_file_path) {
        Ok(f) => f,
        Err(e) => {
            warn!("Failed to create lock file at {:?}: {}", lock_file_path, e);
            return Ok(());
        }
    };

    let mut lock = fd_lock::RwLock::new(lock_file);
    let _write_guard = match lock.try_write() {
        Ok(guard) => {
            info!("Acquired single-instance lock.");
            guard
        }
        Err(_) => {
            warn!("Another scrape-season run is already in progress! Exiting.");
            return Ok(());
        }
    };

    // headless_chrome is blocking; the whole session lives on one blocking thread.
    let path = task::spawn_blocking(move || run_season(cfg, season))
        .await
        .context("Scrape task panicked")??;

    info!("✅ Dataset written to {}", path.display());
    Ok(())
}

fn run_season(cfg: ScrapeConfig, season: Season) -> Result<PathBuf> {
    let driver = ChromeDriver::launch(cfg.headless)?;
    let mut scraper = SeasonScraper::new(driver, season, &cfg.log_dir);

    let path = scraper
        .scrape_and_save(&cfg.output_dir)
        .with_context(|| format!("Scrape of season {season} failed (round {:?})", scraper.round_label()))?;
    Ok(path)
}
