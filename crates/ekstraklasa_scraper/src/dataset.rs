use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ScrapeError;
use crate::record::{MatchRecord, MISSING_MARKER};
use crate::season::Season;

/// All records of one run, in the order the matches were visited.
#[derive(Debug, Default)]
pub struct Dataset {
    rows: Vec<MatchRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MatchRecord) {
        self.rows.push(record);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[MatchRecord] {
        &self.rows
    }

    pub fn partial_rows(&self) -> usize {
        self.rows.iter().filter(|r| r.is_partial()).count()
    }

    /// Writes the whole table to `<path>.tmp`, then renames it over `path`.
    pub fn write_csv(&self, path: &Path) -> Result<(), ScrapeError> {
        let tmp = path.with_extension("csv.tmp");

        if let Err(e) = self.write_rows(&tmp) {
            fs::remove_file(&tmp).ok();
            return Err(e);
        }

        fs::rename(&tmp, path).map_err(|source| ScrapeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("wrote {} rows to {:?}", self.rows.len(), path);
        Ok(())
    }

    fn write_rows(&self, path: &Path) -> Result<(), ScrapeError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(MatchRecord::header())?;
        for record in &self.rows {
            writer.write_record(record.to_row(MISSING_MARKER))?;
        }
        writer.flush().map_err(|source| ScrapeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `<dir>/data_<season>.csv`, creating `dir` if needed.
    pub fn save(&self, dir: &Path, season: Season) -> Result<PathBuf, ScrapeError> {
        fs::create_dir_all(dir).map_err(|source| ScrapeError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir.join(season.output_file_name());
        self.write_csv(&path)?;
        Ok(path)
    }
}
