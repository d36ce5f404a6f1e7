use std::fmt;

use crate::error::ScrapeError;

/// Seasons offered by the terminarz season picker, oldest first. The site only
/// keeps the three most recent ones.
pub const SEASONS: [&str; 3] = ["2021_2022", "2022_2023", "2023_2024"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Season {
    index: usize,
}

impl Season {
    pub fn from_index(index: usize) -> Result<Self, ScrapeError> {
        if index >= SEASONS.len() {
            return Err(ScrapeError::UnknownSeason {
                index,
                known: SEASONS.len(),
            });
        }
        Ok(Self { index })
    }

    pub fn label(&self) -> &'static str {
        SEASONS[self.index]
    }

    /// Slot in the picker; options follow [`SEASONS`] order.
    pub fn list_position(&self) -> usize {
        self.index
    }

    pub fn output_file_name(&self) -> String {
        format!("data_{}.csv", self.label())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
