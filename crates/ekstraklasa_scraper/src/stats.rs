//! The 13 statistics of the match "Statystyki" tab.

use scraper::{Html, Selector};
use unicode_normalization::UnicodeNormalization;

use crate::error::ScrapeError;
use crate::selectors::{COMPARISON_TITLE, COMPARISON_VALUES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Possession,
    Shots,
    ShotsOnTarget,
    Corners,
    Passes,
    AccuratePasses,
    Crosses,
    AccurateCrosses,
    SuccessfulTackles,
    Fouls,
    Offsides,
    YellowCards,
    RedCards,
}

impl Statistic {
    /// Column order of the dataset.
    pub const ALL: [Statistic; 13] = [
        Statistic::Possession,
        Statistic::Shots,
        Statistic::ShotsOnTarget,
        Statistic::Corners,
        Statistic::Passes,
        Statistic::AccuratePasses,
        Statistic::Crosses,
        Statistic::AccurateCrosses,
        Statistic::SuccessfulTackles,
        Statistic::Fouls,
        Statistic::Offsides,
        Statistic::YellowCards,
        Statistic::RedCards,
    ];

    pub fn column_stem(self) -> &'static str {
        match self {
            Statistic::Possession => "possession",
            Statistic::Shots => "shots",
            Statistic::ShotsOnTarget => "shots_on_target",
            Statistic::Corners => "corners",
            Statistic::Passes => "passes",
            Statistic::AccuratePasses => "accurate_passes",
            Statistic::Crosses => "crosses",
            Statistic::AccurateCrosses => "accurate_crosses",
            Statistic::SuccessfulTackles => "successful_tackles",
            Statistic::Fouls => "fouls",
            Statistic::Offsides => "offsides",
            Statistic::YellowCards => "yellow_cards",
            Statistic::RedCards => "red_cards",
        }
    }

    /// Widget title as the site renders it, upper-cased.
    pub fn site_title(self) -> &'static str {
        match self {
            Statistic::Possession => "POSIADANIE PIŁKI %",
            Statistic::Shots => "STRZAŁY",
            Statistic::ShotsOnTarget => "CELNE STRZAŁY",
            Statistic::Corners => "RZUTY ROŻNE",
            Statistic::Passes => "PODANIA",
            Statistic::AccuratePasses => "PODANIA CELNE",
            Statistic::Crosses => "DOŚRODKOWANIA",
            Statistic::AccurateCrosses => "DOŚRODKOWANIA CELNE",
            Statistic::SuccessfulTackles => "ODBIORY UDANE",
            Statistic::Fouls => "FAULE",
            Statistic::Offsides => "SPALONE",
            Statistic::YellowCards => "ŻÓŁTE KARTKI",
            Statistic::RedCards => "CZERWONE KARTKI",
        }
    }

    /// Maps a widget title to its statistic. The table is exhaustive, so a miss
    /// means the site changed and is an error, never a skip.
    pub fn from_title(title: &str) -> Result<Self, ScrapeError> {
        let key = title.trim().nfc().collect::<String>().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|s| s.site_title() == key)
            .ok_or_else(|| ScrapeError::UnmappedStatistic(title.to_string()))
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// `<stat>_1st`, `<stat>_2nd` for every statistic, in column order.
pub fn column_names() -> Vec<String> {
    Statistic::ALL
        .iter()
        .flat_map(|s| {
            let stem = s.column_stem();
            [format!("{stem}_1st"), format!("{stem}_2nd")]
        })
        .collect()
}

/// One parsed `app-teams-comparison-bar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub statistic: Statistic,
    pub first: String,
    pub second: String,
}

pub(crate) fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::InvalidSelector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// Parses the inner HTML of a comparison bar: a title span plus the two
/// team values (first = home side).
pub fn parse_comparison(inner_html: &str) -> Result<Comparison, ScrapeError> {
    let fragment = Html::parse_fragment(inner_html);

    let title = fragment
        .select(&selector(COMPARISON_TITLE)?)
        .next()
        .map(|e| e.text().collect::<String>())
        .ok_or_else(|| ScrapeError::MalformedComparison("no title span".to_string()))?;

    let statistic = Statistic::from_title(&title)?;

    let values: Vec<String> = fragment
        .select(&selector(COMPARISON_VALUES)?)
        .map(|e| e.text().collect::<String>().trim().to_string())
        .collect();

    match values.as_slice() {
        [first, second, ..] => Ok(Comparison {
            statistic,
            first: first.clone(),
            second: second.clone(),
        }),
        _ => Err(ScrapeError::MalformedComparison(format!(
            "{} value span(s) under {:?}",
            values.len(),
            title.trim()
        ))),
    }
}
