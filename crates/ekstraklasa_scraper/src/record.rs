use crate::error::ScrapeError;
use crate::stats::{column_names, Comparison, Statistic};

/// Cell text for anything the page did not give us.
pub const MISSING_MARKER: &str = "MISSING";

pub const IDENTITY_COLUMNS: [&str; 4] = ["team_1st", "team_2nd", "score_1st", "score_2nd"];

/// Raw values of one statistic, home side first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatPair {
    pub first: Option<String>,
    pub second: Option<String>,
}

/// One dataset row. Every statistic column exists on every record; the ones
/// the page did not render stay `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub team_1st: String,
    pub team_2nd: String,
    pub score_1st: u32,
    pub score_2nd: u32,
    stats: [StatPair; 13],
}

impl MatchRecord {
    pub fn new(team_1st: String, team_2nd: String, (score_1st, score_2nd): (u32, u32)) -> Self {
        Self {
            team_1st,
            team_2nd,
            score_1st,
            score_2nd,
            stats: Default::default(),
        }
    }

    pub fn set_comparison(&mut self, comparison: Comparison) {
        self.stats[comparison.statistic.index()] = StatPair {
            first: Some(comparison.first),
            second: Some(comparison.second),
        };
    }

    pub fn statistic(&self, statistic: Statistic) -> &StatPair {
        &self.stats[statistic.index()]
    }

    /// Number of statistics with both values present.
    pub fn stats_found(&self) -> usize {
        self.stats
            .iter()
            .filter(|p| p.first.is_some() && p.second.is_some())
            .count()
    }

    /// Identity and score only, no statistics at all.
    pub fn is_partial(&self) -> bool {
        self.stats
            .iter()
            .all(|p| p.first.is_none() && p.second.is_none())
    }

    /// Identity columns, then `<stat>_1st`/`<stat>_2nd` in [`Statistic::ALL`] order.
    pub fn header() -> Vec<String> {
        IDENTITY_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .chain(column_names())
            .collect()
    }

    pub fn to_row(&self, missing: &str) -> Vec<String> {
        let mut row = vec![
            self.team_1st.clone(),
            self.team_2nd.clone(),
            self.score_1st.to_string(),
            self.score_2nd.to_string(),
        ];
        for pair in &self.stats {
            row.push(pair.first.clone().unwrap_or_else(|| missing.to_string()));
            row.push(pair.second.clone().unwrap_or_else(|| missing.to_string()));
        }
        row
    }
}

/// `"3:1"` → `(3, 1)`. Anything but exactly two non-negative integers around a
/// single `:` is rejected.
pub fn parse_score(text: &str) -> Result<(u32, u32), ScrapeError> {
    let malformed = || ScrapeError::MalformedScore(text.to_string());

    let mut parts = text.split(':');
    let (Some(home), Some(away), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let home = home.trim().parse::<u32>().map_err(|_| malformed())?;
    let away = away.trim().parse::<u32>().map_err(|_| malformed())?;
    Ok((home, away))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scores() {
        assert_eq!(parse_score("3:1").unwrap(), (3, 1));
        assert_eq!(parse_score("0:0").unwrap(), (0, 0));
        assert_eq!(parse_score(" 10 : 2 ").unwrap(), (10, 2));
    }

    #[test]
    fn rejects_other_score_shapes() {
        for text in ["3-1", "3:1:0", "", ":", "3:", "a:b", "-1:2", "3 1"] {
            match parse_score(text) {
                Err(ScrapeError::MalformedScore(t)) => assert_eq!(t, text),
                other => panic!("{text:?} parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn fresh_record_is_partial_with_every_column() {
        let record = MatchRecord::new("Legia Warszawa".into(), "Lech Poznań".into(), (2, 2));
        assert!(record.is_partial());
        assert_eq!(record.stats_found(), 0);

        let row = record.to_row(MISSING_MARKER);
        assert_eq!(row.len(), MatchRecord::header().len());
        assert_eq!(&row[..4], ["Legia Warszawa", "Lech Poznań", "2", "2"]);
        assert!(row[4..].iter().all(|cell| cell == MISSING_MARKER));
    }

    #[test]
    fn comparisons_land_in_their_columns() {
        let mut record = MatchRecord::new("Raków".into(), "Pogoń".into(), (1, 0));
        record.set_comparison(Comparison {
            statistic: Statistic::Corners,
            first: "7".into(),
            second: "3".into(),
        });

        assert!(!record.is_partial());
        assert_eq!(record.stats_found(), 1);
        assert_eq!(record.statistic(Statistic::Corners).first.as_deref(), Some("7"));

        let header = MatchRecord::header();
        let row = record.to_row(MISSING_MARKER);
        let at = |name: &str| &row[header.iter().position(|h| h == name).unwrap()];
        assert_eq!(at("corners_1st"), "7");
        assert_eq!(at("corners_2nd"), "3");
        assert_eq!(at("fouls_1st"), MISSING_MARKER);
    }

    #[test]
    fn header_is_identity_then_statistics() {
        let header = MatchRecord::header();
        assert_eq!(header.len(), 30);
        assert_eq!(&header[..4], IDENTITY_COLUMNS);
        assert_eq!(header[4..], column_names()[..]);
    }
}
