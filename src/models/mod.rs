use serde::{Deserialize, Serialize};

/// One contiguous region of rendered text, split into trimmed,
/// non-empty lines. Produced by a block source, consumed by one
/// extraction pass, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub lines: Vec<String>,
}

impl TextBlock {
    /// Build a block from raw rendered text. Lines are trimmed and
    /// empty lines dropped, so downstream classification never sees
    /// surrounding whitespace.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The three 1X2 outcome prices of a match, in market order:
/// home win, draw, away win.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OddsTriple {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

/// Finished, normalized match entry as written to the output document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    pub home_team: String,
    pub away_team: String,
    pub odds_1: f64,
    pub odds_x: f64,
    pub odds_2: f64,
    pub match_date: String,
}

impl MatchRecord {
    /// Pairing key used to merge records across scrape sections.
    pub fn pairing_key(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }
}
