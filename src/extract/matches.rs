use std::collections::HashSet;

use crate::extract::odds::odds_value;
use crate::extract::teams::TeamWhitelist;
use crate::models::{MatchRecord, OddsTriple, TextBlock};

/// Match dates are not reliably present in the rendered cards, so every
/// record carries this placeholder instead of a parsed date.
pub const MATCH_DATE_PLACEHOLDER: &str = "Upcoming";

/// Marker the bookmaker appends to women's-team listings. Cards whose
/// matched names carry it are dropped.
const WOMENS_MARKER: &str = "(F)";

/// Provisional extraction from a single block. Team names are the raw
/// matched whitelist entries; becomes a `MatchRecord` only if it
/// survives deduplication.
struct MatchCandidate {
    home_team: String,
    away_team: String,
    odds: OddsTriple,
}

/// Classify one block as a match card, or skip it.
///
/// A block qualifies when it contains at least three odds lines and
/// mentions at least two distinct whitelisted teams. The first two
/// distinct teams in reading order are taken as home and away; the
/// cards carry no structural home/away signal, so position is the only
/// available heuristic. The first three odds lines are the 1/X/2 prices,
/// again purely by position.
fn candidate_from_block(block: &TextBlock, whitelist: &TeamWhitelist) -> Option<MatchCandidate> {
    let odds: Vec<f64> = block.lines.iter().filter_map(|l| odds_value(l)).collect();
    if odds.len() < 3 {
        return None;
    }

    let found = whitelist.scan_block(&block.lines);
    let mut distinct: Vec<&str> = Vec::new();
    for team in found {
        if !distinct.contains(&team) {
            distinct.push(team);
        }
    }
    if distinct.len() < 2 {
        return None;
    }

    let home = distinct[0];
    let away = distinct[1];

    if home.contains(WOMENS_MARKER) || away.contains(WOMENS_MARKER) {
        return None;
    }

    Some(MatchCandidate {
        home_team: home.to_string(),
        away_team: away.to_string(),
        odds: OddsTriple {
            home: odds[0],
            draw: odds[1],
            away: odds[2],
        },
    })
}

/// Capitalize the first character, leave the rest untouched. This is
/// not title-casing; "real madrid" becomes "Real madrid".
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Run one extraction pass over a page snapshot.
///
/// Blocks are processed in order; each independently yields either a
/// record or nothing. Repeat matches are suppressed within the pass by
/// a key built from the raw matched names, so the first block describing
/// a pairing wins and re-running on the same snapshot yields identical
/// output. The dedup set lives and dies inside this call; no state
/// crosses passes.
pub fn extract_matches(blocks: &[TextBlock], whitelist: &TeamWhitelist) -> Vec<MatchRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut records = Vec::new();

    for block in blocks {
        let Some(candidate) = candidate_from_block(block, whitelist) else {
            continue;
        };

        let key = format!("{} vs {}", candidate.home_team, candidate.away_team);
        if !seen.insert(key) {
            continue;
        }

        records.push(MatchRecord {
            home_team: capitalize_first(&candidate.home_team),
            away_team: capitalize_first(&candidate.away_team),
            odds_1: candidate.odds.home,
            odds_x: candidate.odds.draw,
            odds_2: candidate.odds.away,
            match_date: MATCH_DATE_PLACEHOLDER.to_string(),
        });
    }

    records
}
