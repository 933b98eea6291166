/// Recognized team names for the current competition, aliases and
/// canonical forms interleaved.
///
/// Declaration order is part of the contract: a line is resolved by
/// walking the entries in order and taking the first one it equals or
/// contains (case-insensitive). Putting "Athletic Bilbao" before
/// "Athletic" makes the full club name win for lines that carry it,
/// while bare "Athletic" still resolves via the shorter alias.
pub struct TeamWhitelist {
    // (as declared, lowercased), lowercase precomputed once per run
    entries: Vec<(String, String)>,
}

/// La Liga clubs as they appear on the bookmaker's cards, plus the
/// short forms the cards sometimes use instead.
const LALIGA_TEAMS: &[&str] = &[
    "Alavés",
    "Athletic Bilbao",
    "Athletic",
    "Atlético Madrid",
    "Atlético",
    "Barcelona",
    "FC Barcelona",
    "Betis",
    "Real Betis",
    "Celta Vigo",
    "Celta",
    "Espanyol",
    "Getafe",
    "Girona",
    "Las Palmas",
    "Leganés",
    "Mallorca",
    "RCD Mallorca",
    "Osasuna",
    "Rayo Vallecano",
    "Rayo",
    "Real Madrid",
    "Real Sociedad",
    "Sevilla FC",
    "Sevilla",
    "Valencia",
    "Valladolid",
    "Villarreal",
    "Elche",
    "Levante",
    "Cádiz",
    "Almería",
    "Granada",
];

impl TeamWhitelist {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .map(|n| {
                let name = n.into();
                let lower = name.to_lowercase();
                (name, lower)
            })
            .collect();
        Self { entries }
    }

    /// The default whitelist: La Liga clubs.
    pub fn la_liga() -> Self {
        Self::new(LALIGA_TEAMS.iter().copied())
    }

    /// Resolve a single line against the whitelist. Returns the matched
    /// entry as declared (original casing), or `None`.
    ///
    /// A line matches an entry if, lowercased, it equals the entry or
    /// contains it as a substring. The first entry in declaration order
    /// satisfying either rule wins, so short aliases can shadow longer
    /// club names that appear after them.
    pub fn match_line(&self, line: &str) -> Option<&str> {
        let clean = line.to_lowercase();
        self.entries
            .iter()
            .find(|(_, lower)| clean == *lower || clean.contains(lower.as_str()))
            .map(|(name, _)| name.as_str())
    }

    /// Scan a block's lines in order and collect the teams they mention.
    ///
    /// Adjacent repeats of the same matched entry are collapsed to one
    /// occurrence; cards often repeat a label right below itself.
    /// Repeats separated by a different team are kept; the candidate
    /// builder dedups the full list later.
    pub fn scan_block<'a, L>(&'a self, lines: L) -> Vec<&'a str>
    where
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        let mut found: Vec<&str> = Vec::new();
        for line in lines {
            if let Some(team) = self.match_line(line.as_ref()) {
                if found.last() != Some(&team) {
                    found.push(team);
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_case_insensitive() {
        let wl = TeamWhitelist::la_liga();
        assert_eq!(wl.match_line("Real Madrid"), Some("Real Madrid"));
        assert_eq!(wl.match_line("REAL MADRID"), Some("Real Madrid"));
        assert_eq!(wl.match_line("real madrid"), Some("Real Madrid"));
    }

    #[test]
    fn containment_matches_longer_lines() {
        let wl = TeamWhitelist::la_liga();
        assert_eq!(wl.match_line("Real Madrid CF"), Some("Real Madrid"));
        assert_eq!(wl.match_line("Girona - Estadio Montilivi"), Some("Girona"));
    }

    #[test]
    fn unrelated_lines_do_not_match() {
        let wl = TeamWhitelist::la_liga();
        assert_eq!(wl.match_line("1,50"), None);
        assert_eq!(wl.match_line("Empate"), None);
        assert_eq!(wl.match_line(""), None);
    }

    #[test]
    fn declaration_order_decides_ambiguous_aliases() {
        // With the short alias first, a line carrying the full club name
        // still resolves to the alias. Ordering is the contract.
        let wl = TeamWhitelist::new(["Athletic", "Athletic Bilbao"]);
        assert_eq!(wl.match_line("Athletic Bilbao"), Some("Athletic"));

        // The shipped table declares the full name first.
        let wl = TeamWhitelist::la_liga();
        assert_eq!(wl.match_line("Athletic Bilbao"), Some("Athletic Bilbao"));
        assert_eq!(wl.match_line("Athletic"), Some("Athletic"));
    }

    #[test]
    fn scan_collapses_adjacent_repeats_only() {
        let wl = TeamWhitelist::la_liga();
        let found = wl.scan_block(["Sevilla", "Sevilla", "1,50", "Valencia", "Sevilla"]);
        assert_eq!(found, vec!["Sevilla", "Valencia", "Sevilla"]);
    }

    #[test]
    fn scan_preserves_line_order() {
        let wl = TeamWhitelist::la_liga();
        let found = wl.scan_block(["Hoy 21:00", "Barcelona", "1,50", "3,20", "5,00", "Getafe"]);
        assert_eq!(found, vec!["Barcelona", "Getafe"]);
    }
}
