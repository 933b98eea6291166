use regex::Regex;
use std::sync::LazyLock;

/// A betting odds line is a whole line of the form "1,50" or "2.30":
/// one or more digits, a single comma or dot separator, exactly two
/// trailing digits. Anything else (extra separators, signs, trailing
/// text) is not an odds value.
static ODDS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+[,.]\d{2}$").unwrap());

pub fn is_odds_line(line: &str) -> bool {
    ODDS_RE.is_match(line)
}

/// Numeric value of an odds line, or `None` if the line does not match
/// the odds pattern. The comma separator is normalized to a dot before
/// parsing, so "1,50" and "1.50" both yield 1.5.
pub fn odds_value(line: &str) -> Option<f64> {
    if !is_odds_line(line) {
        return None;
    }
    line.replace(',', ".").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_separators() {
        assert!(is_odds_line("1,50"));
        assert!(is_odds_line("2.30"));
        assert!(is_odds_line("10,05"));
        assert!(is_odds_line("150,00"));
    }

    #[test]
    fn rejects_non_odds_lines() {
        assert!(!is_odds_line(""));
        assert!(!is_odds_line("Real Madrid"));
        assert!(!is_odds_line("1,5")); // one decimal digit
        assert!(!is_odds_line("1,505")); // three decimal digits
        assert!(!is_odds_line(",50")); // no integer part
        assert!(!is_odds_line("-1,50")); // signed
        assert!(!is_odds_line("1,50,00")); // multiple separators
        assert!(!is_odds_line("1,50 ")); // stray whitespace
        assert!(!is_odds_line("+130")); // american format
    }

    #[test]
    fn parses_normalized_value() {
        assert_eq!(odds_value("1,50"), Some(1.50));
        assert_eq!(odds_value("2.30"), Some(2.30));
        assert_eq!(odds_value("Empate"), None);
    }
}
