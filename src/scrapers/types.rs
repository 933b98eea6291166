use serde::{Deserialize, Serialize};

/// Parameters for one scrape run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeParams {
    /// League listing page to open first
    pub league_url: String,
    /// Link labels that lead to the cup section, any of which counts
    pub cup_section_labels: Vec<String>,
    /// Seconds to let the page settle after navigation
    pub settle_secs: u64,
}

impl Default for ScrapeParams {
    fn default() -> Self {
        Self {
            league_url: "https://www.winamax.es/apuestas-deportivas/futbol/espana/laliga"
                .to_string(),
            cup_section_labels: vec!["Supercopa".to_string(), "Copa del Rey".to_string()],
            settle_secs: 8,
        }
    }
}
