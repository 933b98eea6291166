mod extract;
mod models;
mod scrapers;

use std::collections::HashSet;

use extract::{extract_matches, TeamWhitelist};
use scrapers::{BlockSource, WinamaxBrowserScraper};
use tracing::{info, warn, Level};
use tracing_subscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("⚽ Odds Scout - Winamax La Liga Scraper");
    info!("==========================================");
    info!("");

    let scraper = WinamaxBrowserScraper::new()?;
    let whitelist = TeamWhitelist::la_liga();

    info!("Starting browser-based scrape from {}...", scraper.source_name());
    let blocks = scraper.collect_blocks().await?;
    let mut records = extract_matches(&blocks, &whitelist);
    info!("Found {} matches in La Liga", records.len());

    // El Clásico sometimes lives under the cup section rather than the
    // league listing; sweep it too and keep first-seen pairings.
    match scraper.scrape_cup() {
        Ok(Some(cup_blocks)) => {
            let cup_records = extract_matches(&cup_blocks, &whitelist);
            info!("Found {} matches in the cup section", cup_records.len());

            let known: HashSet<String> = records.iter().map(|r| r.pairing_key()).collect();
            for record in cup_records {
                if !known.contains(&record.pairing_key()) {
                    records.push(record);
                }
            }
        }
        Ok(None) => info!("No cup section on the page"),
        Err(e) => warn!("Cup section sweep failed: {e:#}"),
    }

    if records.is_empty() {
        warn!("⚠️ No matches found! Check debug/ screenshots.");
        return Ok(());
    }

    // Display results
    info!("\n✅ Extracted {} matches\n", records.len());

    for (i, record) in records.iter().enumerate() {
        println!("{}. {} vs {}", i + 1, record.home_team, record.away_team);
        println!(
            "   1: {:.2}  X: {:.2}  2: {:.2}",
            record.odds_1, record.odds_x, record.odds_2
        );
        println!("   Date: {}", record.match_date);
        println!();
    }

    // Save to the odds JSON file
    let json = serde_json::to_string_pretty(&records)?;
    tokio::fs::write("live_odds.json", json).await?;
    info!("💾 Saved {} matches to live_odds.json", records.len());

    Ok(())
}
