use crate::models::TextBlock;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all block sources
/// This allows easy addition of new bookmakers (Bet365, Bwin, etc) in the future
#[async_trait]
pub trait BlockSource: Send + Sync {
    /// Collect rendered text blocks from the source's listing page
    async fn collect_blocks(&self) -> Result<Vec<TextBlock>>;

    /// Get the name of the bookmaker source
    fn source_name(&self) -> &'static str;
}
