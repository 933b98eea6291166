use crate::models::TextBlock;
use crate::scrapers::traits::BlockSource;
use crate::scrapers::types::ScrapeParams;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// One snapshot entry per div on the page. Nested divs repeat their
/// ancestors' text; the extraction pass dedups the resulting records.
const SNAPSHOT_JS: &str =
    r#"JSON.stringify(Array.from(document.querySelectorAll('div')).map(d => d.innerText || ''))"#;

/// Step the viewport down until the page bottom is reached, so lazily
/// rendered cards make it into the snapshot.
const AUTO_SCROLL_JS: &str = r#"
new Promise((resolve) => {
    let totalHeight = 0;
    const distance = 100;
    const timer = setInterval(() => {
        const scrollHeight = document.body.scrollHeight;
        window.scrollBy(0, distance);
        totalHeight += distance;
        if (totalHeight >= scrollHeight - window.innerHeight) {
            clearInterval(timer);
            resolve(true);
        }
    }, 100);
})
"#;

const DISMISS_OVERLAYS_JS: &str = r#"
const button = document.querySelector('button[class*="close"], div[class*="close"], button[id*="accept"]');
if (button) button.click();
"#;

/// Browser-based block source for Winamax using headless Chrome
pub struct WinamaxBrowserScraper {
    #[allow(dead_code)]
    browser: Browser,
    tab: Arc<Tab>,
    params: ScrapeParams,
}

impl WinamaxBrowserScraper {
    /// Create a new browser-based scraper targeting the default league page
    pub fn new() -> Result<Self> {
        Self::with_params(ScrapeParams::default())
    }

    /// Create a new browser-based scraper with custom parameters
    pub fn with_params(params: ScrapeParams) -> Result<Self> {
        info!("Launching headless Chrome...");

        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((1280, 800)))
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options).context("Failed to launch Chrome browser")?;
        let tab = browser.new_tab().context("Failed to open browser tab")?;

        Ok(Self {
            browser,
            tab,
            params,
        })
    }

    /// Open the league listing page and snapshot it as text blocks
    pub fn scrape_league(&self) -> Result<Vec<TextBlock>> {
        info!("Opening league page {}", self.params.league_url);
        self.tab.navigate_to(&self.params.league_url)?;
        self.tab.wait_until_navigated()?;

        info!("Waiting for page to fully load...");
        thread::sleep(Duration::from_secs(self.params.settle_secs));

        self.dismiss_overlays();
        self.auto_scroll()?;
        self.capture_debug_screenshot("league")?;

        self.snapshot_blocks()
    }

    /// Follow the cup section link from the current page, if there is
    /// one, and snapshot that section too. Returns `Ok(None)` when the
    /// page has no such link; not every matchday has cup fixtures.
    pub fn scrape_cup(&self) -> Result<Option<Vec<TextBlock>>> {
        let labels = serde_json::to_string(&self.params.cup_section_labels)?;
        let click_js = format!(
            r#"(() => {{
                const labels = {labels};
                const els = Array.from(document.querySelectorAll('a, span, div'));
                const target = els.find(el => el.innerText && labels.some(l => el.innerText.includes(l)));
                if (target) {{ target.click(); return true; }}
                return false;
            }})()"#
        );

        let clicked = self
            .tab
            .evaluate(&click_js, false)?
            .value
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        if !clicked {
            debug!("No cup section link found on the page");
            return Ok(None);
        }

        info!("Navigated to cup section, waiting for load...");
        thread::sleep(Duration::from_secs(2));

        self.auto_scroll()?;
        self.capture_debug_screenshot("cup")?;

        self.snapshot_blocks().map(Some)
    }

    /// Best-effort dismissal of cookie/consent overlays; the page is
    /// usable either way, so failures are ignored.
    fn dismiss_overlays(&self) {
        let _ = self.tab.evaluate(DISMISS_OVERLAYS_JS, false);
        thread::sleep(Duration::from_secs(2));
    }

    fn auto_scroll(&self) -> Result<()> {
        debug!("Scrolling to the page bottom to force rendering");
        self.tab
            .evaluate(AUTO_SCROLL_JS, true)
            .context("Failed to auto-scroll the page")?;
        Ok(())
    }

    /// Pull every div's rendered text out of the page and split it into
    /// trimmed, non-empty lines. Divs with no visible text are dropped.
    fn snapshot_blocks(&self) -> Result<Vec<TextBlock>> {
        let result = self
            .tab
            .evaluate(SNAPSHOT_JS, false)
            .context("Failed to snapshot page text")?;

        let raw = match result.value {
            Some(value) => value.as_str().unwrap_or("").to_string(),
            None => {
                warn!("Could not get text content from page");
                String::new()
            }
        };

        if raw.is_empty() {
            warn!("Page snapshot is empty");
            return Ok(Vec::new());
        }

        let texts: Vec<String> =
            serde_json::from_str(&raw).context("Snapshot payload was not a string array")?;

        let blocks: Vec<TextBlock> = texts
            .iter()
            .map(|text| TextBlock::from_text(text))
            .filter(|block| !block.is_empty())
            .collect();

        info!("Captured {} non-empty text blocks", blocks.len());

        Ok(blocks)
    }

    fn capture_debug_screenshot(&self, label: &str) -> Result<()> {
        std::fs::create_dir_all("debug")?;

        let screenshot_data = self.tab.capture_screenshot(
            Page::CaptureScreenshotFormatOption::Png,
            None,
            None,
            true,
        )?;

        let path = format!(
            "debug/winamax_{}_{}.png",
            label,
            Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&path, screenshot_data)?;
        info!("Saved screenshot to {}", path);

        Ok(())
    }
}

#[async_trait]
impl BlockSource for WinamaxBrowserScraper {
    async fn collect_blocks(&self) -> Result<Vec<TextBlock>> {
        self.scrape_league()
    }

    fn source_name(&self) -> &'static str {
        "Winamax"
    }
}
