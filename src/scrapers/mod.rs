//! Scraper plugins and the static registry that instantiates them.

mod remoteok;
mod timesjobs;

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::ScrapeError;
use crate::types::Posting;

pub use remoteok::RemoteOkScraper;
pub use timesjobs::TimesJobsScraper;

/// One job-listing source. Implementations own their fetch and parse logic;
/// a failed scrape surfaces as a typed error for the orchestrator to isolate.
pub trait JobScraper {
    fn name(&self) -> &'static str;
    fn scrape(&self) -> Result<Vec<Posting>, ScrapeError>;
}

/// Every available plugin, instantiated exactly once. Adding a source means
/// adding a constructor here; there is no runtime discovery. A constructor
/// failure is fatal to the run.
pub fn registry(config: &Config) -> Result<Vec<Box<dyn JobScraper>>> {
    Ok(vec![
        Box::new(TimesJobsScraper::new(config)?),
        Box::new(RemoteOkScraper::new()?),
    ])
}

/// Run every plugin in sequence. A failing plugin contributes zero postings
/// and does not stop the others.
pub fn scrape_all(scrapers: &[Box<dyn JobScraper>]) -> Vec<Posting> {
    let mut postings = Vec::new();

    for scraper in scrapers {
        match scraper.scrape() {
            Ok(mut found) => {
                info!("{}: {} postings", scraper.name(), found.len());
                postings.append(&mut found);
            }
            Err(e) => {
                let kind = if e.is_retryable() { "retryable" } else { "terminal" };
                warn!("{}: scrape failed ({}): {}", scraper.name(), kind, e);
            }
        }
    }

    postings
}

pub(crate) fn http_client() -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent("Mozilla/5.0 (compatible; JobTrackerBot/1.0)")
        .timeout(Duration::from_secs(30))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .context("failed to build HTTP client")
}

/// Collapse runs of whitespace left over from HTML text extraction.
pub(crate) fn squash_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squash_whitespace_flattens_markup_runs() {
        assert_eq!(
            squash_whitespace("  Software\n\t Engineer  "),
            "Software Engineer"
        );
    }
}
