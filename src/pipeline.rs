//! The per-run pipeline: scrape everything, filter, notify, persist.

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::filter::filter_postings;
use crate::notify::{format_digest, Notifier};
use crate::scrapers::{scrape_all, JobScraper};
use crate::storage::{load_sent_links, save_sent_links};

pub const DIGEST_SUBJECT: &str = "Job Matches Alert";

/// Counters for the end-of-run log line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub plugins: usize,
    pub scraped: usize,
    pub matched: usize,
    pub delivered: usize,
}

/// One full run. Links enter the persisted dedup set only after the notifier
/// confirms delivery, so an undelivered match is picked up again on the next
/// run.
pub fn run(
    scrapers: &[Box<dyn JobScraper>],
    notifier: &dyn Notifier,
    keywords: &[String],
    locations: &[String],
    state_path: &Path,
) -> Result<RunSummary> {
    let mut sent = load_sent_links(state_path);
    info!("loaded {} previously notified links", sent.len());

    let postings = scrape_all(scrapers);
    info!("total postings scraped: {}", postings.len());

    let matches = filter_postings(&postings, keywords, locations, &sent);
    info!("new matches found: {}", matches.len());

    let mut summary = RunSummary {
        plugins: scrapers.len(),
        scraped: postings.len(),
        matched: matches.len(),
        delivered: 0,
    };

    if matches.is_empty() {
        return Ok(summary);
    }

    let body = format_digest(&matches);
    match notifier.notify(DIGEST_SUBJECT, &body) {
        Ok(()) => {
            for posting in &matches {
                sent.insert(posting.link.clone());
            }
            save_sent_links(state_path, &sent)?;
            summary.delivered = matches.len();
        }
        Err(e) => {
            warn!("matches left unmarked for the next run: {}", e);
        }
    }

    Ok(summary)
}
