//! RemoteOK scraper, backed by their public JSON listing endpoint.
//!
//! The endpoint returns an array whose first element is a legal notice, not
//! a job; entries without a position or url are dropped. Individual
//! malformed entries are skipped so one bad record never costs the whole
//! source.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ScrapeError;
use crate::types::Posting;

use super::{http_client, squash_whitespace, JobScraper};

const API_URL: &str = "https://remoteok.com/api";
const MAX_POSTINGS: usize = 100;

#[derive(Debug, Deserialize)]
struct ApiEntry {
    #[serde(default)]
    position: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    url: String,
}

pub struct RemoteOkScraper {
    client: reqwest::blocking::Client,
}

impl RemoteOkScraper {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            client: http_client()?,
        })
    }
}

impl JobScraper for RemoteOkScraper {
    fn name(&self) -> &'static str {
        "remoteok"
    }

    fn scrape(&self) -> Result<Vec<Posting>, ScrapeError> {
        debug!("fetching {}", API_URL);

        let response = self
            .client
            .get(API_URL)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|e| ScrapeError::Network {
                url: API_URL.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: API_URL.to_string(),
                status: status.as_u16(),
            });
        }

        let entries: Vec<serde_json::Value> =
            response.json().map_err(|e| ScrapeError::Parse {
                url: API_URL.to_string(),
                reason: e.to_string(),
            })?;

        Ok(parse_entries(&entries))
    }
}

fn parse_entries(entries: &[serde_json::Value]) -> Vec<Posting> {
    let mut postings = Vec::new();

    for entry in entries {
        if postings.len() >= MAX_POSTINGS {
            break;
        }

        let entry: ApiEntry = match serde_json::from_value(entry.clone()) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping malformed api entry: {}", e);
                continue;
            }
        };

        // The api preamble carries neither field.
        if entry.position.is_empty() || entry.url.is_empty() {
            continue;
        }

        postings.push(Posting {
            title: squash_whitespace(&entry.position),
            location: squash_whitespace(&entry.location),
            link: entry.url.trim().to_string(),
        });
    }

    postings
}
