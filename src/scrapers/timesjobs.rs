//! TimesJobs search-results scraper.
//!
//! Fetches one search page per configured location and pulls postings out of
//! the result cards. The keyword check here is a best-effort pre-filter; the
//! filter stage re-checks every posting.

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ScrapeError;
use crate::types::Posting;

use super::{http_client, squash_whitespace, JobScraper};

const SEARCH_URL: &str = "https://www.timesjobs.com/candidate/job-search.html";
const BASE_URL: &str = "https://www.timesjobs.com";
const MAX_POSTINGS: usize = 100;

pub struct TimesJobsScraper {
    client: reqwest::blocking::Client,
    keywords: Vec<String>,
    locations: Vec<String>,
}

impl TimesJobsScraper {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            client: http_client()?,
            keywords: config.keywords.clone(),
            locations: config.locations.clone(),
        })
    }

    fn build_url(&self, location: &str) -> String {
        let query = urlencoding::encode(&self.keywords.join(" ")).into_owned();
        let loc = urlencoding::encode(location).into_owned();
        format!(
            "{SEARCH_URL}?searchType=personalizedSearch&from=submit&txtKeywords={query}&txtLocation={loc}"
        )
    }
}

impl JobScraper for TimesJobsScraper {
    fn name(&self) -> &'static str {
        "timesjobs"
    }

    fn scrape(&self) -> Result<Vec<Posting>, ScrapeError> {
        let mut postings = Vec::new();

        for location in &self.locations {
            if postings.len() >= MAX_POSTINGS {
                debug!("reached posting limit of {}, stopping", MAX_POSTINGS);
                break;
            }

            let url = self.build_url(location);
            debug!("fetching {}", url);

            let response = self.client.get(&url).send().map_err(|e| ScrapeError::Network {
                url: url.clone(),
                source: e,
            })?;

            let status = response.status();
            if !status.is_success() {
                return Err(ScrapeError::Status {
                    url,
                    status: status.as_u16(),
                });
            }

            let html = response.text().map_err(|e| ScrapeError::Network {
                url: url.clone(),
                source: e,
            })?;

            let remaining = MAX_POSTINGS - postings.len();
            postings.extend(parse_search_results(&html, &self.keywords, remaining));
        }

        Ok(postings)
    }
}

/// Pull postings out of a search-results page. Cards with unusable markup
/// are skipped; a card must carry a location, keywords are optional.
fn parse_search_results(html: &str, keywords: &[String], limit: usize) -> Vec<Posting> {
    let document = Html::parse_document(html);
    let mut postings = Vec::new();

    let card_selector = match Selector::parse("li.clearfix.job-bx") {
        Ok(selector) => selector,
        Err(_) => return postings,
    };

    for card in document.select(&card_selector) {
        if postings.len() >= limit {
            break;
        }

        let anchor = ["h2 a", "h3 a", "a.job-title"].iter().find_map(|sel| {
            Selector::parse(sel)
                .ok()
                .and_then(|s| card.select(&s).next())
        });
        let Some(anchor) = anchor else {
            warn!("skipping card without a title link");
            continue;
        };

        let title = squash_whitespace(&anchor.text().collect::<String>());
        let Some(href) = anchor.value().attr("href").map(str::trim).filter(|h| !h.is_empty())
        else {
            warn!("skipping card {:?}: no link", title);
            continue;
        };
        let link = if href.starts_with("http") {
            href.to_string()
        } else {
            format!("{}/{}", BASE_URL, href.trim_start_matches('/'))
        };

        let location = extract_location(&card);
        if location.is_empty() {
            warn!("skipping card {:?}: no location", title);
            continue;
        }

        if !keywords.is_empty() {
            let title_lower = title.to_lowercase();
            if !keywords.iter().any(|kw| title_lower.contains(&kw.to_lowercase())) {
                continue;
            }
        }

        postings.push(Posting {
            title,
            location,
            link,
        });
    }

    postings
}

fn extract_location(card: &scraper::ElementRef) -> String {
    let location_selectors = ["ul.top-jd-dtl li span", ".loc span", ".srp-loc"];

    for sel_str in &location_selectors {
        if let Ok(selector) = Selector::parse(sel_str) {
            for element in card.select(&selector) {
                let text = squash_whitespace(&element.text().collect::<String>());
                if !text.is_empty() {
                    return text;
                }
            }
        }
    }

    String::new()
}
