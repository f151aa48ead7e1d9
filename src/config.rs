//! Run configuration, read once from the environment at startup and passed
//! by reference to the components that need it.

use std::env;
use std::path::PathBuf;

const DEFAULT_KEYWORDS: &str = "engineer,developer";
const DEFAULT_LOCATIONS: &str = "india,bangalore,hyderabad";
const DEFAULT_SENT_JOBS_FILE: &str = "sent_jobs.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Keyword substrings a posting title must match (case-insensitive).
    pub keywords: Vec<String>,
    /// Location substrings a posting location must match (case-insensitive).
    pub locations: Vec<String>,
    /// Path of the persisted set of already-notified links.
    pub sent_jobs_path: PathBuf,
    /// Outbound mail credentials; `None` disables delivery.
    pub mail: Option<MailConfig>,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_url: String,
    pub api_key: String,
    pub recipient: String,
}

impl Config {
    pub fn from_env() -> Self {
        // A missing .env is fine; variables may be set system-wide.
        dotenvy::dotenv().ok();

        let keywords = parse_list(
            &env::var("KEYWORDS").unwrap_or_else(|_| DEFAULT_KEYWORDS.to_string()),
        );
        let locations = parse_list(
            &env::var("LOCATIONS").unwrap_or_else(|_| DEFAULT_LOCATIONS.to_string()),
        );
        let sent_jobs_path = PathBuf::from(
            env::var("SENT_JOBS_FILE").unwrap_or_else(|_| DEFAULT_SENT_JOBS_FILE.to_string()),
        );

        Self {
            keywords,
            locations,
            sent_jobs_path,
            mail: MailConfig::from_env(),
        }
    }
}

impl MailConfig {
    /// All three variables must be present; otherwise mail is unconfigured
    /// and the run degrades to logging the digest.
    fn from_env() -> Option<Self> {
        let api_url = env::var("MAIL_API_URL").ok()?;
        let api_key = env::var("MAIL_API_KEY").ok()?;
        let recipient = env::var("MAIL_TO").ok()?;
        Some(Self {
            api_url,
            api_key,
            recipient,
        })
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_trims_and_drops_empties() {
        assert_eq!(
            parse_list(" engineer , developer ,, "),
            vec!["engineer".to_string(), "developer".to_string()]
        );
    }

    #[test]
    fn parse_list_of_blank_input_is_empty() {
        assert!(parse_list("").is_empty());
        assert!(parse_list(" , ").is_empty());
    }
}
