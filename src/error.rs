//! Typed errors for the two places the run makes a policy decision:
//! whole-plugin scrape failures (isolated, run continues) and notification
//! failures (swallowed, but matches stay unmarked).

use thiserror::Error;

/// Failure of one whole plugin scrape. The orchestrator logs these and moves
/// on to the next plugin; they never abort the run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Request never completed (DNS, connect, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("unexpected HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// Response arrived but the listing payload was unusable.
    #[error("could not parse listings from {url}: {reason}")]
    Parse { url: String, reason: String },
}

impl ScrapeError {
    /// Transient failures a later run may succeed on, as opposed to markup or
    /// contract drift that needs a code change.
    pub fn is_retryable(&self) -> bool {
        match self {
            ScrapeError::Network { .. } => true,
            ScrapeError::Status { status, .. } => matches!(*status, 429 | 500..=599),
            ScrapeError::Parse { .. } => false,
        }
    }
}

/// Failure to deliver the per-run digest.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Mail credentials absent. The digest is logged instead of delivered.
    #[error("mail transport not configured")]
    NotConfigured,

    /// Delivery was attempted and failed.
    #[error("mail delivery failed: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_side_statuses_are_retryable() {
        let err = ScrapeError::Status {
            url: "https://example.com".to_string(),
            status: 503,
        };
        assert!(err.is_retryable());

        let err = ScrapeError::Status {
            url: "https://example.com".to_string(),
            status: 429,
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn client_errors_and_parse_failures_are_terminal() {
        let err = ScrapeError::Status {
            url: "https://example.com".to_string(),
            status: 404,
        };
        assert!(!err.is_retryable());

        let err = ScrapeError::Parse {
            url: "https://example.com".to_string(),
            reason: "no job cards in markup".to_string(),
        };
        assert!(!err.is_retryable());
    }
}
