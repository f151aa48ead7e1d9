//! Outbound notification. One digest per run, delivered through an HTTP
//! mail relay; missing credentials degrade to logging the digest.

use chrono::Utc;
use tracing::info;

use crate::config::MailConfig;
use crate::error::NotifyError;
use crate::types::Posting;

/// Delivery seam so the pipeline can be exercised without a live relay.
pub trait Notifier {
    fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError>;
}

pub struct MailNotifier {
    mail: Option<MailConfig>,
}

impl MailNotifier {
    pub fn new(mail: Option<MailConfig>) -> Self {
        Self { mail }
    }
}

impl Notifier for MailNotifier {
    fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        let Some(mail) = &self.mail else {
            info!("no mail transport configured, digest follows:\n{}", body);
            return Err(NotifyError::NotConfigured);
        };

        let client = reqwest::blocking::Client::new();
        let response = client
            .post(&mail.api_url)
            .bearer_auth(&mail.api_key)
            .json(&serde_json::json!({
                "to": mail.recipient,
                "subject": subject,
                "text": body,
            }))
            .send()
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotifyError::Transport(format!(
                "relay returned HTTP {}",
                response.status().as_u16()
            )));
        }

        info!("mail sent to {}", mail.recipient);
        Ok(())
    }
}

/// Digest body: dated header plus one line per matched posting.
pub fn format_digest(matches: &[Posting]) -> String {
    let mut lines = vec![format!("Job matches for {}", Utc::now().format("%Y-%m-%d"))];
    for posting in matches {
        lines.push(format!(
            "{} ({}): {}",
            posting.title, posting.location, posting.link
        ));
    }
    lines.join("\n")
}
