use serde::{Deserialize, Serialize};

/// One scraped job or internship listing. The link doubles as the posting's
/// identity: it is what enters the dedup set once the posting has been
/// notified.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Posting {
    pub title: String,
    pub location: String,
    pub link: String,
}
