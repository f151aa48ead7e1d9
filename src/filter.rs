//! Keyword/location matching against the set of already-notified links.

use std::collections::HashSet;

use crate::types::Posting;

/// Single-pass relevance filter. A posting survives when its link is
/// non-empty and not yet notified, its title contains at least one keyword
/// and its location contains at least one target location, both as
/// case-insensitive substrings. Output preserves input order.
///
/// An empty keyword or location list matches nothing.
pub fn filter_postings(
    postings: &[Posting],
    keywords: &[String],
    locations: &[String],
    sent: &HashSet<String>,
) -> Vec<Posting> {
    postings
        .iter()
        .filter(|posting| !posting.link.is_empty() && !sent.contains(&posting.link))
        .filter(|posting| {
            let title = posting.title.to_lowercase();
            let location = posting.location.to_lowercase();
            keywords.iter().any(|kw| title.contains(&kw.to_lowercase()))
                && locations.iter().any(|loc| location.contains(&loc.to_lowercase()))
        })
        .cloned()
        .collect()
}
