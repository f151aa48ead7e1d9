//! Persistence for the set of already-notified links.
//!
//! The state file is a JSON array of link strings, read at run start and
//! overwritten at run end.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

/// Load the dedup set. A missing or malformed file is treated as an empty
/// set so a corrupted state file never blocks a run.
pub fn load_sent_links(path: &Path) -> HashSet<String> {
    if !path.exists() {
        return HashSet::new();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("could not read state file {}: {}", path.display(), e);
            return HashSet::new();
        }
    };

    match serde_json::from_str::<Vec<String>>(&content) {
        Ok(links) => links.into_iter().collect(),
        Err(e) => {
            warn!("ignoring malformed state file {}: {}", path.display(), e);
            HashSet::new()
        }
    }
}

/// Overwrite the state file with the full set, sorted so successive runs
/// produce diff-stable output.
pub fn save_sent_links(path: &Path, sent: &HashSet<String>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let mut links: Vec<&String> = sent.iter().collect();
    links.sort();

    let json = serde_json::to_string_pretty(&links)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write sent links to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sent_jobs.json");

        let sent: HashSet<String> = ["https://a.example/1".to_string(), "https://b.example/2".to_string()]
            .into_iter()
            .collect();

        save_sent_links(&path, &sent).unwrap();
        let loaded = load_sent_links(&path);

        assert_eq!(loaded, sent);
    }

    #[test]
    fn missing_file_loads_as_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nonexistent.json");

        assert!(load_sent_links(&path).is_empty());
    }

    #[test]
    fn malformed_file_loads_as_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sent_jobs.json");
        fs::write(&path, "{not json").unwrap();

        assert!(load_sent_links(&path).is_empty());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("sent_jobs.json");

        save_sent_links(&path, &HashSet::new()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn saved_links_are_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sent_jobs.json");

        let sent: HashSet<String> = ["z".to_string(), "a".to_string(), "m".to_string()]
            .into_iter()
            .collect();
        save_sent_links(&path, &sent).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let links: Vec<String> = serde_json::from_str(&content).unwrap();
        assert_eq!(links, vec!["a".to_string(), "m".to_string(), "z".to_string()]);
    }
}
