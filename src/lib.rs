//! Job opportunity tracker library.
//!
//! Scrapes job-listing sources, filters postings against keyword/location
//! criteria and the set of links already notified, and mails a digest of new
//! matches.

pub mod config;
pub mod error;
pub mod filter;
pub mod notify;
pub mod pipeline;
pub mod scrapers;
pub mod storage;
pub mod types;

pub use types::*;
