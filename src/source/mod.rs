//! Character data sources.
//!
//! This module assembles the full character list from the paged API:
//! - [`PageSource`] abstracts one request + parse so the loop is testable
//! - [`HttpPageSource`] is the reqwest-backed implementation
//! - [`fetch_all`] walks `info.next` links sequentially up to a hard cap
//!
//! Fetch failures never abort the application. The loop stops at the first
//! failing page, logs it and hands back whatever was collected.

use crate::model::{Character, FetchError};
use serde::Deserialize;
use tracing::{debug, error, info};

pub mod http;

pub use http::HttpPageSource;

/// Hard upper bound on records retrieved, regardless of source size.
pub const CHARACTER_CAP: usize = 250;

/// First page of the public character collection.
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/api/character";

// ===== Wire types =====

/// Pagination metadata attached to every page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PageInfo {
    /// Total records in the collection, when reported.
    #[serde(default)]
    pub count: Option<u32>,
    /// Total pages in the collection, when reported.
    #[serde(default)]
    pub pages: Option<u32>,
    /// URL of the next page; `None` on the last page.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page; `None` on the first page.
    #[serde(default)]
    pub prev: Option<String>,
}

/// One page of the collection: a batch of records plus pagination info.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    /// Pagination metadata.
    pub info: PageInfo,
    /// Records on this page.
    pub results: Vec<Character>,
}

impl Page {
    /// Parse a page from a JSON body fetched from `url`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Parse` when the body does not match the page shape.
    pub fn from_json(url: &str, body: &str) -> Result<Self, FetchError> {
        serde_json::from_str(body).map_err(|source| FetchError::Parse {
            url: url.to_string(),
            source,
        })
    }
}

// ===== PageSource =====

/// Something that can fetch one page of the collection by URL.
pub trait PageSource {
    /// Request and parse the page at `url`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` for transport, status or parse failures.
    fn fetch_page(&mut self, url: &str) -> Result<Page, FetchError>;
}

// ===== Page loop =====

/// Progress report emitted after each page is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchProgress {
    /// Pages fetched so far.
    pub pages_fetched: usize,
    /// Records accumulated so far (before truncation to the cap).
    pub records_fetched: usize,
    /// Total records the source reports, when known.
    pub reported_total: Option<u32>,
}

/// Result of the page loop.
///
/// `error` being set means the list is partial; the records collected up to
/// the failure are still in `characters`.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Collected records, at most the cap.
    pub characters: Vec<Character>,
    /// Pages successfully fetched.
    pub pages_fetched: usize,
    /// First failure, if the loop stopped early.
    pub error: Option<FetchError>,
}

impl FetchOutcome {
    /// Whether the loop ended because of a failure.
    pub fn is_partial(&self) -> bool {
        self.error.is_some()
    }
}

/// Walk the collection from `first_url`, following `info.next`, until there
/// is no next page or `cap` records have been collected.
///
/// Requests are strictly sequential. `on_progress` is called after every
/// successful page, which lets the shell redraw a loading indicator between
/// requests. The result is truncated to exactly `cap` when the last batch
/// overshoots.
pub fn fetch_all<S, F>(source: &mut S, first_url: &str, cap: usize, mut on_progress: F) -> FetchOutcome
where
    S: PageSource + ?Sized,
    F: FnMut(FetchProgress),
{
    let mut characters = Vec::new();
    let mut pages_fetched = 0;
    let mut next = Some(first_url.to_string());

    while let Some(url) = next.take() {
        if characters.len() >= cap {
            break;
        }

        debug!(url = %url, "Fetching page");
        let page = match source.fetch_page(&url) {
            Ok(page) => page,
            Err(err) => {
                error!(
                    url = %url,
                    collected = characters.len(),
                    error = %err,
                    "Fetch failed, continuing with partial data"
                );
                characters.truncate(cap);
                return FetchOutcome {
                    characters,
                    pages_fetched,
                    error: Some(err),
                };
            }
        };

        pages_fetched += 1;
        characters.extend(page.results);
        next = page.info.next;

        on_progress(FetchProgress {
            pages_fetched,
            records_fetched: characters.len(),
            reported_total: page.info.count,
        });
    }

    characters.truncate(cap);
    info!(
        records = characters.len(),
        pages = pages_fetched,
        "Character list assembled"
    );

    FetchOutcome {
        characters,
        pages_fetched,
        error: None,
    }
}

/// [`fetch_all`] with the standard [`CHARACTER_CAP`].
pub fn fetch_characters<S, F>(source: &mut S, first_url: &str, on_progress: F) -> FetchOutcome
where
    S: PageSource + ?Sized,
    F: FnMut(FetchProgress),
{
    fetch_all(source, first_url, CHARACTER_CAP, on_progress)
}
