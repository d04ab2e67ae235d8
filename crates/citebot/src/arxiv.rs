//! Client for the arXiv metadata API.
//!
//! This module issues the single `id_list` query against arXiv's Atom feed
//! API (https://export.arxiv.org/api/query) and parses the response into an
//! [`ArticleMetadata`]. The feed carries two `title` elements: the feed's
//! own title echoes the query, the entry's title is the article's. Both
//! must be present for parsing to succeed; the abstract is optional.
//!
//! # Examples
//!
//! ```no_run
//! use citebot::arxiv::{parse_feed, ArxivClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ArxivClient::new();
//! let body = client.fetch_feed("2301.07041").await?;
//! let metadata = parse_feed(&body)?;
//!
//! println!("Title: {}", metadata.article_title);
//! println!("Authors: {}", metadata.authors.len());
//! # Ok(())
//! # }
//! ```

use quick_xml::de::from_str;

use super::*;

/// The arXiv metadata query endpoint.
pub const ARXIV_QUERY_URL: &str = "https://export.arxiv.org/api/query";

/// Internal representation of the arXiv API's Atom feed response.
#[derive(Debug, Deserialize)]
struct Feed {
  /// The feed's own title, which echoes the query we sent.
  title:   Option<String>,
  /// A `Feed` from arXiv may contain multiple `Entry`s; an `id_list`
  /// query for one identifier yields at most one.
  #[serde(rename = "entry", default)]
  entries: Vec<Entry>,
}

/// Internal representation of a paper entry from arXiv's API response.
#[derive(Debug, Deserialize)]
struct Entry {
  /// Paper title (may contain LaTeX markup)
  title:   Option<String>,
  /// List of paper authors, in document order
  #[serde(rename = "author", default)]
  authors: Vec<Author>,
  /// Paper abstract (may contain LaTeX markup); absent for some records
  summary: Option<String>,
}

/// Internal representation of an author from arXiv's API response.
#[derive(Debug, Deserialize)]
struct Author {
  /// Author's full name
  name: String,
}

/// Client for the arXiv metadata API.
///
/// Performs exactly one blocking-style GET per invocation: no retry, no
/// cache, no shared state between calls beyond the reused connection pool.
pub struct ArxivClient {
  /// Internal web client used to connect to the API.
  client:   reqwest::Client,
  /// Query endpoint; overridable so tests can point at a mock server.
  base_url: String,
}

impl ArxivClient {
  /// Creates a new client against the real arXiv API endpoint.
  pub fn new() -> Self {
    Self { client: reqwest::Client::new(), base_url: ARXIV_QUERY_URL.to_owned() }
  }

  /// Creates a client against an alternate endpoint, for tests.
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Self { client: reqwest::Client::new(), base_url: base_url.into() }
  }

  /// Fetches the raw Atom feed for a single arXiv identifier.
  ///
  /// # Errors
  ///
  /// Returns [`CitebotError::Network`] if the request fails or the API
  /// responds with a non-success status. The caller decides whether that
  /// is fatal; the summarizer logs it and yields no reply.
  pub async fn fetch_feed(&self, identifier: &str) -> Result<String, CitebotError> {
    let url = format!("{}?id_list={}", self.base_url, identifier);

    debug!("Fetching from arXiv via: {url}");

    let response = self.client.get(&url).send().await?.error_for_status()?;
    let body = response.text().await?;

    debug!("arXiv response: {body}");

    Ok(body)
  }
}

impl Default for ArxivClient {
  fn default() -> Self { Self::new() }
}

/// Parses an arXiv Atom feed into [`ArticleMetadata`].
///
/// The feed title and the entry title must both be present ("two titles"),
/// otherwise this is a hard failure. A missing or empty abstract is not:
/// it is downgraded to an empty summary, with newlines collapsed to
/// single spaces and surrounding whitespace trimmed.
///
/// # Errors
///
/// Returns [`CitebotError::MalformedFeed`] if the XML cannot be
/// deserialized, the feed has no query title, no entry, or the entry has
/// no title.
pub fn parse_feed(xml: &str) -> Result<ArticleMetadata, CitebotError> {
  let feed: Feed =
    from_str(xml).map_err(|e| CitebotError::MalformedFeed(format!("failed to parse XML: {e}")))?;

  let query_title =
    feed.title.ok_or_else(|| CitebotError::MalformedFeed("feed has no query title".into()))?;
  let entry = feed
    .entries
    .into_iter()
    .next()
    .ok_or_else(|| CitebotError::MalformedFeed("feed has no entry".into()))?;
  let article_title =
    entry.title.ok_or_else(|| CitebotError::MalformedFeed("entry has no title".into()))?;

  let authors = entry.authors.into_iter().map(|author| author.name).collect();
  let summary =
    entry.summary.map(|s| s.replace('\n', " ").trim().to_owned()).unwrap_or_default();

  Ok(ArticleMetadata { query_title, article_title, authors, summary })
}
