//! The link-to-reply pipeline.
//!
//! [`Summarizer::summarize`] is the handler the host registers against the
//! trigger patterns: URL in, optional [`Reply`] out. Each invocation is
//! independent and stateless and performs exactly one outbound HTTP
//! request.

use super::*;

/// Turns a triggering arXiv URL into a citation reply.
///
/// # Examples
///
/// ```no_run
/// use citebot::summarizer::Summarizer;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let summarizer = Summarizer::new();
/// match summarizer.summarize("https://arxiv.org/abs/2301.07041").await? {
///   Some(reply) => println!("{}", reply.clip(400)),
///   None => {}, // fetch failed, already logged
/// }
/// # Ok(())
/// # }
/// ```
pub struct Summarizer {
  /// Client used for the metadata fetch.
  client: ArxivClient,
}

impl Summarizer {
  /// Creates a summarizer against the real arXiv API.
  pub fn new() -> Self { Self { client: ArxivClient::new() } }

  /// Creates a summarizer with a preconfigured client, for tests.
  pub fn with_client(client: ArxivClient) -> Self { Self { client } }

  /// Summarizes one arXiv link.
  ///
  /// # Returns
  ///
  /// - `Ok(Some(reply))` — the citation to say.
  /// - `Ok(None)` — the metadata fetch failed; the failure has been
  ///   logged and the host must send nothing.
  ///
  /// # Errors
  ///
  /// Identifier-extraction and feed-parse failures are *not* downgraded
  /// to "no reply": they propagate so the host's error boundary can
  /// decide their disposition. In particular a feed that lacks the query
  /// title or the article title is a [`CitebotError::MalformedFeed`].
  pub async fn summarize(&self, url: &str) -> Result<Option<Reply>, CitebotError> {
    let identifier = trigger::extract_identifier(url)?;

    let body = match self.client.fetch_feed(&identifier).await {
      Ok(body) => body,
      Err(e) => {
        error!("request to arXiv API failed: {e}");
        return Ok(None);
      },
    };

    let metadata = arxiv::parse_feed(&body)?;
    Ok(Some(metadata.to_reply()))
  }
}

impl Default for Summarizer {
  fn default() -> Self { Self::new() }
}
