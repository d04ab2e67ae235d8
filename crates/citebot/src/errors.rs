//! Error types for the citebot library.
//!
//! The failure taxonomy deliberately mirrors how the bot is expected to
//! behave per failure class:
//! - [`CitebotError::Network`] is the *recoverable* class: the summarizer
//!   logs it and yields no reply, and the host sends nothing.
//! - [`CitebotError::MalformedFeed`] is *unrecovered*: it propagates out of
//!   the handler and the host's own error boundary decides what to do.
//! - A missing abstract is not an error at all; it is downgraded to an
//!   empty summary inside the feed parser.

use thiserror::Error;

/// Errors that can occur while turning an arXiv link into a reply.
///
/// Note the asymmetry between [`CitebotError::Network`] and
/// [`CitebotError::MalformedFeed`]: the summarizer swallows the former
/// (logging it, returning no reply) while the latter escapes the handler.
/// Hosts that want a crash-proof bot must catch `MalformedFeed` at their
/// own boundary.
#[derive(Error, Debug)]
pub enum CitebotError {
  /// A network request failed or the arXiv API returned a non-success
  /// HTTP status.
  ///
  /// This can occur when:
  /// - The network is unavailable
  /// - The server is unreachable
  /// - The request times out
  /// - The API responds with a 4xx/5xx status
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The API response is not the Atom feed shape we expect.
  ///
  /// This covers undeserializable XML, a feed with no query title, a feed
  /// with no entry, and an entry with no title. The string parameter
  /// carries the detail for diagnostics.
  #[error("malformed arXiv feed: {0}")]
  MalformedFeed(String),

  /// The triggering string could not be parsed as a URL.
  ///
  /// The host only invokes the handler with URLs matched by the trigger
  /// patterns, so hitting this indicates a host-side bug.
  #[error(transparent)]
  InvalidUrl(#[from] url::ParseError),

  /// The triggering URL has no non-empty path segment to use as an arXiv
  /// identifier.
  #[error("URL has no identifier path segment")]
  InvalidIdentifier,
}
