//! Error types for the citebotd host.
//!
//! The host's error boundary is deliberately thin: library errors that
//! the summarizer chose to propagate (malformed feeds, bad trigger URLs)
//! surface here, wrapped transparently so the original message reaches
//! the user.

use thiserror::Error;

/// Errors that can occur while running the host.
#[derive(Error, Debug)]
pub enum CitebotdErrors {
  /// Errors propagated out of the summarizer
  #[error(transparent)]
  Citebot(#[from] citebot::errors::CitebotError),

  /// File system and IO operation errors
  #[error(transparent)]
  IO(#[from] std::io::Error),
}
