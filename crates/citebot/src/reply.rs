//! Article metadata and reply formatting.
//!
//! This is the presentation half of the pipeline: given the metadata
//! parsed from the feed, produce the citation line the bot says back,
//! e.g.
//!
//! ```text
//! “Verifiable Fully Homomorphic Encryption” Alexander Viand, Christian
//! Knabenhans, Anwar Hithnawi — «Fully Homomorphic Encryption (FHE) is …»
//! ```
//!
//! Length limiting is a transport concern, so the formatted [`Reply`]
//! carries its truncation marker and trailing decoration along and the
//! messaging host applies them via [`Reply::clip`].

/// Marker appended in place of text removed to fit a transport limit.
pub const TRUNCATION: &str = "…";

/// Closing decoration of the abstract excerpt; appended after any
/// truncation so the quote always closes.
pub const TRAILING: &str = "»";

/// Metadata extracted from one arXiv feed, built fresh per request and
/// discarded with it.
#[derive(Debug, Clone)]
pub struct ArticleMetadata {
  /// The feed's echo of our query. Present in every response; unused in
  /// the reply.
  pub query_title:   String,
  /// The paper's title.
  pub article_title: String,
  /// Author names in feed order.
  pub authors:       Vec<String>,
  /// Abstract text with newlines collapsed to spaces and surrounding
  /// whitespace trimmed; empty when the feed carries none.
  pub summary:       String,
}

impl ArticleMetadata {
  /// Formats the author list for display.
  ///
  /// Up to three authors are joined with `", "`; four or more render as
  /// the first three followed by `" et al."`. No authors renders as the
  /// empty string.
  pub fn author_list(&self) -> String {
    if self.authors.len() <= 3 {
      self.authors.join(", ")
    } else {
      format!("{} et al.", self.authors[..3].join(", "))
    }
  }

  /// Formats the citation reply.
  ///
  /// With a summary: `“<title>” <authors> — «<summary>` plus the closing
  /// `»` as trailing decoration. Without one, just `“<title>” <authors>`.
  pub fn to_reply(&self) -> Reply {
    let author_list = self.author_list();
    if self.summary.is_empty() {
      Reply {
        text:       format!("“{}” {}", self.article_title, author_list),
        truncation: TRUNCATION,
        trailing:   None,
      }
    } else {
      Reply {
        text:       format!("“{}” {} — «{}", self.article_title, author_list, self.summary),
        truncation: TRUNCATION,
        trailing:   Some(TRAILING),
      }
    }
  }
}

/// A formatted reply plus the decoration the transport must apply when
/// delivering it.
#[derive(Debug, Clone)]
pub struct Reply {
  /// The reply text, without trailing decoration.
  pub text:       String,
  /// Marker to insert where the text gets cut.
  pub truncation: &'static str,
  /// Decoration appended after the text, surviving any truncation.
  pub trailing:   Option<&'static str>,
}

impl Reply {
  /// Renders the reply within a transport length limit, in characters.
  ///
  /// The trailing decoration is always appended and never cut off; when
  /// the text does not fit, it is shortened to leave room for the
  /// truncation marker followed by the trailing decoration.
  pub fn clip(&self, max_chars: usize) -> String {
    let trailing = self.trailing.unwrap_or("");
    let trailing_chars = trailing.chars().count();

    if self.text.chars().count() + trailing_chars <= max_chars {
      return format!("{}{trailing}", self.text);
    }

    let marker_chars = self.truncation.chars().count();
    let keep = max_chars.saturating_sub(marker_chars + trailing_chars);
    let kept: String = self.text.chars().take(keep).collect();
    format!("{kept}{}{trailing}", self.truncation)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn metadata(authors: &[&str], summary: &str) -> ArticleMetadata {
    ArticleMetadata {
      query_title:   "ArXiv Query".into(),
      article_title: "A Paper".into(),
      authors:       authors.iter().map(|a| a.to_string()).collect(),
      summary:       summary.into(),
    }
  }

  #[test]
  fn test_author_list_up_to_three() {
    assert_eq!(metadata(&[], "").author_list(), "");
    assert_eq!(metadata(&["A"], "").author_list(), "A");
    assert_eq!(metadata(&["A", "B", "C"], "").author_list(), "A, B, C");
  }

  #[test]
  fn test_author_list_four_or_more() {
    assert_eq!(metadata(&["A", "B", "C", "D"], "").author_list(), "A, B, C et al.");
    assert_eq!(metadata(&["A", "B", "C", "D", "E"], "").author_list(), "A, B, C et al.");
  }

  #[test]
  fn test_reply_with_summary() {
    let reply = metadata(&["A", "B"], "short abstract").to_reply();
    assert_eq!(reply.text, "“A Paper” A, B — «short abstract");
    assert_eq!(reply.trailing, Some("»"));
  }

  #[test]
  fn test_reply_without_summary() {
    let reply = metadata(&["A", "B"], "").to_reply();
    assert_eq!(reply.text, "“A Paper” A, B");
    assert_eq!(reply.trailing, None);
  }

  #[test]
  fn test_clip_appends_trailing_when_within_limit() {
    let reply = metadata(&["A"], "abstract").to_reply();
    assert_eq!(reply.clip(400), "“A Paper” A — «abstract»");
  }

  #[test]
  fn test_clip_truncates_but_keeps_trailing() {
    let reply = Reply { text: "abcdef".into(), truncation: TRUNCATION, trailing: Some(TRAILING) };
    assert_eq!(reply.clip(5), "abc…»");
    assert_eq!(reply.clip(7), "abcdef»");
  }

  #[test]
  fn test_clip_without_trailing() {
    let reply = Reply { text: "abcdef".into(), truncation: TRUNCATION, trailing: None };
    assert_eq!(reply.clip(4), "abc…");
    assert_eq!(reply.clip(6), "abcdef");
  }
}
