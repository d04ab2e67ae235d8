//! URL triggering for the plugin.
//!
//! The bot reacts to two link shapes: abstract pages
//! (`https://arxiv.org/abs/<id>`) and PDF pages
//! (`https://arxiv.org/pdf/<id>.pdf`). The host scans each incoming
//! message with [`find_trigger`] and, on a match, hands the URL to the
//! summarizer, which pulls the arXiv identifier out of it with
//! [`extract_identifier`].

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use super::*;

lazy_static! {
  /// Link shapes the plugin is registered against, tried in order.
  static ref ARXIV_PATTERNS: [Regex; 2] = [
    Regex::new(r"https?://arxiv\.org/abs/\S+").unwrap(),
    Regex::new(r"https?://arxiv\.org/pdf/\S+\.pdf").unwrap(),
  ];
}

/// Finds the first triggering arXiv link inside arbitrary message text.
///
/// Returns the earliest match across all registered patterns, or `None`
/// when the message contains no arXiv link.
///
/// # Examples
///
/// ```
/// use citebot::trigger::find_trigger;
///
/// let msg = "have you seen https://arxiv.org/abs/2301.07041 yet?";
/// assert_eq!(find_trigger(msg), Some("https://arxiv.org/abs/2301.07041"));
/// assert_eq!(find_trigger("no links here"), None);
/// ```
pub fn find_trigger(text: &str) -> Option<&str> {
  ARXIV_PATTERNS
    .iter()
    .filter_map(|pattern| pattern.find(text))
    .min_by_key(|m| m.start())
    .map(|m| m.as_str())
}

/// Extracts the arXiv identifier from a triggering URL.
///
/// The identifier is the last non-empty path segment, with a trailing
/// `.pdf` stripped so that abstract and PDF links yield the same
/// identifier. The identifier's own syntax is *not* validated: a
/// malformed identifier is passed through to the API and whatever comes
/// back is handled at the fetch/parse stage.
///
/// # Errors
///
/// Returns [`CitebotError::InvalidUrl`] if `link` is not a URL and
/// [`CitebotError::InvalidIdentifier`] if it has no path segments.
///
/// # Examples
///
/// ```
/// use citebot::trigger::extract_identifier;
///
/// # fn main() -> Result<(), citebot::errors::CitebotError> {
/// assert_eq!(extract_identifier("https://arxiv.org/abs/2301.07041")?, "2301.07041");
/// assert_eq!(extract_identifier("https://arxiv.org/pdf/2301.07041.pdf")?, "2301.07041");
/// # Ok(())
/// # }
/// ```
pub fn extract_identifier(link: &str) -> Result<String, CitebotError> {
  let url = Url::parse(link)?;
  let segment = url
    .path_segments()
    .and_then(|mut segments| segments.rfind(|segment| !segment.is_empty()))
    .ok_or(CitebotError::InvalidIdentifier)?;
  Ok(segment.strip_suffix(".pdf").unwrap_or(segment).to_owned())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_identifier_from_abs_url() {
    assert_eq!(extract_identifier("https://arxiv.org/abs/2301.07041").unwrap(), "2301.07041");
    assert_eq!(extract_identifier("http://arxiv.org/abs/2301.07041v2").unwrap(), "2301.07041v2");
  }

  #[test]
  fn test_identifier_from_pdf_url() {
    assert_eq!(extract_identifier("https://arxiv.org/pdf/2301.07041.pdf").unwrap(), "2301.07041");
  }

  #[test]
  fn test_identifier_survives_trailing_slash() {
    assert_eq!(extract_identifier("https://arxiv.org/abs/2301.07041/").unwrap(), "2301.07041");
  }

  #[test]
  fn test_identifier_missing_path() {
    assert!(matches!(
      extract_identifier("https://arxiv.org"),
      Err(CitebotError::InvalidIdentifier)
    ));
  }

  #[test]
  fn test_identifier_not_a_url() {
    assert!(matches!(extract_identifier("2301.07041"), Err(CitebotError::InvalidUrl(_))));
  }

  #[test]
  fn test_trigger_inside_message_text() {
    let msg = "see https://arxiv.org/abs/2301.07041 and tell me what you think";
    assert_eq!(find_trigger(msg), Some("https://arxiv.org/abs/2301.07041"));

    let msg = "pdf at https://arxiv.org/pdf/2301.07041.pdf";
    assert_eq!(find_trigger(msg), Some("https://arxiv.org/pdf/2301.07041.pdf"));
  }

  #[test]
  fn test_no_trigger() {
    assert_eq!(find_trigger("nothing to see here"), None);
    assert_eq!(find_trigger("https://example.com/abs/123"), None);
  }
}
