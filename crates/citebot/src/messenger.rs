//! The outbound messaging seam.
//!
//! The plugin never talks to a chat transport directly; it hands a
//! [`Reply`] to a [`Messenger`], which owns delivery and length limits.
//! [`Prefixed`] is the thin wrapper that stamps every outgoing message
//! with the `"[arXiv] "` source prefix.

use super::*;

/// Prefix identifying this plugin's messages to end users.
pub const OUTPUT_PREFIX: &str = "[arXiv] ";

/// Delivery capability provided by the hosting chat framework.
///
/// Implementations apply transport length limits via [`Reply::clip`] and
/// send the result wherever the conversation lives.
pub trait Messenger {
  /// Delivers one reply.
  fn say(&mut self, reply: &Reply);
}

/// Wraps a [`Messenger`] so every reply is prefixed with
/// [`OUTPUT_PREFIX`].
pub struct Prefixed<M> {
  /// The transport being decorated.
  inner: M,
}

impl<M: Messenger> Prefixed<M> {
  /// Wraps `inner` with the output prefix.
  pub fn new(inner: M) -> Self { Self { inner } }
}

impl<M: Messenger> Messenger for Prefixed<M> {
  fn say(&mut self, reply: &Reply) {
    let prefixed = Reply {
      text:       format!("{OUTPUT_PREFIX}{}", reply.text),
      truncation: reply.truncation,
      trailing:   reply.trailing,
    };
    self.inner.say(&prefixed);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Captures whatever was said, pre-clipped at a small limit.
  struct Capture {
    limit: usize,
    sent:  Vec<String>,
  }

  impl Messenger for Capture {
    fn say(&mut self, reply: &Reply) { self.sent.push(reply.clip(self.limit)); }
  }

  #[test]
  fn test_prefix_applied() {
    let mut messenger = Prefixed::new(Capture { limit: 400, sent: vec![] });
    let reply =
      Reply { text: "“A Paper” A, B — «abs".into(), truncation: "…", trailing: Some("»") };
    messenger.say(&reply);
    assert_eq!(messenger.inner.sent, vec!["[arXiv] “A Paper” A, B — «abs»"]);
  }

  #[test]
  fn test_prefix_counts_against_limit() {
    let mut messenger = Prefixed::new(Capture { limit: 12, sent: vec![] });
    let reply = Reply { text: "abcdef".into(), truncation: "…", trailing: Some("»") };
    messenger.say(&reply);
    // "[arXiv] " is 8 chars, leaving 2 for text + marker + trailing.
    assert_eq!(messenger.inner.sent, vec!["[arXiv] ab…»"]);
  }
}
