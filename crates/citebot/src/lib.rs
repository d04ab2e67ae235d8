//! A chat bot plugin that detects arXiv links in conversation and replies
//! with a short formatted citation (title, truncated author list, abstract
//! excerpt).
//!
//! The hosting chat framework detects a matching URL, invokes
//! [`summarizer::Summarizer::summarize`] with it, and sends the returned
//! [`reply::Reply`] (or nothing, when the fetch failed) through a
//! [`messenger::Messenger`].
//!
//! # Example
//! ```rust,no_run
//! use citebot::summarizer::Summarizer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!   let summarizer = Summarizer::new();
//!   if let Some(reply) = summarizer.summarize("https://arxiv.org/abs/2301.07041").await? {
//!     println!("{}", reply.clip(400));
//!   }
//!   Ok(())
//! }
//! ```

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use serde::Deserialize;
use tracing::{debug, error};
#[cfg(test)] use tracing_test::traced_test;

pub mod arxiv;
pub mod errors;
pub mod messenger;
pub mod reply;
pub mod summarizer;
pub mod trigger;

use arxiv::ArxivClient;
use errors::CitebotError;
use reply::{ArticleMetadata, Reply};
