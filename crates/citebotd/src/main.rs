//! Console host for the citebot plugin.
//!
//! Plays the role of the hosting chat framework: detects triggering URLs
//! in incoming text, invokes the summarizer, and delivers replies through
//! a prefixed stdout [`Messenger`] with a transport length limit.

use std::io::{self, BufRead, Stdout, Write};

use citebot::{
  messenger::{Messenger, Prefixed},
  reply::Reply,
  summarizer::Summarizer,
  trigger,
};
use clap::{builder::ArgAction, Parser, Subcommand};
use console::style;
use errors::CitebotdErrors;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod errors;

/// Default length limit for outgoing replies, roughly an IRC PRIVMSG
/// payload.
const DEFAULT_LIMIT: usize = 400;

#[derive(Parser)]
#[command(author, version, about = "Chat bot host that replies to arXiv links with a citation")]
struct Cli {
  /// Verbose mode (-v, -vv, -vvv)
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Summarize a single arXiv link and print the reply
  Fetch {
    /// The arXiv abstract or PDF link
    url:   String,
    /// Message length limit in characters
    #[arg(long, short)]
    limit: Option<usize>,
  },
  /// Scan stdin lines for arXiv links and print a reply per match
  Watch {
    /// Message length limit in characters
    #[arg(long, short)]
    limit: Option<usize>,
  },
}

/// Messenger that prints clipped replies to stdout.
struct Console {
  /// Transport length limit in characters.
  limit: usize,
  /// Where replies go.
  out:   Stdout,
}

impl Messenger for Console {
  fn say(&mut self, reply: &Reply) {
    // Delivery failure is the transport's problem, not the plugin's.
    let _ = writeln!(self.out, "{}", reply.clip(self.limit));
  }
}

/// Setup logging with the specified verbosity level
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

#[tokio::main]
async fn main() -> Result<(), CitebotdErrors> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let summarizer = Summarizer::new();

  match cli.command {
    Commands::Fetch { url, limit } => {
      let limit = limit.unwrap_or(DEFAULT_LIMIT);
      match summarizer.summarize(&url).await? {
        Some(reply) => {
          let mut messenger = Prefixed::new(Console { limit, out: io::stdout() });
          messenger.say(&reply);
        },
        None => {
          eprintln!("{} No reply: the metadata fetch failed, see logs", style("⚠").yellow());
        },
      }
      Ok(())
    },

    Commands::Watch { limit } => {
      let limit = limit.unwrap_or(DEFAULT_LIMIT);
      let mut messenger = Prefixed::new(Console { limit, out: io::stdout() });

      for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(link) = trigger::find_trigger(&line) else { continue };
        debug!("Matched arXiv link: {link}");

        match summarizer.summarize(link).await {
          Ok(Some(reply)) => messenger.say(&reply),
          // Fetch failed: the summarizer logged it, the conversation
          // sees nothing.
          Ok(None) => {},
          // The host's error boundary: log and keep the bot alive.
          Err(e) => eprintln!("{} arXiv reply failed: {e}", style("✖").red()),
        }
      }
      Ok(())
    },
  }
}
