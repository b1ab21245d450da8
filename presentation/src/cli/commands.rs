//! CLI command definitions

use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// CLI arguments for tld-guesser
#[derive(Parser, Debug)]
#[command(name = "tld-guesser")]
#[command(author, version, about = "TLD guessing game - question and prediction API")]
#[command(long_about = r#"
tld-guesser serves a small guessing game: given a website's base name and
content category, pick its real top-level domain from model-ranked options.

Without a command the HTTP API is served (GET /api/question,
GET /api/categories, POST /api/predict).

Configuration files are loaded from (in priority order):
1. --config <path>                         Explicit config file
2. ./tld-guesser.toml                      Project-level config
3. ~/.config/tld-guesser/config.toml       Global config
Environment variables (PORT, TLD_GUESSER_<SECTION>__<KEY>) override all files.

Example:
  tld-guesser serve --port 8080
  tld-guesser question
  tld-guesser predict bbc --category news
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        /// Address to bind (overrides server.host)
        #[arg(long)]
        host: Option<IpAddr>,

        /// Port to bind (overrides server.port and PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate one question and print it
    Question {
        /// Print the JSON body the API would return
        #[arg(long)]
        json: bool,
    },

    /// Predict the TLD of a base name
    Predict {
        /// Base name, e.g. "bbc"
        base_name: String,

        /// Content category; selects the joint model when given
        #[arg(short, long)]
        category: Option<String>,

        /// Print the JSON body the API would return
        #[arg(long)]
        json: bool,
    },

    /// Print the category list
    Categories,
}

impl Cli {
    /// The selected command, `serve` when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            host: None,
            port: None,
        })
    }

    /// Log filter for the selected command and `-v` count.
    ///
    /// The server logs at `info` by default; one-shot commands stay at `warn`
    /// so their output is not interleaved with log lines.
    pub fn log_filter(&self) -> &'static str {
        const LEVELS: [&str; 4] = ["warn", "info", "debug", "trace"];
        let base = match self.command() {
            Command::Serve { .. } => 1,
            _ => 0,
        };
        LEVELS[(base + self.verbose as usize).min(LEVELS.len() - 1)]
    }
}
