//! Command-line interface for the self-play binary.

use clap::Parser;
use std::path::PathBuf;

/// Plays a game of word snake between two bots and prints every move.
#[derive(Parser, Debug)]
#[command(name = "wordsnake", version, long_about = None)]
pub struct Cli {
    /// Newline-delimited word list; the bundled Dutch list is used if omitted
    pub dictionary: Option<PathBuf>,
}
