//! Command-line interface for neon_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Neon Tic-Tac-Toe - N×N tic-tac-toe with an AI opponent
#[derive(Parser, Debug)]
#[command(name = "neon_tictactoe")]
#[command(about = "N×N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON file holding saved settings and scores
    #[arg(long, default_value = "neon_tictactoe.json")]
    pub store: PathBuf,

    /// TOML config used when the store has no settings yet
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the AI's random moves (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively
    Play,

    /// Print the score tally
    Scores,

    /// Zero the score tally
    ResetScores,

    /// Show settings, or change them
    Settings {
        /// Board edge length (3-10)
        #[arg(long)]
        size: Option<String>,

        /// Game mode: twoPlayer or ai
        #[arg(long)]
        mode: Option<String>,

        /// Theme: neon, retro or cosmic
        #[arg(long)]
        theme: Option<String>,
    },

    /// Print the draw commands of a few background animation frames
    Particles {
        /// Number of frames to simulate
        #[arg(long, default_value = "3")]
        frames: usize,

        /// Canvas width in pixels
        #[arg(long, default_value = "800")]
        width: f64,

        /// Canvas height in pixels
        #[arg(long, default_value = "600")]
        height: f64,
    },
}

/// One line typed during interactive play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Play the cell with this 1-based number.
    Move(usize),
    /// Start a new game.
    Reset,
    /// Change the board size.
    Size(String),
    /// Change the game mode.
    Mode(String),
    /// Change the theme.
    Theme(String),
    /// Show the tally.
    Scores,
    /// Ask the AI for a suggestion.
    Hint,
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Help text for interactive play.
pub const HELP: &str = "\
  <n>           play cell n
  r             new game
  size <n>      change board size (3-10)
  mode <m>      twoPlayer or ai
  theme <t>     neon, retro or cosmic
  hint          suggest a move
  scores        show the tally
  q             quit";

/// Parses one interactive line. Returns `None` for unrecognized input.
pub fn parse_input(line: &str) -> Option<Input> {
    let mut words = line.split_whitespace();
    let head = words.next()?.to_lowercase();
    let arg = words.next().map(str::to_string);

    match (head.as_str(), arg) {
        ("r" | "reset", None) => Some(Input::Reset),
        ("size", Some(arg)) => Some(Input::Size(arg)),
        ("mode", Some(arg)) => Some(Input::Mode(arg)),
        ("theme", Some(arg)) => Some(Input::Theme(arg)),
        ("scores", None) => Some(Input::Scores),
        ("hint", None) => Some(Input::Hint),
        ("h" | "help" | "?", None) => Some(Input::Help),
        ("q" | "quit" | "exit", None) => Some(Input::Quit),
        (number, None) => number.parse().ok().filter(|n| *n > 0).map(Input::Move),
        _ => None,
    }
}
