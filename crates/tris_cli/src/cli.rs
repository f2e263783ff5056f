//! Command-line interface for tris.

use crate::shell::FirstPlayer;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tris_core::Player;

/// Tris - tic-tac-toe against an unbeatable minimax engine
#[derive(Parser, Debug)]
#[command(name = "tris")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the shell configuration file
    #[arg(short, long, default_value = "tris.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on the terminal
    Play {
        /// Who moves first; asks when omitted
        #[arg(long, value_enum)]
        first: Option<First>,

        /// Print text immediately instead of spelling it out
        #[arg(long)]
        no_pacing: bool,
    },

    /// Score a position and every move from it
    Analyze {
        /// Board in compact notation, e.g. "XX_/OO_/___"
        board: String,

        /// Player to move; inferred from the marker counts when omitted
        #[arg(long, value_enum)]
        to_move: Option<Side>,

        /// Emit JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
}

/// Command-line spelling of [`FirstPlayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum First {
    /// The human plays first as X
    Human,
    /// The engine plays first as O
    Engine,
}

impl From<First> for FirstPlayer {
    fn from(first: First) -> Self {
        match first {
            First::Human => FirstPlayer::Human,
            First::Engine => FirstPlayer::Engine,
        }
    }
}

/// Command-line spelling of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let cli =
            Cli::try_parse_from(["tris", "play", "--first", "engine", "--no-pacing"]).unwrap();
        match cli.command {
            Command::Play { first, no_pacing } => {
                assert_eq!(first, Some(First::Engine));
                assert!(no_pacing);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("tris.toml"));
    }

    #[test]
    fn test_parse_analyze() {
        let cli =
            Cli::try_parse_from(["tris", "analyze", "XX_/OO_/___", "--to-move", "o", "--json"])
                .unwrap();
        match cli.command {
            Command::Analyze {
                board,
                to_move,
                json,
            } => {
                assert_eq!(board, "XX_/OO_/___");
                assert_eq!(to_move.map(Player::from), Some(Player::O));
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
