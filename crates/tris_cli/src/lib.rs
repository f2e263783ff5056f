//! Tris shell - the interactive console around `tris_core`.
//!
//! The shell owns all user I/O: prompts, 1-based coordinate entry,
//! re-prompting on bad input and typewriter pacing. It drives the core only
//! through `Position::empty`, `Position::apply_move`, `best_move`,
//! `is_terminal`, `outcome` and the board rendering.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod analyze;
mod cli;
mod config;
mod input;
mod pacing;
mod players;
mod shell;

// Crate-level exports - Command line
pub use cli::{Cli, Command, First, Side};

// Crate-level exports - Configuration
pub use config::{ConfigError, ShellConfig};

// Crate-level exports - Console
pub use input::{InputClosed, TokenReader};
pub use pacing::{Console, Pacing};

// Crate-level exports - Players
pub use players::{EnginePlayer, HumanPlayer, Player};

// Crate-level exports - Game loop
pub use shell::{FirstPlayer, SessionSummary, Shell};

// Crate-level exports - Analysis
pub use analyze::{Analysis, MoveReport, analyze, infer_to_move, run as run_analyze, write_report};
