//! One-shot analysis of a position given on the command line.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument};
use tris_core::{Board, MoveEvaluation, Outcome, Player, Position, best_move, evaluate_moves, score};

/// A legal move and its exact value, with 1-based coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    /// Row, 1-based.
    pub row: usize,
    /// Column, 1-based.
    pub col: usize,
    /// Score of the resulting position.
    pub score: i32,
    /// The move ends the game.
    pub decisive: bool,
}

impl From<&MoveEvaluation> for MoveReport {
    fn from(evaluation: &MoveEvaluation) -> Self {
        Self {
            row: evaluation.mv.row + 1,
            col: evaluation.mv.col + 1,
            score: evaluation.score,
            decisive: evaluation.is_decisive(),
        }
    }
}

/// Everything `tris analyze` reports about a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The analysed position.
    #[serde(skip)]
    pub position: Position,
    /// Player to move.
    pub to_move: Player,
    /// Current classification.
    pub outcome: Outcome,
    /// Exact minimax value.
    pub score: i32,
    /// Every legal move in row-major order.
    pub moves: Vec<MoveReport>,
    /// The move the engine would play, when it is O's turn.
    pub engine_choice: Option<MoveReport>,
}

/// The player to move when none is given: whoever has fewer markers, X on a
/// tie.
pub fn infer_to_move(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Parses and validates `board`, then scores it and each of its moves.
///
/// # Errors
///
/// Fails if the board does not parse or could not arise from legal play.
#[instrument]
pub fn analyze(board: &str, to_move: Option<Player>) -> Result<Analysis> {
    let board: Board = board.parse().context("Invalid board")?;
    let to_move = to_move.unwrap_or_else(|| infer_to_move(&board));
    let position = Position::from_board(board, to_move);

    if let Err(violations) = position.validate() {
        let reasons = violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        bail!("Position is not reachable by legal play: {}", reasons);
    }

    let evaluations = evaluate_moves(&position);
    let engine_choice = if to_move == Player::O && !position.is_terminal() {
        let chosen = best_move(&position)?;
        evaluations
            .iter()
            .find(|evaluation| evaluation.position == chosen)
            .map(MoveReport::from)
    } else {
        None
    };

    let analysis = Analysis {
        position,
        to_move,
        outcome: position.outcome(),
        score: score(&position),
        moves: evaluations.iter().map(MoveReport::from).collect(),
        engine_choice,
    };
    info!(score = analysis.score, moves = analysis.moves.len(), "Analysis complete");
    Ok(analysis)
}

/// Writes `analysis` as a human-readable report.
pub fn write_report(out: &mut impl Write, analysis: &Analysis) -> Result<()> {
    writeln!(out, "{}", analysis.position)?;
    writeln!(out)?;
    writeln!(out, "To move: {}", analysis.to_move)?;
    writeln!(out, "Outcome: {}", analysis.outcome)?;
    writeln!(out, "Score:   {:+}", analysis.score)?;
    if !analysis.moves.is_empty() {
        writeln!(out)?;
        writeln!(out, "row col score")?;
        for report in &analysis.moves {
            let marker = if Some(*report) == analysis.engine_choice {
                " <- engine"
            } else {
                ""
            };
            writeln!(
                out,
                "{:>3} {:>3} {:>+5}{}{}",
                report.row,
                report.col,
                report.score,
                if report.decisive { " (ends game)" } else { "" },
                marker
            )?;
        }
    }
    Ok(())
}

/// Runs the `analyze` command, writing text or JSON to `out`.
///
/// # Errors
///
/// Propagates analysis and I/O errors.
pub fn run(out: &mut impl Write, board: &str, to_move: Option<Player>, json: bool) -> Result<()> {
    let analysis = analyze(board, to_move)?;
    if json {
        serde_json::to_writer_pretty(&mut *out, &analysis)?;
        writeln!(out)?;
    } else {
        write_report(out, &analysis)?;
    }
    Ok(())
}
