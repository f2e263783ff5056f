//! Engine player backed by the exhaustive minimax search.

use super::Player;
use crate::pacing::Console;
use anyhow::Result;
use tracing::{debug, instrument};
use tris_core::{Position, best_move};

/// Plays O with [`best_move`].
#[derive(Debug, Clone)]
pub struct EnginePlayer {
    name: String,
}

impl EnginePlayer {
    /// Creates a new engine player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl<R, W> Player<R, W> for EnginePlayer {
    #[instrument(skip_all, fields(engine = %self.name))]
    fn choose(&mut self, position: &Position, _console: &mut Console<R, W>) -> Result<Position> {
        let reply = best_move(position)?;
        debug!(outcome = %reply.outcome(), "Engine moved");
        Ok(reply)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
