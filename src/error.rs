//! Error types for game operations.

use thiserror::Error;

use crate::game::GameState;

/// Errors returned by game commands.
///
/// [`InvalidBet`](Self::InvalidBet) and
/// [`InvalidActionForState`](Self::InvalidActionForState) are recoverable:
/// the command is rejected, game state is untouched, and the error's message
/// is suitable for display. [`ExhaustedDeck`](Self::ExhaustedDeck) is
/// defensive: it cannot occur under correct use of the state machine, and a
/// caller that sees it should abandon the round rather than retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The bet amount is outside the allowed range.
    #[error("bet must be between 1 and {max}")]
    InvalidBet {
        /// Upper bound for the bet: the current bankroll.
        max: usize,
    },
    /// The command is not accepted in the current game state.
    #[error("action not available during the {0} phase")]
    InvalidActionForState(GameState),
    /// The deck has no cards left. Indicates a logic error, not a condition
    /// to recover from.
    #[error("the deck is exhausted")]
    ExhaustedDeck,
}
