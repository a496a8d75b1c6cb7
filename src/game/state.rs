//! Game state types.

use core::fmt;

/// Phase of the current round.
///
/// The cycle is `Betting → PlayerTurn → DealerTurn → RoundOver` and back to
/// `Betting` via [`next_round`](crate::Game::next_round). `DealerTurn` is
/// entered by `stand` and played out automatically within the same call, so
/// callers only ever observe the other three phases between commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Accepting bet adjustments and the deal command.
    Betting,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand (automatic, never externally driven).
    DealerTurn,
    /// Round has ended; results are available and a new round can begin.
    RoundOver,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Betting => "betting",
            Self::PlayerTurn => "player turn",
            Self::DealerTurn => "dealer turn",
            Self::RoundOver => "round over",
        };
        f.write_str(name)
    }
}
