//! Round outcome types for settlement.

/// How a settled round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player busted; dealer wins.
    PlayerBust,
    /// Dealer busted; player wins.
    DealerBust,
    /// Player's final value beat the dealer's.
    PlayerWin,
    /// Dealer's final value beat the player's.
    DealerWin,
    /// Equal final values; no chips move.
    Push,
}

impl RoundOutcome {
    /// Returns the display message for this outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "You bust! Dealer wins",
            Self::DealerBust => "Dealer busts! You win",
            Self::PlayerWin => "You win!",
            Self::DealerWin => "Dealer wins!",
            Self::Push => "Push",
        }
    }

    /// Returns whether the outcome pays the player.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWin)
    }
}

/// Snapshot of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// The bet that was settled.
    pub bet: usize,
    /// The bankroll after settlement.
    pub total: usize,
}
