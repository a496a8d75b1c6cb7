//! Chip bankroll and wager accounting.

use crate::error::GameError;

/// Tracks the player's bankroll and the wager riding on the current round.
///
/// The ledger is created once per session and persists across rounds; it is
/// not persisted beyond the process. Settlement is even money: a win adds
/// the bet to the total, a loss subtracts it, a push changes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipLedger {
    total: usize,
    bet: usize,
}

impl ChipLedger {
    /// Creates a ledger with the given starting bankroll and a 1-chip bet.
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self { total, bet: 1 }
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns the current bet.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns whether the bankroll is empty.
    ///
    /// Once true, every [`place_bet`](Self::place_bet) fails; the session is
    /// over and the embedding application is expected to surface that rather
    /// than keep looping rounds.
    #[must_use]
    pub const fn is_out_of_chips(&self) -> bool {
        self.total == 0
    }

    /// Sets the current bet.
    ///
    /// The bet is validated against the bankroll at placement, which is what
    /// guarantees [`lose_bet`](Self::lose_bet) can never drive the total
    /// negative.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBet`] unless `1 <= amount <= total`.
    pub const fn place_bet(&mut self, amount: usize) -> Result<(), GameError> {
        if amount < 1 || amount > self.total {
            return Err(GameError::InvalidBet { max: self.total });
        }
        self.bet = amount;
        Ok(())
    }

    /// Raises the bet by `step`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBet`] if the raised bet would exceed the
    /// bankroll.
    pub const fn raise_bet(&mut self, step: usize) -> Result<(), GameError> {
        self.place_bet(self.bet.saturating_add(step))
    }

    /// Lowers the bet by `step`.
    ///
    /// Lowering is permitted even while the bet exceeds the bankroll (which
    /// happens after a losing round shrinks the total below a carried-over
    /// bet), so the player can always step back into the valid range.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBet`] if the lowered bet would fall below
    /// one chip.
    pub const fn lower_bet(&mut self, step: usize) -> Result<(), GameError> {
        let target = self.bet.saturating_sub(step);
        if target < 1 {
            return Err(GameError::InvalidBet { max: self.total });
        }
        self.bet = target;
        Ok(())
    }

    /// Settles a won round: the bet is added to the bankroll.
    pub const fn win_bet(&mut self) {
        self.total += self.bet;
    }

    /// Settles a lost round: the bet is subtracted from the bankroll.
    ///
    /// Cannot underflow: the bet was validated against the bankroll when
    /// placed and the bankroll has not decreased since.
    pub const fn lose_bet(&mut self) {
        self.total -= self.bet;
    }

    /// Settles a pushed round. Deliberately a no-op: a tie moves no chips.
    pub const fn push(&self) {}
}
