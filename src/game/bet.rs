extern crate alloc;

use alloc::string::String;

use crate::error::GameError;

use super::{Game, GameState};

impl Game {
    /// Raises the bet by one [`bet_step`](crate::GameOptions::bet_step).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidActionForState`] outside the betting
    /// phase, or [`GameError::InvalidBet`] if the raised bet would exceed
    /// the bankroll.
    pub fn increase_bet(&mut self) -> Result<(), GameError> {
        self.guard(GameState::Betting)?;

        let step = self.options.bet_step;
        self.chips.raise_bet(step).map_err(|err| self.reject(err))
    }

    /// Lowers the bet by one [`bet_step`](crate::GameOptions::bet_step).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidActionForState`] outside the betting
    /// phase, or [`GameError::InvalidBet`] if the lowered bet would fall
    /// below one chip.
    pub fn decrease_bet(&mut self) -> Result<(), GameError> {
        self.guard(GameState::Betting)?;

        let step = self.options.bet_step;
        self.chips.lower_bet(step).map_err(|err| self.reject(err))
    }

    /// Sets the bet to an exact amount.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidActionForState`] outside the betting
    /// phase, or [`GameError::InvalidBet`] unless
    /// `1 <= amount <= bankroll`.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), GameError> {
        self.guard(GameState::Betting)?;

        self.chips.place_bet(amount).map_err(|err| self.reject(err))
    }

    /// Deals the opening cards: two each, alternating player, dealer,
    /// player, dealer, then moves to the player's turn.
    ///
    /// The bet is re-validated against the bankroll first, so a bet carried
    /// over from a lost round cannot ride above what the player still has.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidActionForState`] outside the betting
    /// phase, [`GameError::InvalidBet`] if the carried-over bet is no longer
    /// coverable (including any bet once the bankroll hits zero), or
    /// [`GameError::ExhaustedDeck`] if the deck runs out (unreachable with a
    /// fresh deck per round).
    pub fn deal(&mut self) -> Result<(), GameError> {
        self.guard(GameState::Betting)?;

        let bet = self.chips.bet();
        self.chips.place_bet(bet).map_err(|err| self.reject(err))?;

        for _ in 0..2 {
            let card = self.deck.deal()?;
            self.player_hand.add_card(card);
            let card = self.deck.deal()?;
            self.dealer_hand.add_card(card);
        }

        self.state = GameState::PlayerTurn;
        self.message = String::from("Your turn");

        Ok(())
    }
}
