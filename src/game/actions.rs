use crate::card::Card;
use crate::error::GameError;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Player action: hit (draw a card).
    ///
    /// Returns the drawn card. If the card busts the hand, the round settles
    /// immediately as a dealer win and the state moves to
    /// [`GameState::RoundOver`]; the dealer never plays.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidActionForState`] outside the player's
    /// turn, or [`GameError::ExhaustedDeck`] if the deck runs out.
    pub fn hit(&mut self) -> Result<Card, GameError> {
        self.guard(GameState::PlayerTurn)?;

        let card = self.deck.deal()?;
        self.player_hand.add_card(card);

        if self.player_hand.is_bust() {
            self.settle(RoundOutcome::PlayerBust);
        }

        Ok(card)
    }

    /// Player action: stand (keep the current hand).
    ///
    /// The dealer then plays out automatically (drawing while under 17) and
    /// the round settles; the returned [`RoundResult`] is also available via
    /// [`result`](Self::result).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidActionForState`] outside the player's
    /// turn, or [`GameError::ExhaustedDeck`] if the deck runs out while the
    /// dealer must draw (unreachable with a fresh deck per round; treat the
    /// session as corrupted if it surfaces).
    pub fn stand(&mut self) -> Result<RoundResult, GameError> {
        self.guard(GameState::PlayerTurn)?;

        self.state = GameState::DealerTurn;
        self.dealer_play()
    }
}
