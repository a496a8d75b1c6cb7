extern crate alloc;

use alloc::string::String;

use core::cmp::Ordering;

use crate::error::GameError;
use crate::result::{RoundOutcome, RoundResult};

use super::{Game, GameState};

impl Game {
    /// Plays out the dealer's hand and settles the round.
    ///
    /// The dealer draws while under 17 and stands on any 17 or higher, soft
    /// or hard.
    pub(super) fn dealer_play(&mut self) -> Result<RoundResult, GameError> {
        // Terminates: every draw raises the hand's hard total by at least
        // one point, and deck exhaustion errors out besides.
        while self.dealer_hand.value() < 17 {
            let card = self.deck.deal()?;
            self.dealer_hand.add_card(card);
        }

        let outcome = if self.dealer_hand.is_bust() {
            RoundOutcome::DealerBust
        } else {
            match self.dealer_hand.value().cmp(&self.player_hand.value()) {
                Ordering::Less => RoundOutcome::PlayerWin,
                Ordering::Greater => RoundOutcome::DealerWin,
                Ordering::Equal => RoundOutcome::Push,
            }
        };

        Ok(self.settle(outcome))
    }

    /// Applies the outcome to the chip ledger and closes the round.
    ///
    /// Comparison uses final softened hand values only; a natural two-card
    /// 21 settles like any other 21.
    pub(super) fn settle(&mut self, outcome: RoundOutcome) -> RoundResult {
        match outcome {
            RoundOutcome::PlayerBust | RoundOutcome::DealerWin => self.chips.lose_bet(),
            RoundOutcome::DealerBust | RoundOutcome::PlayerWin => self.chips.win_bet(),
            RoundOutcome::Push => self.chips.push(),
        }

        let result = RoundResult {
            outcome,
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.value(),
            bet: self.chips.bet(),
            total: self.chips.total(),
        };

        self.result = Some(result);
        self.message = String::from(outcome.message());
        self.state = GameState::RoundOver;

        result
    }
}
