//! Game engine and state management.

extern crate alloc;

use alloc::string::{String, ToString};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::chips::ChipLedger;
use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::RoundResult;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::GameState;

const BET_PROMPT: &str = "Place your bet";

/// A single-player blackjack session against an automated dealer.
///
/// The game owns the deck, both hands, the chip ledger, and the round state;
/// there is no shared or global state. Commands take `&mut self` and run to
/// completion synchronously. Use [`GameOptions`] to configure the starting
/// bankroll and bet step.
#[derive(Debug, Clone)]
pub struct Game {
    /// The deck for the current round. Exposed so embedders and tests can
    /// stack known deals via [`Deck::from_cards`].
    pub deck: Deck,
    /// Game options.
    pub options: GameOptions,
    player_hand: Hand,
    dealer_hand: Hand,
    chips: ChipLedger,
    state: GameState,
    message: String,
    result: Option<RoundResult>,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new session with the given seed, ready for betting.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.chips().total(), 100);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        Self {
            deck,
            options,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            chips: ChipLedger::new(options.starting_chips),
            state: GameState::Betting,
            message: String::from(BET_PROMPT),
            result: None,
            rng,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the chip ledger (bankroll and current bet).
    #[must_use]
    pub const fn chips(&self) -> &ChipLedger {
        &self.chips
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    ///
    /// The engine never conceals cards. By convention the presentation layer
    /// hides the dealer's first card while the state is
    /// [`GameState::PlayerTurn`] and shows everything afterwards.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the current display message: the betting prompt, the last
    /// rejected command's description, or the round outcome.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the result of the last settled round, if any.
    ///
    /// Cleared when a new round begins.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Starts the next round: fresh shuffled deck, empty hands, cleared
    /// result. The bet carries over from the previous round.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidActionForState`] unless the round is over.
    pub fn next_round(&mut self) -> Result<(), GameError> {
        self.guard(GameState::RoundOver)?;

        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);

        self.deck = deck;
        self.player_hand = Hand::new();
        self.dealer_hand = Hand::new();
        self.result = None;
        self.state = GameState::Betting;
        self.message = String::from(BET_PROMPT);

        Ok(())
    }

    /// Rejects a command issued in the wrong state, recording the display
    /// message.
    fn guard(&mut self, expected: GameState) -> Result<(), GameError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(self.reject(GameError::InvalidActionForState(self.state)))
        }
    }

    /// Records a recoverable error as the display message and passes it on.
    fn reject(&mut self, err: GameError) -> GameError {
        self.message = err.to_string();
        err
    }
}
