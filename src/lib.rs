//! A single-deck blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs one player against an
//! automated dealer: betting, the opening deal, hit/stand, the dealer's
//! draw-to-17 play, and even-money settlement against a persistent
//! [`ChipLedger`]. Rendering and input handling are left to the embedding
//! application, which drives the engine through commands and reads it back
//! through queries.
//!
//! # Example
//!
//! ```
//! use twentyone::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.deal().unwrap();
//! assert_eq!(game.state(), GameState::PlayerTurn);
//! assert_eq!(game.player_hand().len(), 2);
//!
//! let result = game.stand().unwrap();
//! assert_eq!(game.state(), GameState::RoundOver);
//! assert_eq!(game.message(), result.outcome.message());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod chips;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, SUITS, Suit};
pub use chips::ChipLedger;
pub use deck::Deck;
pub use error::GameError;
pub use game::{Game, GameState};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{RoundOutcome, RoundResult};
