//! Game configuration options.

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_chips(500)
///     .with_bet_step(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Bankroll the session starts with.
    pub starting_chips: usize,
    /// How many chips one bet increase/decrease step moves.
    pub bet_step: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_chips: 100,
            bet_step: 1,
        }
    }
}

impl GameOptions {
    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_chips(250);
    /// assert_eq!(options.starting_chips, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the bet step.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_bet_step(10);
    /// assert_eq!(options.bet_step, 10);
    /// ```
    #[must_use]
    pub const fn with_bet_step(mut self, step: usize) -> Self {
        self.bet_step = step;
        self
    }
}
