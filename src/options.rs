//! Game configuration options.

/// Configuration options for a blackjack round.
///
/// The defaults give a dealer who draws below 17 and stands on any 17,
/// with both dealer cards shown face up. Use the builder methods to
/// customize:
///
/// ```
/// use bjsolo::GameOptions;
///
/// let options = GameOptions::default()
///     .with_stand_on_soft_17(false)
///     .with_hide_hole_card(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Score at which the dealer stops drawing.
    pub dealer_stands_on: u8,
    /// Whether the dealer stands on a soft total equal to `dealer_stands_on`.
    pub stand_on_soft_17: bool,
    /// Whether the dealer's second card is hidden until the round resolves.
    pub hide_hole_card: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            stand_on_soft_17: true,
            hide_hole_card: false,
        }
    }
}

impl GameOptions {
    /// Sets the score at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, score: u8) -> Self {
        self.dealer_stands_on = score;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets whether the dealer's hole card is hidden before the round resolves.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::GameOptions;
    ///
    /// let options = GameOptions::default().with_hide_hole_card(true);
    /// assert!(options.hide_hole_card);
    /// ```
    #[must_use]
    pub const fn with_hide_hole_card(mut self, hide: bool) -> Self {
        self.hide_hole_card = hide;
        self
    }
}
