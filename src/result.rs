//! Round outcomes and their presentation mapping.

/// Final outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player has the higher score.
    PlayerWin,
    /// Dealer has the higher score.
    DealerWin,
    /// Scores are equal.
    Draw,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
}

/// How a front end should style an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// The player won.
    Win,
    /// The player lost.
    Loss,
    /// Nobody won.
    Neutral,
}

impl Outcome {
    /// Returns whether the player won the round.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::PlayerWin | Self::DealerBust)
    }

    /// Returns the presentation tone for the outcome.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::PlayerWin | Self::DealerBust => Tone::Win,
            Self::DealerWin | Self::PlayerBust => Tone::Loss,
            Self::Draw => Tone::Neutral,
        }
    }

    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerWin => "You Win!",
            Self::DealerWin => "You Lose...",
            Self::Draw => "Draw!",
            Self::PlayerBust => "Bursted... You Lose...",
            Self::DealerBust => "Dealer Bursted! You Win!",
        }
    }
}
