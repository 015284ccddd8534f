//! Round phase and action types.

use core::fmt;

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Dealing the opening cards. Transient: a dealt round is already in
    /// [`Phase::PlayerTurn`].
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand. No other action is accepted.
    DealerTurn,
    /// Round has ended and the outcome is final.
    Resolved,
}

impl Phase {
    /// Returns whether the player may hit or stand.
    #[must_use]
    pub const fn is_accepting_input(self) -> bool {
        matches!(self, Self::PlayerTurn)
    }

    /// Returns whether a new round may be started.
    #[must_use]
    pub const fn allows_restart(self) -> bool {
        matches!(self, Self::PlayerTurn | Self::Resolved)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dealing => "dealing",
            Self::PlayerTurn => "player turn",
            Self::DealerTurn => "dealer turn",
            Self::Resolved => "resolved",
        })
    }
}

/// An action requested against a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw a card for the player.
    Hit,
    /// End the player's turn.
    Stand,
    /// Advance the dealer by one draw.
    DealerStep,
    /// Deal a new round.
    Restart,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::DealerStep => "step the dealer",
            Self::Restart => "restart",
        })
    }
}
