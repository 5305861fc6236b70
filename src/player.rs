//! The player module contains the pieces a game is played with: the die, the two player kinds and
//! the factory that builds a player from a command-line type tag.
//!
//! The computer player's decision policy lives here as well, so the game loop can drive both kinds
//! through the same decision surface.

use std::str::FromStr;

use console::style;
use fastrand::Rng;

/// This struct is a plain six-sided die. It holds no state of its own; the generator is owned by
/// the game and threaded through every roll so a seeded run replays identically.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Die;

impl Die {
    /// This function samples the die, returning a face from 1 to 6 with uniform probability.
    pub(crate) fn roll(self, rng: &mut Rng) -> u8 {
        rng.u8(1..=6)
    }
}

/// This enum holds the two actions a player may take on their turn, as answered by the decision
/// prompt or produced by the computer policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Decision {
    /// This variant means the player rolls the die again, risking the turn total on a 1.
    Roll,
    /// This variant means the player stops rolling and banks the turn total.
    Hold,
}

/// This error is returned by the player factory when a command-line type tag matches neither
/// "human" nor "computer". It carries the offending tag so the message can point at it.
#[derive(Debug, thiserror::Error)]
#[error("{} '{tag}'; type 'human' or 'computer'", style("unknown player type").bold().underlined())]
pub(crate) struct InvalidPlayerType {
    /// This field contains the tag that failed to parse, exactly as it was given.
    tag: String,
}

/// This enum distinguishes how a player makes decisions: a human is prompted on the terminal,
/// while a computer follows the hold-at-threshold policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    /// This variant takes its decisions from the keyboard prompt.
    Human,
    /// This variant takes its decisions from the built-in policy.
    Computer,
}

impl FromStr for Kind {
    type Err = InvalidPlayerType;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "computer" => Ok(Self::Computer),
            _ => Err(InvalidPlayerType {
                tag: tag.to_string(),
            }),
        }
    }
}

/// This struct holds the per-player state: the banked score, the at-risk turn total and the kind
/// that decides for it. Banked points only ever grow through a hold; nothing but a reset brings
/// them back down.
#[derive(Clone, Debug)]
pub(crate) struct Player {
    /// This field contains the display name used in every status line.
    pub(crate) name: String,
    /// This field contains the decision kind created from the command-line tag.
    pub(crate) kind: Kind,
    /// This field contains the points banked so far.
    pub(crate) current_points: u32,
    /// This field contains the points accumulated this turn and not yet banked.
    pub(crate) turn_total: u32,
    /// This field contains the player's own die.
    die: Die,
}

impl Player {
    /// This function builds a player of the given kind with both counters zeroed.
    pub(crate) fn new(name: &str, kind: Kind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            current_points: 0,
            turn_total: 0,
            die: Die,
        }
    }

    /// This function is the player factory: it parses the command-line type tag and builds the
    /// corresponding variant.
    ///
    /// # Errors
    ///
    /// The function returns `InvalidPlayerType` if the tag is neither "human" nor "computer" in
    /// any casing.
    pub(crate) fn from_tag(name: &str, tag: &str) -> Result<Self, InvalidPlayerType> {
        Ok(Self::new(name, tag.parse()?))
    }

    /// This function rolls the player's die once.
    pub(crate) fn roll(&self, rng: &mut Rng) -> u8 {
        self.die.roll(rng)
    }

    /// This function adds a kept roll to the turn total.
    pub(crate) fn advance(&mut self, rolled: u8) {
        self.turn_total += u32::from(rolled);
    }

    /// This function banks the turn total into the overall score and resets it for the next turn.
    pub(crate) fn hold(&mut self) {
        self.current_points += self.turn_total;
        self.turn_total = 0;
    }

    /// This function forfeits the turn total after a rolled 1. The banked score is untouched.
    pub(crate) fn bust(&mut self) {
        self.turn_total = 0;
    }

    /// This function zeroes both counters, ready for a fresh game.
    pub(crate) fn reset(&mut self) {
        self.current_points = 0;
        self.turn_total = 0;
    }

    /// This function is the computer policy. The threshold stops the turn before risking more
    /// than is still needed to reach 100, and never asks for more than 25 in a single turn.
    pub(crate) fn policy(&self) -> Decision {
        let threshold = 100_u32.saturating_sub(self.current_points).min(25);

        if self.turn_total >= threshold {
            Decision::Hold
        } else {
            Decision::Roll
        }
    }
}
