//! The library components of the game. They allow initializing the game, taking player decisions,
//! rolling the die and narrating every turn on the terminal.
//!
//! The starting point of the library is the game.rs file, which contains the two game loops.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod game;
mod input;
mod messages;
mod player;

pub use game::init;
