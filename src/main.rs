//! # pigdice
//!
//! This crate is a command-line rendition of the dice game Pig for two players. Each player may be
//! a human at the keyboard or a computer opponent with a fixed hold-at-threshold policy, and the
//! race to 100 points can optionally be capped by a 60 second clock.
//!
//! The binary is a thin shell over the library crate, which holds the turn state machine, the
//! player variants and the prompt handling.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use pigdice::init;

fn main() -> Result<()> {
    init()
}
