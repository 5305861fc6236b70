//! This module contains every status line the game writes to the terminal: the banners shown when
//! a game starts, the per-turn narration and the end-of-game results.
//!
//! The format is plain human-readable text rather than anything structured; each line names the
//! player, what they did and where their scores stand.

use std::time::Duration;

use anyhow::Result;
use console::{style, Term};

use crate::player::Player;

/// This function announces the start of an untimed game and names the two contestants.
pub(crate) fn game_banner(term: &Term, one: &Player, two: &Player) -> Result<()> {
    term.write_line("Starting game.")?;
    term.write_line(&format!(
        "The players are {} and {}.\n",
        style(&one.name).bold(),
        style(&two.name).bold()
    ))?;

    Ok(())
}

/// This function announces the start of a timed game, clock and contestants included.
pub(crate) fn timed_banner(
    term: &Term,
    time_limit: Duration,
    one: &Player,
    two: &Player,
) -> Result<()> {
    term.write_line(&format!(
        "{}",
        style(format!(
            "{} seconds on the clock, play!",
            time_limit.as_secs()
        ))
        .bold()
    ))?;
    term.write_line(&format!(
        "Player One {} - Player Two {}.\n",
        style(&one.name).bold(),
        style(&two.name).bold()
    ))?;

    Ok(())
}

/// This function narrates a roll that kept the turn alive, with the running turn total and the
/// banked points.
pub(crate) fn roll_notice(term: &Term, player: &Player, rolled: u8) -> Result<()> {
    term.write_line(&format!(
        "{} rolled a {rolled}.",
        style(&player.name).bold()
    ))?;
    term.write_line(&format!(
        "Turn total: {}.  Overall points: {}\n",
        player.turn_total, player.current_points
    ))?;

    Ok(())
}

/// This function narrates a rolled 1: the turn total is gone and the turn passes over.
pub(crate) fn bust_notice(term: &Term, player: &Player) -> Result<()> {
    term.write_line(&format!(
        "{} rolled a 1 and got no points this turn.",
        style(&player.name).bold()
    ))?;

    score_line(term, player)
}

/// This function narrates a hold and the score it banked.
pub(crate) fn hold_notice(term: &Term, player: &Player) -> Result<()> {
    term.write_line(&format!("{} chooses to hold.", style(&player.name).bold()))?;

    score_line(term, player)
}

/// This function announces that the clock has run out on a timed game.
pub(crate) fn time_up_notice(term: &Term) -> Result<()> {
    term.write_line(&format!("{}", style("Time is up.").bold()))?;

    Ok(())
}

/// This function congratulates the winner of a game, timed or not.
pub(crate) fn win_notice(term: &Term, winner: &Player) -> Result<()> {
    term.write_line(&format!(
        "Congratulations {}! You have won the game with {} points.\n",
        style(&winner.name).bold(),
        winner.current_points
    ))?;

    Ok(())
}

/// This function announces a tied timed game, where both players hold the same score when the
/// clock runs out.
pub(crate) fn tie_notice(term: &Term, points: u32) -> Result<()> {
    term.write_line(&format!(
        "The game ended in a tie. Both players have {points} points.\n"
    ))?;

    Ok(())
}

/// The shared trailing line showing a player's banked total once their turn ends.
fn score_line(term: &Term, player: &Player) -> Result<()> {
    term.write_line(&format!(
        "{}'s total score: {}\n",
        style(&player.name).bold(),
        player.current_points
    ))?;

    Ok(())
}
