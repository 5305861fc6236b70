//! This module contains all functions related to taking input from the user. They all use the
//! `dialoguer` crate to process the input, and they all check for input validation.
//!
//! One prompt takes the roll-or-hold decision during a human turn; the other asks whether to play
//! another round once a game has resolved.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use regex::Regex;

use crate::player::Decision;

/// The pattern a decision reply must match: a single 'r' or 'h' in either case, with surrounding
/// whitespace tolerated. Compiled once in `init` and passed down to every prompt.
pub(crate) const DECISION_PATTERN: &str = r"(?i)\A\s*[rh]\s*\z";

/// This function is in charge of taking the roll-or-hold decision of a human player. Malformed
/// replies are rejected by the validator and prompted again for as long as it takes; only a
/// trimmed, case-insensitive 'r' or 'h' gets through.
pub(crate) fn take_decision(term: &Term, re: &Regex, name: &str) -> Result<Decision> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "{}",
            style(format!(
                "Hello, {name}. Would you like to roll ('r') or hold ('h')?"
            ))
            .bold()
        ))
        .validate_with(|reply: &String| -> Result<(), &str> {
            if re.is_match(reply) {
                Ok(())
            } else {
                Err("Invalid input. Please type 'r' or 'h'.")
            }
        })
        .interact_text_on(term)?;

    if input.trim().eq_ignore_ascii_case("r") {
        Ok(Decision::Roll)
    } else {
        Ok(Decision::Hold)
    }
}

/// This function asks whether to play another round after a game has resolved. A terminal that is
/// not attended, such as a pipe, gets no prompt and plays a single game.
pub(crate) fn play_again(term: &Term) -> Result<bool> {
    if !term.is_term() {
        return Ok(false);
    }

    let again = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Play another round?").bold()))
        .default(false)
        .interact_on(term)?;

    Ok(again)
}
