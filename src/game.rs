//! The game module contains the core parts of the game, except for input and narration handling.
//!
//! It contains the `init()` function to initialize and start the game loop, the turn state
//! machine itself and the deadline-bounded variant of it. Both driving loops run on the one
//! shared one-decision transition in [`Game::play_turn`].

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use console::{style, Term};
use fastrand::Rng;
use regex::Regex;

use crate::input::{self, DECISION_PATTERN};
use crate::messages;
use crate::player::{Decision, Kind, Player};

/// The number of banked points that wins the game.
const WINNING_SCORE: u32 = 100;

/// The wall-clock budget of the timed variant.
const TIME_LIMIT: Duration = Duration::from_secs(60);

/// This struct holds information about the application when it comes to the command-line argument
/// parser of choice, which is clap. It uses the derive attribute and a handful of other attributes
/// to set up the different options, as that was found to be the simplest way of accomplishing what
/// was set out to do.
#[derive(Parser)]
#[command(name = "pig", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// The type of the first player; 'human' or 'computer', in any casing.
    #[arg(long, default_value = "human", value_name = "TYPE")]
    player1: String,
    /// The type of the second player; 'human' or 'computer', in any casing.
    #[arg(long, default_value = "human", value_name = "TYPE")]
    player2: String,
    /// Play the timed variant: 60 seconds on the clock, and when it runs out the higher score
    /// wins instead of the first to 100.
    #[arg(long)]
    timed: bool,
    /// The seed for the die, for reproducible games.
    ///
    /// When both the option and the environment variable are absent, the die is seeded from
    /// entropy and every run plays out differently.
    #[arg(long, env = "PIGDICE_SEED", value_name = "SEED")]
    seed: Option<u64>,
}

/// This struct holds the state of a plain game of Pig: the two players in seating order, the
/// index of the one currently acting and the generator behind every die roll.
pub(crate) struct Game {
    /// This field contains the two players; the player at index 0 acts first.
    players: [Player; 2],
    /// This field contains the index of the acting player; the other player sits at the opposite
    /// index. It toggles on every hold and on every rolled 1.
    current: usize,
    /// This field contains the generator every die roll draws from.
    rng: Rng,
}

impl Game {
    /// This function seats the two players and hands the first turn to player one.
    pub(crate) fn new(player1: Player, player2: Player, rng: Rng) -> Self {
        Self {
            players: [player1, player2],
            current: 0,
            rng,
        }
    }

    /// This function exchanges the acting player and the waiting player. Two switches in a row
    /// restore the original seating.
    fn switch_players(&mut self) {
        self.current ^= 1;
    }

    /// This function resets both players to their starting state and hands the turn back to
    /// player one, without rebuilding anything.
    fn reset_game(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.current = 0;
    }

    /// This function reports the seat of the first player, in seating order, to have banked the
    /// winning score. Under the turn-step invariant at most one player can have done so.
    fn winner_index(&self) -> Option<usize> {
        self.players
            .iter()
            .position(|player| player.current_points >= WINNING_SCORE)
    }

    /// This function asks the acting player for their decision: the keyboard prompt for a human,
    /// the hold-at-threshold policy for a computer.
    fn decide(&self, term: &Term, re: &Regex) -> Result<Decision> {
        let player = &self.players[self.current];

        match player.kind {
            Kind::Human => input::take_decision(term, re, &player.name),
            Kind::Computer => Ok(player.policy()),
        }
    }

    /// This function plays a single turn step, the one transition both game loops are built on.
    /// The acting player decides; a roll of 1 forfeits the turn total and passes the turn, any
    /// other roll grows the turn total and keeps it, and a hold banks the turn total and passes
    /// the turn. Each outcome is narrated as it happens.
    fn play_turn(&mut self, term: &Term, re: &Regex) -> Result<()> {
        let decision = self.decide(term, re)?;

        match decision {
            Decision::Roll => {
                let rolled = self.players[self.current].roll(&mut self.rng);

                if rolled == 1 {
                    self.players[self.current].bust();
                    messages::bust_notice(term, &self.players[self.current])?;
                    self.switch_players();
                } else {
                    self.players[self.current].advance(rolled);
                    messages::roll_notice(term, &self.players[self.current], rolled)?;
                }
            }
            Decision::Hold => {
                self.players[self.current].hold();
                messages::hold_notice(term, &self.players[self.current])?;
                self.switch_players();
            }
        }

        Ok(())
    }

    /// This function runs the main game loop until one player has banked 100 or more points. The
    /// winner check sits at the top of every turn step, so a step that pushes past 100 ends the
    /// game before anyone decides again. It announces the winner and returns their seat.
    pub(crate) fn start(&mut self, term: &Term, re: &Regex) -> Result<usize> {
        messages::game_banner(term, &self.players[0], &self.players[1])?;

        let winner = loop {
            if let Some(index) = self.winner_index() {
                break index;
            }

            self.play_turn(term, re)?;
        };

        messages::win_notice(term, &self.players[winner])?;

        Ok(winner)
    }
}

/// This struct wraps a plain game with a wall clock. The turn logic is exactly the shared
/// transition of [`Game`]; the only differences are that the loop also stops once the clock has
/// run out, and that the end-of-time resolution may name a winner on points or no winner at all.
pub(crate) struct TimedGame {
    /// This field contains the wrapped game whose turn transition is reused unchanged.
    game: Game,
    /// This field contains the wall-clock budget of the whole game.
    time_limit: Duration,
}

impl TimedGame {
    /// This function puts 60 seconds on the clock of the given game.
    pub(crate) fn new(game: Game) -> Self {
        Self {
            game,
            time_limit: TIME_LIMIT,
        }
    }

    /// This function runs the deadline-bounded loop. The clock starts once, at the top; it is
    /// polled once per turn step, between steps, so a human sitting on the prompt is not cut off
    /// mid-decision.
    ///
    /// The return value distinguishes a win from a tie: `Some` carries the winner's seat, `None`
    /// means the clock ran out on equal scores.
    pub(crate) fn start(&mut self, term: &Term, re: &Regex) -> Result<Option<usize>> {
        let start_time = Instant::now();

        messages::timed_banner(
            term,
            self.time_limit,
            &self.game.players[0],
            &self.game.players[1],
        )?;

        loop {
            if self.game.winner_index().is_some() {
                break;
            }

            if start_time.elapsed() >= self.time_limit {
                messages::time_up_notice(term)?;
                break;
            }

            self.game.play_turn(term, re)?;
        }

        let winner = match self.game.winner_index() {
            Some(index) => Some(index),
            None => self.leader(),
        };

        match winner {
            Some(index) => messages::win_notice(term, &self.game.players[index])?,
            None => messages::tie_notice(term, self.game.players[0].current_points)?,
        }

        Ok(winner)
    }

    /// This function resolves an expired clock: the strictly higher score wins, equal scores tie.
    fn leader(&self) -> Option<usize> {
        let [one, two] = &self.game.players;

        match one.current_points.cmp(&two.current_points) {
            std::cmp::Ordering::Greater => Some(0),
            std::cmp::Ordering::Less => Some(1),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// This function resets the wrapped game; the clock restarts on the next call to `start`.
    fn reset_game(&mut self) {
        self.game.reset_game();
    }
}

/// Initializes the game state and handles literally everything. This is a `main()` function of
/// sorts though it is still called from main.rs.
///
/// This function specifically creates a new interface to the standard output, a generator for the
/// die, seeded on request for reproducible games, and the two players from their command-line
/// type tags. It then runs the timed or untimed game and offers another round until the player
/// declines.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - io::Error
/// - dialoguer::Error
/// - pigdice::InvalidPlayerType
#[expect(
    clippy::missing_panics_doc,
    reason = "The panic's only due to the unwrapping of a regular expression. It's been tested, and it's been proven to be syntactically correct."
)]
pub fn init() -> Result<()> {
    let term = Term::stdout();
    let cli = Cli::parse();
    let decision_re = Regex::new(DECISION_PATTERN).unwrap();
    let rng = match cli.seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    };

    let player1 = Player::from_tag("Player1", &cli.player1)?;
    let player2 = Player::from_tag("Player2", &cli.player2)?;

    // show the init message
    init_message(&term)?;

    if cli.timed {
        let mut game = TimedGame::new(Game::new(player1, player2, rng));

        loop {
            // the result narration happens inside the loop; the seat index only matters to tests
            let _winner = game.start(&term, &decision_re)?;

            if !input::play_again(&term)? {
                break;
            }

            game.reset_game();
            term.clear_screen()?;
        }
    } else {
        let mut game = Game::new(player1, player2, rng);

        loop {
            let _winner = game.start(&term, &decision_re)?;

            if !input::play_again(&term)? {
                break;
            }

            game.reset_game();
            term.clear_screen()?;
        }
    }

    Ok(())
}

/// This function initializes the message to be used at the start of the program, as well as a few
/// other fallible operations. Among these, the screen is cleared and the cursor is hidden. The
/// title of the console window is also set to the name of the game.
fn init_message(term: &Term) -> Result<()> {
    const MSG: &str = "Welcome to the game of Pig";
    let msg = style(MSG).bold();

    term.clear_screen()?;
    term.set_title("pig");
    term.hide_cursor()?;

    term.write_line(&format!("{}", msg))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a computer-vs-computer game with a seeded generator.
    fn seeded_game(seed: u64) -> Game {
        Game::new(
            Player::new("Player1", Kind::Computer),
            Player::new("Player2", Kind::Computer),
            Rng::with_seed(seed),
        )
    }

    /// The terminal handle and compiled decision pattern every loop call needs.
    fn fixtures() -> (Term, Regex) {
        (Term::stdout(), Regex::new(DECISION_PATTERN).unwrap())
    }

    /// Wraps a game in a clock that has already run out.
    fn expired(game: Game) -> TimedGame {
        TimedGame {
            game,
            time_limit: Duration::ZERO,
        }
    }

    #[test]
    fn switching_players_is_its_own_inverse() {
        let mut game = seeded_game(1);

        assert_eq!(game.current, 0);

        game.switch_players();

        assert_eq!(game.current, 1);

        game.switch_players();

        assert_eq!(game.current, 0);
    }

    #[test]
    fn a_turn_step_either_keeps_or_passes_the_turn() {
        let (term, re) = fixtures();
        let mut game = seeded_game(2);

        game.play_turn(&term, &re).unwrap();

        // A fresh computer player always rolls: either the die came up 1, so the turn passed
        // with the total forfeited, or the roll joined the turn total and the turn stayed.
        if game.current == 1 {
            assert_eq!(game.players[0].turn_total, 0);
        } else {
            assert!((2..=6).contains(&game.players[0].turn_total));
        }
        assert_eq!(game.players[0].current_points, 0);
    }

    #[test]
    fn banked_points_never_decrease() {
        let (term, re) = fixtures();
        let mut game = seeded_game(3);
        let mut last = [0, 0];

        for _ in 0..200 {
            if game.winner_index().is_some() {
                break;
            }

            game.play_turn(&term, &re).unwrap();

            for (index, player) in game.players.iter().enumerate() {
                assert!(player.current_points >= last[index]);
                last[index] = player.current_points;
            }
        }
    }

    #[test]
    fn a_finished_turn_leaves_no_turn_total_behind() {
        let (term, re) = fixtures();
        let mut game = seeded_game(4);

        for _ in 0..200 {
            if game.winner_index().is_some() {
                break;
            }

            let acting = game.current;
            game.play_turn(&term, &re).unwrap();

            if game.current != acting {
                assert_eq!(game.players[acting].turn_total, 0);
            }
        }
    }

    #[test]
    fn seeded_computer_game_terminates_with_a_winner() {
        let (term, re) = fixtures();
        let mut game = seeded_game(5);

        let winner = game.start(&term, &re).unwrap();

        assert!(game.players[winner].current_points >= WINNING_SCORE);
        assert!(game.players[winner ^ 1].current_points < WINNING_SCORE);
    }

    #[test]
    fn a_banked_century_ends_the_game_before_another_decision() {
        let (term, re) = fixtures();
        let mut game = seeded_game(6);
        game.players[0].current_points = 104;

        let winner = game.start(&term, &re).unwrap();

        assert_eq!(winner, 0);
        assert_eq!(game.players[1].current_points, 0);
    }

    #[test]
    fn resetting_returns_both_players_to_the_starting_state() {
        let (term, re) = fixtures();
        let mut game = seeded_game(7);
        let _winner = game.start(&term, &re).unwrap();

        game.reset_game();

        assert_eq!(game.current, 0);
        for player in &game.players {
            assert_eq!(player.current_points, 0);
            assert_eq!(player.turn_total, 0);
        }
    }

    #[test]
    fn expired_clock_with_equal_scores_is_a_tie() {
        let (term, re) = fixtures();
        let mut game = seeded_game(8);
        game.players[0].current_points = 40;
        game.players[1].current_points = 40;
        let mut timed = expired(game);

        assert_eq!(timed.start(&term, &re).unwrap(), None);
    }

    #[test]
    fn expired_clock_hands_the_win_to_the_higher_score() {
        let (term, re) = fixtures();
        let mut game = seeded_game(9);
        game.players[0].current_points = 70;
        game.players[1].current_points = 55;
        let mut timed = expired(game);

        assert_eq!(timed.start(&term, &re).unwrap(), Some(0));

        let mut game = seeded_game(10);
        game.players[0].current_points = 55;
        game.players[1].current_points = 70;
        let mut timed = expired(game);

        assert_eq!(timed.start(&term, &re).unwrap(), Some(1));
    }

    #[test]
    fn a_banked_century_outranks_the_clock() {
        let (term, re) = fixtures();
        let mut game = seeded_game(11);
        game.players[1].current_points = 102;
        let mut timed = expired(game);

        assert_eq!(timed.start(&term, &re).unwrap(), Some(1));
    }

    #[test]
    fn expired_clock_plays_no_further_turns() {
        let (term, re) = fixtures();
        let mut game = seeded_game(12);
        game.players[0].current_points = 10;
        game.players[1].current_points = 20;
        let mut timed = expired(game);

        let _winner = timed.start(&term, &re).unwrap();

        assert_eq!(timed.game.players[0].current_points, 10);
        assert_eq!(timed.game.players[1].current_points, 20);
        assert_eq!(timed.game.players[0].turn_total, 0);
    }

    #[test]
    fn timed_game_with_room_on_the_clock_finishes_like_a_plain_one() {
        let (term, re) = fixtures();
        let mut timed = TimedGame::new(seeded_game(13));

        let winner = timed
            .start(&term, &re)
            .unwrap()
            .expect("a computer game banks 100 points well inside the clock");

        assert!(timed.game.players[winner].current_points >= WINNING_SCORE);
    }

    #[test]
    fn timed_reset_restores_the_starting_state() {
        let (term, re) = fixtures();
        let mut game = seeded_game(14);
        game.players[0].current_points = 70;
        game.players[1].current_points = 55;
        let mut timed = expired(game);
        let _winner = timed.start(&term, &re).unwrap();

        timed.reset_game();

        assert_eq!(timed.game.current, 0);
        for player in &timed.game.players {
            assert_eq!(player.current_points, 0);
            assert_eq!(player.turn_total, 0);
        }
    }
}
