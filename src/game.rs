//! Session driver: owns the loop between a front-end and the game engine.

use std::fmt;

use crate::dictionary::Dictionary;
use crate::engine::{GameState, GuessError, LetterStatus, Outcome, WORD_LENGTH};
use crate::{debug_log, info_log};

/// Normalized input event delivered by a front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    Letter(char),
    Delete,
    Submit,
    NewGame,
    Exit,
}

/// Fire-and-forget message for the front-end. Never stored in game state;
/// terminal advisories persist on screen, the rest expire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    NotEnoughLetters,
    InvalidWord,
    Won,
    Lost { secret: String },
}

impl Advisory {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost { .. })
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughLetters => write!(f, "Not enough letters"),
            Self::InvalidWord => write!(f, "Invalid word"),
            Self::Won => write!(f, "You won!"),
            Self::Lost { secret } => write!(f, "Game over! The word was {secret}"),
        }
    }
}

/// Seam between the session driver and a front-end. The driver pulls
/// actions and pushes scored rows and advisories back out; implementations
/// render from the `GameState` they are handed and keep no game truth.
pub trait GameInterface {
    /// Block until the player produces the next action.
    fn next_action(&mut self, game: &GameState) -> PlayerAction;

    /// A guess was accepted and scored; `game` already holds the attempt.
    fn on_attempt(&mut self, game: &GameState, statuses: [LetterStatus; WORD_LENGTH]);

    fn on_advisory(&mut self, game: &GameState, advisory: &Advisory);

    fn on_new_game(&mut self, game: &GameState);

    fn on_exit(&mut self);
}

/// Run one session to completion. Returns the final game state so callers
/// and tests can inspect the outcome.
pub fn run_session<I: GameInterface>(
    dictionary: &Dictionary,
    mut game: GameState,
    interface: &mut I,
) -> GameState {
    loop {
        match interface.next_action(&game) {
            PlayerAction::Letter(ch) => {
                if !game.push_letter(ch) {
                    debug_log!("letter '{}' ignored (buffer full or game over)", ch);
                }
            }
            PlayerAction::Delete => {
                game.pop_letter();
            }
            PlayerAction::Submit => submit_guess(dictionary, &mut game, interface),
            PlayerAction::NewGame => {
                game = GameState::new(dictionary.sample());
                info_log!("new game started");
                interface.on_new_game(&game);
            }
            PlayerAction::Exit => {
                interface.on_exit();
                break;
            }
        }
    }
    game
}

fn submit_guess<I: GameInterface>(
    dictionary: &Dictionary,
    game: &mut GameState,
    interface: &mut I,
) {
    match game.submit(dictionary) {
        Ok(statuses) => {
            info_log!(
                "guess #{} scored: {}",
                game.attempt_index(),
                statuses.iter().map(|s| s.to_char()).collect::<String>()
            );
            interface.on_attempt(game, statuses);
            match game.outcome() {
                Some(Outcome::Won) => interface.on_advisory(game, &Advisory::Won),
                Some(Outcome::Lost) => {
                    let secret = game.revealed_secret().unwrap_or_default().to_string();
                    interface.on_advisory(game, &Advisory::Lost { secret });
                }
                None => {}
            }
        }
        Err(GuessError::IncompleteGuess) => {
            interface.on_advisory(game, &Advisory::NotEnoughLetters);
        }
        Err(GuessError::InvalidWord) => {
            interface.on_advisory(game, &Advisory::InvalidWord);
        }
        Err(GuessError::GameOver) => {
            // Terminal state absorbs the keypress.
            debug_log!("submit ignored: game already over");
        }
    }
}
