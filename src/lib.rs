// Library interface for wordle-game
// The core (dictionary + engine) is pure and synchronous; the front-ends in
// tui/cli drive it through the GameInterface seam in game.

pub mod cli;
pub mod dictionary;
pub mod engine;
pub mod game;
pub mod logging;
pub mod tui;

// Re-export the core surface for front-ends and tests
pub use dictionary::{Dictionary, DictionaryError, EMBEDDED_WORDLIST};
pub use engine::{
    Attempt, GameState, GuessError, KeyHints, LetterStatus, MAX_GUESSES, Outcome, WORD_LENGTH,
    score_guess,
};
pub use game::{Advisory, GameInterface, PlayerAction, run_session};
