//! Argument parsing and the plain line-based front-end.

use clap::Parser;
use std::collections::VecDeque;
use std::io::BufRead;

use crate::engine::{GameState, LetterStatus, MAX_GUESSES, WORD_LENGTH};
use crate::game::{Advisory, GameInterface, PlayerAction};

/// Terminal Wordle options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list file
    #[arg(short = 'i', long = "input")]
    pub wordlist_path: Option<String>,

    /// Use the line-based interface instead of the full-screen board
    #[arg(long)]
    pub plain: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Line-based front-end over any buffered reader.
///
/// Each typed word becomes a burst of letter actions followed by a submit,
/// so the whole engine surface is exercised the same way the full-screen
/// interface exercises it. `exit` and `new` are session commands.
pub struct PlainInterface<R: BufRead> {
    reader: R,
    pending: VecDeque<PlayerAction>,
}

impl<R: BufRead> PlainInterface<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn read_command(&mut self, game: &GameState) -> PlayerAction {
        loop {
            if game.is_over() {
                println!("\nType 'new' for another word, or 'exit' to quit:");
            } else {
                println!(
                    "\nGuess {}/{MAX_GUESSES} - enter a word ('exit' to quit, 'new' to restart):",
                    game.attempt_index() + 1
                );
            }

            let mut input = String::new();
            match self.reader.read_line(&mut input) {
                Ok(0) | Err(_) => return PlayerAction::Exit,
                Ok(_) => {}
            }
            let input = input.trim().to_uppercase();

            match input.as_str() {
                "" => {}
                "EXIT" => return PlayerAction::Exit,
                "NEW" => return PlayerAction::NewGame,
                word if !word.chars().all(|c| c.is_ascii_alphabetic()) => {
                    println!("Only letters are allowed. Try again.");
                }
                word if word.len() > WORD_LENGTH => {
                    println!("That word is longer than {WORD_LENGTH} letters.");
                }
                word => {
                    // Short words go through so the engine can answer with
                    // its own "not enough letters" advisory.
                    self.pending.extend(word.chars().map(PlayerAction::Letter));
                    self.pending.push_back(PlayerAction::Submit);
                    return self.pending.pop_front().expect("just queued");
                }
            }
        }
    }
}

impl<R: BufRead> GameInterface for PlainInterface<R> {
    fn next_action(&mut self, game: &GameState) -> PlayerAction {
        if let Some(action) = self.pending.pop_front() {
            return action;
        }
        self.read_command(game)
    }

    fn on_attempt(&mut self, game: &GameState, statuses: [LetterStatus; WORD_LENGTH]) {
        if let Some(attempt) = game.attempts().last() {
            print_attempt(attempt.word(), &statuses);
        }
    }

    fn on_advisory(&mut self, _game: &GameState, advisory: &Advisory) {
        println!("{advisory}");
    }

    fn on_new_game(&mut self, _game: &GameState) {
        println!("New word chosen. {MAX_GUESSES} guesses, good luck.");
    }

    fn on_exit(&mut self) {
        println!("Goodbye.");
    }
}

fn print_attempt(word: &str, statuses: &[LetterStatus; WORD_LENGTH]) {
    let letters: String = word.chars().map(|c| format!(" {c} ")).collect();
    let marks: String = statuses
        .iter()
        .map(|s| format!(" {} ", s.to_char()))
        .collect();
    println!("{letters}");
    println!("{marks}  (G right spot, Y wrong spot, X not in word)");
}
