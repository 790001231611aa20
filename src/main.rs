use std::io;

use wordle_game::cli::{PlainInterface, parse_cli};
use wordle_game::dictionary::Dictionary;
use wordle_game::engine::GameState;
use wordle_game::game::run_session;
use wordle_game::logging;
use wordle_game::tui::TuiInterface;

fn main() {
    let cli = parse_cli();
    logging::init();

    let dictionary = match &cli.wordlist_path {
        Some(path) => match Dictionary::from_file(path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                eprintln!("Failed to load word list from '{path}': {e}");
                std::process::exit(1);
            }
        },
        None => Dictionary::embedded(),
    };

    let game = GameState::new(dictionary.sample());

    if cli.plain {
        println!("Loaded {} words.", dictionary.len());
        let stdin = io::stdin();
        let mut interface = PlainInterface::new(stdin.lock());
        run_session(&dictionary, game, &mut interface);
    } else {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to initialize the terminal: {e}");
                std::process::exit(1);
            }
        };
        run_session(&dictionary, game, &mut interface);
    }
}
