//! Logging setup and conditional log macros.
//!
//! The full-screen interface owns the terminal, so `log` output is routed to
//! a per-day file under the user state directory instead of stderr. The
//! macros compile to nothing in release builds.

use std::fs::{self, File};
use std::path::PathBuf;

use env_logger::Target;

/// Route `log` output to a file, keeping the alternate screen clean.
/// Filtering comes from `RUST_LOG`; without it nothing is written. Setup
/// failures are swallowed, the game plays fine unlogged.
pub fn init() {
    let Some(path) = log_file_path() else {
        return;
    };
    if let Some(parent) = path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return;
    }
    let Ok(file) = File::create(&path) else {
        return;
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
        .target(Target::Pipe(Box::new(file)))
        .try_init();
}

fn log_file_path() -> Option<PathBuf> {
    let dir = dirs::state_dir().or_else(dirs::data_local_dir)?;
    let date = chrono::Local::now().format("%Y-%m-%d");
    Some(dir.join("wordle-game").join(format!("wordle-{date}.log")))
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}
