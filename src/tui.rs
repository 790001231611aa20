//! Full-screen terminal front-end.
//!
//! Renders the tile board, an on-screen keyboard colored from the
//! cumulative key hints, and a transient message line. All game truth lives
//! in [`GameState`]; this module keeps only cosmetic state (reveal progress
//! and the message deadline), so the staggered tile flips and the message
//! expiry window never touch the engine.

use crate::engine::{GameState, KeyHints, LetterStatus, MAX_GUESSES, WORD_LENGTH};
use crate::game::{Advisory, GameInterface, PlayerAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::{Duration, Instant};

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
/// Cadence of the per-tile flip after a scored guess.
const REVEAL_STEP_MS: u64 = 300;
/// How long a transient advisory stays on screen.
const MESSAGE_WINDOW_MS: u64 = 2000;
const ROW_SPACING: u16 = 2;

const TITLE_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const INSTRUCTIONS_STYLE: Style = Style::new().fg(Color::Gray);

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

fn status_colors(status: LetterStatus) -> (Color, Color) {
    match status {
        LetterStatus::Correct => (Color::Green, Color::Black),
        LetterStatus::Present => (Color::Yellow, Color::Black),
        LetterStatus::Absent => (Color::Gray, Color::White),
    }
}

/// Tiles not yet scored (or not yet flipped).
const PENDING_COLORS: (Color, Color) = (Color::DarkGray, Color::White);

struct ActiveMessage {
    text: String,
    /// `None` keeps the message up for good (terminal advisories).
    expires: Option<Instant>,
}

/// Values copied out of `self` so rendering can run inside the draw closure.
struct RenderContext<'a> {
    game: &'a GameState,
    revealed: usize,
    message: Option<&'a str>,
}

/// Full-screen front-end component.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    /// Tiles of the newest attempt shown with their real colors; the rest
    /// of that row still renders as pending. [`WORD_LENGTH`] when no flip
    /// is in progress.
    revealed: usize,
    message: Option<ActiveMessage>,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("initializing full-screen interface");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            revealed: WORD_LENGTH,
            message: None,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self, game: &GameState) -> Result<(), io::Error> {
        let ctx = RenderContext {
            game,
            revealed: self.revealed,
            message: self.message.as_ref().map(|m| m.text.as_str()),
        };
        self.terminal.draw(|f| Self::render(f, &ctx))?;
        Ok(())
    }

    fn draw_or_log(&mut self, game: &GameState) {
        if let Err(e) = self.draw(game) {
            debug_log!("draw error: {}", e);
        }
    }

    /// Drop an expired transient message. Terminal advisories never expire.
    fn tick_message(&mut self) {
        if let Some(message) = &self.message
            && let Some(expires) = message.expires
            && Instant::now() >= expires
        {
            self.message = None;
        }
    }

    /// Flip the newest attempt's tiles one at a time. The engine has
    /// already settled; only the display lags. Input during the flip is
    /// swallowed, like the busy state of any modal screen.
    fn reveal_attempt(&mut self, game: &GameState) {
        for shown in 0..=WORD_LENGTH {
            self.revealed = shown;
            self.draw_or_log(game);
            if shown < WORD_LENGTH {
                Self::discard_events_for(Duration::from_millis(REVEAL_STEP_MS));
            }
        }
    }

    fn discard_events_for(window: Duration) {
        let deadline = Instant::now() + window;
        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            match event::poll(deadline - now) {
                Ok(true) => {
                    let _ = event::read();
                }
                Ok(false) => break,
                Err(_) => break,
            }
        }
    }

    fn poll_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            // Only Press counts; Release and Repeat would double letters.
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            Event::Key(_) => Ok(None),
            _ => Ok(None),
        }
    }

    fn translate_key(key: KeyEvent, game: &GameState) -> Option<PlayerAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'C'))
        {
            return Some(PlayerAction::Exit);
        }
        if key.modifiers.contains(KeyModifiers::ALT)
            || key.modifiers.contains(KeyModifiers::CONTROL)
        {
            debug_log!("ignoring key with modifier: {:?}", key.modifiers);
            return None;
        }

        if game.is_over() {
            return match key.code {
                KeyCode::Char('n' | 'N') => Some(PlayerAction::NewGame),
                KeyCode::Esc => Some(PlayerAction::Exit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => Some(PlayerAction::Exit),
            KeyCode::Enter => Some(PlayerAction::Submit),
            KeyCode::Backspace => Some(PlayerAction::Delete),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(PlayerAction::Letter(c)),
            _ => None,
        }
    }

    // Rendering

    fn render(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(14), // Board: 6 rows at 2 lines each, plus borders
                Constraint::Length(3),  // Message line
                Constraint::Length(5),  // Keyboard
                Constraint::Min(3),     // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx.game, ctx.revealed);
        Self::render_message(f, chunks[2], ctx.message);
        Self::render_keyboard(f, chunks[3], ctx.game, ctx.revealed);
        Self::render_instructions(f, chunks[4], ctx.game);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORDLE")
            .style(TITLE_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_board(f: &mut Frame, area: Rect, game: &GameState, revealed: usize) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let attempts = game.attempts();
        for row in 0..MAX_GUESSES {
            let y = inner.y + row as u16 * ROW_SPACING;
            if y >= inner.y + inner.height {
                break;
            }
            let spans = if let Some(attempt) = attempts.get(row) {
                let shown = if row + 1 == attempts.len() {
                    revealed
                } else {
                    WORD_LENGTH
                };
                Self::attempt_spans(attempt.word(), attempt.statuses(), shown)
            } else if row == attempts.len() && !game.is_over() {
                Self::pending_spans(game.input())
            } else {
                Self::pending_spans("")
            };
            Self::render_line(f, inner, y, spans);
        }
    }

    fn attempt_spans(
        word: &str,
        statuses: &[LetterStatus; WORD_LENGTH],
        shown: usize,
    ) -> Vec<Span<'static>> {
        let mut spans = vec![Span::raw("  ")];
        for (i, (ch, &status)) in word.chars().zip(statuses).enumerate() {
            let (bg, fg) = if i < shown {
                status_colors(status)
            } else {
                PENDING_COLORS
            };
            spans.push(Span::styled(
                format!(" {ch} "),
                Style::default().fg(fg).bg(bg),
            ));
            spans.push(Span::raw(" "));
        }
        spans
    }

    fn pending_spans(input: &str) -> Vec<Span<'static>> {
        let (bg, fg) = PENDING_COLORS;
        let mut spans = vec![Span::raw("  ")];
        for i in 0..WORD_LENGTH {
            let ch = input.chars().nth(i).unwrap_or(' ');
            spans.push(Span::styled(
                format!(" {ch} "),
                Style::default().fg(fg).bg(bg),
            ));
            spans.push(Span::raw(" "));
        }
        spans
    }

    fn render_line(f: &mut Frame, area: Rect, y: u16, spans: Vec<Span>) {
        let paragraph = Paragraph::new(Line::from(spans));
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_message(f: &mut Frame, area: Rect, message: Option<&str>) {
        let paragraph = Paragraph::new(message.unwrap_or_default())
            .style(MESSAGE_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_keyboard(f: &mut Frame, area: Rect, game: &GameState, revealed: usize) {
        let hints = Self::visible_hints(game, revealed);
        let mut lines = Vec::new();
        for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
            let mut spans = vec![Span::raw(" ".repeat(i + 1))];
            for ch in row.chars() {
                let style = match hints.get(ch) {
                    Some(status) => {
                        let (bg, fg) = status_colors(status);
                        Style::default().fg(fg).bg(bg)
                    }
                    None => Style::default().fg(Color::White),
                };
                spans.push(Span::styled(ch.to_string(), style));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        let paragraph =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Keyboard"));
        f.render_widget(paragraph, area);
    }

    /// Key hints lag the tile flips: letters of the newest attempt color in
    /// only as their tiles are shown.
    fn visible_hints(game: &GameState, revealed: usize) -> KeyHints {
        let attempts = game.attempts();
        if revealed >= WORD_LENGTH || attempts.is_empty() {
            return KeyHints::from_attempts(attempts);
        }
        let (last, rest) = attempts.split_last().expect("attempts checked non-empty");
        let mut hints = KeyHints::from_attempts(rest);
        for (ch, &status) in last.word().chars().zip(last.statuses()).take(revealed) {
            hints.observe(ch, status);
        }
        hints
    }

    fn render_instructions(f: &mut Frame, area: Rect, game: &GameState) {
        let text = if game.is_over() {
            "N: New game | ESC: Quit"
        } else {
            "Type letters | ENTER: Submit guess | BACKSPACE: Delete | ESC: Quit"
        };
        let paragraph = Paragraph::new(text)
            .style(INSTRUCTIONS_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

impl GameInterface for TuiInterface {
    fn next_action(&mut self, game: &GameState) -> PlayerAction {
        loop {
            self.tick_message();
            if self.draw(game).is_err() {
                info_log!("draw failed, leaving session");
                return PlayerAction::Exit;
            }
            match self.poll_key() {
                Ok(Some(key)) => {
                    if let Some(action) = Self::translate_key(key, game) {
                        debug_log!("key {:?} -> {:?}", key.code, action);
                        return action;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    debug_log!("input error: {}", e);
                    return PlayerAction::Exit;
                }
            }
        }
    }

    fn on_attempt(&mut self, game: &GameState, _statuses: [LetterStatus; WORD_LENGTH]) {
        self.reveal_attempt(game);
    }

    fn on_advisory(&mut self, game: &GameState, advisory: &Advisory) {
        let expires = if advisory.is_terminal() {
            None
        } else {
            Some(Instant::now() + Duration::from_millis(MESSAGE_WINDOW_MS))
        };
        self.message = Some(ActiveMessage {
            text: advisory.to_string(),
            expires,
        });
        self.draw_or_log(game);
    }

    fn on_new_game(&mut self, game: &GameState) {
        self.revealed = WORD_LENGTH;
        self.message = Some(ActiveMessage {
            text: "New word chosen".to_string(),
            expires: Some(Instant::now() + Duration::from_millis(MESSAGE_WINDOW_MS)),
        });
        self.draw_or_log(game);
    }

    fn on_exit(&mut self) {
        // Terminal restoration happens in Drop.
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
