//! TUI application state and logic

use crate::core::Word;
use crate::games::{HangmanGame, Phase, WordleGame, wordle::SubmitOutcome};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Redraw cadence; notices fade without any input arriving
const TICK: Duration = Duration::from_millis(50);

/// Which view is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Hangman,
    Wordle,
}

/// Per-game session tallies
#[derive(Debug, Default, Clone)]
pub struct GameStats {
    pub played: usize,
    pub won: usize,
}

/// In-memory statistics for this run; nothing is persisted
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub hangman: GameStats,
    pub wordle: GameStats,
    pub guess_distribution: [usize; 7],
}

/// Application state
pub struct App<'a> {
    words: &'a WordList,
    pub screen: Screen,
    pub hangman: HangmanGame,
    pub wordle: WordleGame,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a WordList) -> Self {
        let mut rng = rand::rng();
        let hangman = HangmanGame::new(words.pick(&mut rng).clone());
        let wordle = WordleGame::new(words.pick(&mut rng).clone());

        Self {
            words,
            screen: Screen::Menu,
            hangman,
            wordle,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    fn draw_target(&self) -> Word {
        self.words.pick(&mut rand::rng()).clone()
    }

    /// Dispatch one key press to the active screen
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Menu => self.handle_menu_key(key.code),
            Screen::Hangman => self.handle_hangman_key(key.code),
            Screen::Wordle => self.handle_wordle_key(key.code, now),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('1' | 'h') => {
                // Sessions are created fresh on entry
                self.hangman.reset(self.draw_target());
                self.screen = Screen::Hangman;
            }
            KeyCode::Char('2' | 'w') => {
                self.wordle.reset(self.draw_target());
                self.screen = Screen::Wordle;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_hangman_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.screen = Screen::Menu;
            }
            KeyCode::Enter => {
                if self.hangman.phase().is_over() {
                    self.hangman.reset(self.draw_target());
                }
            }
            KeyCode::Char(c) => {
                let was_playing = self.hangman.phase() == Phase::Playing;
                self.hangman.guess(c);
                if was_playing && self.hangman.phase().is_over() {
                    self.stats.hangman.played += 1;
                    if self.hangman.phase() == Phase::Won {
                        self.stats.hangman.won += 1;
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_wordle_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Esc => {
                self.screen = Screen::Menu;
            }
            KeyCode::Backspace => {
                self.wordle.delete_letter();
            }
            KeyCode::Enter => {
                if self.wordle.phase().is_over() {
                    self.wordle.reset(self.draw_target());
                } else {
                    let outcome = self.wordle.submit(self.words, now);
                    if outcome == SubmitOutcome::Accepted && self.wordle.phase().is_over() {
                        self.stats.wordle.played += 1;
                        if self.wordle.phase() == Phase::Won {
                            self.stats.wordle.won += 1;
                            let guesses = self.wordle.rows().len();
                            if guesses < self.stats.guess_distribution.len() {
                                self.stats.guess_distribution[guesses] += 1;
                            }
                        }
                    }
                }
            }
            KeyCode::Char(c) => {
                self.wordle.push_letter(c);
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.wordle.tick(now);

        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.handle_key(key, Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
