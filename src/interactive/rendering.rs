//! TUI rendering with ratatui
//!
//! Visualizations for the game screens: the Wordle guess grid, the
//! gallows, the on-screen keyboard and the transient notices.

use super::app::{App, Screen};
use crate::core::{Verdict, WORD_LENGTH, alphabet};
use crate::games::Phase;
use crate::games::hangman::KeyStatus;
use crate::games::wordle::MAX_GUESSES;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use std::time::Instant;

/// Gallows stages, indexed by the wrong-guess count
const GALLOWS: [&str; 7] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    match app.screen {
        Screen::Menu => render_menu(f, app),
        Screen::Hangman => render_hangman_screen(f, app),
        Screen::Wordle => render_wordle_screen(f, app, now),
    }
}

fn screen_chunks(area: Rect, center_height: u16) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Min(10),               // Main content
            Constraint::Length(center_height), // Keyboard
            Constraint::Length(3),             // Status bar
        ])
        .split(area)
}

fn render_header(f: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_menu(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.area(), 0);

    render_header(f, chunks[0], "ORDSPILL");

    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("  1 ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("Hangman   guess the word one letter at a time"),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("  2 ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw("Wordle    find the 5-letter word in 6 guesses"),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "  q Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Pick a game ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(body, chunks[1]);

    render_status(
        f,
        chunks[3],
        "1/h: Hangman | 2/w: Wordle | q: Quit",
        &session_summary(app),
    );
}

fn render_hangman_screen(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.area(), 5);

    render_header(f, chunks[0], "HANGMAN");

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_gallows(f, app, main[0]);
    render_hangman_word(f, app, main[1]);

    let keyboard = keyboard_lines(|key| match app.hangman.key_status(key) {
        Some(KeyStatus::Hit) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(KeyStatus::Miss) => Style::default().fg(Color::White).bg(Color::Red),
        None => Style::default().fg(Color::White),
    });
    render_keyboard(f, chunks[2], keyboard);

    let help = if app.hangman.phase().is_over() {
        "Enter: New round | Esc: Menu | Ctrl-C: Quit"
    } else {
        "Type a letter to guess | Esc: Menu | Ctrl-C: Quit"
    };
    render_status(f, chunks[3], help, &session_summary(app));
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let stage = usize::from(app.hangman.wrong_guesses()).min(GALLOWS.len() - 1);
    let color = match app.hangman.phase() {
        Phase::Lost => Color::Red,
        Phase::Won => Color::Green,
        Phase::Playing => Color::White,
    };

    let art = Paragraph::new(GALLOWS[stage])
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Wrong: {}/6 ", app.hangman.wrong_guesses()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(art, area);
}

fn render_hangman_word(f: &mut Frame, app: &App, area: Rect) {
    let masked: String = app
        .hangman
        .masked_word()
        .chars()
        .flat_map(|c| [c, ' '])
        .collect();

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            masked,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    let wrong: String = app.hangman.wrong_letters().flat_map(|c| [c, ' ']).collect();
    if !wrong.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("Missed: "),
            Span::styled(wrong, Style::default().fg(Color::Red)),
        ]));
        lines.push(Line::default());
    }

    if let Some(banner) = result_banner(app.hangman.phase(), app.hangman.revealed_target().map(crate::core::Word::text)) {
        lines.push(banner);
    }

    let word = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(word, area);
}

fn render_wordle_screen(f: &mut Frame, app: &App, now: Instant) {
    let chunks = screen_chunks(f.area(), 5);

    render_header(f, chunks[0], "WORDLE");

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_grid(f, app, main[0]);
    render_notices(f, app, main[1], now);

    let keyboard = keyboard_lines(|key| match app.wordle.hint(key) {
        Some(verdict) => verdict_style(verdict),
        None => Style::default().fg(Color::White),
    });
    render_keyboard(f, chunks[2], keyboard);

    let help = if app.wordle.phase().is_over() {
        "Enter: New round | Esc: Menu | Ctrl-C: Quit"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Esc: Menu"
    };
    render_status(f, chunks[3], help, &session_summary(app));
}

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Verdict::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::default()];

    for row in app.wordle.rows() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for (letter, verdict) in row.cells() {
            spans.push(Span::styled(format!(" {letter} "), verdict_style(verdict)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    // The row being typed
    if app.wordle.phase() == Phase::Playing {
        let buffer = app.wordle.buffer();
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for i in 0..WORD_LENGTH {
            let cell = buffer.get(i).map_or_else(
                || Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                |&c| {
                    Span::styled(
                        format!(" {c} "),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                },
            );
            spans.push(cell);
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    // Untouched rows
    let used = app.wordle.rows().len() + usize::from(app.wordle.phase() == Phase::Playing);
    for _ in used..MAX_GUESSES {
        lines.push(Line::from(Span::styled(
            " ·   ·   ·   ·   · ",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::default());
    }

    if let Some(banner) = result_banner(
        app.wordle.phase(),
        app.wordle.revealed_target().map(crate::core::Word::text),
    ) {
        lines.push(banner);
    }

    let grid = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Guess {}/{} ", app.wordle.rows().len(), MAX_GUESSES))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(grid, area);
}

fn render_notices(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let items: Vec<ListItem> = app
        .wordle
        .notices()
        .iter()
        .map(|notice| {
            // Dim the toast once it enters its fade window
            let style = if notice.opacity(now) < 1.0 {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::DIM)
            } else {
                Style::default().fg(Color::Yellow)
            };
            ListItem::new(notice.text().to_string()).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn keyboard_lines(style_for: impl Fn(char) -> Style) -> Vec<Line<'static>> {
    alphabet::KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for &key in *row {
                spans.push(Span::styled(format!(" {key} "), style_for(key)));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, area);
}

fn result_banner(phase: Phase, revealed: Option<&str>) -> Option<Line<'static>> {
    match phase {
        Phase::Playing => None,
        Phase::Won => Some(Line::from(Span::styled(
            "You got it! Press Enter for a new round.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))),
        Phase::Lost => {
            let word = revealed.unwrap_or("?????");
            Some(Line::from(Span::styled(
                format!("The word was {word}. Press Enter for a new round."),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )))
        }
    }
}

fn session_summary(app: &App) -> String {
    format!(
        "Hangman {}/{} | Wordle {}/{}",
        app.stats.hangman.won,
        app.stats.hangman.played,
        app.stats.wordle.won,
        app.stats.wordle.played
    )
}

fn render_status(f: &mut Frame, area: Rect, help: &str, summary: &str) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let help = Paragraph::new(help.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[0]);

    let stats = Paragraph::new(summary.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(stats, chunks[1]);
}
