//! TUI application state and logic

use crate::commands::{SolveConfig, SolveReport, solve_board};
use crate::core::{ROW_COUNT, TILE_COUNT};
use crate::solver::{Solver, WordCandidate};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub input_buffer: String,
    pub report: Option<SolveReport>,
    pub selected_row: usize,
    pub selected_word: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub boards_solved: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Letters,
    Browse,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(solver: Solver<'a>) -> Self {
        Self {
            solver,
            input_buffer: String::new(),
            report: None,
            selected_row: 0,
            selected_word: 0,
            messages: vec![Message {
                text: format!("Type the {TILE_COUNT} letters row by row, then press Enter."),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            input_mode: InputMode::Letters,
            boards_solved: 0,
        }
    }

    /// Number of letters typed so far, ignoring spaces
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.input_buffer
            .chars()
            .filter(|c| !c.is_whitespace())
            .count()
    }

    pub fn push_char(&mut self, c: char) {
        if c == ' ' || (c.is_ascii_alphabetic() && self.letter_count() < TILE_COUNT) {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
    }

    /// Solve the typed board and switch to browsing on success
    pub fn submit(&mut self) {
        let config = SolveConfig::new(self.input_buffer.clone());
        match solve_board(&config, &self.solver) {
            Ok(report) => {
                let count = report.results.len();
                let millis = report.duration.as_secs_f64() * 1000.0;
                self.report = Some(report);
                self.boards_solved += 1;
                self.selected_word = 0;
                self.selected_row = self.first_row_with_words().unwrap_or(0);
                self.input_mode = InputMode::Browse;
                self.add_message(
                    &format!("Found {count} words in {millis:.1}ms"),
                    MessageStyle::Success,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Clear the board and return to letter entry
    pub fn new_board(&mut self) {
        self.input_buffer.clear();
        self.report = None;
        self.selected_row = 0;
        self.selected_word = 0;
        self.input_mode = InputMode::Letters;
        self.add_message("New board: type the letters.", MessageStyle::Info);
    }

    /// Go back to editing the current letters
    pub fn edit_letters(&mut self) {
        self.input_mode = InputMode::Letters;
    }

    fn first_row_with_words(&self) -> Option<usize> {
        let report = self.report.as_ref()?;
        report
            .results
            .by_row()
            .iter()
            .position(|group| !group.is_empty())
    }

    /// Words starting in the selected row
    #[must_use]
    pub fn row_words(&self) -> Vec<&WordCandidate> {
        self.report.as_ref().map_or_else(Vec::new, |report| {
            report
                .results
                .iter()
                .filter(|w| w.start().row == self.selected_row)
                .collect()
        })
    }

    /// Count of words starting in each row
    #[must_use]
    pub fn row_counts(&self) -> [usize; ROW_COUNT] {
        let mut counts = [0; ROW_COUNT];
        if let Some(report) = &self.report {
            for (count, group) in counts.iter_mut().zip(report.results.by_row()) {
                *count = group.len();
            }
        }
        counts
    }

    #[must_use]
    pub fn current_word(&self) -> Option<&WordCandidate> {
        self.row_words().get(self.selected_word).copied()
    }

    pub fn next_word(&mut self) {
        let len = self.row_words().len();
        if len > 0 {
            self.selected_word = (self.selected_word + 1) % len;
        }
    }

    pub fn previous_word(&mut self) {
        let len = self.row_words().len();
        if len > 0 {
            self.selected_word = (self.selected_word + len - 1) % len;
        }
    }

    pub fn next_row(&mut self) {
        self.selected_row = (self.selected_row + 1) % ROW_COUNT;
        self.selected_word = 0;
    }

    pub fn previous_row(&mut self) {
        self.selected_row = (self.selected_row + ROW_COUNT - 1) % ROW_COUNT;
        self.selected_word = 0;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
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

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::Letters => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Enter => app.submit(),
                    KeyCode::Backspace => app.pop_char(),
                    KeyCode::Tab if app.report.is_some() => app.input_mode = InputMode::Browse,
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_char(c);
                    }
                    _ => {}
                },
                InputMode::Browse => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_board(),
                    KeyCode::Char('e') | KeyCode::Tab => app.edit_letters(),
                    KeyCode::Down | KeyCode::Char('j') => app.next_word(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous_word(),
                    KeyCode::Right | KeyCode::Char('l') => app.next_row(),
                    KeyCode::Left | KeyCode::Char('h') => app.previous_row(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["cat", "dog", "dogs", "fish", "owl"]).unwrap()
    }

    fn type_letters(app: &mut App, letters: &str) {
        for c in letters.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn typing_is_limited_to_board_size() {
        let dictionary = dictionary();
        let mut app = App::new(Solver::new(&dictionary));

        type_letters(&mut app, "cat dogs birds fish owl extra");
        assert_eq!(app.letter_count(), TILE_COUNT);

        type_letters(&mut app, "1!");
        assert_eq!(app.letter_count(), TILE_COUNT);

        app.pop_char();
        assert!(app.letter_count() <= TILE_COUNT);
    }

    #[test]
    fn submit_valid_board_switches_to_browse() {
        let dictionary = dictionary();
        let mut app = App::new(Solver::new(&dictionary));

        type_letters(&mut app, "CATDOGSBIRDSFISHOWL");
        app.submit();

        assert_eq!(app.input_mode, InputMode::Browse);
        assert_eq!(app.boards_solved, 1);
        assert_eq!(app.row_counts(), [1, 2, 0, 1, 1]);
        assert_eq!(app.current_word().unwrap().text(), "cat");
    }

    #[test]
    fn submit_invalid_board_reports_error() {
        let dictionary = dictionary();
        let mut app = App::new(Solver::new(&dictionary));

        type_letters(&mut app, "cat");
        app.submit();

        assert_eq!(app.input_mode, InputMode::Letters);
        assert!(app.report.is_none());
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn browsing_wraps_around() {
        let dictionary = dictionary();
        let mut app = App::new(Solver::new(&dictionary));
        type_letters(&mut app, "catdogsbirdsfishowl");
        app.submit();

        app.next_row();
        assert_eq!(app.selected_row, 1);
        assert_eq!(app.current_word().unwrap().text(), "dog");

        app.next_word();
        assert_eq!(app.current_word().unwrap().text(), "dogs");
        app.next_word();
        assert_eq!(app.current_word().unwrap().text(), "dog");
        app.previous_word();
        assert_eq!(app.current_word().unwrap().text(), "dogs");

        app.previous_row();
        app.previous_row();
        assert_eq!(app.selected_row, 4);
        assert_eq!(app.current_word().unwrap().text(), "owl");
    }

    #[test]
    fn empty_row_has_no_selection() {
        let dictionary = dictionary();
        let mut app = App::new(Solver::new(&dictionary));
        type_letters(&mut app, "catdogsbirdsfishowl");
        app.submit();

        app.selected_row = 2;
        app.next_word();
        assert!(app.current_word().is_none());
    }

    #[test]
    fn new_board_resets_state() {
        let dictionary = dictionary();
        let mut app = App::new(Solver::new(&dictionary));
        type_letters(&mut app, "catdogsbirdsfishowl");
        app.submit();

        app.new_board();
        assert!(app.report.is_none());
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::Letters);
        assert!(app.messages.len() <= 5);
    }
}
