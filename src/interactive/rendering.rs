//! TUI rendering with ratatui
//!
//! Board grid, per-row word lists and the letter input line.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{MIDDLE_ROW, ROW_COUNT, TILE_COUNT};
use crate::output::formatters::{display_coord, format_path};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_words_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("⬢ HEXWORD SOLVER")
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

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(4)])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(report) = &app.report else {
        let placeholder = Paragraph::new("No board yet")
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(placeholder, area);
        return;
    };

    let path = app.current_word().map_or(&[][..], |word| word.path());

    let lines: Vec<Line> = report
        .board
        .rows()
        .iter()
        .enumerate()
        .map(|(row, tiles)| {
            let mut spans = vec![Span::raw(" ".repeat(2 * row.abs_diff(MIDDLE_ROW)))];
            for tile in tiles {
                let letter = tile.letter_char().to_ascii_uppercase();
                let style = match path.iter().position(|&c| c == tile.coord()) {
                    Some(0) => Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                    Some(_) => Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                    None => Style::default().fg(Color::White),
                };
                spans.push(Span::styled(format!(" {letter} "), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(grid, area);
}

fn render_words_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Row tabs
            Constraint::Min(5),    // Word list
            Constraint::Length(4), // Selected word
        ])
        .split(area);

    let counts = app.row_counts();
    let titles: Vec<String> = (0..ROW_COUNT)
        .map(|row| format!("Row {} ({})", row + 1, counts[row]))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.selected_row)
        .block(Block::default().borders(Borders::ALL).title(" Start row "))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, chunks[0]);

    let items: Vec<ListItem> = app
        .row_words()
        .iter()
        .map(|word| {
            let style = if word.len() >= 5 {
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<10}", word.text().to_uppercase()), style),
                Span::styled(
                    format!("{:>3} pts ", word.score()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    display_coord(word.start()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title(" Words ").borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if app.current_word().is_some() {
        state.select(Some(app.selected_word));
    }
    f.render_stateful_widget(list, chunks[1], &mut state);

    let detail = app.current_word().map_or_else(
        || vec![Line::from("Select a word to see its path")],
        |word| {
            vec![
                Line::from(Span::styled(
                    word.text().to_uppercase(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(format_path(word.path())),
            ]
        },
    );
    let detail = Paragraph::new(detail)
        .block(Block::default().title(" Path ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(detail, chunks[2]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Letters => (
            format!(
                " Letters {}/{TILE_COUNT} | Enter: solve  Esc: quit ",
                app.letter_count()
            ),
            Color::Yellow,
        ),
        InputMode::Browse => (
            " Browsing | e/Tab: edit letters  n: new board ".to_string(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let words = app.report.as_ref().map_or(0, |r| r.results.len());
    let total = app.report.as_ref().map_or(0, |r| r.results.total_score());

    let help = match app.input_mode {
        InputMode::Letters => "Type letters (spaces optional)",
        InputMode::Browse => "↑↓: word  ←→: row  q: quit",
    };

    let status = Paragraph::new(format!(
        "Boards: {} | Words: {words} | Points: {total} | {help}",
        app.boards_solved
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
