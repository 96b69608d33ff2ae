//! TUI rendering with ratatui
//!
//! One render function per view; all game text comes from
//! [`crate::output::formatters`] so the line mode reads the same.

use super::app::{App, GameView, View, WordListView};
use crate::core::{Letter, RandomSource, Status};
use crate::output::formatters::{gallows, hint_message, spaced_mask, status_message};
use crate::store::WordStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap},
};

const TITLE: &str = "Hangman - Deutsche Weihnachtsgeschenke Wörter";
const LIST_TITLE: &str = "Deutsche Weihnachtsgeschenke Wörter";

/// Main UI rendering function
pub fn ui<R: RandomSource>(f: &mut Frame, app: &App<'_, R>) {
    match &app.view {
        View::Game(game) => render_game(f, game),
        View::Words(words) => render_word_list(f, app.store(), words),
    }
}

fn render_game(f: &mut Frame, game: &GameView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Gallows and puzzle
            Constraint::Length(5), // Letter buttons
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, TITLE, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(20)])
        .split(chunks[1]);

    render_gallows(f, game, main_chunks[0]);
    render_puzzle(f, game, main_chunks[1]);
    render_buttons(f, game, chunks[2]);
    render_game_status(f, game, chunks[3]);
}

fn render_header(f: &mut Frame, title: &str, area: Rect) {
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(header, area);
}

fn render_gallows(f: &mut Frame, game: &GameView, area: Rect) {
    let color = if game.state.is_lost() {
        Color::Red
    } else {
        Color::White
    };
    let lines: Vec<Line> = gallows(game.state.wrong_count())
        .into_iter()
        .map(Line::from)
        .collect();

    let figure = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(figure, area);
}

fn render_puzzle(f: &mut Frame, game: &GameView, area: Rect) {
    let state = &game.state;
    let message_style = match state.status() {
        Status::Playing => Style::default().fg(Color::White),
        Status::Won => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Status::Lost => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            spaced_mask(state),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(status_message(state), message_style)),
    ];

    if let Some(hint) = hint_message(state) {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Wort ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_buttons(f: &mut Frame, game: &GameView, area: Rect) {
    let selected = game.selected_letter();
    let spans: Vec<Span> = Letter::all()
        .flat_map(|letter| {
            let mut style = if game.button_enabled(letter) {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if Some(letter) == selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            [Span::styled(format!(" {letter} "), style), Span::raw(" ")]
        })
        .collect();

    let buttons = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Buchstaben (←/→ wählen, Leertaste raten) ")
                .borders(Borders::ALL),
        );
    f.render_widget(buttons, area);
}

fn render_game_status(f: &mut Frame, game: &GameView, area: Rect) {
    let help = if game.reset_visible() {
        "Enter: Noch einmal spielen! | Tab: Wortliste anzeigen | Esc: Beenden"
    } else {
        "Tab: Wortliste anzeigen | Esc: Beenden"
    };

    let status = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(status, area);
}

fn render_word_list(f: &mut Frame, store: &WordStore, words: &WordListView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Table
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, LIST_TITLE, chunks[0]);

    let header = Row::new(["Artikel", "Wort", "Übersetzung", "Plural Form"]).style(
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = store
        .iter()
        .skip(words.offset)
        .map(|entry| {
            Row::new([
                Cell::from(entry.gender()),
                Cell::from(entry.word()),
                Cell::from(entry.translation()),
                Cell::from(entry.plural()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(format!(
                " {} Wörter ({}/{}) ",
                store.len(),
                (words.offset + 1).min(store.len()),
                store.len()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(table, chunks[1]);

    let help = Paragraph::new("Esc: ← Zurück | ↑/↓: Blättern")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
