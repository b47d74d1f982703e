use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use utenti_core::{LoadPhase, User};

use crate::app::App;
use crate::mode::{AppMode, Pane};

/// Render the users panel: search box on top, the filtered list below
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let border_color = if app.focused_pane == Pane::Users {
        app.mode.color()
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Utenti ")
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Search input
            Constraint::Min(0),    // User list
        ])
        .split(inner);

    render_search_line(f, chunks[0], app);
    render_list(f, chunks[1], app);
}

/// Render the search input line (placeholder when empty)
fn render_search_line(f: &mut Frame, area: Rect, app: &App) {
    let term = app.directory.search_term();

    let line = if term.is_empty() && app.mode != AppMode::Search {
        Line::from(Span::styled(
            "Cerca utente...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![
            Span::styled("/", Style::default().fg(Color::Yellow)),
            Span::raw(term),
        ];
        if app.mode == AppMode::Search {
            spans.push(Span::styled("_", Style::default().fg(Color::Green))); // Cursor
        }
        Line::from(spans)
    };

    f.render_widget(Paragraph::new(line), area);
}

/// Render the list body according to the load phase
fn render_list(f: &mut Frame, area: Rect, app: &App) {
    match app.directory.phase() {
        LoadPhase::Loading => {
            let msg = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Caricamento utenti...",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center);
            f.render_widget(msg, area);
        }

        LoadPhase::Failed(reason) => {
            let msg = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Caricamento fallito",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    reason.as_str(),
                    Style::default().fg(Color::Red),
                )),
            ])
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true });
            f.render_widget(msg, area);
        }

        LoadPhase::Loaded(_) => {
            let filtered = app.directory.filtered();

            if filtered.is_empty() {
                let msg = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "Nessun utente trovato",
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
                .alignment(Alignment::Center);
                f.render_widget(msg, area);
                return;
            }

            let items: Vec<ListItem> = filtered
                .iter()
                .enumerate()
                .map(|(idx, user)| {
                    let is_highlighted =
                        idx == app.highlight && app.focused_pane == Pane::Users;
                    render_user_item(user, app.directory.is_selected(user.id), is_highlighted)
                })
                .collect();

            f.render_widget(List::new(items), area);
        }
    }
}

/// Render a single user row. The selection marker is independent of the
/// highlight cursor: the marker follows clicks, the cursor follows j/k.
fn render_user_item(user: &User, is_selected: bool, is_highlighted: bool) -> ListItem<'static> {
    let mut name_style = Style::default();
    if is_selected {
        name_style = name_style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }
    if is_highlighted {
        name_style = name_style.add_modifier(Modifier::REVERSED);
    }

    let mut spans = vec![Span::styled(format!("  {}", user.name), name_style)];

    if let Some(subtitle) = user.subtitle() {
        spans.push(Span::styled(
            format!("  {}", subtitle),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if is_selected {
        spans.push(Span::styled(
            "  selezionato",
            Style::default().fg(Color::Yellow),
        ));
    }

    ListItem::new(Line::from(spans))
}
