use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::mode::Pane;

/// Render the counter panel
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let border_color = if app.focused_pane == Pane::Counter {
        app.mode.color()
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Contatore ")
        .border_style(Style::default().fg(border_color));

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            app.counter.label(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[+] ", Style::default().fg(Color::Green)),
            Span::raw("Incrementa"),
        ]),
        Line::from(vec![
            Span::styled("[-] ", Style::default().fg(Color::Red)),
            Span::raw("Decrementa"),
        ]),
    ])
    .block(block)
    .alignment(Alignment::Center);

    f.render_widget(content, area);
}
