use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::mode::{AppMode, Pane};

/// Render the hint bar (bottom bar): status message or keybind hints
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let content = if let Some(ref msg) = app.status_message {
        Line::from(msg.as_str())
    } else {
        let hints = match app.mode {
            AppMode::Normal => match app.focused_pane {
                Pane::Counter => "+: incrementa | -: decrementa | Tab: cambia pannello | q: esci",
                Pane::Users => {
                    "j/k: naviga | Invio: seleziona | /: cerca | Tab: cambia pannello | q: esci"
                }
            },
            AppMode::Search => "Esc/Invio: fine ricerca | Backspace: cancella",
        };

        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
    };

    f.render_widget(Paragraph::new(content), area);
}
