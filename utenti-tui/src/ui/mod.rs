pub mod counter_panel;
pub mod hint_bar;
pub mod layout;
pub mod status_bar;
pub mod users_panel;

use ratatui::Frame;

use crate::app::App;

/// Main UI renderer
#[derive(Debug, Default)]
pub struct UI;

impl UI {
    /// Create a new UI
    pub fn new() -> Self {
        Self
    }

    /// Render the entire UI
    pub fn render(&mut self, f: &mut Frame, app: &App) {
        // Get main layout areas
        let (status_area, content_area, hint_area) = layout::Layout::main(f.area());

        // Render status bar
        status_bar::render(f, status_area, app);

        // Render hint bar
        hint_bar::render(f, hint_area, app);

        // Split content into panes
        let (counter_area, users_area) = layout::Layout::panes(content_area);

        // Render counter panel
        counter_panel::render(f, counter_area, app);

        // Render users panel
        users_panel::render(f, users_area, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use utenti_core::{User, UserId};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut ui = UI::new();
        terminal.draw(|f| ui.render(f, app)).unwrap();
        buffer_text(&terminal)
    }

    fn loaded_app() -> App {
        let users = [(1, "Leanne Graham"), (2, "Ervin Howell")]
            .into_iter()
            .map(|(id, name)| User {
                id: UserId(id),
                name: name.to_string(),
                username: None,
                email: None,
            })
            .collect();

        let mut app = App::new();
        app.finish_fetch(Ok(users));
        app.status_message = None;
        app
    }

    #[test]
    fn test_initial_render_shows_counter_zero_and_placeholder() {
        let app = App::new();
        let text = draw(&app);

        assert!(text.contains("Valore del contatore: 0"));
        assert!(text.contains("Incrementa"));
        assert!(text.contains("Decrementa"));
        assert!(text.contains("Cerca utente..."));
        assert!(text.contains("Caricamento utenti..."));
    }

    #[test]
    fn test_loaded_render_lists_users_without_marker() {
        let app = loaded_app();
        let text = draw(&app);

        assert!(text.contains("Leanne Graham"));
        assert!(text.contains("Ervin Howell"));
        assert!(!text.contains("selezionato"));
    }

    #[test]
    fn test_selected_user_carries_the_marker() {
        let mut app = loaded_app();
        app.directory.select(UserId(2));
        let text = draw(&app);

        // Exactly one row carries the marker
        assert_eq!(text.matches("selezionato").count(), 1);
        let howell_line = text
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        assert!(howell_line.contains("Ervin Howell selezionato"));
    }

    #[test]
    fn test_failed_render_shows_the_error() {
        let mut app = App::new();
        app.finish_fetch(Err(utenti_core::UtentiError::unexpected_status(
            500,
            "http://x/users",
        )));
        app.status_message = None;
        let text = draw(&app);

        assert!(text.contains("Caricamento fallito"));
        assert!(text.contains("500"));
    }
}
