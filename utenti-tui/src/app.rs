use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use utenti_core::{Counter, FetchOutcome, LoadPhase, UserDirectory, UserId};

use crate::mode::{AppMode, Pane};

/// Main application state
pub struct App {
    /// Current mode
    pub mode: AppMode,

    /// Which pane has focus
    pub focused_pane: Pane,

    /// Counter widget state
    pub counter: Counter,

    /// User directory widget state
    pub directory: UserDirectory,

    /// Highlight cursor into the filtered user list (the mouse-hover
    /// analog; selection is committed separately with Enter)
    pub highlight: usize,

    /// Status message (shown in hint bar)
    pub status_message: Option<String>,

    /// Should quit?
    pub should_quit: bool,
}

impl App {
    /// Create a new App
    pub fn new() -> Self {
        Self {
            mode: AppMode::Normal,
            focused_pane: Pane::Users,
            counter: Counter::new(),
            directory: UserDirectory::new(),
            highlight: 0,
            status_message: None,
            should_quit: false,
        }
    }

    /// Commit the fetch outcome delivered by the background task
    pub fn finish_fetch(&mut self, outcome: FetchOutcome) {
        self.directory.finish_load(outcome);

        match self.directory.phase() {
            LoadPhase::Loaded(users) => {
                self.status_message = Some(format!("Caricati {} utenti", users.len()));
            }
            LoadPhase::Failed(msg) => {
                self.status_message = Some(format!("Errore di caricamento: {}", msg));
            }
            LoadPhase::Loading => {}
        }

        self.clamp_highlight();
    }

    /// Handle keyboard input
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global quit shortcuts (Ctrl+C, Ctrl+Q)
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') | KeyCode::Char('q') = key.code {
                self.should_quit = true;
                return;
            }
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_mode(key),
            AppMode::Search => self.handle_search_mode(key),
        }
    }

    /// Handle normal mode keys
    fn handle_normal_mode(&mut self, key: KeyEvent) {
        match key.code {
            // Quit
            KeyCode::Char('q') => {
                self.should_quit = true;
            }

            // Toggle pane focus
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.toggle();
            }

            // Enter search mode (always focuses the user list)
            KeyCode::Char('/') => {
                self.mode = AppMode::Search;
                self.focused_pane = Pane::Users;
                self.status_message = None;
            }

            // Counter actions
            KeyCode::Char('+') | KeyCode::Char('=') if self.focused_pane == Pane::Counter => {
                self.counter.increment();
            }
            KeyCode::Char('-') if self.focused_pane == Pane::Counter => {
                self.counter.decrement();
            }

            // List navigation
            KeyCode::Char('j') | KeyCode::Down if self.focused_pane == Pane::Users => {
                self.highlight_next();
            }
            KeyCode::Char('k') | KeyCode::Up if self.focused_pane == Pane::Users => {
                self.highlight_prev();
            }

            // Select the highlighted user (the click analog)
            KeyCode::Enter if self.focused_pane == Pane::Users => {
                self.select_highlighted();
            }

            _ => {}
        }
    }

    /// Handle search mode keys
    fn handle_search_mode(&mut self, key: KeyEvent) {
        match key.code {
            // Leave search mode, keeping the term
            KeyCode::Esc | KeyCode::Enter => {
                self.mode = AppMode::Normal;
            }

            KeyCode::Backspace => {
                self.directory.search_pop();
                self.clamp_highlight();
            }

            KeyCode::Char(c) => {
                self.directory.search_push(c);
                self.clamp_highlight();
            }

            _ => {}
        }
    }

    /// Id of the currently highlighted user, if the filtered list is
    /// non-empty
    pub fn highlighted_user(&self) -> Option<UserId> {
        self.directory.filtered().get(self.highlight).map(|u| u.id)
    }

    /// Move the highlight down
    fn highlight_next(&mut self) {
        let len = self.directory.filtered().len();
        if self.highlight + 1 < len {
            self.highlight += 1;
        }
    }

    /// Move the highlight up
    fn highlight_prev(&mut self) {
        if self.highlight > 0 {
            self.highlight -= 1;
        }
    }

    /// Commit the highlighted user as the selection
    fn select_highlighted(&mut self) {
        if let Some(id) = self.highlighted_user() {
            self.directory.select(id);
        }
    }

    /// Keep the highlight inside the filtered list after the list shrinks
    fn clamp_highlight(&mut self) {
        let len = self.directory.filtered().len();
        if len == 0 {
            self.highlight = 0;
        } else if self.highlight >= len {
            self.highlight = len - 1;
        }
    }

    /// Poll for events with timeout
    pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
