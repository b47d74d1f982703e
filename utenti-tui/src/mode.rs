/// Application modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Navigate panes, move the list highlight, work the counter
    Normal,

    /// Type into the user search box (filtering re-runs per keystroke)
    Search,
}

impl AppMode {
    /// Get display name for status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            AppMode::Normal => "NORMAL",
            AppMode::Search => "RICERCA",
        }
    }

    /// Get color for status bar (in ratatui Color enum)
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            AppMode::Normal => Color::Cyan,
            AppMode::Search => Color::Yellow,
        }
    }
}

/// Which pane has focus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pane {
    /// Left pane (counter)
    Counter,

    /// Right pane (user directory)
    Users,
}

impl Pane {
    /// Toggle between panes
    pub fn toggle(&self) -> Self {
        match self {
            Pane::Counter => Pane::Users,
            Pane::Users => Pane::Counter,
        }
    }
}
