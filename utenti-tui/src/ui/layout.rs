use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Layout manager for the TUI
pub struct Layout;

impl Layout {
    /// Create the main layout with status bar, content area, and hint bar
    ///
    /// Returns: (status_area, content_area, hint_area)
    pub fn main(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Status bar
                Constraint::Min(0),    // Content area
                Constraint::Length(1), // Hint bar
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2])
    }

    /// Split content area into two panes (counter left, users right)
    ///
    /// Returns: (counter_area, users_area)
    pub fn panes(area: Rect) -> (Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30), // Counter panel (left)
                Constraint::Percentage(70), // Users panel (right)
            ])
            .split(area);

        (chunks[0], chunks[1])
    }
}
