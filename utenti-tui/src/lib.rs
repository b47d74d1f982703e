pub mod app;
pub mod mode;
pub mod ui;

// Re-export commonly used types
pub use app::App;
pub use mode::{AppMode, Pane};
pub use ui::UI;
