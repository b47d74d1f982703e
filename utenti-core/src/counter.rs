//! The counter widget state: one integer, two operations.

/// Counter state. Unbounded in both directions; a fresh instance always
/// starts at zero and nothing is persisted across instances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    /// Create a counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Add one
    pub fn increment(&mut self) {
        self.value += 1;
    }

    /// Subtract one; negative values are valid and displayed as-is
    pub fn decrement(&mut self) {
        self.value -= 1;
    }

    /// Display text for the counter panel
    pub fn label(&self) -> String {
        format!("Valore del contatore: {}", self.value)
    }
}
