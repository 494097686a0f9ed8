//! Transient status notice.

use std::time::Duration;

/// How long a notice stays up after the most recent `show`.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// A single-line notice. A new message replaces the old one and restarts the clock.
#[derive(Debug, Clone, Default)]
pub struct Toast {
    message: String,
    visible: bool,
    generation: u64,
}

impl Toast {
    /// Display `message` now. Returns the ticket the hide timer must present.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.message = message.into();
        self.visible = true;
        self.generation += 1;
        self.generation
    }

    /// Hide the notice if `generation` is still the latest show.
    ///
    /// Returns whether anything was hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
