//! Search-box debouncing.
//!
//! The debouncer only does the bookkeeping: every keystroke gets a new
//! generation, and a timer that fires for anything but the newest generation
//! is ignored. The caller owns the actual timer and drops it on teardown.

/// Quiet period before typed text is committed as a search
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDebouncer {
    generation: u64,
    pending: Option<(u64, String)>,
}

impl SearchDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record new input and return the generation its timer must fire with.
    pub fn schedule(&mut self, input: impl Into<String>) -> u64 {
        self.generation += 1;
        self.pending = Some((self.generation, input.into()));
        self.generation
    }

    /// Called when a timer elapses. Yields the text to commit only if no
    /// newer input arrived in the meantime.
    pub fn fire(&mut self, generation: u64) -> Option<String> {
        match &self.pending {
            Some((pending, _)) if *pending == generation => {
                self.pending.take().map(|(_, input)| input)
            }
            _ => None,
        }
    }

    /// Explicit submit: drop whatever is pending so its timer becomes a no-op.
    pub fn flush(&mut self) -> Option<String> {
        self.generation += 1;
        self.pending.take().map(|(_, input)| input)
    }

    /// Teardown: every outstanding timer becomes stale.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
