//! Resize debouncing
//!
//! Holds at most one pending timer. Each resize cancels it and arms a new
//! one, so a burst of resizes produces a single settle check.

use tracing::trace;

/// Single-slot debouncer over an opaque timer handle
#[derive(Debug)]
pub struct ResizeDebounce<T> {
    pending: Option<T>,
    rearmed: u64,
}

impl<T> ResizeDebounce<T> {
    pub fn new() -> Self {
        Self {
            pending: None,
            rearmed: 0,
        }
    }

    /// Cancel the pending timer (if any) and store the one produced by
    /// `schedule`. A failed schedule leaves nothing pending.
    pub fn rearm<E>(
        &mut self,
        cancel: impl FnOnce(T),
        schedule: impl FnOnce() -> Result<T, E>,
    ) -> Result<(), E> {
        if let Some(previous) = self.pending.take() {
            cancel(previous);
        }
        self.rearmed += 1;
        let timer = schedule()?;
        self.pending = Some(timer);
        trace!(rearmed = self.rearmed, "Resize debounce armed");
        Ok(())
    }

    /// Mark the pending timer as fired
    pub fn fire(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drop the pending timer through `cancel`
    pub fn cancel(&mut self, cancel: impl FnOnce(T)) {
        if let Some(timer) = self.pending.take() {
            cancel(timer);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for ResizeDebounce<T> {
    fn default() -> Self {
        Self::new()
    }
}
