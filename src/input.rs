//! Edge-triggered jump input
//!
//! Key events arrive asynchronously from the tick loop. The latch turns them
//! into at most one jump request per physical press, consumed by the next tick.

/// One-shot jump flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JumpLatch {
    /// A press is waiting for the next tick
    armed: bool,
    /// Key is currently down (auto-repeat presses are ignored)
    held: bool,
}

impl JumpLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key down. Only the first press of a hold arms the latch.
    pub fn press(&mut self) {
        if !self.held {
            self.armed = true;
            self.held = true;
        }
    }

    /// Key up
    pub fn release(&mut self) {
        self.held = false;
    }

    /// Consume the pending request, if any
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Drop any pending request and held state (on retry)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
