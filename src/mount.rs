//! One-toggler-per-page guard.
//!
//! Two togglers over the same body would each flip the class on a single
//! click and cancel out. Mounting claims the slot first and gives it back
//! only if attaching fails.

use std::cell::Cell;

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

#[derive(Debug, Default)]
pub struct MountSlot {
    claimed: Cell<bool>,
}

impl MountSlot {
    #[must_use]
    pub const fn new() -> Self {
        Self { claimed: Cell::new(false) }
    }

    /// Take the slot. Returns `false` if a toggler is already mounted.
    #[must_use]
    pub fn claim(&self) -> bool {
        !self.claimed.replace(true)
    }

    /// Free the slot after a failed attach so the host can retry.
    pub fn release(&self) {
        self.claimed.set(false);
    }

    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.claimed.get()
    }
}
