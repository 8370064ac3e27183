/// Re-entry guard for host-driven callbacks.
///
/// A host event loop can call back into the checker while a previous call is
/// still on the stack. There is no threading, so a `Cell<bool>` is enough;
/// the guard releases the flag on drop, including when a fault unwinds.

use std::cell::Cell;

/// Busy flag for one exclusive phase
#[derive(Debug, Default)]
pub struct ReentryFlag {
    busy: Cell<bool>,
}

impl ReentryFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the phase busy. Returns `None` if it already is.
    pub fn try_acquire(&self) -> Option<ReentryGuard<'_>> {
        if self.busy.replace(true) {
            None
        } else {
            Some(ReentryGuard { flag: self })
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

/// Scoped hold on a `ReentryFlag`
#[derive(Debug)]
pub struct ReentryGuard<'a> {
    flag: &'a ReentryFlag,
}

impl Drop for ReentryGuard<'_> {
    fn drop(&mut self) {
        self.flag.busy.set(false);
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
