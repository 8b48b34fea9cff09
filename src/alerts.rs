//! Alert auto-dismissal bookkeeping.
//!
//! Each non-persistent alert gets a one-shot timer. The registry pairs every
//! scheduled dismissal with a [`DismissToken`]: the timer callback calls
//! [`AlertRegistry::fire`], a manual close calls [`AlertRegistry::cancel`], and
//! whichever comes first takes the entry. The loser sees `None` and does
//! nothing, so a timer never acts on an alert the user already closed.
//!
//! `H` is the timer handle kept alive while pending. In the browser it is a
//! `gloo_timers::callback::Timeout`, which clears itself on drop.

use std::collections::HashMap;

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

/// Whether an alert with `class_names` (a `class` attribute value) should
/// auto-dismiss.
pub fn should_auto_dismiss(class_names: &str, persistent_class: &str) -> bool {
    !class_names.split_ascii_whitespace().any(|c| c == persistent_class)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DismissToken(u64);

#[derive(Debug)]
pub struct AlertRegistry<H = ()> {
    next: u64,
    pending: HashMap<u64, H>,
}

impl<H> Default for AlertRegistry<H> {
    fn default() -> Self {
        Self { next: 0, pending: HashMap::new() }
    }
}

impl<H> AlertRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a token for a dismissal about to be scheduled.
    pub fn reserve(&mut self) -> DismissToken {
        let token = DismissToken(self.next);
        self.next += 1;
        token
    }

    /// Record the timer handle for `token`, making it pending.
    pub fn arm(&mut self, token: DismissToken, handle: H) {
        self.pending.insert(token.0, handle);
    }

    /// Manual dismissal: take the pending timer so the caller can drop it.
    pub fn cancel(&mut self, token: DismissToken) -> Option<H> {
        let handle = self.pending.remove(&token.0);
        if handle.is_some() {
            log::debug!("alerts: cancelled dismissal {}", token.0);
        }
        handle
    }

    /// Timer expiry: `Some` means the alert is still up and should close now.
    pub fn fire(&mut self, token: DismissToken) -> Option<H> {
        let handle = self.pending.remove(&token.0);
        if handle.is_some() {
            log::debug!("alerts: dismissing {}", token.0);
        }
        handle
    }

    pub fn is_pending(&self, token: DismissToken) -> bool {
        self.pending.contains_key(&token.0)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
