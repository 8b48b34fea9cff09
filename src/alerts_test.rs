use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Handle that counts how many times it was dropped, like a timer clearing itself.
struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

// =============================================================
// should_auto_dismiss
// =============================================================

#[test]
fn plain_alerts_auto_dismiss() {
    assert!(should_auto_dismiss("alert alert-success", "alert-persistent"));
    assert!(should_auto_dismiss("", "alert-persistent"));
}

#[test]
fn persistent_alerts_are_never_scheduled() {
    assert!(!should_auto_dismiss("alert alert-persistent", "alert-persistent"));
    assert!(!should_auto_dismiss("  alert\talert-persistent\nfade ", "alert-persistent"));
}

#[test]
fn persistent_marker_must_match_whole_class() {
    assert!(should_auto_dismiss("alert alert-persistent-ish", "alert-persistent"));
}

// =============================================================
// AlertRegistry
// =============================================================

#[test]
fn tokens_are_unique() {
    let mut registry: AlertRegistry = AlertRegistry::new();
    let a = registry.reserve();
    let b = registry.reserve();
    assert_ne!(a, b);
}

#[test]
fn fire_dismisses_pending_alert_once() {
    let mut registry: AlertRegistry = AlertRegistry::new();
    let token = registry.reserve();
    registry.arm(token, ());
    assert!(registry.is_pending(token));
    assert!(registry.fire(token).is_some());
    assert!(registry.fire(token).is_none());
    assert_eq!(registry.pending_count(), 0);
}

#[test]
fn manual_close_before_timer_makes_fire_a_noop() {
    let mut registry: AlertRegistry = AlertRegistry::new();
    let token = registry.reserve();
    registry.arm(token, ());
    assert!(registry.cancel(token).is_some());
    assert!(registry.fire(token).is_none());
}

#[test]
fn manual_close_after_timer_is_a_noop() {
    let mut registry: AlertRegistry = AlertRegistry::new();
    let token = registry.reserve();
    registry.arm(token, ());
    assert!(registry.fire(token).is_some());
    assert!(registry.cancel(token).is_none());
}

#[test]
fn unarmed_token_never_fires() {
    let mut registry: AlertRegistry = AlertRegistry::new();
    let token = registry.reserve();
    assert!(registry.fire(token).is_none());
}

#[test]
fn cancel_hands_back_handle_for_dropping() {
    let drops = Rc::new(Cell::new(0));
    let mut registry = AlertRegistry::new();
    let token = registry.reserve();
    registry.arm(token, DropCounter(Rc::clone(&drops)));
    assert_eq!(drops.get(), 0);
    drop(registry.cancel(token));
    assert_eq!(drops.get(), 1);
}

#[test]
fn alerts_are_tracked_independently() {
    let mut registry: AlertRegistry = AlertRegistry::new();
    let first = registry.reserve();
    let second = registry.reserve();
    registry.arm(first, ());
    registry.arm(second, ());
    assert!(registry.cancel(first).is_some());
    assert!(registry.is_pending(second));
    assert!(registry.fire(second).is_some());
}
