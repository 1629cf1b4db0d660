use super::*;

// =============================================================
// Construction
// =============================================================

#[test]
fn new_history_has_nothing_to_undo_or_redo() {
    let h = History::new(1);
    assert_eq!(*h.present(), 1);
    assert!(!h.can_undo());
    assert!(!h.can_redo());
}

#[test]
fn default_uses_default_value() {
    let h: History<Vec<i32>> = History::default();
    assert!(h.present().is_empty());
}

// =============================================================
// set_state
// =============================================================

#[test]
fn set_state_pushes_past_and_replaces_present() {
    let mut h = History::new(1);
    assert!(h.set_state(2));
    assert_eq!(*h.present(), 2);
    assert_eq!(h.past_len(), 1);
    assert!(h.can_undo());
}

#[test]
fn set_state_with_equal_value_is_noop() {
    let mut h = History::new(vec![1, 2]);
    h.set_state(vec![1, 2, 3]);
    assert!(!h.set_state(vec![1, 2, 3]));
    assert_eq!(h.past_len(), 1);
}

#[test]
fn set_state_unchanged_preserves_redo() {
    let mut h = History::new(1);
    h.set_state(2);
    h.undo();
    assert!(!h.set_state(1));
    assert!(h.can_redo());
}

#[test]
fn set_state_clears_future() {
    // A -> B -> undo -> C: redo has nothing left.
    let mut h = History::new('A');
    h.set_state('B');
    h.undo();
    h.set_state('C');
    assert!(!h.can_redo());
    assert!(!h.redo());
    assert_eq!(*h.present(), 'C');
}

#[test]
fn set_state_nan_commits_instead_of_failing() {
    let mut h = History::new(f64::NAN);
    assert!(h.set_state(f64::NAN));
    assert_eq!(h.past_len(), 1);
}

#[test]
fn update_derives_from_present() {
    let mut h = History::new(10);
    assert!(h.update(|n| n + 5));
    assert_eq!(*h.present(), 15);
    assert!(!h.update(|n| *n));
}

// =============================================================
// undo / redo
// =============================================================

#[test]
fn undo_on_empty_past_is_noop() {
    let mut h = History::new(1);
    assert!(!h.undo());
    assert_eq!(*h.present(), 1);
}

#[test]
fn undo_then_redo_restores() {
    let mut h = History::new(1);
    h.set_state(2);
    assert!(h.undo());
    assert_eq!(*h.present(), 1);
    assert!(h.can_redo());
    assert!(h.redo());
    assert_eq!(*h.present(), 2);
    assert!(!h.can_redo());
}

#[test]
fn undo_k_times_returns_to_origin_and_redo_k_restores() {
    let mut h = History::new(0);
    let k = 7;
    for i in 1..=k {
        h.set_state(i);
    }
    for _ in 0..k {
        assert!(h.undo());
    }
    assert_eq!(*h.present(), 0);
    assert!(!h.can_undo());
    for _ in 0..k {
        assert!(h.redo());
    }
    assert_eq!(*h.present(), k);
}

#[test]
fn redo_order_is_oldest_undone_first() {
    let mut h = History::new(0);
    h.set_state(1);
    h.set_state(2);
    h.set_state(3);
    h.undo();
    h.undo();
    assert_eq!(h.future_len(), 2);
    h.redo();
    assert_eq!(*h.present(), 2);
    h.redo();
    assert_eq!(*h.present(), 3);
}

#[test]
fn noop_commits_do_not_count_as_undo_steps() {
    let mut h = History::new(0);
    h.set_state(1);
    h.set_state(1);
    h.set_state(2);
    h.set_state(2);
    assert_eq!(h.past_len(), 2);
    h.undo();
    h.undo();
    assert_eq!(*h.present(), 0);
}

// =============================================================
// reset
// =============================================================

#[test]
fn reset_then_undo_is_noop() {
    let mut h = History::new(1);
    h.set_state(2);
    h.set_state(3);
    h.undo();
    h.reset(42);
    assert!(!h.can_undo());
    assert!(!h.can_redo());
    assert!(!h.undo());
    assert_eq!(*h.present(), 42);
}

// =============================================================
// limit
// =============================================================

#[test]
fn limit_drops_oldest_steps() {
    let mut h = History::new(0).with_limit(Some(2));
    for i in 1..=5 {
        h.set_state(i);
    }
    assert_eq!(h.past_len(), 2);
    h.undo();
    h.undo();
    assert_eq!(*h.present(), 3);
    assert!(!h.can_undo());
}

#[test]
fn zero_limit_disables_undo() {
    let mut h = History::new(0).with_limit(Some(0));
    h.set_state(1);
    assert!(!h.can_undo());
    assert_eq!(*h.present(), 1);
}
