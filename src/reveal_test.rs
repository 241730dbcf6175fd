use super::*;

#[test]
fn reveals_on_first_intersection() {
    let mut tracker = RevealTracker::new(2);
    assert!(!tracker.observe(0, false));
    assert!(tracker.observe(0, true));
    assert!(tracker.is_revealed(0));
    assert!(!tracker.is_revealed(1));
    assert_eq!(tracker.pending(), 1);
}

#[test]
fn fires_at_most_once_across_reentry() {
    let mut tracker = RevealTracker::new(1);
    let fired = [true, false, true, false, true]
        .into_iter()
        .filter(|intersecting| tracker.observe(0, *intersecting))
        .count();
    assert_eq!(fired, 1);
}

#[test]
fn unknown_index_is_ignored() {
    let mut tracker = RevealTracker::new(1);
    assert!(!tracker.observe(5, true));
    assert!(!tracker.is_revealed(5));
}
