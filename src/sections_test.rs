use super::*;

fn tracker() -> SectionTracker {
    SectionTracker::new([Some("#home"), Some("#about"), Some("#projects"), Some("#contact")])
}

#[test]
fn link_target_strips_hash() {
    assert_eq!(link_target("#about"), Some("about"));
    assert_eq!(link_target("#"), None);
    assert_eq!(link_target("about"), None);
    assert_eq!(link_target("https://example.com/#about"), None);
}

#[test]
fn nothing_active_before_first_intersection() {
    let mut tracker = tracker();
    assert_eq!(tracker.active(), None);
    assert_eq!(tracker.observe("about", false), Highlight::Unchanged);
    assert_eq!(tracker.active(), None);
}

#[test]
fn intersecting_section_marks_matching_link() {
    let mut tracker = tracker();
    assert_eq!(tracker.observe("projects", true), Highlight::Link(2));
    assert_eq!(tracker.active(), Some(2));
}

#[test]
fn leaving_section_keeps_current_marker() {
    let mut tracker = tracker();
    tracker.observe("about", true);
    assert_eq!(tracker.observe("about", false), Highlight::Unchanged);
    assert_eq!(tracker.active(), Some(1));
}

#[test]
fn unmatched_section_clears_marker() {
    let mut tracker = tracker();
    tracker.observe("about", true);
    assert_eq!(tracker.observe("footer", true), Highlight::Cleared);
    assert_eq!(tracker.active(), None);
}

#[test]
fn last_intersecting_entry_in_batch_wins() {
    let mut tracker = tracker();
    let result = tracker.observe_batch([("home", true), ("about", true), ("projects", false)]);
    assert_eq!(result, Highlight::Link(1));
    assert_eq!(tracker.active(), Some(1));
}

#[test]
fn batch_without_intersections_is_unchanged() {
    let mut tracker = tracker();
    tracker.observe("contact", true);
    assert_eq!(tracker.observe_batch([("home", false)]), Highlight::Unchanged);
    assert_eq!(tracker.active(), Some(3));
}

#[test]
fn exactly_one_link_active_across_a_scroll() {
    let mut tracker = tracker();
    let scroll = [
        ("home", true),
        ("home", false),
        ("about", true),
        ("about", false),
        ("projects", true),
        ("contact", true),
        ("projects", false),
    ];
    for (id, intersecting) in scroll {
        tracker.observe(id, intersecting);
        let marked = (0..tracker.link_count())
            .filter(|i| tracker.active() == Some(*i))
            .count();
        assert_eq!(marked, 1);
    }
    assert_eq!(tracker.active(), Some(3));
}

#[test]
fn links_without_in_page_target_are_never_marked() {
    let mut tracker = SectionTracker::new([None, Some("/resume.pdf"), Some("#about")]);
    assert_eq!(tracker.observe("about", true), Highlight::Link(2));
}

#[test]
fn batch_reports_final_highlight_for_rendering() {
    let mut tracker = tracker();
    let ids = vec![("about".to_owned(), true), ("footer".to_owned(), true)];
    let result = tracker.observe_batch(ids.iter().map(|(id, intersecting)| (id.as_str(), *intersecting)));
    assert_eq!(result, Highlight::Cleared);
    assert_eq!(tracker.active(), None);

    let result = tracker.observe_batch([("contact", false), ("projects", true), ("about", false)]);
    assert_eq!(result, Highlight::Link(2));
    assert_eq!(tracker.active(), Some(2));
}
