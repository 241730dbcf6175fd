use super::*;

#[test]
fn other_keys_do_not_latch() {
    let mut latch = FirstTab::default();
    assert!(!latch.on_key("Enter"));
    assert!(!latch.on_key("tab"));
    assert!(!latch.fired());
}

#[test]
fn first_tab_fires_once() {
    let mut latch = FirstTab::default();
    assert!(latch.on_key("Tab"));
    assert!(!latch.on_key("Tab"));
    assert!(latch.fired());
}
