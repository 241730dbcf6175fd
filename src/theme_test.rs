use super::*;

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError("storage disabled".to_owned()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError("storage disabled".to_owned()))
    }
}

#[test]
fn only_dark_value_selects_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn glyph_offers_the_other_theme() {
    assert_eq!(Theme::Dark.glyph(), "☀️");
    assert_eq!(Theme::Light.glyph(), "🌙");
}

#[test]
fn load_reads_persisted_preference() {
    let mut store = MemoryStore::default();
    store.set("theme", "dark").unwrap();
    let (controller, err) = ThemeController::load(store, "theme");
    assert!(err.is_none());
    assert_eq!(controller.theme(), Theme::Dark);
}

#[test]
fn toggle_persists_new_value() {
    let (mut controller, _) = ThemeController::load(MemoryStore::default(), "theme");
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.toggle().unwrap(), Theme::Dark);
    assert_eq!(controller.store().get_raw("theme"), Some("dark"));
}

#[test]
fn double_toggle_restores_theme_and_stored_value() {
    let mut store = MemoryStore::default();
    store.set("theme", "light").unwrap();
    let (mut controller, _) = ThemeController::load(store, "theme");
    let before = controller.theme();

    controller.toggle().unwrap();
    controller.toggle().unwrap();

    assert_eq!(controller.theme(), before);
    assert_eq!(controller.store().get_raw("theme"), Some("light"));
}

#[test]
fn broken_store_still_toggles_in_memory() {
    let (mut controller, err) = ThemeController::load(BrokenStore, "theme");
    assert!(err.is_some());
    assert_eq!(controller.theme(), Theme::Light);
    assert!(controller.toggle().is_err());
    assert_eq!(controller.theme(), Theme::Dark);
}
