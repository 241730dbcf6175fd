//! Theme toggle button and `localStorage` persistence.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, HtmlElement, Storage};

use super::{JsResultExt, MountError, Page, set_class};
use crate::theme::{PreferenceStore, StoreError, Theme, ThemeController};

/// [`PreferenceStore`] backed by `window.localStorage`.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn from_window() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().unwrap_or_default());
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError("localStorage unavailable".to_owned()))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError(format!("{e:?}")))
    }
}

fn apply(body: &HtmlElement, toggle: &Element, dark_class: &str, theme: Theme) {
    set_class(body, dark_class, theme.is_dark());
    toggle.set_text_content(Some(theme.glyph()));
}

pub(super) fn mount(page: &Page) -> Result<(), MountError> {
    let config = Rc::clone(page.config());
    let toggle = page.query(&config.selectors.theme_toggle)?;
    let body = page.body()?;

    let (controller, err) = ThemeController::load(LocalStorage::from_window(), config.theme.storage_key.clone());
    if let Some(err) = err {
        log::warn!("theme preference unreadable, using light: {err}");
    }
    apply(&body, &toggle, &config.theme.dark_class, controller.theme());

    let controller = Rc::new(RefCell::new(controller));
    let toggle_for_cb = toggle.clone();
    let on_click = Closure::wrap(Box::new(move |_event: Event| {
        let mut controller = controller.borrow_mut();
        if let Err(err) = controller.toggle() {
            log::warn!("theme preference not saved: {err}");
        }
        apply(&body, &toggle_for_cb, &config.theme.dark_class, controller.theme());
    }) as Box<dyn FnMut(Event)>);

    toggle
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .context("theme toggle click listener")?;
    on_click.forget();
    Ok(())
}
