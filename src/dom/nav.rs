//! Mobile menu toggle and close-on-link-click.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Event;

use super::{JsResultExt, MountError, Page, set_class};
use crate::nav::NavMenu;

pub(super) fn mount(page: &Page) -> Result<(), MountError> {
    let config = page.config();
    let list = page.query(&config.selectors.nav_list)?;
    let open_class = config.behavior.open_class.clone();
    let menu = Rc::new(Cell::new(NavMenu::with_open(list.class_list().contains(&open_class))));

    if let Some(toggle) = page.query_optional(&config.selectors.nav_toggle)? {
        let menu = Rc::clone(&menu);
        let list = list.clone();
        let open_class = open_class.clone();
        let on_toggle = Closure::wrap(Box::new(move |_event: Event| {
            let mut state = menu.get();
            let open = state.toggle();
            menu.set(state);
            set_class(&list, &open_class, open);
        }) as Box<dyn FnMut(Event)>);
        toggle
            .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())
            .context("nav toggle click listener")?;
        on_toggle.forget();
    } else {
        log::debug!("no {} on page; menu toggle not wired", config.selectors.nav_toggle);
    }

    for link in page.query_all(&config.selectors.nav_link)? {
        let menu = Rc::clone(&menu);
        let list = list.clone();
        let open_class = open_class.clone();
        let on_link = Closure::wrap(Box::new(move |_event: Event| {
            let mut state = menu.get();
            state.close();
            menu.set(state);
            set_class(&list, &open_class, false);
        }) as Box<dyn FnMut(Event)>);
        link.add_event_listener_with_callback("click", on_link.as_ref().unchecked_ref())
            .context("nav link click listener")?;
        on_link.forget();
    }
    Ok(())
}
