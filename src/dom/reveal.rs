//! Fades in `.reveal` elements the first time they scroll into view.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

use super::{MountError, ObserverCallback, Page, observe_all, set_class};
use crate::reveal::RevealTracker;

pub(super) fn mount(page: &Page) -> Result<(), MountError> {
    let config = Rc::clone(page.config());
    let elements = page.query_all(&config.selectors.reveal)?;
    let mut tracker = RevealTracker::new(elements.len());
    let watched = elements.clone();

    let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry = entry.unchecked_into::<IntersectionObserverEntry>();
            let target = entry.target();
            let Some(index) = watched.iter().position(|el| *el == target) else {
                continue;
            };
            if tracker.observe(index, entry.is_intersecting()) {
                set_class(&target, &config.behavior.visible_class, true);
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    observe_all(&elements, page.config().behavior.reveal_threshold, callback)?;
    Ok(())
}
