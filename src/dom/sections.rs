//! Highlights the nav link of the section currently filling the viewport.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use super::{MountError, ObserverCallback, Page, observe_all, set_class};
use crate::sections::{Highlight, SectionTracker};

fn render(links: &[Element], active_class: &str, highlight: Highlight) {
    let index = match highlight {
        Highlight::Unchanged => return,
        Highlight::Link(index) => Some(index),
        Highlight::Cleared => None,
    };
    for link in links {
        set_class(link, active_class, false);
    }
    if let Some(link) = index.and_then(|i| links.get(i)) {
        set_class(link, active_class, true);
    }
}

pub(super) fn mount(page: &Page) -> Result<(), MountError> {
    let config = Rc::clone(page.config());
    let links = page.query_all(&config.selectors.nav_link)?;
    let sections = page.query_all(&config.selectors.sections)?;
    let mut tracker = SectionTracker::new(links.iter().map(|link| link.get_attribute("href")));

    let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        let batch: Vec<(String, bool)> = entries
            .iter()
            .map(|entry| {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                (entry.target().id(), entry.is_intersecting())
            })
            .collect();
        let highlight = tracker.observe_batch(batch.iter().map(|(id, intersecting)| (id.as_str(), *intersecting)));
        render(&links, &config.behavior.active_class, highlight);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    observe_all(&sections, page.config().behavior.section_threshold, callback)?;
    Ok(())
}
