//! One-shot `keydown` listener that enables keyboard focus styles.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;

use super::{JsResultExt, MountError, Page, log_failure, set_class};
use crate::a11y::FirstTab;

type KeyListener = Closure<dyn FnMut(KeyboardEvent)>;

pub(super) fn mount(page: &Page) -> Result<(), MountError> {
    let root = page
        .document()
        .document_element()
        .ok_or_else(|| MountError::MissingElement {
            selector: "html".to_owned(),
        })?;
    let window = page.window().clone();
    let class = page.config().behavior.tabbing_class.clone();

    // The listener unregisters itself, so it has to be able to reach its own
    // closure.
    let holder: Rc<RefCell<Option<KeyListener>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let mut latch = FirstTab::default();
    let on_key = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if !latch.on_key(&event.key()) {
            return;
        }
        set_class(&root, &class, true);
        if let Some(listener) = holder_for_cb.borrow_mut().take() {
            log_failure(
                window_for_cb.remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref()),
                "remove keydown listener",
            );
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);

    window
        .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
        .context("keydown listener")?;
    *holder.borrow_mut() = Some(on_key);
    Ok(())
}
