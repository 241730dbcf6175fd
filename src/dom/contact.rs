//! Contact form submit handler: inline errors, logged submission, and the
//! transient "sent" button state.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::{JsResultExt, MountError, Page};
use crate::config::ContactConfig;
use crate::contact::{Field, SubmitState, validate};

const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";

fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        element.text_content().unwrap_or_default()
    }
}

fn show_error(slots: &[Element], field: Field, message: &str) {
    let slot = slots
        .iter()
        .find(|slot| slot.get_attribute("data-for").as_deref() == Some(field.as_str()));
    if let Some(slot) = slot {
        slot.set_text_content(Some(message));
    }
}

fn render_submit(button: &HtmlButtonElement, config: &ContactConfig, state: SubmitState) {
    button.set_text_content(Some(state.label(config)));
    button.set_disabled(state.is_disabled());
}

pub(super) fn mount(page: &Page) -> Result<(), MountError> {
    let config = Rc::clone(page.config());
    let selectors = &config.selectors;
    let form: HtmlFormElement = page.query_as(&selectors.contact_form, "form")?;
    let name = page.query(&selectors.name_field)?;
    let email = page.query(&selectors.email_field)?;
    let message = page.query(&selectors.message_field)?;
    let button = form
        .query_selector(SUBMIT_BUTTON)
        .context("query submit button")?
        .ok_or_else(|| MountError::MissingElement {
            selector: SUBMIT_BUTTON.to_owned(),
        })?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| MountError::WrongElement {
            selector: SUBMIT_BUTTON.to_owned(),
            expected: "button",
        })?;

    let page = page.clone();
    let state = Rc::new(Cell::new(SubmitState::Idle));
    let form_for_cb = form.clone();
    let on_submit = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        if !state.get().accepts_submit() {
            return;
        }

        let slots = match page.query_all(&config.selectors.field_error) {
            Ok(slots) => slots,
            Err(err) => {
                log::warn!("error slots unavailable: {err}");
                Vec::new()
            }
        };
        for slot in &slots {
            slot.set_text_content(Some(""));
        }

        let submission = match validate(&field_value(&name), &field_value(&email), &field_value(&message)) {
            Ok(submission) => submission,
            Err(errors) => {
                for error in errors {
                    show_error(&slots, error.field(), &error.to_string());
                }
                return;
            }
        };

        let time = String::from(js_sys::Date::new_0().to_iso_string());
        match serde_json::to_string(&submission.record(&time)) {
            Ok(json) => log::info!("contact form submission (client-side only): {json}"),
            Err(err) => log::warn!("contact form submission not serialized: {err}"),
        }

        state.set(SubmitState::Sent);
        render_submit(&button, &config.contact, SubmitState::Sent);

        let state = Rc::clone(&state);
        let button = button.clone();
        let form = form_for_cb.clone();
        let contact = config.contact.clone();
        Timeout::new(config.contact.sent_hold_ms, move || {
            state.set(SubmitState::Idle);
            render_submit(&button, &contact, SubmitState::Idle);
            form.reset();
        })
        .forget();
    }) as Box<dyn FnMut(Event)>);

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .context("contact form submit listener")?;
    on_submit.forget();
    Ok(())
}
