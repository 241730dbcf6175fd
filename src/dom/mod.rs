//! Browser bindings that attach each page behavior to the host document.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything in this module needs a real `window`. The state machines it
//! drives live in the crate root modules and are tested natively; the code
//! here only looks elements up, registers listeners and timers, and copies
//! state into classes and text.
//!
//! Behaviors mount independently. A behavior whose elements are missing
//! logs an error and the rest of the page still works.

mod a11y;
mod contact;
mod footer;
mod marquee;
mod nav;
mod reveal;
mod sections;
mod theme;

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverInit, Window};

use crate::config::{CONFIG_ELEMENT_ID, PortfolioConfig};
use crate::marquee::MarqueeError;

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("no browser window or document")]
    NoDocument,
    #[error("missing element: {selector}")]
    MissingElement { selector: String },
    #[error("element {selector} is not a {expected}")]
    WrongElement {
        selector: String,
        expected: &'static str,
    },
    #[error("{context}: {message}")]
    Js { context: &'static str, message: String },
    #[error(transparent)]
    Marquee(#[from] MarqueeError),
}

pub(crate) trait JsResultExt<T> {
    fn context(self, context: &'static str) -> Result<T, MountError>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn context(self, context: &'static str) -> Result<T, MountError> {
        self.map_err(|value| MountError::Js {
            context,
            message: describe(&value),
        })
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Log a failed non-critical DOM write.
pub(crate) fn log_failure<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(value) = result {
        log::warn!("{what} failed: {}", describe(&value));
    }
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    log_failure(result, "class update");
}

/// Handle on the host document plus the active configuration.
#[derive(Clone)]
pub struct Page {
    window: Window,
    document: Document,
    config: Rc<PortfolioConfig>,
}

impl Page {
    pub fn new(config: PortfolioConfig) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoDocument)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        Ok(Self {
            window,
            document,
            config: Rc::new(config),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &Rc<PortfolioConfig> {
        &self.config
    }

    pub fn body(&self) -> Result<HtmlElement, MountError> {
        self.document.body().ok_or_else(|| MountError::MissingElement {
            selector: "body".to_owned(),
        })
    }

    pub fn query_optional(&self, selector: &str) -> Result<Option<Element>, MountError> {
        self.document.query_selector(selector).context("query selector")
    }

    pub fn query(&self, selector: &str) -> Result<Element, MountError> {
        self.query_optional(selector)?
            .ok_or_else(|| MountError::MissingElement {
                selector: selector.to_owned(),
            })
    }

    pub fn query_as<T: JsCast>(&self, selector: &str, expected: &'static str) -> Result<T, MountError> {
        self.query(selector)?
            .dyn_into::<T>()
            .map_err(|_| MountError::WrongElement {
                selector: selector.to_owned(),
                expected,
            })
    }

    /// All matches in document order; an empty list is not an error.
    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>, MountError> {
        let nodes = self.document.query_selector_all(selector).context("query selector all")?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect())
    }
}

/// Read the inline JSON override, falling back to defaults.
pub fn load_config(document: &Document) -> PortfolioConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return PortfolioConfig::default();
    };
    match PortfolioConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            PortfolioConfig::default()
        }
    }
}

pub(crate) type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watch `elements` at `threshold` visibility. The callback lives for the
/// rest of the page.
pub(crate) fn observe_all(
    elements: &[Element],
    threshold: f64,
    callback: ObserverCallback,
) -> Result<IntersectionObserver, MountError> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .context("create intersection observer")?;
    for element in elements {
        observer.observe(element);
    }
    callback.forget();
    Ok(observer)
}

fn report(behavior: &str, result: Result<(), MountError>) {
    match result {
        Ok(()) => log::debug!("{behavior} mounted"),
        Err(err) => log::error!("{behavior} not mounted: {err}"),
    }
}

/// Attach every behavior to the page.
pub fn mount_all(page: &Page) {
    report("theme toggle", theme::mount(page));
    report("navigation menu", nav::mount(page));
    report("section tracker", sections::mount(page));
    report("reveal", reveal::mount(page));
    report("marquee", marquee::mount(page));
    report("contact form", contact::mount(page));
    report("footer year", footer::mount(page));
    report("keyboard affordance", a11y::mount(page));
}
