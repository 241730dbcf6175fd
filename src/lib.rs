//! # portfolio
//!
//! WebAssembly behaviors for a static personal portfolio page. The page is
//! plain HTML; this crate attaches to it at load and wires up the theme
//! switch, mobile menu, active-section highlighting, scroll reveals, the
//! typing marquee, contact-form validation, the footer year, and the
//! keyboard-focus affordance.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark preference and its store |
//! | [`nav`] | Mobile menu open state |
//! | [`sections`] | Which nav link is active for the visible section |
//! | [`reveal`] | One-shot reveal latch |
//! | [`marquee`] | Type/erase phrase state machine |
//! | [`contact`] | Contact form validation and submit feedback |
//! | [`footer`] | Year stamp |
//! | [`a11y`] | First-Tab latch for focus styles |
//! | [`config`] | Selectors, timings, phrases; JSON overrides |
//! | `dom` | Browser bindings (`hydrate` feature only) |

pub mod a11y;
pub mod config;
pub mod contact;
pub mod footer;
pub mod marquee;
pub mod nav;
pub mod reveal;
pub mod sections;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod dom;

/// Wasm entry point: runs once when the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_ok() {
        log::debug!("console logging at {level}");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("portfolio: no document to attach to");
        return;
    };
    match dom::Page::new(dom::load_config(&document)) {
        Ok(page) => dom::mount_all(&page),
        Err(err) => log::error!("portfolio: {err}"),
    }
}
