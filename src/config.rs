//! Page configuration: element selectors, timings, and marquee phrases.
//!
//! SYSTEM CONTEXT
//! ==============
//! The defaults describe the stock portfolio page. A page may override any
//! subset with a JSON document; missing keys fall back to the defaults so a
//! partial override never has to restate the whole structure.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Element id of the optional inline JSON override.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub selectors: Selectors,
    pub theme: ThemeConfig,
    pub behavior: BehaviorConfig,
    pub marquee: MarqueeConfig,
    pub contact: ContactConfig,
}

impl PortfolioConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// CSS selectors for every element the page behaviors attach to.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub theme_toggle: String,
    pub nav_toggle: String,
    pub nav_list: String,
    pub nav_link: String,
    pub sections: String,
    pub reveal: String,
    pub typed: String,
    pub contact_form: String,
    pub name_field: String,
    pub email_field: String,
    pub message_field: String,
    pub field_error: String,
    pub year: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: "#theme-toggle".to_owned(),
            nav_toggle: "#nav-toggle".to_owned(),
            nav_list: "#nav-list".to_owned(),
            nav_link: ".nav-link".to_owned(),
            sections: "main section".to_owned(),
            reveal: ".reveal".to_owned(),
            typed: "#typed".to_owned(),
            contact_form: "#contact-form".to_owned(),
            name_field: "#name".to_owned(),
            email_field: "#email".to_owned(),
            message_field: "#message".to_owned(),
            field_error: ".error".to_owned(),
            year: "#year".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `localStorage` key holding `"dark"` or `"light"`.
    pub storage_key: String,
    /// Class set on `<body>` while the dark theme is active.
    pub dark_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            dark_class: "dark".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Visible fraction at which a section becomes the active one.
    pub section_threshold: f64,
    /// Visible fraction at which a reveal element fades in.
    pub reveal_threshold: f64,
    pub active_class: String,
    pub visible_class: String,
    pub open_class: String,
    pub tabbing_class: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            section_threshold: 0.55,
            reveal_threshold: 0.12,
            active_class: "active".to_owned(),
            visible_class: "visible".to_owned(),
            open_class: "open".to_owned(),
            tabbing_class: "user-is-tabbing".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    pub phrases: Vec<String>,
    pub type_delay_ms: u32,
    pub erase_delay_ms: u32,
    pub pause_ms: u32,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            phrases: [
                "Frontend Developer",
                "MERN stack enthusiast",
                "Building modern web experiences",
                "Open to internships & collaborations",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            type_delay_ms: 80,
            erase_delay_ms: 35,
            pause_ms: 1200,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub submit_label: String,
    pub sent_label: String,
    /// How long the submit button stays in the sent state.
    pub sent_hold_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_label: "Send Message".to_owned(),
            sent_label: "Sent ✓".to_owned(),
            sent_hold_ms: 1500,
        }
    }
}
