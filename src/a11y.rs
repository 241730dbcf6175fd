//! Keyboard-navigation affordance: focus rings appear only once the visitor
//! starts tabbing.

#[cfg(test)]
#[path = "a11y_test.rs"]
mod a11y_test;

/// `KeyboardEvent.key` value for the Tab key.
pub const TAB_KEY: &str = "Tab";

/// Latches on the first Tab press and ignores everything afterwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstTab {
    fired: bool,
}

impl FirstTab {
    /// Returns `true` only for the first Tab press.
    pub fn on_key(&mut self, key: &str) -> bool {
        if self.fired || key != TAB_KEY {
            return false;
        }
        self.fired = true;
        true
    }

    #[cfg(test)]
    pub fn fired(self) -> bool {
        self.fired
    }
}
