//! Mobile navigation menu open/closed state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Seed from the menu's current class state.
    pub fn with_open(open: bool) -> Self {
        Self { open }
    }

    #[cfg(test)]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Toggle control clicked.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A menu link was followed.
    pub fn close(&mut self) {
        self.open = false;
    }
}
