//! One-shot reveal latch for scroll-in animations.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Tracks which watched elements have been revealed. An element reveals on
/// its first intersecting notification and is never reported again, even if
/// the browser delivers a notification queued before the watch was dropped.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Returns `true` exactly once per element: on its first intersection.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        let Some(slot) = self.revealed.get_mut(index) else {
            return false;
        };
        if !intersecting || *slot {
            return false;
        }
        *slot = true;
        true
    }

    #[cfg(test)]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }
}
