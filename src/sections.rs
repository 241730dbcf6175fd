//! Active-section tracking for the navigation bar.
//!
//! Each nav link targets a section through an in-page `href="#id"`. When a
//! section crosses the visibility threshold, every link loses the active
//! marker and the link pointing at that section (if any) gains it. Within a
//! batch of notifications the last intersecting section wins.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// What the nav bar should show after one visibility notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    /// The notification was not an intersection; leave links untouched.
    Unchanged,
    /// Clear all links, then mark the link at this index.
    Link(usize),
    /// Clear all links; no link targets the section.
    Cleared,
}

/// Extract the section id from an in-page link target.
pub fn link_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Clone, Debug, Default)]
pub struct SectionTracker {
    targets: Vec<Option<String>>,
    active: Option<usize>,
}

impl SectionTracker {
    /// Build from the `href` attribute of each nav link, in document order.
    pub fn new<I, H>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = Option<H>>,
        H: AsRef<str>,
    {
        let targets = hrefs
            .into_iter()
            .map(|href| href.and_then(|h| link_target(h.as_ref()).map(str::to_owned)))
            .collect();
        Self { targets, active: None }
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[cfg(test)]
    pub fn link_count(&self) -> usize {
        self.targets.len()
    }

    pub fn observe(&mut self, section_id: &str, intersecting: bool) -> Highlight {
        if !intersecting {
            return Highlight::Unchanged;
        }
        self.active = self
            .targets
            .iter()
            .position(|t| t.as_deref() == Some(section_id));
        match self.active {
            Some(index) => Highlight::Link(index),
            None => Highlight::Cleared,
        }
    }

    /// Apply a notification batch in order; returns the final highlight.
    pub fn observe_batch<'a, I>(&mut self, entries: I) -> Highlight
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        entries
            .into_iter()
            .map(|(id, intersecting)| self.observe(id, intersecting))
            .filter(|h| *h != Highlight::Unchanged)
            .last()
            .unwrap_or(Highlight::Unchanged)
    }
}
