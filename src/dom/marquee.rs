//! Drives the typing marquee from a chain of timeouts.

use gloo_timers::callback::Timeout;
use web_sys::Element;

use super::{MountError, Page};
use crate::marquee::Marquee;

// Each timeout owns the machine and hands it to the next one.
fn step(mut marquee: Marquee, target: Element) {
    let frame = marquee.tick();
    target.set_text_content(Some(&frame.text));
    let millis = u32::try_from(frame.delay.as_millis()).unwrap_or(u32::MAX);
    Timeout::new(millis, move || step(marquee, target)).forget();
}

pub(super) fn mount(page: &Page) -> Result<(), MountError> {
    let config = page.config();
    let target = page.query(&config.selectors.typed)?;
    let marquee = Marquee::from_config(&config.marquee)?;
    step(marquee, target);
    Ok(())
}
