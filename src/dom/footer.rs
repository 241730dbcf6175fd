//! Writes the current year into the footer slot once at load.

use super::{MountError, Page};
use crate::footer::{current_year, year_text};

pub(super) fn mount(page: &Page) -> Result<(), MountError> {
    let slot = page.query(&page.config().selectors.year)?;
    slot.set_text_content(Some(&year_text(current_year())));
    Ok(())
}
