//! Footer year stamp.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

const MS_PER_DAY: f64 = 86_400_000.0;
const MS_PER_MINUTE: f64 = 60_000.0;

/// Text written into the year slot.
pub fn year_text(full_year: u32) -> String {
    full_year.to_string()
}

/// Calendar year of an instant, in the zone `utc_offset_minutes` behind UTC
/// (the sign convention of `Date.getTimezoneOffset`).
#[allow(clippy::cast_possible_truncation)]
pub fn year_from_epoch_millis(epoch_ms: f64, utc_offset_minutes: f64) -> u32 {
    let local_ms = epoch_ms - utc_offset_minutes * MS_PER_MINUTE;
    let days = (local_ms / MS_PER_DAY).floor() as i64;

    // Civil-from-days over 400-year eras starting 0000-03-01.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let year = yoe + era * 400 + i64::from(mp >= 10);
    u32::try_from(year).unwrap_or_default()
}

/// Calendar year from the browser clock, in local time.
#[cfg(feature = "hydrate")]
pub fn current_year() -> u32 {
    let now = js_sys::Date::new_0();
    year_from_epoch_millis(now.get_time(), now.get_timezone_offset())
}
