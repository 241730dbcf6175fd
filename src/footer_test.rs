use super::*;

const END_OF_2025_UTC: f64 = 1_767_225_599_000.0; // 2025-12-31T23:59:59Z
const START_OF_2026_UTC: f64 = 1_767_225_600_000.0; // 2026-01-01T00:00:00Z

#[test]
fn year_text_is_plain_digits() {
    assert_eq!(year_text(2026), "2026");
    assert_eq!(year_text(999), "999");
}

#[test]
fn year_flips_exactly_at_new_year_utc() {
    assert_eq!(year_from_epoch_millis(END_OF_2025_UTC, 0.0), 2025);
    assert_eq!(year_from_epoch_millis(START_OF_2026_UTC, 0.0), 2026);
}

#[test]
fn known_instants_map_to_their_years() {
    assert_eq!(year_from_epoch_millis(0.0, 0.0), 1970);
    assert_eq!(year_from_epoch_millis(-1.0, 0.0), 1969);
    assert_eq!(year_from_epoch_millis(951_825_600_000.0, 0.0), 2000); // 2000-02-29T12:00Z
    assert_eq!(year_from_epoch_millis(1_709_208_000_000.0, 0.0), 2024); // 2024-02-29T12:00Z
}

#[test]
fn local_offset_shifts_the_boundary() {
    // 2026-01-01T00:30Z is still 2025 one hour west of UTC.
    assert_eq!(year_from_epoch_millis(1_767_227_400_000.0, 60.0), 2025);
    // 2025-12-31T23:30Z is already 2026 one hour east of UTC.
    assert_eq!(year_from_epoch_millis(1_767_223_800_000.0, -60.0), 2026);
}

#[test]
fn slot_text_for_new_years_morning() {
    assert_eq!(year_text(year_from_epoch_millis(START_OF_2026_UTC, 0.0)), "2026");
}
