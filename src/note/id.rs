//! Timestamp-based note identifiers.

use chrono::NaiveDateTime;

/// `strftime` layout of a note id, e.g. `20240105_101112`.
pub const ID_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Generate the id for a note created at `now`.
///
/// Ids have one-second resolution. When the plain stamp is already taken a
/// `_2`, `_3`, ... suffix is appended until `is_taken` rejects it.
#[must_use]
pub fn generate_note_id<F>(now: NaiveDateTime, is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base = now.format(ID_FORMAT).to_string();
    if !is_taken(&base) {
        return base;
    }
    let mut suffix: u32 = 2;
    loop {
        let candidate = format!("{base}_{suffix}");
        if !is_taken(&candidate) {
            return candidate;
        }
        suffix = suffix.saturating_add(1);
    }
}
