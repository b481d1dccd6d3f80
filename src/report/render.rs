//! Schedule text rendering.
//!
//! [`render`] produces the final human-readable weekly summary, grouped
//! by day then shift, names in assignment order. The output is
//! deterministic for a given schedule and parseable back into per-slot
//! occupancy counts with [`parse_occupancy`].

use crate::models::{Day, Shift, WeekSchedule};

/// Marker printed for a slot with no assignments. Also recognized by
/// [`parse_occupancy`]; an employee actually named this would be
/// miscounted, which intake validation is there to discourage.
pub const EMPTY_SLOT_MARKER: &str = "no one assigned";

/// Renders the schedule as the final weekly summary.
///
/// Day-major, shift-minor, matching the store's enumeration order.
/// Names are joined with ", " so they can be counted back out even when
/// they contain spaces.
pub fn render(schedule: &WeekSchedule) -> String {
    let mut out = String::from("===== FINAL WEEKLY SCHEDULE =====\n");
    let mut current_day = None;

    for (day, shift, names) in schedule.entries() {
        if current_day != Some(day) {
            current_day = Some(day);
            out.push_str(&format!("\n--- {day} ---\n"));
        }
        if names.is_empty() {
            out.push_str(&format!("  {shift}: {EMPTY_SLOT_MARKER}\n"));
        } else {
            out.push_str(&format!("  {shift}: {}\n", names.join(", ")));
        }
    }

    out
}

/// Parses rendered schedule text back into per-slot occupancy counts,
/// indexed `[Day::index()][Shift::index()]`.
///
/// Returns `None` if a shift line appears before any day header or a
/// day header carries an unknown label. Lines that are neither are
/// ignored, so the banner and blank lines pass through.
pub fn parse_occupancy(text: &str) -> Option<[[usize; 3]; 7]> {
    let mut counts = [[0usize; 3]; 7];
    let mut current_day: Option<Day> = None;

    for line in text.lines() {
        let line = line.trim();
        if let Some(label) = line
            .strip_prefix("---")
            .and_then(|rest| rest.strip_suffix("---"))
        {
            current_day = Some(Day::from_label(label.trim())?);
            continue;
        }
        if let Some((label, rest)) = line.split_once(':') {
            if let Some(shift) = Shift::from_label(label.trim()) {
                let day = current_day?;
                let rest = rest.trim();
                counts[day.index()][shift.index()] = if rest.is_empty() || rest == EMPTY_SLOT_MARKER
                {
                    0
                } else {
                    rest.split(',').count()
                };
            }
        }
    }

    Some(counts)
}
