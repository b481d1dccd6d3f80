//! Week enumerations: days and shifts.
//!
//! Both `Day` and `Shift` are closed, ordered enumerations. Their total
//! order is the enumeration order (calendar order for days, morning →
//! evening for shifts), which also fixes iteration order everywhere in
//! the crate: schedule storage, fallback selection, and reporting all
//! walk slots in `Day` then `Shift` order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the week, Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// A work shift within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl Day {
    /// All days in calendar order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Stable display label.
    pub fn label(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Zero-based ordinal (Monday = 0).
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Day at the given ordinal, if in range.
    pub fn from_index(index: usize) -> Option<Day> {
        Day::ALL.get(index).copied()
    }

    /// Parses a label, case-insensitively. Exact match only.
    pub fn from_label(label: &str) -> Option<Day> {
        Day::ALL
            .iter()
            .find(|d| d.label().eq_ignore_ascii_case(label))
            .copied()
    }
}

impl Shift {
    /// All shifts in enumeration order.
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    /// Stable display label.
    pub fn label(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Evening => "Evening",
        }
    }

    /// Zero-based ordinal (Morning = 0).
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Shift at the given ordinal, if in range.
    pub fn from_index(index: usize) -> Option<Shift> {
        Shift::ALL.get(index).copied()
    }

    /// Parses a label, case-insensitively. Exact match only.
    pub fn from_label(label: &str) -> Option<Shift> {
        Shift::ALL
            .iter()
            .find(|s| s.label().eq_ignore_ascii_case(label))
            .copied()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
