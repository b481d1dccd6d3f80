//! Schedule reporting.
//!
//! Renders a finished [`WeekSchedule`](crate::models::WeekSchedule) as
//! the final weekly summary and computes fill metrics over it. Rendering
//! is deterministic and free of mutation; the text round-trips back to
//! occupancy counts via [`parse_occupancy`].

mod render;
mod stats;

pub use render::{parse_occupancy, render, EMPTY_SLOT_MARKER};
pub use stats::ScheduleStats;
