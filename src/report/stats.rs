//! Schedule fill metrics.

use crate::models::{Day, WeekSchedule};

/// Occupancy metrics computed from a finished schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleStats {
    /// Assignments recorded across the week.
    pub total_assigned: usize,
    /// Total slot capacity across the week (21 × per-slot capacity).
    pub total_capacity: usize,
    /// `total_assigned / total_capacity` (0.0 when capacity is zero).
    pub fill_rate: f64,
    /// Slots at capacity.
    pub full_slots: usize,
    /// Slots with no assignments.
    pub empty_slots: usize,
    /// Assignments per day, indexed by `Day::index()`.
    pub assigned_by_day: [usize; 7],
}

impl ScheduleStats {
    /// Computes metrics from a schedule.
    pub fn calculate(schedule: &WeekSchedule) -> Self {
        let mut full_slots = 0;
        let mut empty_slots = 0;
        let mut assigned_by_day = [0usize; 7];

        for (day, shift, names) in schedule.entries() {
            if names.is_empty() {
                empty_slots += 1;
            }
            if schedule.is_full(day, shift) {
                full_slots += 1;
            }
            assigned_by_day[day.index()] += names.len();
        }

        let total_assigned = schedule.total_assigned();
        let total_capacity = 21 * schedule.capacity();
        let fill_rate = if total_capacity == 0 {
            0.0
        } else {
            total_assigned as f64 / total_capacity as f64
        };

        Self {
            total_assigned,
            total_capacity,
            fill_rate,
            full_slots,
            empty_slots,
            assigned_by_day,
        }
    }

    /// Day with the most assignments, ties broken toward the earlier day.
    pub fn busiest_day(&self) -> Day {
        let mut best = Day::Monday;
        for day in Day::ALL {
            if self.assigned_by_day[day.index()] > self.assigned_by_day[best.index()] {
                best = day;
            }
        }
        best
    }
}
