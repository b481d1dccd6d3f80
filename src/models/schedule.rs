//! Week schedule store.
//!
//! A [`WeekSchedule`] maps every (day, shift) slot to the ordered list of
//! employee names assigned to it. The 7×3 grid is fixed at construction:
//! slots are never added or removed, buckets only ever grow.
//!
//! The store is a dumb ledger. It knows its per-slot capacity so it can
//! answer occupancy queries, but [`assign`](WeekSchedule::assign) performs
//! no capacity check of its own — all admission policy lives in the
//! assignment engine, which must pair the capacity check and the append
//! as one atomic step.

use serde::{Deserialize, Serialize};

use super::{Day, Shift};

/// Capacity-aware store of one week's shift assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    capacity: usize,
    slots: [[Vec<String>; 3]; 7],
}

impl WeekSchedule {
    /// Creates an empty schedule with the given per-slot capacity
    /// (typically `RosterConfig::max_shift_capacity`).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: std::array::from_fn(|_| std::array::from_fn(|_| Vec::new())),
        }
    }

    /// Per-slot capacity this schedule was built with.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current occupancy of a slot. Pure query.
    #[inline]
    pub fn count_assigned(&self, day: Day, shift: Shift) -> usize {
        self.slots[day.index()][shift.index()].len()
    }

    /// Whether a slot has reached capacity. Pure query.
    #[inline]
    pub fn is_full(&self, day: Day, shift: Shift) -> bool {
        self.count_assigned(day, shift) >= self.capacity
    }

    /// Appends an employee name to a slot, in assignment order.
    ///
    /// Does not check capacity; callers must have done so already.
    pub fn assign(&mut self, day: Day, shift: Shift, name: impl Into<String>) {
        self.slots[day.index()][shift.index()].push(name.into());
    }

    /// Names assigned to a slot, in assignment order.
    pub fn assigned(&self, day: Day, shift: Shift) -> &[String] {
        &self.slots[day.index()][shift.index()]
    }

    /// Iterates all 21 slots in day-major, shift-minor order.
    pub fn entries(&self) -> impl Iterator<Item = (Day, Shift, &[String])> {
        Day::ALL.iter().flat_map(move |&day| {
            Shift::ALL
                .iter()
                .map(move |&shift| (day, shift, self.assigned(day, shift)))
        })
    }

    /// Total assignments across the week.
    pub fn total_assigned(&self) -> usize {
        self.slots.iter().flatten().map(Vec::len).sum()
    }
}
