//! Rostering configuration.
//!
//! All capacity and fairness constants live in an immutable
//! [`RosterConfig`] handed to the engine and the schedule store at
//! construction time, so tests can override them without touching any
//! global state.

use serde::{Deserialize, Serialize};

use crate::models::{Day, Shift, WeekSchedule};

/// Capacity and fairness constraints for one rostering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Maximum employees per (day, shift) slot.
    pub max_shift_capacity: usize,
    /// Maximum days any one employee may work in the week.
    pub max_days_per_employee: u32,
    /// Advisory employee count for guaranteed full weekly coverage.
    /// Informational only; nothing enforces it.
    pub min_employees_required: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            max_shift_capacity: 2,
            max_days_per_employee: 5,
            min_employees_required: 12,
        }
    }
}

/// Result of the advisory coverage check performed at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageStatus {
    /// Enough employees for guaranteed full weekly coverage.
    Guaranteed,
    /// Fewer employees than the advisory threshold; the final schedule
    /// may be incomplete.
    Short {
        /// Employees available.
        available: usize,
        /// Advisory threshold they fall short of.
        required: usize,
    },
}

impl RosterConfig {
    /// Creates the default configuration (capacity 2, day cap 5,
    /// coverage threshold 12).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-slot capacity.
    pub fn with_shift_capacity(mut self, capacity: usize) -> Self {
        self.max_shift_capacity = capacity;
        self
    }

    /// Sets the weekly day cap per employee.
    pub fn with_day_cap(mut self, days: u32) -> Self {
        self.max_days_per_employee = days;
        self
    }

    /// Sets the advisory coverage threshold.
    pub fn with_coverage_threshold(mut self, employees: usize) -> Self {
        self.min_employees_required = employees;
        self
    }

    /// Total slot capacity across the week (7 days × 3 shifts × capacity).
    pub fn total_slots(&self) -> usize {
        Day::ALL.len() * Shift::ALL.len() * self.max_shift_capacity
    }

    /// Arithmetic minimum employee count to fill every slot, each
    /// employee working at most the day cap.
    ///
    /// The default advisory threshold (12) sits above this minimum
    /// (ceil(42 / 5) = 9) to leave margin for skips and preferences.
    pub fn theoretical_minimum(&self) -> usize {
        let slots = self.total_slots();
        if slots == 0 {
            return 0;
        }
        if self.max_days_per_employee == 0 {
            return usize::MAX;
        }
        slots.div_ceil(self.max_days_per_employee as usize)
    }

    /// Advisory coverage check against the configured threshold.
    pub fn coverage_status(&self, employee_count: usize) -> CoverageStatus {
        if employee_count >= self.min_employees_required {
            CoverageStatus::Guaranteed
        } else {
            CoverageStatus::Short {
                available: employee_count,
                required: self.min_employees_required,
            }
        }
    }

    /// Builds an empty schedule with this configuration's slot capacity.
    pub fn new_schedule(&self) -> WeekSchedule {
        WeekSchedule::new(self.max_shift_capacity)
    }
}
