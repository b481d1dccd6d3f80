//! Rostering domain models.
//!
//! Core data types for one-week shift rostering: the week enumerations,
//! the employee roster, and the schedule store the assignment engine
//! writes into.

mod employee;
mod schedule;
mod week;

pub use employee::{Employee, EmployeeId, Roster};
pub use schedule::WeekSchedule;
pub use week::{Day, Shift};
