//! Employee model and roster.
//!
//! An [`Employee`] is a name plus a count of days already assigned this
//! week. The [`Roster`] owns every employee created at intake and hands
//! out copyable [`EmployeeId`] handles; the schedule itself stores only
//! names and never owns employee state.

use serde::{Deserialize, Serialize};

/// A single employee being rostered for the week.
///
/// The `days_assigned` counter is incremented exactly once per successful
/// assignment and never decremented or reset. Capping it is the caller's
/// job: [`increment_days_assigned`](Employee::increment_days_assigned)
/// performs no check of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Display name. Assumed unique for scheduling purposes; neither
    /// emptiness nor uniqueness is enforced here (see `validation`).
    pub name: String,
    /// Days assigned so far this week.
    pub days_assigned: u32,
}

impl Employee {
    /// Creates an employee with zero assigned days.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            days_assigned: 0,
        }
    }

    /// Records one more assigned day. The weekly cap must have been
    /// verified by the caller before this is invoked.
    pub fn increment_days_assigned(&mut self) {
        self.days_assigned += 1;
    }

    /// Whether the employee has reached the given weekly day cap.
    #[inline]
    pub fn at_day_cap(&self, cap: u32) -> bool {
        self.days_assigned >= cap
    }
}

/// Opaque handle to an employee in a [`Roster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(usize);

/// The set of employees gathered at intake, in creation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee and returns its handle.
    pub fn add(&mut self, name: impl Into<String>) -> EmployeeId {
        let id = EmployeeId(self.employees.len());
        self.employees.push(Employee::new(name));
        id
    }

    /// Looks up an employee by handle.
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(id.0)
    }

    /// Mutable lookup by handle.
    pub fn get_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.get_mut(id.0)
    }

    /// Iterates employees in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    /// Handles of all employees, in creation order.
    pub fn ids(&self) -> impl Iterator<Item = EmployeeId> {
        (0..self.employees.len()).map(EmployeeId)
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
