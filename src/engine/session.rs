//! Per-employee week walk.
//!
//! An [`AssignmentSession`] carries one employee through the week, one
//! day at a time, owning the two rules the engine itself leaves to its
//! caller:
//!
//! - the weekly day cap is checked before every day, and once reached
//!   every remaining day is skipped (the employee's week is over, not
//!   just that day);
//! - a re-promptable outcome (`ShiftFull`, `InvalidRequest`) keeps the
//!   cursor on the same day so the next request retries it, while a
//!   terminal outcome advances to the next day.
//!
//! The session is I/O-free: a driver feeds it requests from wherever
//! they come from and renders the outcomes however it likes.

use rand::Rng;

use super::{AssignmentEngine, Outcome, ShiftRequest};
use crate::models::{Day, Employee, WeekSchedule};

/// Walks one employee through the week, day by day.
#[derive(Debug)]
pub struct AssignmentSession<'a, R: Rng> {
    engine: &'a mut AssignmentEngine<R>,
    schedule: &'a mut WeekSchedule,
    employee: &'a mut Employee,
    cursor: usize,
    resolutions: Vec<(Day, Outcome)>,
}

impl<'a, R: Rng> AssignmentSession<'a, R> {
    /// Starts a session for one employee. Days the employee can no
    /// longer work (cap already reached) are never offered.
    pub fn new(
        engine: &'a mut AssignmentEngine<R>,
        schedule: &'a mut WeekSchedule,
        employee: &'a mut Employee,
    ) -> Self {
        Self {
            engine,
            schedule,
            employee,
            cursor: 0,
            resolutions: Vec::new(),
        }
    }

    /// The day the next request applies to, or `None` once the week is
    /// exhausted or the employee has reached the day cap.
    pub fn current_day(&self) -> Option<Day> {
        if self
            .employee
            .at_day_cap(self.engine.config().max_days_per_employee)
        {
            return None;
        }
        Day::from_index(self.cursor)
    }

    /// Whether the session has no more days to decide.
    pub fn is_complete(&self) -> bool {
        self.current_day().is_none()
    }

    /// Applies one request to the current day.
    ///
    /// Returns `None` if the session is already complete. Terminal
    /// outcomes advance to the next day; re-promptable outcomes leave
    /// the cursor in place for a retry.
    pub fn submit(&mut self, request: &ShiftRequest) -> Option<Outcome> {
        let day = self.current_day()?;
        let outcome = self
            .engine
            .try_assign(self.schedule, self.employee, day, request);
        if outcome.is_terminal() {
            self.resolutions.push((day, outcome));
            self.cursor += 1;
        }
        Some(outcome)
    }

    /// Feeds requests until they run out or the session completes.
    pub fn run(&mut self, requests: impl IntoIterator<Item = ShiftRequest>) {
        for request in requests {
            if self.submit(&request).is_none() {
                break;
            }
        }
    }

    /// Terminal outcome recorded for each decided day, in day order.
    /// Days skipped because the cap was reached do not appear.
    pub fn resolutions(&self) -> &[(Day, Outcome)] {
        &self.resolutions
    }
}
