//! Constraint-satisfying assignment engine.
//!
//! The engine decides, one request at a time, whether and where an
//! employee is assigned on a given day. Every decision is returned as an
//! explicit [`Outcome`]; nothing in this module panics or raises.
//!
//! # Usage
//!
//! ```
//! use shift_roster::engine::{AssignmentEngine, Outcome, RosterConfig, ShiftRequest};
//! use shift_roster::models::{Day, Employee, Shift};
//!
//! let config = RosterConfig::new();
//! let mut schedule = config.new_schedule();
//! let mut engine = AssignmentEngine::seeded(config, 7);
//! let mut alice = Employee::new("Alice");
//!
//! let outcome = engine.try_assign(
//!     &mut schedule,
//!     &mut alice,
//!     Day::Monday,
//!     &ShiftRequest::Specific(Shift::Morning),
//! );
//! assert_eq!(outcome, Outcome::Assigned(Shift::Morning));
//! assert_eq!(alice.days_assigned, 1);
//! ```

mod assign;
mod config;
mod session;

pub use assign::AssignmentEngine;
pub use config::{CoverageStatus, RosterConfig};
pub use session::AssignmentSession;

use serde::{Deserialize, Serialize};

use crate::models::Shift;

/// One assignment request for a single (employee, day).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftRequest {
    /// A specific shift was requested.
    Specific(Shift),
    /// No preference; the engine picks among the non-full shifts.
    NoPreference,
    /// Work no shift this day.
    Skip,
    /// Unrecognized input, kept verbatim for the caller's message.
    Invalid(String),
}

impl ShiftRequest {
    /// Maps raw driver input to a request.
    ///
    /// Blank → [`NoPreference`](ShiftRequest::NoPreference), "skip"
    /// (case-insensitive) → [`Skip`](ShiftRequest::Skip), a recognized
    /// shift label → [`Specific`](ShiftRequest::Specific), anything else
    /// → [`Invalid`](ShiftRequest::Invalid).
    pub fn parse(input: &str) -> ShiftRequest {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return ShiftRequest::NoPreference;
        }
        if trimmed.eq_ignore_ascii_case("skip") {
            return ShiftRequest::Skip;
        }
        match Shift::from_label(trimmed) {
            Some(shift) => ShiftRequest::Specific(shift),
            None => ShiftRequest::Invalid(trimmed.to_string()),
        }
    }
}

/// Result of one assignment attempt.
///
/// Per (employee, day), `Assigned`, `Skipped`, and `AllShiftsFull` are
/// terminal; `ShiftFull` and `InvalidRequest` send the caller back to
/// re-request the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Assigned to the given shift; the employee's day counter was
    /// incremented.
    Assigned(Shift),
    /// The requested shift is at capacity. Re-promptable.
    ShiftFull(Shift),
    /// Every shift that day is at capacity; no assignment possible.
    AllShiftsFull,
    /// The request could not be interpreted. Re-promptable.
    InvalidRequest,
    /// The day was skipped on request.
    Skipped,
}

impl Outcome {
    /// Whether this outcome settles the day (the caller moves on).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::ShiftFull(_) | Outcome::InvalidRequest)
    }

    /// Whether the caller should re-request the same day.
    #[inline]
    pub fn needs_retry(&self) -> bool {
        !self.is_terminal()
    }

    /// The shift assigned, if any.
    pub fn assigned_shift(&self) -> Option<Shift> {
        match self {
            Outcome::Assigned(shift) => Some(*shift),
            _ => None,
        }
    }
}
