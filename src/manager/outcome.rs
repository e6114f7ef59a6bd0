//! Successful results of mutating manager operations.

use serde::{Deserialize, Serialize};

/// Result of a successful `enroll`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollOutcome {
    /// A seat was taken.
    Seated,
    /// The course was full; the student joined the waitlist at `position` (1-based).
    Waitlisted { position: usize },
}

/// Result of a successful `withdraw`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WithdrawOutcome {
    /// A seat was released; `promoted` is the waiting student who took it, if any.
    FreedSeat { promoted: Option<String> },
    /// The student left the waitlist.
    RemovedFromWaitlist,
}

/// Relation between one student and one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentState {
    /// Neither enrolled nor waiting.
    Unrelated,
    /// Holds a seat in the course.
    Enrolled,
    /// Queued on the course's waitlist.
    Waiting,
}
