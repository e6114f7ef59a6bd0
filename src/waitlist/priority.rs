//! Waitlist ordering.
//!
//! Students are ranked by gpa, then semester, then a configurable
//! final tie-breaker.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::Candidate;

/// How candidates equal on gpa and semester are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreaker {
    /// Earlier arrival on the waitlist wins (default).
    #[default]
    ArrivalOrder,
    /// Lexicographically smaller student id wins.
    ById,
    /// No final key; order among equals follows the heap layout.
    HeapOrder,
}

/// Comparator for waitlist candidates.
///
/// `compare(a, b) == Ordering::Greater` means `a` is more important than `b`
/// and should be promoted first.
///
/// # Example
/// ```
/// use u_enroll::waitlist::{Candidate, TieBreaker, WaitlistPriority};
/// use std::cmp::Ordering;
///
/// let priority = WaitlistPriority::new(TieBreaker::ArrivalOrder);
/// let senior = Candidate::new("A003", 9.0, 8, 0);
/// let junior = Candidate::new("A002", 9.0, 4, 1);
/// assert_eq!(priority.compare(&senior, &junior), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaitlistPriority {
    tie_breaker: TieBreaker,
}

impl WaitlistPriority {
    /// Creates a comparator with the given final tie-breaker.
    pub fn new(tie_breaker: TieBreaker) -> Self {
        Self { tie_breaker }
    }

    /// The configured tie-breaker.
    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Compares two candidates; `Greater` = `a` ranks higher.
    pub fn compare(&self, a: &Candidate, b: &Candidate) -> Ordering {
        a.gpa()
            .total_cmp(&b.gpa())
            .then_with(|| a.semester().cmp(&b.semester()))
            .then_with(|| match self.tie_breaker {
                // Reversed: the smaller ticket / id is the more important one.
                TieBreaker::ArrivalOrder => b.ticket().cmp(&a.ticket()),
                TieBreaker::ById => b.student_id().cmp(a.student_id()),
                TieBreaker::HeapOrder => Ordering::Equal,
            })
    }

    /// Whether `a` strictly outranks `b`.
    #[inline]
    pub fn outranks(&self, a: &Candidate, b: &Candidate) -> bool {
        self.compare(a, b) == Ordering::Greater
    }
}
