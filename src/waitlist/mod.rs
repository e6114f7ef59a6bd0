//! Per-course priority waitlists.
//!
//! When a course is full, students queue in a [`Waitlist`]. The student who
//! ranks highest under [`WaitlistPriority`] is the one promoted when a seat
//! frees up.
//!
//! # Ranking
//!
//! | Key | Direction |
//! |-----|-----------|
//! | gpa | higher first |
//! | semester | higher first |
//! | [`TieBreaker`] | configurable |
//!
//! # Usage
//!
//! ```
//! use u_enroll::waitlist::{Candidate, TieBreaker, Waitlist, WaitlistPriority};
//!
//! let mut waitlist = Waitlist::new(WaitlistPriority::new(TieBreaker::ById));
//! waitlist.insert(Candidate::new("B", 9.0, 8, 0));
//! waitlist.insert(Candidate::new("A", 9.0, 8, 1));
//! assert_eq!(waitlist.peek().unwrap().student_id(), "A");
//! ```

mod heap;
mod priority;

pub use heap::{Candidate, Waitlist};
pub use priority::{TieBreaker, WaitlistPriority};
