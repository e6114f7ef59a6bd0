//! Enrollment domain models.
//!
//! Records are built with `with_*` builders and handed to the
//! [`EnrollmentManager`](crate::manager::EnrollmentManager) at registration.
//! After that, seat counters and enrollment lists change only through
//! manager operations.
//!
//! # Relations
//!
//! | Record | Owns | Mirrored by |
//! |--------|------|-------------|
//! | Student | enrolled course ids | course ledgers |
//! | Course | seat counter | ledger length |

mod course;
mod student;

pub use course::Course;
pub use student::Student;
