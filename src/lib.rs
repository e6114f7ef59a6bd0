//! Course enrollment engine for the U-Engine ecosystem.
//!
//! Manages a catalog of students and courses: capacity-bounded seat
//! allocation, a priority waitlist per course, and read-only reports
//! (recommendations, academic load, rosters, demand ranking).
//!
//! # Modules
//!
//! - **`models`**: Domain records: `Student`, `Course`
//! - **`waitlist`**: Binary max-heap `Waitlist` ranked by `WaitlistPriority`
//! - **`manager`**: `EnrollmentManager`, the single owner of seats, ledgers
//!   and waitlists, plus its reports
//! - **`validation`**: Record and catalog checks, whole-state `audit`
//! - **`config`**: `EnrollmentConfig`
//! - **`error`**: Operation error types
//!
//! # Example
//!
//! ```
//! use u_enroll::manager::{EnrollmentManager, EnrollOutcome};
//! use u_enroll::models::{Course, Student};
//!
//! let mut manager = EnrollmentManager::new();
//! manager
//!     .register_course(Course::new("C101", 30).with_credits(5).with_areas(["IA"]))
//!     .unwrap();
//! manager
//!     .register_student(Student::new("A001").with_gpa(9.5).with_interests(["IA"]))
//!     .unwrap();
//!
//! assert_eq!(manager.enroll("A001", "C101"), Ok(EnrollOutcome::Seated));
//! assert_eq!(manager.academic_load("A001").unwrap().total_credits, 5);
//! ```
//!
//! # Logging
//!
//! Operations emit `tracing` events; installing a subscriber is left to
//! the host application.
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 6 (Heapsort)

pub mod config;
pub mod error;
pub mod manager;
pub mod models;
pub mod validation;
pub mod waitlist;
