//! Enrollment manager: the single authority over seats, ledgers and waitlists.
//!
//! # Algorithm
//!
//! Each course owns one slot holding its seat counter, its ledger (enrolled
//! student ids in enrollment order) and its priority waitlist.
//!
//! 1. `enroll` takes a free seat, or queues the student when the course is full.
//! 2. `withdraw` releases a seat (or leaves the waitlist) and immediately
//!    runs `promote` for the course.
//! 3. `promote` moves the top-ranked waiting student into the free seat.
//!
//! # State machine (per student and course)
//!
//! | From | Operation | To |
//! |------|-----------|----|
//! | Unrelated | enroll, seat free | Enrolled |
//! | Unrelated | enroll, course full | Waiting |
//! | Enrolled | withdraw | Unrelated |
//! | Waiting | withdraw | Unrelated |
//! | Waiting | promote (top candidate) | Enrolled |
//!
//! Every other transition is rejected with an error and changes nothing.

mod outcome;
pub mod reports;

pub use outcome::{EnrollOutcome, EnrollmentState, WithdrawOutcome};
pub use reports::{AcademicLoad, CourseCredits, CourseDemand, Recommendation};

use std::collections::HashMap;

use crate::config::EnrollmentConfig;
use crate::error::{EnrollError, EntityKind, NotFound, RegistrationError, WithdrawError};
use crate::models::{Course, Student};
use crate::validation::{validate_catalog, validate_course, validate_student, ValidationError};
use crate::waitlist::{Candidate, Waitlist, WaitlistPriority};

/// Seat counter, ledger and waitlist of one course.
#[derive(Debug, Clone)]
struct CourseSlot {
    course: Course,
    ledger: Vec<String>,
    waitlist: Waitlist,
}

/// Owns the student and course registries and all enrollment state.
///
/// Construct one explicitly and pass it to whatever drives it; there is
/// no shared global instance.
///
/// # Example
///
/// ```
/// use u_enroll::manager::{EnrollmentManager, EnrollOutcome, WithdrawOutcome};
/// use u_enroll::models::{Course, Student};
///
/// let mut manager = EnrollmentManager::new();
/// manager.register_course(Course::new("C101", 1).with_credits(5)).unwrap();
/// manager.register_student(Student::new("A001").with_gpa(9.5).with_semester(8)).unwrap();
/// manager.register_student(Student::new("A004").with_gpa(9.8).with_semester(6)).unwrap();
///
/// assert_eq!(manager.enroll("A001", "C101"), Ok(EnrollOutcome::Seated));
/// assert_eq!(
///     manager.enroll("A004", "C101"),
///     Ok(EnrollOutcome::Waitlisted { position: 1 })
/// );
/// assert_eq!(
///     manager.withdraw("A001", "C101"),
///     Ok(WithdrawOutcome::FreedSeat { promoted: Some("A004".into()) })
/// );
/// ```
#[derive(Debug, Clone)]
pub struct EnrollmentManager {
    config: EnrollmentConfig,
    students: HashMap<String, Student>,
    slots: HashMap<String, CourseSlot>,
    next_ticket: u64,
}

impl EnrollmentManager {
    /// Creates an empty manager with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EnrollmentConfig::default())
    }

    /// Creates an empty manager with the given configuration.
    pub fn with_config(config: EnrollmentConfig) -> Self {
        Self {
            config,
            students: HashMap::new(),
            slots: HashMap::new(),
            next_ticket: 0,
        }
    }

    /// Validates a whole catalog and registers every record in it.
    ///
    /// # Returns
    /// The populated manager, or every problem found in the catalog.
    pub fn from_catalog(
        config: EnrollmentConfig,
        students: Vec<Student>,
        courses: Vec<Course>,
    ) -> Result<Self, Vec<ValidationError>> {
        validate_catalog(&students, &courses, &config)?;

        let mut manager = Self::with_config(config);
        for course in courses {
            manager.insert_course(course);
        }
        for student in students {
            manager.insert_student(student);
        }
        tracing::info!(
            students = manager.students.len(),
            courses = manager.slots.len(),
            "catalog loaded"
        );
        Ok(manager)
    }

    /// The active configuration.
    pub fn config(&self) -> &EnrollmentConfig {
        &self.config
    }

    // ======================== Registration ========================

    /// Registers a student.
    pub fn register_student(&mut self, student: Student) -> Result<(), RegistrationError> {
        if self.students.contains_key(student.id()) {
            tracing::warn!(student_id = student.id(), "duplicate student id rejected");
            return Err(RegistrationError::DuplicateId {
                kind: EntityKind::Student,
                id: student.id().to_string(),
            });
        }
        validate_student(&student, &self.config).map_err(RegistrationError::Invalid)?;
        self.insert_student(student);
        Ok(())
    }

    /// Registers a course with an empty ledger and waitlist.
    pub fn register_course(&mut self, course: Course) -> Result<(), RegistrationError> {
        if self.slots.contains_key(course.id()) {
            tracing::warn!(course_id = course.id(), "duplicate course id rejected");
            return Err(RegistrationError::DuplicateId {
                kind: EntityKind::Course,
                id: course.id().to_string(),
            });
        }
        validate_course(&course).map_err(RegistrationError::Invalid)?;
        self.insert_course(course);
        Ok(())
    }

    fn insert_student(&mut self, student: Student) {
        tracing::info!(student_id = student.id(), name = student.name(), "student registered");
        self.students.insert(student.id().to_string(), student);
    }

    fn insert_course(&mut self, course: Course) {
        tracing::info!(
            course_id = course.id(),
            capacity = course.capacity(),
            "course registered"
        );
        let slot = CourseSlot {
            ledger: Vec::new(),
            waitlist: Waitlist::new(WaitlistPriority::new(self.config.tie_breaker)),
            course,
        };
        self.slots.insert(slot.course.id().to_string(), slot);
    }

    // ======================== Lookup ========================

    /// Looks up a student by id.
    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.students.get(student_id)
    }

    /// Looks up a course by id.
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.slots.get(course_id).map(|slot| &slot.course)
    }

    /// All registered students (order unspecified).
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// All registered courses (order unspecified).
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.slots.values().map(|slot| &slot.course)
    }

    /// Number of registered students.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Number of registered courses.
    pub fn course_count(&self) -> usize {
        self.slots.len()
    }

    /// Enrolled student ids of a course, in enrollment order.
    pub fn ledger(&self, course_id: &str) -> Option<&[String]> {
        self.slots.get(course_id).map(|slot| slot.ledger.as_slice())
    }

    /// The waitlist of a course.
    pub fn waitlist(&self, course_id: &str) -> Option<&Waitlist> {
        self.slots.get(course_id).map(|slot| &slot.waitlist)
    }

    /// How a student currently relates to a course.
    pub fn relation(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> Result<EnrollmentState, NotFound> {
        let student = self
            .students
            .get(student_id)
            .ok_or_else(|| NotFound::student(student_id))?;
        let slot = self
            .slots
            .get(course_id)
            .ok_or_else(|| NotFound::course(course_id))?;

        Ok(if student.is_enrolled_in(course_id) {
            EnrollmentState::Enrolled
        } else if slot.waitlist.contains(student_id) {
            EnrollmentState::Waiting
        } else {
            EnrollmentState::Unrelated
        })
    }

    /// 1-based waitlist position of a student, if waiting for the course.
    pub fn waitlist_position(&self, student_id: &str, course_id: &str) -> Option<usize> {
        self.slots
            .get(course_id)
            .and_then(|slot| slot.waitlist.position(student_id))
    }

    // ======================== Enrollment ========================

    /// Enrolls a student, or waitlists them when the course is full.
    ///
    /// # Errors
    /// - `NotFound` if either id is unknown.
    /// - `AlreadyEnrolled` / `AlreadyWaiting` if the pair is already related.
    pub fn enroll(
        &mut self,
        student_id: &str,
        course_id: &str,
    ) -> Result<EnrollOutcome, EnrollError> {
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| NotFound::student(student_id))?;
        let slot = self
            .slots
            .get_mut(course_id)
            .ok_or_else(|| NotFound::course(course_id))?;

        if student.is_enrolled_in(course_id) {
            tracing::warn!(student_id, course_id, "already enrolled");
            return Err(EnrollError::AlreadyEnrolled {
                student_id: student_id.to_string(),
                course_id: course_id.to_string(),
            });
        }
        if slot.waitlist.contains(student_id) {
            tracing::warn!(student_id, course_id, "already waiting");
            return Err(EnrollError::AlreadyWaiting {
                student_id: student_id.to_string(),
                course_id: course_id.to_string(),
            });
        }

        if slot.course.take_seat() {
            student.add_course(course_id);
            slot.ledger.push(student_id.to_string());
            tracing::info!(
                student_id,
                course_id,
                seats_available = slot.course.seats_available(),
                "student seated"
            );
            return Ok(EnrollOutcome::Seated);
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        slot.waitlist.insert(Candidate::from_student(student, ticket));
        let position = slot
            .waitlist
            .position(student_id)
            .unwrap_or(slot.waitlist.len());
        tracing::info!(student_id, course_id, position, "course full; student waitlisted");
        Ok(EnrollOutcome::Waitlisted { position })
    }

    /// Withdraws a student from a course or from its waitlist.
    ///
    /// Releasing a seat immediately promotes the top waiting student.
    ///
    /// # Errors
    /// - `NotFound` if either id is unknown.
    /// - `NotEnrolledOrWaiting` if the pair is unrelated.
    pub fn withdraw(
        &mut self,
        student_id: &str,
        course_id: &str,
    ) -> Result<WithdrawOutcome, WithdrawError> {
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| NotFound::student(student_id))?;
        let slot = self
            .slots
            .get_mut(course_id)
            .ok_or_else(|| NotFound::course(course_id))?;

        if student.remove_course(course_id) {
            slot.course.release_seat();
            slot.ledger.retain(|id| id != student_id);
            tracing::info!(student_id, course_id, "student withdrawn; seat released");
            let promoted = self.promote(course_id);
            return Ok(WithdrawOutcome::FreedSeat { promoted });
        }

        if slot.waitlist.remove(student_id).is_some() {
            tracing::info!(student_id, course_id, "student left waitlist");
            return Ok(WithdrawOutcome::RemovedFromWaitlist);
        }

        tracing::warn!(student_id, course_id, "withdraw on unrelated pair");
        Err(WithdrawError::NotEnrolledOrWaiting {
            student_id: student_id.to_string(),
            course_id: course_id.to_string(),
        })
    }

    /// Fills one free seat from the waitlist.
    ///
    /// Acts only if the course has a free seat and a non-empty waitlist.
    /// Returns the id of the promoted student.
    pub fn promote(&mut self, course_id: &str) -> Option<String> {
        let Some(slot) = self.slots.get_mut(course_id) else {
            tracing::warn!(course_id, "promotion requested for unknown course");
            return None;
        };
        if slot.course.is_full() || slot.waitlist.is_empty() {
            tracing::debug!(
                course_id,
                seats_available = slot.course.seats_available(),
                waiting = slot.waitlist.len(),
                "nothing to promote"
            );
            return None;
        }

        let candidate = slot.waitlist.extract_top()?;
        let student = match self.students.get_mut(candidate.student_id()) {
            Some(student) => student,
            None => {
                tracing::warn!(
                    course_id,
                    student_id = candidate.student_id(),
                    "waiting student is not registered; candidate requeued"
                );
                slot.waitlist.insert(candidate);
                return None;
            }
        };
        if !slot.course.take_seat() {
            // Unreachable given the guard above; put the candidate back untouched.
            tracing::warn!(
                course_id,
                student_id = candidate.student_id(),
                "no seat to take; candidate requeued"
            );
            slot.waitlist.insert(candidate);
            return None;
        }

        let student_id = candidate.student_id().to_string();
        student.add_course(course_id);
        slot.ledger.push(student_id.clone());
        tracing::info!(student_id = %student_id, course_id, "promoted from waitlist");
        Some(student_id)
    }
}

impl Default for EnrollmentManager {
    fn default() -> Self {
        Self::new()
    }
}
