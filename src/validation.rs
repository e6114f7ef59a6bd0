//! Input validation and state auditing for enrollment.
//!
//! Checks records before they are registered and, after the fact,
//! checks the whole state of a manager. Detects:
//! - Duplicate IDs
//! - Out-of-range attributes (semester, gpa, capacity)
//! - Records that arrive carrying enrollment state
//! - Seat counters that disagree with ledgers
//! - Ledgers that disagree with students' enrollment lists
//! - Students both enrolled in and waiting for one course
//! - Waitlists whose heap order is broken

use std::collections::HashSet;

use crate::config::EnrollmentConfig;
use crate::manager::EnrollmentManager;
use crate::models::{Course, Student};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records share the same ID.
    DuplicateId,
    /// An attribute is outside its allowed range.
    InvalidAttribute,
    /// A record carries enrollment state before registration.
    PreloadedState,
    /// `ledger + seats_available` differs from capacity, or seats exceed capacity.
    SeatCountMismatch,
    /// A ledger and a student's enrollment list disagree.
    LedgerMismatch,
    /// A student is in both the ledger and the waitlist of one course.
    EnrolledAndWaiting,
    /// A waitlist element is outranked by one of its children.
    HeapOrderViolation,
    /// An id refers to a record that is not registered.
    UnknownReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a single student record.
///
/// Checks:
/// 1. Non-empty id
/// 2. Semester of at least 1
/// 3. Finite gpa within `0..=config.max_gpa`
/// 4. Empty enrollment list
pub fn validate_student(student: &Student, config: &EnrollmentConfig) -> ValidationResult {
    let mut errors = Vec::new();
    check_student(student, config, &mut errors);
    into_result(errors)
}

/// Validates a single course record.
///
/// Checks:
/// 1. Non-empty id
/// 2. Capacity greater than zero
/// 3. All seats available
pub fn validate_course(course: &Course) -> ValidationResult {
    let mut errors = Vec::new();
    check_course(course, &mut errors);
    into_result(errors)
}

/// Validates a full catalog before loading it.
///
/// Runs the per-record checks on every student and course and
/// additionally rejects duplicate ids.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(
    students: &[Student],
    courses: &[Course],
    config: &EnrollmentConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    for course in courses {
        if !course_ids.insert(course.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id()),
            ));
        }
        check_course(course, &mut errors);
    }

    let mut student_ids = HashSet::new();
    for student in students {
        if !student_ids.insert(student.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {}", student.id()),
            ));
        }
        check_student(student, config, &mut errors);
    }

    into_result(errors)
}

fn check_student(
    student: &Student,
    config: &EnrollmentConfig,
    errors: &mut Vec<ValidationError>,
) {
    if student.id().trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidAttribute,
            "Student ID must not be empty",
        ));
    }
    if student.semester() < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidAttribute,
            format!("Student '{}' has semester 0", student.id()),
        ));
    }
    let gpa = student.gpa();
    if !gpa.is_finite() || gpa < 0.0 || gpa > config.max_gpa {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidAttribute,
            format!(
                "Student '{}' has gpa {gpa}, expected 0..={}",
                student.id(),
                config.max_gpa
            ),
        ));
    }
    if !student.enrolled_course_ids().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::PreloadedState,
            format!(
                "Student '{}' arrives already enrolled in {} course(s)",
                student.id(),
                student.enrolled_course_ids().len()
            ),
        ));
    }
}

fn check_course(course: &Course, errors: &mut Vec<ValidationError>) {
    if course.id().trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidAttribute,
            "Course ID must not be empty",
        ));
    }
    if course.capacity() == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidAttribute,
            format!("Course '{}' has zero capacity", course.id()),
        ));
    }
    if course.seats_available() != course.capacity() {
        errors.push(ValidationError::new(
            ValidationErrorKind::PreloadedState,
            format!(
                "Course '{}' arrives with {} of {} seats available",
                course.id(),
                course.seats_available(),
                course.capacity()
            ),
        ));
    }
}

/// Audits every cross-record invariant of a manager.
///
/// Checks, per course:
/// 1. `seats_available <= capacity`
/// 2. `ledger.len() + seats_available == capacity`
/// 3. No duplicate ledger entries
/// 4. Every ledger entry is a registered student listing the course
/// 5. No waiting student is also in the ledger
/// 6. The waitlist satisfies the heap property
///
/// and, per student, that every listed course has the student in its ledger.
pub fn audit(manager: &EnrollmentManager) -> ValidationResult {
    let mut errors = Vec::new();

    for course in manager.courses() {
        let id = course.id();
        let ledger = manager.ledger(id).unwrap_or_default();

        if course.seats_available() > course.capacity() {
            errors.push(ValidationError::new(
                ValidationErrorKind::SeatCountMismatch,
                format!(
                    "Course '{id}' has {} seats available but capacity {}",
                    course.seats_available(),
                    course.capacity()
                ),
            ));
        }
        if ledger.len() + course.seats_available() as usize != course.capacity() as usize {
            errors.push(ValidationError::new(
                ValidationErrorKind::SeatCountMismatch,
                format!(
                    "Course '{id}': {} enrolled + {} available != capacity {}",
                    ledger.len(),
                    course.seats_available(),
                    course.capacity()
                ),
            ));
        }

        let mut seen = HashSet::new();
        for student_id in ledger {
            if !seen.insert(student_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::LedgerMismatch,
                    format!("Course '{id}' lists student '{student_id}' twice"),
                ));
            }
            match manager.student(student_id) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownReference,
                    format!("Course '{id}' lists unknown student '{student_id}'"),
                )),
                Some(student) if !student.is_enrolled_in(id) => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::LedgerMismatch,
                        format!("Course '{id}' lists '{student_id}', who does not list the course"),
                    ))
                }
                Some(_) => {}
            }
        }

        if let Some(waitlist) = manager.waitlist(id) {
            if !waitlist.is_heap() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::HeapOrderViolation,
                    format!("Waitlist of course '{id}' violates heap order"),
                ));
            }
            for candidate in waitlist.iter() {
                let student_id = candidate.student_id();
                if manager.student(student_id).is_none() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownReference,
                        format!("Waitlist of '{id}' holds unknown student '{student_id}'"),
                    ));
                }
                if seen.contains(student_id) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::EnrolledAndWaiting,
                        format!("Student '{student_id}' is enrolled in and waiting for '{id}'"),
                    ));
                }
            }
        }
    }

    for student in manager.students() {
        for course_id in student.enrolled_course_ids() {
            let listed = manager
                .ledger(course_id)
                .is_some_and(|ledger| ledger.iter().any(|s| s == student.id()));
            if !listed {
                errors.push(ValidationError::new(
                    ValidationErrorKind::LedgerMismatch,
                    format!(
                        "Student '{}' lists course '{course_id}' without a ledger entry",
                        student.id()
                    ),
                ));
            }
        }
    }

    into_result(errors)
}
