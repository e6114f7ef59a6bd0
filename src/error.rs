//! Error types for manager operations.
//!
//! Every error leaves the manager unchanged: all checks run before any
//! state is mutated.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::validation::ValidationError;

/// Which kind of record an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// A `Student` record.
    Student,
    /// A `Course` record.
    Course,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Student => f.write_str("student"),
            EntityKind::Course => f.write_str("course"),
        }
    }
}

/// An id that is not registered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} '{id}' not found")]
pub struct NotFound {
    /// Kind of record looked up.
    pub kind: EntityKind,
    /// The missing id.
    pub id: String,
}

impl NotFound {
    /// Unknown student id.
    pub fn student(id: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::Student,
            id: id.into(),
        }
    }

    /// Unknown course id.
    pub fn course(id: impl Into<String>) -> Self {
        Self {
            kind: EntityKind::Course,
            id: id.into(),
        }
    }
}

/// Registration failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistrationError {
    #[error("{kind} id '{id}' is already registered")]
    DuplicateId { kind: EntityKind, id: String },

    #[error("invalid record: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),
}

/// Enrollment failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrollError {
    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error("student '{student_id}' is already enrolled in '{course_id}'")]
    AlreadyEnrolled {
        student_id: String,
        course_id: String,
    },

    #[error("student '{student_id}' is already waiting for '{course_id}'")]
    AlreadyWaiting {
        student_id: String,
        course_id: String,
    },
}

/// Withdrawal failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WithdrawError {
    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error("student '{student_id}' is neither enrolled in nor waiting for '{course_id}'")]
    NotEnrolledOrWaiting {
        student_id: String,
        course_id: String,
    },
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_messages() {
        assert_eq!(
            NotFound::course("C999").to_string(),
            "course 'C999' not found"
        );
        assert_eq!(
            EnrollError::from(NotFound::student("A9")).to_string(),
            "student 'A9' not found"
        );
        let err = WithdrawError::NotEnrolledOrWaiting {
            student_id: "A1".into(),
            course_id: "C1".into(),
        };
        assert!(err.to_string().contains("neither enrolled"));
    }

    #[test]
    fn test_invalid_summary_joins_messages() {
        let err = RegistrationError::Invalid(vec![
            ValidationError {
                kind: ValidationErrorKind::InvalidAttribute,
                message: "bad gpa".into(),
            },
            ValidationError {
                kind: ValidationErrorKind::InvalidAttribute,
                message: "bad semester".into(),
            },
        ]);
        assert_eq!(err.to_string(), "invalid record: bad gpa; bad semester");
    }
}
