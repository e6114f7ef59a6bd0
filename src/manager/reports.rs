//! Read-only reports over the enrollment state.
//!
//! # Reports
//!
//! | Report | Definition | Order |
//! |--------|-----------|-------|
//! | Recommendation | shared tags between interests and course areas | matches desc, course id |
//! | Academic load | sum of credits over enrolled courses | enrollment order |
//! | Roster | enrolled students of a course | enrollment order |
//! | Demand | enrolled + waiting per course | demand desc, course id |
//! | Waitlist | waiting students of a course | priority order |
//!
//! Ties in the ranked reports are broken by course id so results are
//! deterministic.

use serde::{Deserialize, Serialize};

use super::EnrollmentManager;
use crate::error::NotFound;
use crate::models::Student;

/// A course matching some of a student's interests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommended course.
    pub course_id: String,
    /// Number of shared tags.
    pub match_count: usize,
    /// The shared tags, sorted.
    pub shared_tags: Vec<String>,
}

/// One course of an academic load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCredits {
    /// Course id.
    pub course_id: String,
    /// Course name.
    pub name: String,
    /// Credits the course is worth.
    pub credits: u32,
}

/// Credits a student is currently enrolled for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicLoad {
    /// Student the load belongs to.
    pub student_id: String,
    /// Sum of `courses[..].credits`.
    pub total_credits: u32,
    /// Courses in the student's enrollment order.
    pub courses: Vec<CourseCredits>,
}

/// Demand figures of one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDemand {
    /// Course id.
    pub course_id: String,
    /// `enrolled + waiting`.
    pub demand: usize,
    /// Students holding a seat.
    pub enrolled: usize,
    /// Students on the waitlist.
    pub waiting: usize,
    /// Total seats of the course.
    pub capacity: u32,
}

impl EnrollmentManager {
    /// Courses sharing at least one tag with the student's interests,
    /// best match first.
    pub fn recommend(&self, student_id: &str) -> Result<Vec<Recommendation>, NotFound> {
        let student = self
            .students
            .get(student_id)
            .ok_or_else(|| NotFound::student(student_id))?;

        let mut recommendations: Vec<Recommendation> = self
            .courses()
            .filter_map(|course| {
                let shared = student.shared_interests(course.areas());
                if shared.is_empty() {
                    return None;
                }
                Some(Recommendation {
                    course_id: course.id().to_string(),
                    match_count: shared.len(),
                    shared_tags: shared.into_iter().map(String::from).collect(),
                })
            })
            .collect();

        recommendations.sort_by(|a, b| {
            b.match_count
                .cmp(&a.match_count)
                .then_with(|| a.course_id.cmp(&b.course_id))
        });
        tracing::debug!(
            student_id,
            matches = recommendations.len(),
            "recommendations computed"
        );
        Ok(recommendations)
    }

    /// Total credits and per-course detail for a student.
    pub fn academic_load(&self, student_id: &str) -> Result<AcademicLoad, NotFound> {
        let student = self
            .students
            .get(student_id)
            .ok_or_else(|| NotFound::student(student_id))?;

        let courses: Vec<CourseCredits> = student
            .enrolled_course_ids()
            .iter()
            .filter_map(|course_id| self.course(course_id))
            .map(|course| CourseCredits {
                course_id: course.id().to_string(),
                name: course.name().to_string(),
                credits: course.credits(),
            })
            .collect();
        let total_credits = courses.iter().map(|c| c.credits).sum();

        Ok(AcademicLoad {
            student_id: student_id.to_string(),
            total_credits,
            courses,
        })
    }

    /// Enrolled students of a course, in enrollment order.
    pub fn roster(&self, course_id: &str) -> Result<Vec<&Student>, NotFound> {
        let slot = self
            .slots
            .get(course_id)
            .ok_or_else(|| NotFound::course(course_id))?;
        Ok(slot
            .ledger
            .iter()
            .filter_map(|id| self.students.get(id))
            .collect())
    }

    /// Waiting students of a course, highest priority first.
    pub fn waitlist_ordered(&self, course_id: &str) -> Result<Vec<&Student>, NotFound> {
        let slot = self
            .slots
            .get(course_id)
            .ok_or_else(|| NotFound::course(course_id))?;
        Ok(slot
            .waitlist
            .ordered()
            .into_iter()
            .filter_map(|c| self.students.get(c.student_id()))
            .collect())
    }

    /// Up to `limit` courses ranked by demand.
    ///
    /// Returns an empty list when no course has any demand.
    pub fn demand_top(&self, limit: usize) -> Vec<CourseDemand> {
        let mut rows: Vec<CourseDemand> = self
            .slots
            .values()
            .map(|slot| {
                let enrolled = slot.ledger.len();
                let waiting = slot.waitlist.len();
                CourseDemand {
                    course_id: slot.course.id().to_string(),
                    demand: enrolled + waiting,
                    enrolled,
                    waiting,
                    capacity: slot.course.capacity(),
                }
            })
            .collect();

        if rows.iter().all(|row| row.demand == 0) {
            tracing::debug!("no demand registered");
            return Vec::new();
        }

        rows.sort_by(|a, b| {
            b.demand
                .cmp(&a.demand)
                .then_with(|| a.course_id.cmp(&b.course_id))
        });
        rows.truncate(limit);
        rows
    }

    /// [`demand_top`](Self::demand_top) with the configured limit.
    pub fn demand_top_default(&self) -> Vec<CourseDemand> {
        self.demand_top(self.config.demand_limit)
    }
}
