//! Student model.
//!
//! A student carries the academic attributes used to rank waitlists
//! (gpa, semester), a set of interest tags used for recommendations,
//! and the ordered list of courses the student currently holds a seat in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A student that can enroll in courses.
///
/// Fields are read through accessors. The enrollment list is only changed
/// by the [`EnrollmentManager`](crate::manager::EnrollmentManager), which keeps
/// it mirrored with the per-course ledgers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    id: String,
    name: String,
    semester: u32,
    gpa: f64,
    interests: BTreeSet<String>,
    enrolled_course_ids: Vec<String>,
}

impl Student {
    /// Creates a first-semester student with gpa 0.0 and no interests.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            semester: 1,
            gpa: 0.0,
            interests: BTreeSet::new(),
            enrolled_course_ids: Vec::new(),
        }
    }

    /// Sets the student name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the current semester (1-based).
    pub fn with_semester(mut self, semester: u32) -> Self {
        self.semester = semester;
        self
    }

    /// Sets the grade point average.
    pub fn with_gpa(mut self, gpa: f64) -> Self {
        self.gpa = gpa;
        self
    }

    /// Adds an interest tag.
    pub fn with_interest(mut self, tag: impl Into<String>) -> Self {
        self.interests.insert(tag.into());
        self
    }

    /// Adds several interest tags.
    pub fn with_interests<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Unique student identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current semester.
    pub fn semester(&self) -> u32 {
        self.semester
    }

    /// Grade point average.
    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    /// Interest tags.
    pub fn interests(&self) -> &BTreeSet<String> {
        &self.interests
    }

    /// Ids of the courses this student holds a seat in, in enrollment order.
    pub fn enrolled_course_ids(&self) -> &[String] {
        &self.enrolled_course_ids
    }

    /// Whether the student holds a seat in the given course.
    pub fn is_enrolled_in(&self, course_id: &str) -> bool {
        self.enrolled_course_ids.iter().any(|c| c == course_id)
    }

    /// Interest tags shared with the given area set, in sorted order.
    pub fn shared_interests<'a>(&'a self, areas: &'a BTreeSet<String>) -> Vec<&'a str> {
        self.interests
            .intersection(areas)
            .map(String::as_str)
            .collect()
    }

    /// Appends a course to the enrollment list. Returns `false` if already present.
    pub(crate) fn add_course(&mut self, course_id: &str) -> bool {
        if self.is_enrolled_in(course_id) {
            return false;
        }
        self.enrolled_course_ids.push(course_id.to_string());
        true
    }

    /// Removes a course from the enrollment list. Returns `false` if absent.
    pub(crate) fn remove_course(&mut self, course_id: &str) -> bool {
        match self.enrolled_course_ids.iter().position(|c| c == course_id) {
            Some(idx) => {
                self.enrolled_course_ids.remove(idx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_builder() {
        let s = Student::new("A001")
            .with_name("Ana Gomez")
            .with_semester(8)
            .with_gpa(9.5)
            .with_interests(["IA", "redes"]);

        assert_eq!(s.id(), "A001");
        assert_eq!(s.name(), "Ana Gomez");
        assert_eq!(s.semester(), 8);
        assert!((s.gpa() - 9.5).abs() < 1e-10);
        assert!(s.interests().contains("IA"));
        assert!(s.interests().contains("redes"));
        assert!(s.enrolled_course_ids().is_empty());
    }

    #[test]
    fn test_course_list_keeps_order_without_duplicates() {
        let mut s = Student::new("A001");
        assert!(s.add_course("C102"));
        assert!(s.add_course("C101"));
        assert!(!s.add_course("C102"));
        assert_eq!(s.enrolled_course_ids(), ["C102", "C101"]);

        assert!(s.remove_course("C102"));
        assert!(!s.remove_course("C102"));
        assert_eq!(s.enrolled_course_ids(), ["C101"]);
    }

    #[test]
    fn test_shared_interests() {
        let s = Student::new("A001").with_interests(["IA", "redes"]);
        let areas: BTreeSet<String> = ["IA", "algoritmos"].map(String::from).into();
        assert_eq!(s.shared_interests(&areas), vec!["IA"]);
    }
}
