//! Course model.
//!
//! A course owns a fixed number of seats. Seats are taken and released
//! one at a time; the available count never leaves `0..=capacity`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A course offered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: String,
    name: String,
    instructor: String,
    capacity: u32,
    seats_available: u32,
    credits: u32,
    areas: BTreeSet<String>,
}

impl Course {
    /// Creates an empty course with the given capacity.
    ///
    /// All seats start available.
    pub fn new(id: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            instructor: String::new(),
            capacity,
            seats_available: capacity,
            credits: 0,
            areas: BTreeSet::new(),
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Sets the credit weight.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Adds an area tag.
    pub fn with_area(mut self, tag: impl Into<String>) -> Self {
        self.areas.insert(tag.into());
        self
    }

    /// Adds several area tags.
    pub fn with_areas<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.areas.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Unique course identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Course title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instructor in charge.
    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    /// Total number of seats.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Seats currently free.
    pub fn seats_available(&self) -> u32 {
        self.seats_available
    }

    /// Seats currently taken.
    pub fn seats_taken(&self) -> u32 {
        self.capacity.saturating_sub(self.seats_available)
    }

    /// Whether no seat is free.
    pub fn is_full(&self) -> bool {
        self.seats_available == 0
    }

    /// Credit weight.
    pub fn credits(&self) -> u32 {
        self.credits
    }

    /// Area tags.
    pub fn areas(&self) -> &BTreeSet<String> {
        &self.areas
    }

    /// Occupies one seat. Returns `false` if the course is full.
    pub(crate) fn take_seat(&mut self) -> bool {
        if self.seats_available > 0 {
            self.seats_available -= 1;
            true
        } else {
            false
        }
    }

    /// Frees one seat, never beyond capacity. Returns `false` if nothing was taken.
    pub(crate) fn release_seat(&mut self) -> bool {
        if self.seats_available < self.capacity {
            self.seats_available += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let c = Course::new("C101", 30)
            .with_name("Introduccion a IA")
            .with_instructor("Dr. Lopez")
            .with_credits(5)
            .with_areas(["IA", "algoritmos"]);

        assert_eq!(c.id(), "C101");
        assert_eq!(c.name(), "Introduccion a IA");
        assert_eq!(c.instructor(), "Dr. Lopez");
        assert_eq!(c.capacity(), 30);
        assert_eq!(c.seats_available(), 30);
        assert_eq!(c.seats_taken(), 0);
        assert_eq!(c.credits(), 5);
        assert_eq!(c.areas().len(), 2);
    }

    #[test]
    fn test_seat_counter_bounds() {
        let mut c = Course::new("C1", 1);
        assert!(!c.release_seat());
        assert_eq!(c.seats_available(), 1);

        assert!(c.take_seat());
        assert!(c.is_full());
        assert!(!c.take_seat());
        assert_eq!(c.seats_available(), 0);

        assert!(c.release_seat());
        assert!(!c.release_seat());
        assert_eq!(c.seats_available(), 1);
    }

    #[test]
    fn test_seats_taken_with_inconsistent_counters() {
        let json = r#"{"id":"C9","name":"","instructor":"","capacity":2,
            "seats_available":5,"credits":3,"areas":[]}"#;
        let c: Course = serde_json::from_str(json).unwrap();
        assert_eq!(c.seats_taken(), 0);
        assert!(!c.is_full());
    }
}
