//! Array-backed binary max-heap of waiting students.
//!
//! # Layout
//! The heap is stored in a flat `Vec`. For the element at index `i`:
//! parent = `(i - 1) / 2`, left child = `2i + 1`, right child = `2i + 2`.
//!
//! # Complexity
//! | Operation | Cost |
//! |-----------|------|
//! | `insert` | O(n) duplicate scan + O(log n) sift-up |
//! | `extract_top` | O(log n) |
//! | `remove` | O(n) scan + O(log n) repair |
//! | `ordered` | O(n log n), non-mutating |
//!
//! Waitlists are expected to be small, so the linear scans are acceptable.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 6 (Heapsort)

use serde::{Deserialize, Serialize};

use super::WaitlistPriority;
use crate::models::Student;

/// A waitlist entry: a student id plus the keys it is ranked by.
///
/// The keys are copied from the student at insertion time. A registered
/// student's gpa and semester never change, so the copy stays accurate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    student_id: String,
    gpa: f64,
    semester: u32,
    ticket: u64,
}

impl Candidate {
    /// Creates a candidate from raw ranking keys.
    pub fn new(student_id: impl Into<String>, gpa: f64, semester: u32, ticket: u64) -> Self {
        Self {
            student_id: student_id.into(),
            gpa,
            semester,
            ticket,
        }
    }

    /// Creates a candidate for a registered student.
    pub fn from_student(student: &Student, ticket: u64) -> Self {
        Self::new(student.id(), student.gpa(), student.semester(), ticket)
    }

    /// Id of the waiting student.
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Grade point average used for ranking.
    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    /// Semester used for ranking.
    pub fn semester(&self) -> u32 {
        self.semester
    }

    /// Arrival sequence number.
    pub fn ticket(&self) -> u64 {
        self.ticket
    }
}

/// Priority waitlist for one course.
///
/// # Example
/// ```
/// use u_enroll::waitlist::{Candidate, Waitlist, WaitlistPriority};
///
/// let mut waitlist = Waitlist::new(WaitlistPriority::default());
/// waitlist.insert(Candidate::new("A003", 9.0, 8, 0));
/// waitlist.insert(Candidate::new("A004", 9.8, 6, 1));
///
/// let top = waitlist.extract_top().unwrap();
/// assert_eq!(top.student_id(), "A004");
/// assert_eq!(waitlist.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Waitlist {
    heap: Vec<Candidate>,
    priority: WaitlistPriority,
}

impl Waitlist {
    /// Creates an empty waitlist ranked by `priority`.
    pub fn new(priority: WaitlistPriority) -> Self {
        Self {
            heap: Vec::new(),
            priority,
        }
    }

    /// The comparator this waitlist is ordered by.
    pub fn priority(&self) -> &WaitlistPriority {
        &self.priority
    }

    /// Number of waiting students.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether nobody is waiting.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether the student is waiting.
    pub fn contains(&self, student_id: &str) -> bool {
        self.index_of(student_id).is_some()
    }

    /// The highest-priority candidate, without removing it.
    pub fn peek(&self) -> Option<&Candidate> {
        self.heap.first()
    }

    /// Candidates in heap-array order (not priority order).
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.heap.iter()
    }

    /// Adds a candidate.
    ///
    /// Returns `false` and leaves the heap untouched if the student is
    /// already waiting.
    pub fn insert(&mut self, candidate: Candidate) -> bool {
        if self.contains(candidate.student_id()) {
            tracing::warn!(
                student_id = candidate.student_id(),
                "student already on waitlist; insert ignored"
            );
            return false;
        }
        self.heap.push(candidate);
        let last = self.heap.len() - 1;
        self.sift_up(last);
        true
    }

    /// Removes and returns the highest-priority candidate.
    pub fn extract_top(&mut self) -> Option<Candidate> {
        if self.heap.is_empty() {
            return None;
        }
        let top = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        tracing::debug!(
            student_id = top.student_id(),
            remaining = self.heap.len(),
            "waitlist top extracted"
        );
        Some(top)
    }

    /// Removes a specific student, wherever it sits in the heap.
    pub fn remove(&mut self, student_id: &str) -> Option<Candidate> {
        let idx = self.index_of(student_id)?;
        let removed = self.heap.swap_remove(idx);
        if idx < self.heap.len() {
            // The element moved into `idx` may belong above or below it.
            let settled = self.sift_up(idx);
            if settled == idx {
                self.sift_down(idx);
            }
        }
        Some(removed)
    }

    /// Snapshot in priority order (highest first). Does not modify the heap.
    pub fn ordered(&self) -> Vec<&Candidate> {
        let mut sorted: Vec<&Candidate> = self.heap.iter().collect();
        sorted.sort_by(|a, b| self.priority.compare(b, a));
        sorted
    }

    /// 1-based position of the student in priority order.
    pub fn position(&self, student_id: &str) -> Option<usize> {
        self.ordered()
            .iter()
            .position(|c| c.student_id() == student_id)
            .map(|idx| idx + 1)
    }

    /// Whether no element is outranked by one of its children.
    pub fn is_heap(&self) -> bool {
        (1..self.heap.len()).all(|i| {
            !self
                .priority
                .outranks(&self.heap[i], &self.heap[parent(i)])
        })
    }

    fn index_of(&self, student_id: &str) -> Option<usize> {
        self.heap.iter().position(|c| c.student_id() == student_id)
    }

    /// Moves the element at `i` up while it outranks its parent. Returns its final index.
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let p = parent(i);
            if !self.priority.outranks(&self.heap[i], &self.heap[p]) {
                break;
            }
            self.heap.swap(i, p);
            i = p;
        }
        i
    }

    /// Moves the element at `i` down while its better child outranks it.
    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut best = left;
            if right < len && self.priority.outranks(&self.heap[right], &self.heap[left]) {
                best = right;
            }
            if !self.priority.outranks(&self.heap[best], &self.heap[i]) {
                break;
            }
            self.heap.swap(i, best);
            i = best;
        }
    }
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waitlist::TieBreaker;
    use proptest::prelude::*;

    fn cand(id: &str, gpa: f64, semester: u32, ticket: u64) -> Candidate {
        Candidate::new(id, gpa, semester, ticket)
    }

    #[test]
    fn test_extract_empty() {
        let mut w = Waitlist::default();
        assert!(w.extract_top().is_none());
        assert!(w.peek().is_none());
        assert!(w.is_empty());
    }

    #[test]
    fn test_gpa_beats_semester() {
        let mut w = Waitlist::default();
        assert!(w.insert(cand("B", 9.0, 8, 0)));
        assert!(w.insert(cand("C", 9.8, 6, 1)));
        assert_eq!(w.extract_top().unwrap().student_id(), "C");
        assert_eq!(w.extract_top().unwrap().student_id(), "B");
        assert!(w.extract_top().is_none());
    }

    #[test]
    fn test_semester_breaks_gpa_tie() {
        let mut w = Waitlist::default();
        w.insert(cand("junior", 9.0, 4, 0));
        w.insert(cand("senior", 9.0, 8, 1));
        assert_eq!(w.extract_top().unwrap().student_id(), "senior");
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut w = Waitlist::default();
        assert!(w.insert(cand("A", 7.0, 2, 0)));
        assert!(!w.insert(cand("A", 9.9, 9, 1)));
        assert_eq!(w.len(), 1);
        assert!((w.peek().unwrap().gpa() - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_remove_from_middle_keeps_heap() {
        let mut w = Waitlist::default();
        for (i, gpa) in [5.0, 9.0, 7.0, 8.0, 6.0, 9.5, 4.0].iter().enumerate() {
            w.insert(cand(&format!("S{i}"), *gpa, 1, i as u64));
        }
        assert_eq!(w.remove("S3").unwrap().student_id(), "S3");
        assert!(w.remove("S3").is_none());
        assert!(!w.contains("S3"));
        assert!(w.is_heap());

        let drained: Vec<f64> = std::iter::from_fn(|| w.extract_top())
            .map(|c| c.gpa())
            .collect();
        assert_eq!(drained, vec![9.5, 9.0, 7.0, 6.0, 5.0, 4.0]);
    }

    #[test]
    fn test_ordered_does_not_mutate() {
        let mut w = Waitlist::default();
        w.insert(cand("A", 6.0, 1, 0));
        w.insert(cand("B", 8.0, 1, 1));
        w.insert(cand("C", 7.0, 1, 2));
        let before: Vec<Candidate> = w.iter().cloned().collect();

        let ids: Vec<&str> = w.ordered().iter().map(|c| c.student_id()).collect();
        assert_eq!(ids, vec!["B", "C", "A"]);
        assert_eq!(w.iter().cloned().collect::<Vec<_>>(), before);
        assert_eq!(w.position("C"), Some(2));
        assert_eq!(w.position("missing"), None);
    }

    #[test]
    fn test_arrival_order_among_equals() {
        let mut w = Waitlist::new(WaitlistPriority::new(TieBreaker::ArrivalOrder));
        for (i, id) in ["first", "second", "third", "fourth"].iter().enumerate() {
            w.insert(cand(id, 8.0, 5, i as u64));
        }
        let ids: Vec<String> = std::iter::from_fn(|| w.extract_top())
            .map(|c| c.student_id().to_string())
            .collect();
        assert_eq!(ids, vec!["first", "second", "third", "fourth"]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8, u8, u32),
        Extract,
        Remove(u8),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0u8..20, 0u8..=100, 1u32..=10).prop_map(|(id, g, s)| Op::Insert(id, g, s)),
            2 => Just(Op::Extract),
            1 => (0u8..20).prop_map(Op::Remove),
        ]
    }

    fn arb_tie_breaker() -> impl Strategy<Value = TieBreaker> {
        prop_oneof![
            Just(TieBreaker::ArrivalOrder),
            Just(TieBreaker::ById),
            Just(TieBreaker::HeapOrder),
        ]
    }

    proptest! {
        #[test]
        fn prop_heap_matches_brute_force(
            tie in arb_tie_breaker(),
            ops in prop::collection::vec(arb_op(), 1..120),
        ) {
            let priority = WaitlistPriority::new(tie);
            let mut w = Waitlist::new(priority);
            let mut mirror: Vec<Candidate> = Vec::new();

            for (ticket, op) in ops.into_iter().enumerate() {
                match op {
                    Op::Insert(id, g, s) => {
                        let c = cand(&format!("S{id}"), f64::from(g) / 10.0, s, ticket as u64);
                        let fresh = !mirror.iter().any(|m| m.student_id() == c.student_id());
                        prop_assert_eq!(w.insert(c.clone()), fresh);
                        if fresh {
                            mirror.push(c);
                        }
                    }
                    Op::Extract => {
                        let got = w.extract_top();
                        match got {
                            None => prop_assert!(mirror.is_empty()),
                            Some(top) => {
                                // Nothing left in the mirror may outrank the extracted element.
                                prop_assert!(!mirror.iter().any(|m| priority.outranks(m, &top)));
                                let idx = mirror.iter().position(|m| m.student_id() == top.student_id());
                                prop_assert!(idx.is_some());
                                mirror.remove(idx.unwrap());
                            }
                        }
                    }
                    Op::Remove(id) => {
                        let key = format!("S{id}");
                        let expected = mirror.iter().position(|m| m.student_id() == key);
                        prop_assert_eq!(w.remove(&key).is_some(), expected.is_some());
                        if let Some(idx) = expected {
                            mirror.remove(idx);
                        }
                    }
                }
                prop_assert!(w.is_heap());
                prop_assert_eq!(w.len(), mirror.len());
            }
        }
    }
}
