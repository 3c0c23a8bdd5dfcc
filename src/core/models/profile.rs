//! Student profile model

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Represents a student's academic state: completed courses, declared
/// interests, and the current term counter.
///
/// Mutated only while loading; the recommendation engine reads it
/// immutably.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Student identifier (e.g., "U1001")
    pub id: String,

    /// Identifiers of completed courses. May contain ids absent from the
    /// catalog.
    #[serde(default)]
    pub completed: HashSet<String>,

    /// Declared interest tags, in declaration order. Duplicates are
    /// preserved; the interest scorer divides by this list's raw length.
    #[serde(default)]
    pub interests: Vec<String>,

    /// Current term counter (informational only)
    #[serde(default)]
    pub current_term: u32,
}

impl StudentProfile {
    /// Create a new profile with no history or interests
    #[must_use]
    pub fn new(id: String) -> Self {
        Self {
            id,
            completed: HashSet::new(),
            interests: Vec::new(),
            current_term: 0,
        }
    }

    /// Record a completed course. Returns `false` if it was already recorded.
    pub fn add_completed(&mut self, course_id: String) -> bool {
        self.completed.insert(course_id)
    }

    /// Whether the student has completed the given course
    #[must_use]
    pub fn has_completed(&self, course_id: &str) -> bool {
        self.completed.contains(course_id)
    }

    /// Append an interest tag (duplicates allowed)
    pub fn add_interest(&mut self, tag: String) {
        self.interests.push(tag);
    }

    /// Number of completed courses
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}
