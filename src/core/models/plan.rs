//! Plan model

use super::Course;
use serde::{Deserialize, Serialize};

/// A candidate one-term schedule: an ordered selection of catalog courses.
///
/// Courses are stored as ids in the order the enumerator chose them
/// (ascending candidate index), with the credit total cached alongside.
/// Plans are ephemeral — the enumerator creates them in bulk and only the
/// ranked top-N survive a recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Course ids in selection order (no two entries share an id)
    pub courses: Vec<String>,

    /// Sum of credits across the selected courses
    total_credits: u32,
}

impl Plan {
    /// Create an empty plan
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: Vec::new(),
            total_credits: 0,
        }
    }

    /// Append a course to the plan, accumulating its credits
    pub fn add_course(&mut self, course: &Course) {
        self.courses.push(course.id.clone());
        self.total_credits += course.credits;
    }

    /// Total credits carried by the plan
    #[must_use]
    pub const fn total_credits(&self) -> u32 {
        self.total_credits
    }

    /// Number of courses in the plan
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Whether the plan selects no courses
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Whether the plan contains the given course
    #[must_use]
    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.iter().any(|id| id == course_id)
    }
}
