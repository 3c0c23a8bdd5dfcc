//! Course model

use serde::{Deserialize, Serialize};

/// Represents a single course in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier (e.g., "CS101")
    pub id: String,

    /// Course display name (e.g., "程序设计基础")
    pub name: String,

    /// Credit value (always > 0 for well-formed courses)
    pub credits: u32,

    /// Prerequisite course identifiers. May reference ids absent from the
    /// catalog; such prerequisites can never be satisfied.
    pub prereqs: Vec<String>,

    /// Topic tags (e.g., "AI", "算法"). Order is preserved for display;
    /// interest matching ignores it.
    pub tags: Vec<String>,
}

impl Course {
    /// Create a new course with no prerequisites or tags
    ///
    /// # Arguments
    /// * `id` - Unique course identifier
    /// * `name` - Full course name
    /// * `credits` - Credit value
    #[must_use]
    pub const fn new(id: String, name: String, credits: u32) -> Self {
        Self {
            id,
            name,
            credits,
            prereqs: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Add a prerequisite by course id
    pub fn add_prereq(&mut self, prereq_id: String) {
        if !self.prereqs.contains(&prereq_id) {
            self.prereqs.push(prereq_id);
        }
    }

    /// Add a topic tag
    pub fn add_tag(&mut self, tag: String) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Whether the course has no prerequisites
    #[must_use]
    pub fn is_introductory(&self) -> bool {
        self.prereqs.is_empty()
    }
}
