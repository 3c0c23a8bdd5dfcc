//! Catalog index

use super::Course;
use std::collections::HashMap;

/// The full set of known courses, indexed for O(1) id lookup while
/// preserving load order.
///
/// Load order matters: the eligibility filter iterates the catalog in this
/// order, which in turn fixes the enumeration order of candidate plans, so
/// recommendations are reproducible from a given catalog source.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Courses in load order, one entry per id
    courses: Vec<Course>,

    /// Maps course id -> position in `courses`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a catalog from an ordered course sequence.
    ///
    /// Duplicate ids follow map-insert semantics: the later record wins,
    /// replacing the earlier one in place so the catalog keeps one entry
    /// per id at a stable position.
    #[must_use]
    pub fn from_courses(records: Vec<Course>) -> Self {
        let mut catalog = Self::new();
        for course in records {
            catalog.insert(course);
        }
        catalog
    }

    /// Insert a course, overwriting any existing course with the same id
    /// (last-write-wins, position of the first occurrence kept)
    pub fn insert(&mut self, course: Course) {
        if let Some(&pos) = self.index.get(&course.id) {
            self.courses[pos] = course;
        } else {
            self.index.insert(course.id.clone(), self.courses.len());
            self.courses.push(course);
        }
    }

    /// Look up a course by id
    #[must_use]
    pub fn lookup(&self, course_id: &str) -> Option<&Course> {
        self.index.get(course_id).map(|&pos| &self.courses[pos])
    }

    /// Whether a course id exists in the catalog
    #[must_use]
    pub fn contains(&self, course_id: &str) -> bool {
        self.index.contains_key(course_id)
    }

    /// Iterate courses in load order
    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.courses.iter()
    }

    /// Number of courses in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog holds no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Check that every prerequisite id references a catalog course.
    ///
    /// Dangling prerequisites are not an error for the engine — a course
    /// with one is simply never eligible — but they usually indicate a
    /// catalog data bug, so loaders report them.
    ///
    /// # Errors
    /// Returns `Err` with one message per dangling prerequisite reference
    pub fn validate_references(&self) -> Result<(), Vec<String>> {
        let mut missing = Vec::new();

        for course in &self.courses {
            for prereq in &course.prereqs {
                if !self.contains(prereq) {
                    missing.push(format!(
                        "Course '{}': prerequisite '{prereq}' not found in catalog",
                        course.id
                    ));
                }
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
