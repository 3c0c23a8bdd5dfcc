//! Eligibility filtering
//!
//! A course is *eligible* when every prerequisite id appears in the
//! student's completed set; it is *available* when it is eligible and not
//! already completed. A prerequisite id missing from the catalog can never
//! appear in a completed set drawn from real data, so dangling references
//! behave as permanently unsatisfied without any special casing.

use crate::core::models::{Catalog, Course, StudentProfile};

/// Whether the student satisfies every prerequisite of `course`.
///
/// Courses without prerequisites are always eligible.
#[must_use]
pub fn is_eligible(course: &Course, profile: &StudentProfile) -> bool {
    course
        .prereqs
        .iter()
        .all(|prereq| profile.has_completed(prereq))
}

/// Courses the student may take this term: not yet completed, all
/// prerequisites satisfied.
///
/// Iterates the catalog in load order. The returned order fixes the
/// candidate indexing used by the plan enumerator, so for a given catalog
/// source the whole recommendation pipeline is deterministic.
#[must_use]
pub fn available_courses<'a>(catalog: &'a Catalog, profile: &StudentProfile) -> Vec<&'a Course> {
    catalog
        .iter()
        .filter(|course| !profile.has_completed(&course.id) && is_eligible(course, profile))
        .collect()
}
