//! Interest relevance scoring

use crate::core::models::{Catalog, Course, Plan, StudentProfile};

/// Normalized interest relevance of a single course, in `[0, 1]`.
///
/// Counts the course tags that exactly match at least one declared
/// interest (case-sensitive, each tag counted at most once), divided by
/// the raw interest-tag count. The divisor deliberately keeps duplicate
/// interests — a profile listing "AI" twice halves every score relative to
/// listing it once — to stay output-compatible with earlier advisor data.
/// A profile without interests scores every course 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn course_interest_score(course: &Course, profile: &StudentProfile) -> f64 {
    if profile.interests.is_empty() {
        return 0.0;
    }

    let matches = course
        .tags
        .iter()
        .filter(|tag| profile.interests.iter().any(|interest| interest == *tag))
        .count();

    matches as f64 / profile.interests.len() as f64
}

/// Arithmetic mean of [`course_interest_score`] over a plan's courses.
///
/// The empty plan scores 0. Plan entries missing from the catalog are
/// skipped; the mean still divides by the plan's course count so a stale
/// id cannot inflate the score.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn plan_interest_score(plan: &Plan, catalog: &Catalog, profile: &StudentProfile) -> f64 {
    if plan.is_empty() {
        return 0.0;
    }

    let total: f64 = plan
        .courses
        .iter()
        .filter_map(|id| catalog.lookup(id))
        .map(|course| course_interest_score(course, profile))
        .sum();

    total / plan.course_count() as f64
}
