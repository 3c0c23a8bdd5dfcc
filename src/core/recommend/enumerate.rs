//! Exhaustive plan enumeration
//!
//! Generates every subset of the available-course sequence whose credit
//! total stays within the cap — the power set restricted to the credit
//! constraint, empty plan included. Output size is O(2^n) in the number of
//! candidates, so callers bound n before enumerating (see
//! [`RecommendConfig::max_candidates`](super::RecommendConfig)); this
//! module makes no attempt to be clever about it.

use crate::core::models::{Course, Plan};

/// Enumerate every credit-feasible subset of `candidates`.
///
/// Depth-first binary-choice recursion over the candidate sequence: at
/// each position the skip branch is explored first, then the take branch
/// when the running credit total allows it. Skip-before-take fixes the
/// output order for a given candidate sequence, which the ranker relies on
/// for deterministic tie-breaking.
///
/// Each plan preserves the ascending candidate order of its courses. The
/// empty plan is always present.
#[must_use]
pub fn generate_all_valid_schedules(candidates: &[&Course], max_credits: u32) -> Vec<Plan> {
    let mut plans = Vec::new();
    extend_plan(candidates, 0, 0, Plan::new(), max_credits, &mut plans);
    plans
}

/// Recursive step: decide the fate of `candidates[index]` for the branch
/// owning `current`.
///
/// Each branch owns its plan snapshot outright — the skip branch receives
/// a clone, the take branch consumes the original — so no selection state
/// is shared or unwound across branches.
fn extend_plan(
    candidates: &[&Course],
    index: usize,
    credits: u32,
    current: Plan,
    max_credits: u32,
    plans: &mut Vec<Plan>,
) {
    if index == candidates.len() {
        plans.push(current);
        return;
    }

    let course = candidates[index];

    // Skip the current course
    extend_plan(
        candidates,
        index + 1,
        credits,
        current.clone(),
        max_credits,
        plans,
    );

    // Take it, if the cap allows; branches over the cap can never recover
    if credits + course.credits <= max_credits {
        let mut taken = current;
        taken.add_course(course);
        extend_plan(
            candidates,
            index + 1,
            credits + course.credits,
            taken,
            max_credits,
            plans,
        );
    }
}
