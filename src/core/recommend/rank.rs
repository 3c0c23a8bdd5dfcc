//! Plan scoring and top-N selection

use super::interest::plan_interest_score;
use crate::core::models::{Catalog, Plan, StudentProfile};

/// Weight of the interest-relevance term in the composite score
pub const INTEREST_WEIGHT: f64 = 0.7;

/// Weight of the credit-utilization term in the composite score
pub const UTILIZATION_WEIGHT: f64 = 0.3;

/// A plan together with the scores it was ranked by
#[derive(Debug, Clone)]
pub struct RankedPlan {
    /// The candidate schedule
    pub plan: Plan,
    /// Composite score used for ranking
    pub score: f64,
    /// Mean interest relevance across the plan's courses
    pub interest: f64,
    /// Fraction of the credit cap the plan uses
    pub utilization: f64,
}

/// Fraction of the per-term credit cap used by the plan, in `[0, 1]`
#[must_use]
pub fn credit_utilization(plan: &Plan, max_credits: u32) -> f64 {
    if max_credits == 0 {
        return 0.0;
    }
    f64::from(plan.total_credits()) / f64::from(max_credits)
}

/// Composite plan score: interest mean weighted at 0.7 plus credit
/// utilization weighted at 0.3.
///
/// Monotonically non-decreasing in either term while the other is held
/// fixed. The empty plan scores 0 — both terms vanish.
#[must_use]
pub fn plan_score(
    plan: &Plan,
    catalog: &Catalog,
    profile: &StudentProfile,
    max_credits: u32,
) -> f64 {
    plan_interest_score(plan, catalog, profile)
        .mul_add(INTEREST_WEIGHT, credit_utilization(plan, max_credits) * UTILIZATION_WEIGHT)
}

/// Rank candidate plans and keep the best `top_n`.
///
/// Scores every plan, stable-sorts descending by composite score — ties
/// keep enumeration order, so output is deterministic — and truncates.
/// Returns fewer than `top_n` entries when fewer plans were generated.
#[must_use]
pub fn top_recommendations(
    plans: Vec<Plan>,
    top_n: usize,
    catalog: &Catalog,
    profile: &StudentProfile,
    max_credits: u32,
) -> Vec<RankedPlan> {
    let mut ranked: Vec<RankedPlan> = plans
        .into_iter()
        .map(|plan| {
            let interest = plan_interest_score(&plan, catalog, profile);
            let utilization = credit_utilization(&plan, max_credits);
            RankedPlan {
                score: interest.mul_add(INTEREST_WEIGHT, utilization * UTILIZATION_WEIGHT),
                plan,
                interest,
                utilization,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(top_n);
    ranked
}
