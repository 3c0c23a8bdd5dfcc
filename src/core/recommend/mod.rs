//! Schedule recommendation engine
//!
//! Pure, single-pass pipeline per request: eligibility filtering over the
//! catalog, exhaustive credit-bounded plan enumeration, then weighted
//! ranking. No global state — the engine borrows the catalog and profile
//! for the duration of a request and mutates neither.

pub mod eligibility;
pub mod enumerate;
pub mod interest;
pub mod rank;

use crate::core::models::{Catalog, Course, Plan, StudentProfile};
use std::fmt;

pub use eligibility::{available_courses, is_eligible};
pub use enumerate::generate_all_valid_schedules;
pub use interest::{course_interest_score, plan_interest_score};
pub use rank::{plan_score, top_recommendations, RankedPlan};

/// Default per-term credit cap
pub const DEFAULT_MAX_CREDITS: u32 = 22;

/// Default number of recommendations returned
pub const DEFAULT_TOP_N: usize = 3;

/// Default bound on the available-course count before enumeration is
/// refused. Enumeration is O(2^n); 20 candidates already mean about a
/// million credit-feasible subsets.
pub const DEFAULT_MAX_CANDIDATES: usize = 20;

/// Tuning knobs for a recommendation request
#[derive(Debug, Clone)]
pub struct RecommendConfig {
    /// Per-term credit cap every plan must respect
    pub max_credits: u32,
    /// Number of top-ranked plans to return
    pub top_n: usize,
    /// Available-course count above which the request is refused
    /// rather than enumerated
    pub max_candidates: usize,
}

impl RecommendConfig {
    /// Create a config with an explicit credit cap and defaults elsewhere
    #[must_use]
    pub const fn with_max_credits(max_credits: u32) -> Self {
        Self {
            max_credits,
            top_n: DEFAULT_TOP_N,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self::with_max_credits(DEFAULT_MAX_CREDITS)
    }
}

/// Recoverable failures of a recommendation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    /// Too many eligible courses to enumerate exhaustively. Narrowing the
    /// eligible set (or raising the bound) makes the request feasible.
    CapacityExceeded {
        /// Number of available courses found
        candidates: usize,
        /// Configured enumeration bound
        limit: usize,
    },
}

impl fmt::Display for RecommendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { candidates, limit } => write!(
                f,
                "{candidates} courses are available, above the enumeration bound of {limit}; \
                 narrow the eligible set or raise the bound"
            ),
        }
    }
}

impl std::error::Error for RecommendError {}

/// Recommendation engine over a borrowed catalog and student profile
pub struct Recommender<'a> {
    catalog: &'a Catalog,
    profile: &'a StudentProfile,
    config: RecommendConfig,
}

impl<'a> Recommender<'a> {
    /// Create a new recommender
    #[must_use]
    pub const fn new(
        catalog: &'a Catalog,
        profile: &'a StudentProfile,
        config: RecommendConfig,
    ) -> Self {
        Self {
            catalog,
            profile,
            config,
        }
    }

    /// Courses the student may take this term, in catalog order
    #[must_use]
    pub fn available_courses(&self) -> Vec<&'a Course> {
        available_courses(self.catalog, self.profile)
    }

    /// Generate, score, and rank candidate schedules, returning the top-N.
    ///
    /// An empty result is the defined "nothing to recommend" outcome: the
    /// student has either completed everything or satisfies no
    /// prerequisites. It is not an error.
    ///
    /// # Errors
    /// Returns [`RecommendError::CapacityExceeded`] when the available
    /// course count is above the configured enumeration bound.
    pub fn recommend(&self) -> Result<Vec<RankedPlan>, RecommendError> {
        let available = self.available_courses();

        if available.is_empty() {
            return Ok(Vec::new());
        }

        if available.len() > self.config.max_candidates {
            return Err(RecommendError::CapacityExceeded {
                candidates: available.len(),
                limit: self.config.max_candidates,
            });
        }

        let plans = generate_all_valid_schedules(&available, self.config.max_credits);
        Ok(top_recommendations(
            plans,
            self.config.top_n,
            self.catalog,
            self.profile,
            self.config.max_credits,
        ))
    }

    /// Composite score of a single plan, for display and debugging
    #[must_use]
    pub fn score_plan(&self, plan: &Plan) -> f64 {
        plan_score(plan, self.catalog, self.profile, self.config.max_credits)
    }

    /// The config this recommender runs with
    #[must_use]
    pub const fn config(&self) -> &RecommendConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, credits: u32, prereqs: &[&str], tags: &[&str]) -> Course {
        let mut course = Course::new(id.to_string(), format!("Course {id}"), credits);
        for p in prereqs {
            course.add_prereq((*p).to_string());
        }
        for t in tags {
            course.add_tag((*t).to_string());
        }
        course
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_courses(vec![
            course("CS101", 4, &[], &["AI", "编程"]),
            course("CS102", 3, &["CS101"], &["AI", "算法"]),
            course("MATH201", 3, &[], &["数学", "AI"]),
        ])
    }

    fn sample_profile() -> StudentProfile {
        let mut profile = StudentProfile::new("U1001".to_string());
        profile.add_completed("CS101".to_string());
        profile.add_interest("AI".to_string());
        profile
    }

    #[test]
    fn recommends_the_fullest_equally_interesting_plan() {
        let catalog = sample_catalog();
        let profile = sample_profile();
        let recommender = Recommender::new(&catalog, &profile, RecommendConfig::default());

        let ranked = recommender.recommend().expect("within capacity");

        // 4 plans generated; the combined plan wins on utilization with the
        // interest term tied at 1.0
        assert_eq!(ranked.len(), 3);
        assert_eq!(
            ranked[0].plan.courses,
            vec!["CS102".to_string(), "MATH201".to_string()]
        );
        assert_eq!(ranked[0].plan.total_credits(), 6);
    }

    #[test]
    fn nothing_to_recommend_is_ok_empty() {
        let catalog = Catalog::from_courses(vec![course("CS101", 4, &[], &[])]);
        let mut profile = StudentProfile::new("U1001".to_string());
        profile.add_completed("CS101".to_string());

        let recommender = Recommender::new(&catalog, &profile, RecommendConfig::default());
        let ranked = recommender.recommend().expect("no capacity issue");

        assert!(ranked.is_empty());
    }

    #[test]
    fn capacity_bound_is_enforced() {
        let courses: Vec<Course> = (0..5)
            .map(|i| course(&format!("C{i}"), 1, &[], &[]))
            .collect();
        let catalog = Catalog::from_courses(courses);
        let profile = StudentProfile::new("U1001".to_string());

        let config = RecommendConfig {
            max_candidates: 4,
            ..RecommendConfig::default()
        };
        let recommender = Recommender::new(&catalog, &profile, config);

        let err = recommender.recommend().expect_err("over the bound");
        assert_eq!(
            err,
            RecommendError::CapacityExceeded {
                candidates: 5,
                limit: 4
            }
        );
        assert!(err.to_string().contains("enumeration bound"));
    }

    #[test]
    fn score_plan_matches_ranker() {
        let catalog = sample_catalog();
        let profile = sample_profile();
        let recommender = Recommender::new(&catalog, &profile, RecommendConfig::default());

        let ranked = recommender.recommend().expect("within capacity");
        let top = &ranked[0];

        assert!((recommender.score_plan(&top.plan) - top.score).abs() < 1e-12);
    }
}
