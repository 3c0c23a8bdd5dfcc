//! Integration tests for the recommendation pipeline

use course_advisor::core::loader::{load_profile_toml, parse_catalog_csv};
use course_advisor::core::models::{Catalog, Course, Plan, StudentProfile};
use course_advisor::core::recommend::{
    available_courses, generate_all_valid_schedules, RecommendConfig, RecommendError, Recommender,
};

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

#[test]
fn test_sample_data_pipeline() {
    let catalog = parse_catalog_csv("samples/catalog.csv").expect("parse sample catalog");
    let profile = load_profile_toml("samples/profile.toml").expect("parse sample profile");

    assert_eq!(catalog.len(), 7);
    assert_eq!(profile.id, "U1001");
    assert!(catalog.validate_references().is_ok());

    // Completed: CS101, MATH201. Eligible and not taken: CS102, CS103,
    // MATH202 (CS201 and CS202 each miss a prerequisite).
    let available = available_courses(&catalog, &profile);
    let ids: Vec<&str> = available.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["CS102", "CS103", "MATH202"]);

    let recommender = Recommender::new(&catalog, &profile, RecommendConfig::default());
    let ranked = recommender.recommend().expect("within capacity");

    // 8 candidate plans, top 3 kept
    assert_eq!(ranked.len(), 3);

    // Only CS102 matches an interest (AI), so it anchors the top plan;
    // interests count 2, so its course score is 0.5
    assert_eq!(ranked[0].plan.courses, vec!["CS102".to_string()]);
    assert!((ranked[0].interest - 0.5).abs() < 1e-9);

    // Equal-scoring runners-up keep enumeration order:
    // {CS102, MATH202} enumerates before {CS102, CS103}
    assert_eq!(
        ranked[1].plan.courses,
        vec!["CS102".to_string(), "MATH202".to_string()]
    );
    assert_eq!(
        ranked[2].plan.courses,
        vec!["CS102".to_string(), "CS103".to_string()]
    );
    assert!((ranked[1].score - ranked[2].score).abs() < 1e-12);

    // Output is sorted descending
    assert!(ranked[0].score >= ranked[1].score);
    assert!(ranked[1].score >= ranked[2].score);
}

#[test]
fn test_combined_plan_wins_on_utilization_when_interest_ties() {
    // catalog = [CS101(4cr), CS102(3cr, prereq CS101), MATH201(3cr)],
    // completed = {CS101}, interests = [AI]
    let catalog = Catalog::from_courses(vec![
        course("CS101", 4, &[], &["AI", "编程"]),
        course("CS102", 3, &["CS101"], &["AI", "算法"]),
        course("MATH201", 3, &[], &["数学", "AI"]),
    ]);
    let mut profile = StudentProfile::new("U1001".to_string());
    profile.add_completed("CS101".to_string());
    profile.add_interest("AI".to_string());

    let available = available_courses(&catalog, &profile);
    let ids: Vec<&str> = available.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["CS102", "MATH201"]);

    let plans = generate_all_valid_schedules(&available, 22);
    assert_eq!(plans.len(), 4);
    assert!(plans.iter().any(Plan::is_empty));
    assert!(plans.iter().all(|p| p.total_credits() <= 22));

    // Every non-empty plan has interest score 1.0; the combined plan wins
    // on credit utilization (6/22 vs 3/22)
    let recommender = Recommender::new(&catalog, &profile, RecommendConfig::default());
    let ranked = recommender.recommend().expect("within capacity");

    assert_eq!(ranked.len(), 3);
    assert_eq!(
        ranked[0].plan.courses,
        vec!["CS102".to_string(), "MATH201".to_string()]
    );
    assert!((ranked[0].interest - 1.0).abs() < 1e-9);
    assert!((ranked[1].interest - 1.0).abs() < 1e-9);
}

#[test]
fn test_no_interests_scores_utilization_only() {
    let catalog = Catalog::from_courses(vec![
        course("A", 11, &[], &["AI"]),
        course("B", 11, &[], &[]),
    ]);
    let profile = StudentProfile::new("U1001".to_string());

    let recommender = Recommender::new(&catalog, &profile, RecommendConfig::default());
    let ranked = recommender.recommend().expect("within capacity");

    for entry in &ranked {
        let expected = f64::from(entry.plan.total_credits()) / 22.0 * 0.3;
        assert!((entry.score - expected).abs() < 1e-9);
    }

    // Full 22-credit plan tops the ranking
    assert_eq!(ranked[0].plan.total_credits(), 22);
}

#[test]
fn test_zero_available_returns_empty() {
    let catalog = Catalog::from_courses(vec![course("CS201", 3, &["CS101"], &[])]);
    let profile = StudentProfile::new("U1001".to_string());

    let recommender = Recommender::new(&catalog, &profile, RecommendConfig::default());
    let ranked = recommender.recommend().expect("no capacity issue");

    assert!(ranked.is_empty());
}

#[test]
fn test_every_generated_plan_respects_the_cap() {
    let courses: Vec<Course> = (1..=8)
        .map(|i| course(&format!("C{i}"), i, &[], &[]))
        .collect();
    let catalog = Catalog::from_courses(courses);
    let profile = StudentProfile::new("U1001".to_string());

    let available = available_courses(&catalog, &profile);
    let plans = generate_all_valid_schedules(&available, 22);

    for plan in &plans {
        assert!(plan.total_credits() <= 22);
    }
    // The empty plan is always present when input is non-empty
    assert!(plans.iter().any(|p| p.is_empty()));
}

#[test]
fn test_top_n_is_a_parameter() {
    let catalog = Catalog::from_courses(vec![
        course("A", 3, &[], &[]),
        course("B", 3, &[], &[]),
    ]);
    let profile = StudentProfile::new("U1001".to_string());

    let config = RecommendConfig {
        top_n: 2,
        ..RecommendConfig::default()
    };
    let recommender = Recommender::new(&catalog, &profile, config);
    let ranked = recommender.recommend().expect("within capacity");

    // 4 plans generated, 2 kept
    assert_eq!(ranked.len(), 2);
}

#[test]
fn test_capacity_exceeded_is_recoverable() {
    let courses: Vec<Course> = (0..8)
        .map(|i| course(&format!("C{i}"), 1, &[], &[]))
        .collect();
    let catalog = Catalog::from_courses(courses);
    let profile = StudentProfile::new("U1001".to_string());

    let tight = RecommendConfig {
        max_candidates: 5,
        ..RecommendConfig::default()
    };
    let recommender = Recommender::new(&catalog, &profile, tight);
    match recommender.recommend() {
        Err(RecommendError::CapacityExceeded { candidates, limit }) => {
            assert_eq!(candidates, 8);
            assert_eq!(limit, 5);
        }
        other => panic!("expected CapacityExceeded, got {other:?}"),
    }

    // Raising the bound makes the same request feasible
    let recommender = Recommender::new(&catalog, &profile, RecommendConfig::default());
    assert!(recommender.recommend().is_ok());
}
