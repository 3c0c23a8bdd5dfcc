//! Recommend command handler

use super::{load_catalog, load_profile, print_course_table, resolve_input};
use course_advisor::config::Config;
use course_advisor::core::models::Catalog;
use course_advisor::core::recommend::{
    RankedPlan, RecommendConfig, Recommender, DEFAULT_MAX_CANDIDATES, DEFAULT_MAX_CREDITS,
    DEFAULT_TOP_N,
};
use course_advisor::error;
use std::path::Path;

/// Per-run engine settings taken from CLI flags, falling back to config
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendArgs {
    /// `--top-n` value, if given
    pub top_n: Option<usize>,
    /// `--max-credits` value, if given
    pub max_credits: Option<u32>,
    /// `--max-candidates` value, if given
    pub max_candidates: Option<usize>,
}

/// Run the recommend command.
///
/// # Arguments
/// * `catalog_path` - Catalog CSV from the CLI, if given
/// * `profile_path` - Profile TOML from the CLI, if given
/// * `args` - Per-run engine settings from the CLI
/// * `config` - Loaded configuration with defaults
/// * `verbose` - Whether to show load progress
pub fn run(
    catalog_path: Option<&Path>,
    profile_path: Option<&Path>,
    args: RecommendArgs,
    config: &Config,
    verbose: bool,
) {
    if let Err(err) = recommend_single(catalog_path, profile_path, args, config, verbose) {
        error!("Recommendation failed: {err}");
        eprintln!("{err}");
    }
}

fn recommend_single(
    catalog_path: Option<&Path>,
    profile_path: Option<&Path>,
    args: RecommendArgs,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let catalog_file = resolve_input(catalog_path, &config.paths.catalog, "catalog")?;
    let profile_file = resolve_input(profile_path, &config.paths.profile, "profile")?;

    let catalog = load_catalog(&catalog_file, verbose)?;
    let profile = load_profile(&profile_file, verbose)?;

    let engine_config = engine_config(args, config);
    let max_credits = engine_config.max_credits;
    let recommender = Recommender::new(&catalog, &profile, engine_config);

    let ranked = recommender
        .recommend()
        .map_err(|e| format!("✗ Cannot generate recommendations: {e}"))?;

    println!("\n=== Schedule Recommendations for {} ===", profile.id);

    if ranked.is_empty() {
        println!("Nothing to recommend. Possible reasons:");
        println!("- every catalog course is already completed");
        println!("- no remaining course has its prerequisites satisfied");
        return Ok(());
    }

    for (rank, recommendation) in ranked.iter().enumerate() {
        print_recommendation(rank + 1, recommendation, &catalog, max_credits);
    }

    Ok(())
}

/// Combine per-run CLI settings with configured values
fn engine_config(args: RecommendArgs, config: &Config) -> RecommendConfig {
    let configured = &config.recommend;
    RecommendConfig {
        max_credits: args
            .max_credits
            .or(positive_u32(configured.max_credits))
            .unwrap_or(DEFAULT_MAX_CREDITS),
        top_n: args
            .top_n
            .or(positive_usize(configured.top_n))
            .unwrap_or(DEFAULT_TOP_N),
        max_candidates: args
            .max_candidates
            .or(positive_usize(configured.max_candidates))
            .unwrap_or(DEFAULT_MAX_CANDIDATES),
    }
}

const fn positive_u32(value: u32) -> Option<u32> {
    if value == 0 {
        None
    } else {
        Some(value)
    }
}

const fn positive_usize(value: usize) -> Option<usize> {
    if value == 0 {
        None
    } else {
        Some(value)
    }
}

fn print_recommendation(
    rank: usize,
    recommendation: &RankedPlan,
    catalog: &Catalog,
    max_credits: u32,
) {
    println!("\n[Recommendation #{rank}]");
    println!(
        "Credits: {}/{max_credits} | Interest match: {:.2} | Score: {:.3}",
        recommendation.plan.total_credits(),
        recommendation.interest,
        recommendation.score
    );

    let courses: Vec<_> = recommendation
        .plan
        .courses
        .iter()
        .filter_map(|id| catalog.lookup(id))
        .collect();
    print_course_table(&courses);
}
