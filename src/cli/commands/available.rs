//! Available command handler

use super::{load_catalog, load_profile, print_course_table, resolve_input};
use course_advisor::config::Config;
use course_advisor::core::recommend::available_courses;
use course_advisor::error;
use std::path::Path;

/// Run the available command: list courses the student can take this term.
pub fn run(
    catalog_path: Option<&Path>,
    profile_path: Option<&Path>,
    config: &Config,
    verbose: bool,
) {
    if let Err(err) = list_available(catalog_path, profile_path, config, verbose) {
        error!("Available-course listing failed: {err}");
        eprintln!("{err}");
    }
}

fn list_available(
    catalog_path: Option<&Path>,
    profile_path: Option<&Path>,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let catalog_file = resolve_input(catalog_path, &config.paths.catalog, "catalog")?;
    let profile_file = resolve_input(profile_path, &config.paths.profile, "profile")?;

    let catalog = load_catalog(&catalog_file, verbose)?;
    let profile = load_profile(&profile_file, verbose)?;

    let available = available_courses(&catalog, &profile);

    println!("\n=== Available Courses for {} ===", profile.id);
    print_course_table(&available);

    Ok(())
}
