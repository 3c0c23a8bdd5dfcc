//! Progress command handler

use super::{load_catalog, load_profile, resolve_input};
use course_advisor::config::Config;
use course_advisor::error;
use std::path::Path;

/// Run the progress command: show completed courses and declared interests.
pub fn run(
    catalog_path: Option<&Path>,
    profile_path: Option<&Path>,
    config: &Config,
    verbose: bool,
) {
    if let Err(err) = show_progress(catalog_path, profile_path, config, verbose) {
        error!("Progress display failed: {err}");
        eprintln!("{err}");
    }
}

fn show_progress(
    catalog_path: Option<&Path>,
    profile_path: Option<&Path>,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let catalog_file = resolve_input(catalog_path, &config.paths.catalog, "catalog")?;
    let profile_file = resolve_input(profile_path, &config.paths.profile, "profile")?;

    let catalog = load_catalog(&catalog_file, verbose)?;
    let profile = load_profile(&profile_file, verbose)?;

    println!("\n=== Progress for {} ===", profile.id);
    if profile.current_term > 0 {
        println!("Current term: {}", profile.current_term);
    }

    println!("Completed courses:");
    if profile.completed.is_empty() {
        println!("  (none)");
    } else {
        // Sort for stable output; HashSet iteration order is arbitrary
        let mut completed: Vec<&String> = profile.completed.iter().collect();
        completed.sort();

        for id in completed {
            match catalog.lookup(id) {
                Some(course) => println!("  - {} ({id})", course.name),
                None => println!("  - {id} (unknown course)"),
            }
        }
    }

    println!("Interest tags: {}", profile.interests.join(", "));

    Ok(())
}
