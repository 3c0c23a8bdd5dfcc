//! Command handler modules

pub mod available;
pub mod catalog;
pub mod config;
pub mod progress;
pub mod recommend;

use course_advisor::core::loader::{load_profile_toml, parse_catalog_csv};
use course_advisor::core::models::{Catalog, Course, StudentProfile};
use course_advisor::{info, warn};
use std::path::{Path, PathBuf};

/// Resolve an input path from a CLI flag or the configured default
pub(crate) fn resolve_input(
    flag: Option<&Path>,
    configured: &str,
    what: &str,
) -> Result<PathBuf, String> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    if configured.is_empty() {
        return Err(format!(
            "✗ No {what} file given; pass --{what} or set the '{what}' config key"
        ));
    }
    Ok(PathBuf::from(configured))
}

/// Load a catalog CSV, reporting dangling prerequisite references as warnings
pub(crate) fn load_catalog(path: &Path, verbose: bool) -> Result<Catalog, String> {
    let catalog = parse_catalog_csv(path)
        .map_err(|e| format!("✗ Failed to load catalog {}: {e}", path.display()))?;

    if let Err(dangling) = catalog.validate_references() {
        for message in &dangling {
            warn!("{message}");
        }
    }

    if verbose {
        println!(
            "✓ Loaded {} courses from: {}",
            catalog.len(),
            path.display()
        );
    } else {
        info!("Catalog loaded: {} courses from {}", catalog.len(), path.display());
    }

    Ok(catalog)
}

/// Load a student profile TOML file
pub(crate) fn load_profile(path: &Path, verbose: bool) -> Result<StudentProfile, String> {
    let profile = load_profile_toml(path)
        .map_err(|e| format!("✗ Failed to load profile {}: {e}", path.display()))?;

    if verbose {
        println!("✓ Loaded profile [{}] from: {}", profile.id, path.display());
    } else {
        info!("Profile loaded: {} from {}", profile.id, path.display());
    }

    Ok(profile)
}

/// Print a course table: id, name, credits, tags
pub(crate) fn print_course_table(courses: &[&Course]) {
    if courses.is_empty() {
        println!("No courses.");
        return;
    }

    println!(
        "{:<10} {:<24} {:>7}  {}",
        "ID", "Name", "Credits", "Tags"
    );
    println!("{}", "-".repeat(60));
    for course in courses {
        println!(
            "{:<10} {:<24} {:>7}  {}",
            course.id,
            course.name,
            course.credits,
            course.tags.join(", ")
        );
    }
}
