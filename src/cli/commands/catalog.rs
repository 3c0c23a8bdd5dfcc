//! Catalog command handler

use super::{load_catalog, print_course_table, resolve_input};
use course_advisor::config::Config;
use course_advisor::error;
use std::path::Path;

/// Run the catalog command: list every course in the catalog.
pub fn run(catalog_path: Option<&Path>, config: &Config, verbose: bool) {
    if let Err(err) = list_catalog(catalog_path, config, verbose) {
        error!("Catalog listing failed: {err}");
        eprintln!("{err}");
    }
}

fn list_catalog(
    catalog_path: Option<&Path>,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let catalog_file = resolve_input(catalog_path, &config.paths.catalog, "catalog")?;
    let catalog = load_catalog(&catalog_file, verbose)?;

    let courses: Vec<_> = catalog.iter().collect();

    println!("\n=== All Courses ===");
    print_course_table(&courses);

    Ok(())
}
