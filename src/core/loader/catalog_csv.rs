//! CSV parser for course catalog data
//!
//! Expected layout: a header row followed by one course per row. Fields
//! are located by header name, so column order is free:
//!
//! ```csv
//! Course ID,Course Name,Credits,Prerequisites,Tags
//! CS101,程序设计基础,4,,AI;编程
//! CS102,数据结构,3,CS101,AI;算法
//! ```
//!
//! `Prerequisites` and `Tags` cells hold semicolon-separated lists. Blank
//! lines and lines starting with `#` are skipped. A malformed row (missing
//! id, missing/zero/non-numeric credits) is skipped with a logged warning
//! rather than failing the whole load.

use crate::core::models::{Catalog, Course};
use crate::warn;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a catalog CSV file into a [`Catalog`].
///
/// Duplicate course ids follow the catalog's last-write-wins semantics.
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Errors
/// Returns an error if the file cannot be read or has no header row
pub fn parse_catalog_csv<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let content = fs::read_to_string(&path)?;
    parse_catalog_str(&content)
}

/// Parse catalog CSV content (see [`parse_catalog_csv`]).
///
/// # Errors
/// Returns an error if no header row is present
pub fn parse_catalog_str(content: &str) -> Result<Catalog, Box<dyn Error>> {
    let mut lines = content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'));

    let header_line = lines.next().ok_or("No header row found in catalog CSV")?;
    let headers = parse_csv_line(header_line);

    let mut catalog = Catalog::new();

    for line in lines {
        match parse_course_line(line, &headers) {
            Ok(course) => catalog.insert(course),
            Err(e) => warn!("Skipping malformed catalog row '{line}': {e}"),
        }
    }

    Ok(catalog)
}

/// Parse a CSV line into trimmed fields
fn parse_csv_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .map(std::string::ToString::to_string)
        .collect()
}

/// Parse a single course row
fn parse_course_line(line: &str, headers: &[String]) -> Result<Course, Box<dyn Error>> {
    let id = get_field(line, "Course ID", headers)
        .unwrap_or_default()
        .to_string();
    if id.is_empty() {
        return Err("Missing course id".into());
    }

    let name = get_field(line, "Course Name", headers)
        .unwrap_or_default()
        .to_string();

    let credits_str = get_field(line, "Credits", headers).unwrap_or_default();
    let credits = credits_str
        .parse::<u32>()
        .map_err(|_| format!("Invalid credits value '{credits_str}'"))?;
    if credits == 0 {
        return Err("Credits must be greater than zero".into());
    }

    let mut course = Course::new(id, name, credits);

    if let Some(prereq_str) = get_field(line, "Prerequisites", headers) {
        for prereq in split_list(prereq_str) {
            course.add_prereq(prereq);
        }
    }

    if let Some(tag_str) = get_field(line, "Tags", headers) {
        for tag in split_list(tag_str) {
            course.add_tag(tag);
        }
    }

    Ok(course)
}

/// Get a field value from a CSV line by header name
fn get_field<'a>(line: &'a str, header_name: &str, headers: &[String]) -> Option<&'a str> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(header_name))
        .and_then(|idx| fields.get(idx))
        .copied()
}

/// Split a semicolon-separated list cell into trimmed, non-empty entries
fn split_list(cell: &str) -> Vec<String> {
    cell.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(std::string::ToString::to_string)
        .collect()
}
