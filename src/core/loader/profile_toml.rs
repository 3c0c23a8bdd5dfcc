//! TOML loader for student profile data
//!
//! ```toml
//! id = "U1001"
//! completed = ["CS101", "MATH201"]
//! interests = ["AI", "数据科学"]
//! current_term = 3
//! ```
//!
//! `completed`, `interests`, and `current_term` may be omitted and default
//! to empty/zero. Unlike the catalog loader there is no per-record
//! recovery: a profile that fails to parse fails the whole load.

use crate::core::models::StudentProfile;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Load a student profile from a TOML file.
///
/// # Arguments
/// * `path` - Path to the TOML file
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid TOML, or is
/// missing the `id` field
pub fn load_profile_toml<P: AsRef<Path>>(path: P) -> Result<StudentProfile, Box<dyn Error>> {
    let content = fs::read_to_string(&path)?;
    parse_profile_str(&content)
}

/// Parse profile TOML content (see [`load_profile_toml`]).
///
/// # Errors
/// Returns an error if the content is not valid TOML or has an empty `id`
pub fn parse_profile_str(content: &str) -> Result<StudentProfile, Box<dyn Error>> {
    let profile: StudentProfile = toml::from_str(content)?;

    if profile.id.trim().is_empty() {
        return Err("Profile is missing a student id".into());
    }

    Ok(profile)
}
