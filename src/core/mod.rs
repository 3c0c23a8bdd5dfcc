//! Core module for the `CourseAdvisor` engine and its collaborators

pub mod config;
pub mod loader;
pub mod models;
pub mod recommend;

/// Returns the current version of the `CourseAdvisor` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
