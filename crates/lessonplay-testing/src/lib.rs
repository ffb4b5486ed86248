//! Test fixtures shared across the lessonplay crates.
//!
//! Only ever a dev-dependency; panicking on setup failure is fine here.

pub mod fixtures;

pub use fixtures::*;
