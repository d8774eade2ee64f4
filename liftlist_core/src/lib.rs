#![forbid(unsafe_code)]

//! Core domain model and state logic for LiftList.
//!
//! This crate provides:
//! - Domain types (muscle groups, exercises, workout entries)
//! - The static exercise catalog
//! - The workout reducer (pure state transitions)
//! - Derived read models (library view, workout summary)
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod reducer;
pub mod summary;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, Catalog};
pub use config::Config;
pub use reducer::{apply, Action, WorkoutState};
pub use summary::{library_view, visible_exercises, LibraryItem, WorkoutSummary};
