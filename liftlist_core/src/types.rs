//! Core domain types for LiftList.
//!
//! This module defines the fundamental types used throughout the system:
//! - Muscle groups and the library filter built on them
//! - Exercise definitions (catalog records)
//! - Workout entries and their bounded sets/reps values
//! - The active view selection

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Muscle Groups
// ============================================================================

/// Muscle group an exercise trains
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
}

impl MuscleGroup {
    /// All groups, in library display order
    pub const ALL: [MuscleGroup; 6] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Legs,
        MuscleGroup::Shoulders,
        MuscleGroup::Arms,
        MuscleGroup::Core,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Arms => "arms",
            MuscleGroup::Core => "core",
        }
    }

    /// Accent colour used when rendering this group (hex RGB)
    pub fn color(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "#FF6B6B",
            MuscleGroup::Back => "#4ECDC4",
            MuscleGroup::Legs => "#45B7D1",
            MuscleGroup::Shoulders => "#FFA07A",
            MuscleGroup::Arms => "#98D8C8",
            MuscleGroup::Core => "#F7DC6F",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MuscleGroup::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidFilter(s.to_string()))
    }
}

/// Library filter: every exercise, or a single muscle group
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Filter {
    #[default]
    All,
    Group(MuscleGroup),
}

impl Filter {
    /// Colour shown for the "all" chip
    pub const ALL_COLOR: &'static str = "#A8A8B3";

    pub fn matches(&self, group: MuscleGroup) -> bool {
        match self {
            Filter::All => true,
            Filter::Group(g) => *g == group,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Filter::All => Self::ALL_COLOR,
            Filter::Group(g) => g.color(),
        }
    }

    /// Every selectable filter, "all" first
    pub fn choices() -> impl Iterator<Item = Filter> {
        std::iter::once(Filter::All).chain(MuscleGroup::ALL.into_iter().map(Filter::Group))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Group(g) => g.fmt(f),
        }
    }
}

impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Filter::All);
        }
        s.parse().map(Filter::Group)
    }
}

impl TryFrom<String> for Filter {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Filter> for String {
    fn from(value: Filter) -> Self {
        value.to_string()
    }
}

// ============================================================================
// View Selection
// ============================================================================

/// Which screen the presentation layer shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Library,
    Workout,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Library => f.write_str("library"),
            View::Workout => f.write_str("workout"),
        }
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "library" => Ok(View::Library),
            "workout" => Ok(View::Workout),
            _ => Err(Error::InvalidView(s.to_string())),
        }
    }
}

// ============================================================================
// Exercise Definitions
// ============================================================================

/// An exercise in the static library (e.g., "Bench Press")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDefinition {
    pub id: u32,
    pub name: String,
    pub muscle_group: MuscleGroup,
    /// Free-form classification ("Strength", "Machine", ...)
    #[serde(default)]
    pub category: String,
    pub emoji: String,
}

// ============================================================================
// Sets and Reps
// ============================================================================

macro_rules! bounded_count {
    ($(#[$meta:meta])* $name:ident, $label:literal, $min:expr, $max:expr, $default:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u32", into = "u32")]
        pub struct $name(u32);

        impl $name {
            pub const MIN: u32 = $min;
            pub const MAX: u32 = $max;

            /// Checked constructor; values outside `MIN..=MAX` are rejected
            pub fn new(value: u32) -> Result<Self> {
                if (Self::MIN..=Self::MAX).contains(&value) {
                    Ok(Self(value))
                } else {
                    Err(Error::Validation(format!(
                        "{} must be between {} and {}, got {}",
                        $label,
                        Self::MIN,
                        Self::MAX,
                        value
                    )))
                }
            }

            /// Lenient conversion of raw user input.
            ///
            /// Non-numeric or zero input becomes 1, anything else is clamped
            /// into range.
            pub fn coerce(raw: &str) -> Self {
                let value = raw
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite() && *v != 0.0)
                    .unwrap_or(1.0);
                Self(value.clamp(Self::MIN as f64, Self::MAX as f64) as u32)
            }

            pub fn get(&self) -> u32 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self($default)
            }
        }

        impl TryFrom<u32> for $name {
            type Error = Error;

            fn try_from(value: u32) -> Result<Self> {
                Self::new(value)
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

bounded_count!(
    /// Number of sets for a workout entry (1..=20, default 3)
    Sets,
    "sets",
    1,
    20,
    3
);

bounded_count!(
    /// Number of reps per set for a workout entry (1..=100, default 10)
    Reps,
    "reps",
    1,
    100,
    10
);

// ============================================================================
// Workout Entries
// ============================================================================

/// An exercise the user added to their workout.
///
/// Name, group and emoji are a snapshot of the catalog record taken when the
/// entry was created; `exercise_id` is only used for lookups.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    pub id: u32,
    pub exercise_id: u32,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub emoji: String,
    pub sets: Sets,
    pub reps: Reps,
    pub completed: bool,
}

impl WorkoutEntry {
    /// Create a fresh entry from a catalog record with default sets/reps
    pub fn from_definition(id: u32, def: &ExerciseDefinition) -> Self {
        Self {
            id,
            exercise_id: def.id,
            name: def.name.clone(),
            muscle_group: def.muscle_group,
            emoji: def.emoji.clone(),
            sets: Sets::default(),
            reps: Reps::default(),
            completed: false,
        }
    }
}
