//! Default catalog of exercises.
//!
//! This module provides the built-in exercise library: 30 movements across
//! the six muscle groups. The catalog is read-only once built.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Raw library rows: (id, name, category, muscle group, emoji)
const LIBRARY: &[(u32, &str, &str, MuscleGroup, &str)] = &[
    // Chest
    (1, "Bench Press", "Strength", MuscleGroup::Chest, "🏋️"),
    (2, "Incline Dumbbell Press", "Strength", MuscleGroup::Chest, "💪"),
    (3, "Cable Fly", "Isolation", MuscleGroup::Chest, "🔗"),
    (4, "Push-Ups", "Bodyweight", MuscleGroup::Chest, "⬇️"),
    (5, "Dips", "Bodyweight", MuscleGroup::Chest, "🔽"),

    // Back
    (6, "Deadlift", "Strength", MuscleGroup::Back, "⚡"),
    (7, "Pull-Ups", "Bodyweight", MuscleGroup::Back, "⬆️"),
    (8, "Barbell Row", "Strength", MuscleGroup::Back, "🏋️"),
    (9, "Lat Pulldown", "Machine", MuscleGroup::Back, "🔧"),
    (10, "Seated Cable Row", "Machine", MuscleGroup::Back, "🔗"),

    // Legs
    (11, "Squat", "Strength", MuscleGroup::Legs, "🦵"),
    (12, "Romanian Deadlift", "Strength", MuscleGroup::Legs, "⚡"),
    (13, "Leg Press", "Machine", MuscleGroup::Legs, "🔧"),
    (14, "Walking Lunges", "Bodyweight", MuscleGroup::Legs, "🚶"),
    (15, "Leg Curl", "Machine", MuscleGroup::Legs, "🦿"),
    (16, "Calf Raises", "Isolation", MuscleGroup::Legs, "🦶"),

    // Shoulders
    (17, "Overhead Press", "Strength", MuscleGroup::Shoulders, "🏋️"),
    (18, "Lateral Raises", "Isolation", MuscleGroup::Shoulders, "🦅"),
    (19, "Face Pulls", "Isolation", MuscleGroup::Shoulders, "🎯"),
    (20, "Arnold Press", "Strength", MuscleGroup::Shoulders, "💪"),

    // Arms
    (21, "Barbell Curl", "Isolation", MuscleGroup::Arms, "💪"),
    (22, "Tricep Pushdown", "Isolation", MuscleGroup::Arms, "⬇️"),
    (23, "Hammer Curl", "Isolation", MuscleGroup::Arms, "🔨"),
    (24, "Skull Crushers", "Isolation", MuscleGroup::Arms, "💀"),
    (25, "Preacher Curl", "Machine", MuscleGroup::Arms, "🙏"),

    // Core
    (26, "Plank", "Bodyweight", MuscleGroup::Core, "🧱"),
    (27, "Cable Crunch", "Machine", MuscleGroup::Core, "🔗"),
    (28, "Hanging Leg Raise", "Bodyweight", MuscleGroup::Core, "🦵"),
    (29, "Ab Wheel Rollout", "Bodyweight", MuscleGroup::Core, "⚙️"),
    (30, "Russian Twists", "Bodyweight", MuscleGroup::Core, "🌀"),
];

/// The immutable exercise library, in display order
#[derive(Clone, Debug)]
pub struct Catalog {
    exercises: Vec<ExerciseDefinition>,
}

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference. This function is retained for testing.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

fn build_default_catalog_internal() -> Catalog {
    let exercises = LIBRARY
        .iter()
        .map(|&(id, name, category, muscle_group, emoji)| ExerciseDefinition {
            id,
            name: name.into(),
            muscle_group,
            category: category.into(),
            emoji: emoji.into(),
        })
        .collect();

    Catalog { exercises }
}

impl Catalog {
    /// Build a catalog from arbitrary definitions (display order is kept)
    pub fn new(exercises: Vec<ExerciseDefinition>) -> Self {
        Self { exercises }
    }

    pub fn exercises(&self) -> &[ExerciseDefinition] {
        &self.exercises
    }

    /// Look up an exercise by its id
    pub fn get(&self, id: u32) -> Option<&ExerciseDefinition> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Number of exercises training the given group
    pub fn count_in(&self, group: MuscleGroup) -> usize {
        self.exercises
            .iter()
            .filter(|e| e.muscle_group == group)
            .count()
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for exercise in &self.exercises {
            if exercise.id == 0 {
                errors.push(format!("Exercise '{}' has id 0", exercise.name));
            }
            if !seen.insert(exercise.id) {
                errors.push(format!("Duplicate exercise id {}", exercise.id));
            }
            if exercise.name.trim().is_empty() {
                errors.push(format!("Exercise {} has empty name", exercise.id));
            }
            if exercise.category.trim().is_empty() {
                errors.push(format!("Exercise {} has empty category", exercise.id));
            }
        }

        for group in MuscleGroup::ALL {
            if self.count_in(group) == 0 {
                errors.push(format!("Catalog has no {} exercises", group));
            }
        }

        errors
    }
}
