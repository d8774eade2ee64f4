//! Derived read models.
//!
//! Nothing here is stored in [`WorkoutState`]; these values are recomputed
//! from the catalog and the current state whenever the presentation layer
//! renders.

use crate::{Catalog, ExerciseDefinition, Filter, WorkoutEntry, WorkoutState};
use serde::Serialize;

/// Exercises matching the group filter and a case-insensitive name search.
///
/// An empty search term matches everything. Catalog order is preserved.
pub fn visible_exercises<'a>(
    catalog: &'a Catalog,
    filter: Filter,
    search: &str,
) -> Vec<&'a ExerciseDefinition> {
    let needle = search.to_lowercase();
    catalog
        .exercises()
        .iter()
        .filter(|ex| filter.matches(ex.muscle_group))
        .filter(|ex| ex.name.to_lowercase().contains(&needle))
        .collect()
}

/// A library card: the exercise plus whether it is already in the workout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryItem<'a> {
    pub exercise: &'a ExerciseDefinition,
    pub is_added: bool,
}

/// Library as rendered for the current state
pub fn library_view<'a>(
    catalog: &'a Catalog,
    state: &WorkoutState,
    search: &str,
) -> Vec<LibraryItem<'a>> {
    visible_exercises(catalog, state.filter, search)
        .into_iter()
        .map(|exercise| LibraryItem {
            exercise,
            is_added: state.contains_exercise(exercise.id),
        })
        .collect()
}

/// Totals shown above the workout list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
    pub total: usize,
    pub completed: usize,
    /// Whole-number percentage of completed entries (0 when empty)
    pub progress: u32,
    pub total_sets: u32,
}

impl WorkoutSummary {
    pub fn from_entries(entries: &[WorkoutEntry]) -> Self {
        let total = entries.len();
        let completed = entries.iter().filter(|w| w.completed).count();
        let total_sets = entries.iter().map(|w| w.sets.get()).sum();

        Self {
            total,
            completed,
            progress: progress_percent(completed, total),
            total_sets,
        }
    }

    pub fn from_state(state: &WorkoutState) -> Self {
        Self::from_entries(&state.workout_list)
    }
}

/// `round(completed / total * 100)`, half rounding away from zero
fn progress_percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_default_catalog, get_default_catalog, Action, MuscleGroup, Reps, Sets};
    use rstest::rstest;

    fn state_with(ids: &[u32]) -> WorkoutState {
        let catalog = get_default_catalog();
        ids.iter().fold(WorkoutState::default(), |state, id| {
            state.apply(Action::AddExercise {
                exercise: catalog.get(*id).unwrap().clone(),
            })
        })
    }

    #[test]
    fn test_visible_all_without_search() {
        let catalog = build_default_catalog();
        assert_eq!(visible_exercises(&catalog, Filter::All, "").len(), 30);
    }

    #[test]
    fn test_visible_by_group() {
        let catalog = build_default_catalog();
        let legs = visible_exercises(&catalog, Filter::Group(MuscleGroup::Legs), "");
        assert_eq!(legs.len(), 6);
        assert!(legs.iter().all(|e| e.muscle_group == MuscleGroup::Legs));
        assert_eq!(legs[0].name, "Squat");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = build_default_catalog();
        let names: Vec<&str> = visible_exercises(&catalog, Filter::All, "CURL")
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Leg Curl", "Barbell Curl", "Hammer Curl", "Preacher Curl"]
        );
    }

    #[test]
    fn test_search_and_group_combine() {
        let catalog = build_default_catalog();
        let hits = visible_exercises(&catalog, Filter::Group(MuscleGroup::Arms), "curl");
        assert_eq!(hits.len(), 3);

        let none = visible_exercises(&catalog, Filter::Group(MuscleGroup::Chest), "squat");
        assert!(none.is_empty());
    }

    #[test]
    fn test_library_view_marks_added() {
        let catalog = get_default_catalog();
        let state = state_with(&[1, 3]);
        let items = library_view(catalog, &state, "");

        let added: Vec<u32> = items
            .iter()
            .filter(|i| i.is_added)
            .map(|i| i.exercise.id)
            .collect();
        assert_eq!(added, vec![1, 3]);
    }

    #[test]
    fn test_library_view_respects_state_filter() {
        let catalog = get_default_catalog();
        let state = state_with(&[]).apply(Action::SetFilter {
            filter: Filter::Group(MuscleGroup::Shoulders),
        });
        assert_eq!(library_view(catalog, &state, "").len(), 4);
        assert_eq!(library_view(catalog, &state, "press").len(), 2);
    }

    #[test]
    fn test_empty_summary() {
        let summary = WorkoutSummary::from_state(&WorkoutState::default());
        assert_eq!(summary, WorkoutSummary::default());
        assert_eq!(summary.progress, 0);
    }

    #[test]
    fn test_summary_quarter_progress() {
        let state = state_with(&[1, 2, 3, 4]).apply(Action::ToggleComplete { id: 2 });
        let summary = WorkoutSummary::from_state(&state);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.progress, 25);
        assert_eq!(summary.total_sets, 12);
    }

    #[test]
    fn test_total_sets_follows_updates() {
        let state = state_with(&[1, 2]).apply(Action::UpdateExercise {
            id: 1,
            sets: Sets::new(5).unwrap(),
            reps: Reps::new(5).unwrap(),
        });
        assert_eq!(WorkoutSummary::from_state(&state).total_sets, 8);
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(1, 3, 33)]
    #[case(2, 3, 67)]
    #[case(1, 8, 13)]
    #[case(3, 3, 100)]
    fn test_progress_rounding(#[case] completed: usize, #[case] total: usize, #[case] expected: u32) {
        assert_eq!(progress_percent(completed, total), expected);
    }
}
