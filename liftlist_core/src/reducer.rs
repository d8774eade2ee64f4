//! Workout state and its transition function.
//!
//! `WorkoutState` is a plain value; every change goes through
//! [`WorkoutState::apply`], which consumes the previous state and returns the
//! next one. Transitions are total: an action that does not apply (unknown
//! entry id, duplicate add, unrecognised tag) leaves the state unchanged.

use crate::{ExerciseDefinition, Filter, Reps, Sets, View, WorkoutEntry};
use serde::{Deserialize, Serialize};

/// An action dispatched by the presentation layer
///
/// Serialized with a SCREAMING_SNAKE_CASE `type` tag, e.g.
/// `{"type":"TOGGLE_COMPLETE","id":1}`. Tags that are not recognised decode
/// to [`Action::Unknown`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddExercise { exercise: ExerciseDefinition },
    RemoveExercise { id: u32 },
    ToggleComplete { id: u32 },
    UpdateExercise { id: u32, sets: Sets, reps: Reps },
    SetFilter { filter: Filter },
    SetView { view: View },
    SetEditing {
        #[serde(default)]
        id: Option<u32>,
    },
    ClearWorkout,
    #[serde(other)]
    Unknown,
}

impl Action {
    /// Tag name as it appears in serialized form
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddExercise { .. } => "ADD_EXERCISE",
            Action::RemoveExercise { .. } => "REMOVE_EXERCISE",
            Action::ToggleComplete { .. } => "TOGGLE_COMPLETE",
            Action::UpdateExercise { .. } => "UPDATE_EXERCISE",
            Action::SetFilter { .. } => "SET_FILTER",
            Action::SetView { .. } => "SET_VIEW",
            Action::SetEditing { .. } => "SET_EDITING",
            Action::ClearWorkout => "CLEAR_WORKOUT",
            Action::Unknown => "UNKNOWN",
        }
    }
}

/// Complete application state
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutState {
    pub workout_list: Vec<WorkoutEntry>,
    pub filter: Filter,
    pub active_view: View,
    pub editing_id: Option<u32>,
    /// Next id handed to a new entry; never decreases, never reset
    pub next_workout_item_id: u32,
}

impl Default for WorkoutState {
    fn default() -> Self {
        Self {
            workout_list: Vec::new(),
            filter: Filter::All,
            active_view: View::Library,
            editing_id: None,
            next_workout_item_id: 1,
        }
    }
}

impl WorkoutState {
    /// Initial state with a specific view and filter selected
    pub fn with_selection(view: View, filter: Filter) -> Self {
        Self {
            active_view: view,
            filter,
            ..Self::default()
        }
    }

    /// Apply one action and return the resulting state
    pub fn apply(mut self, action: Action) -> Self {
        let kind = action.kind();

        match action {
            Action::AddExercise { exercise } => {
                if self.contains_exercise(exercise.id) {
                    tracing::debug!("Exercise {} already in workout, ignoring add", exercise.id);
                    return self;
                }
                let id = self.next_workout_item_id;
                self.workout_list
                    .push(WorkoutEntry::from_definition(id, &exercise));
                self.next_workout_item_id += 1;
                tracing::debug!("Added '{}' as workout entry {}", exercise.name, id);
            }

            Action::RemoveExercise { id } => {
                let before = self.workout_list.len();
                self.workout_list.retain(|w| w.id != id);
                if self.editing_id == Some(id) {
                    self.editing_id = None;
                }
                if self.workout_list.len() == before {
                    tracing::debug!("No workout entry {} to remove", id);
                }
            }

            Action::ToggleComplete { id } => match self.entry_mut(id) {
                Some(entry) => {
                    entry.completed = !entry.completed;
                    tracing::debug!("Entry {} completed = {}", id, entry.completed);
                }
                None => tracing::debug!("No workout entry {} to toggle", id),
            },

            Action::UpdateExercise { id, sets, reps } => {
                if let Some(entry) = self.entry_mut(id) {
                    entry.sets = sets;
                    entry.reps = reps;
                } else {
                    tracing::debug!("No workout entry {} to update", id);
                }
                // Saving always closes the editor
                self.editing_id = None;
            }

            Action::SetFilter { filter } => self.filter = filter,

            Action::SetView { view } => self.active_view = view,

            Action::SetEditing { id } => self.editing_id = id,

            Action::ClearWorkout => {
                self.workout_list.clear();
            }

            Action::Unknown => {
                tracing::debug!("Ignoring unrecognised action");
                return self;
            }
        }

        tracing::trace!("Applied {}", kind);
        self
    }

    /// Whether an entry for the given catalog exercise exists
    pub fn contains_exercise(&self, exercise_id: u32) -> bool {
        self.workout_list
            .iter()
            .any(|w| w.exercise_id == exercise_id)
    }

    pub fn entry(&self, id: u32) -> Option<&WorkoutEntry> {
        self.workout_list.iter().find(|w| w.id == id)
    }

    fn entry_mut(&mut self, id: u32) -> Option<&mut WorkoutEntry> {
        self.workout_list.iter_mut().find(|w| w.id == id)
    }

    /// The entry currently open for editing, if it still exists
    pub fn editing_entry(&self) -> Option<&WorkoutEntry> {
        self.editing_id.and_then(|id| self.entry(id))
    }

    /// Number of entries (shown as the workout badge)
    pub fn workout_count(&self) -> usize {
        self.workout_list.len()
    }
}

/// Free-function form of [`WorkoutState::apply`]
pub fn apply(state: WorkoutState, action: Action) -> WorkoutState {
    state.apply(action)
}
