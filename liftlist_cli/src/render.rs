//! Plain-text rendering of the library and workout views.

use liftlist_core::{
    library_view, Catalog, Filter, MuscleGroup, View, WorkoutState, WorkoutSummary,
};
use std::fmt::Write;

const PROGRESS_WIDTH: usize = 30;

/// Output styling options
#[derive(Clone, Copy, Debug)]
pub struct Style {
    pub color: bool,
}

impl Style {
    /// Wrap `text` in a 24-bit ANSI colour taken from a `#RRGGBB` string
    fn paint(&self, text: &str, hex: &str) -> String {
        match (self.color, parse_hex(hex)) {
            (true, Some((r, g, b))) => format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text),
            _ => text.to_string(),
        }
    }

    fn group(&self, group: MuscleGroup) -> String {
        self.paint(group.as_str(), group.color())
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Navigation line with the active tab and the workout badge
pub fn nav(state: &WorkoutState) -> String {
    let tab = |view: View, label: &str| {
        if state.active_view == view {
            format!("[{}]", label)
        } else {
            format!(" {} ", label)
        }
    };
    let count = state.workout_count();
    let workout_label = if count > 0 {
        format!("Workout ({})", count)
    } else {
        "Workout".to_string()
    };

    format!(
        "LiftList   {} {}\n",
        tab(View::Library, "Library"),
        tab(View::Workout, &workout_label)
    )
}

/// Whichever view is currently active
pub fn active_view(catalog: &Catalog, state: &WorkoutState, search: &str, style: Style) -> String {
    let mut out = nav(state);
    out.push('\n');
    match state.active_view {
        View::Library => out.push_str(&library(catalog, state, search, style)),
        View::Workout => out.push_str(&workout(state, style)),
    }
    out
}

/// Filter chips, the active one bracketed
pub fn filter_bar(current: Filter, style: Style) -> String {
    let chips: Vec<String> = Filter::choices()
        .map(|f| {
            let label = match f {
                Filter::All => "All Muscles".to_string(),
                Filter::Group(g) => style.group(g),
            };
            if f == current {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect();
    chips.join("  ")
}

pub fn library(catalog: &Catalog, state: &WorkoutState, search: &str, style: Style) -> String {
    let items = library_view(catalog, state, search);
    let mut out = String::new();

    let _ = writeln!(out, "EXERCISE LIBRARY  ({} movements)", items.len());
    if !search.is_empty() {
        let _ = writeln!(out, "Search: \"{}\"", search);
    }
    let _ = writeln!(out, "{}", filter_bar(state.filter, style));
    out.push('\n');

    if items.is_empty() {
        out.push_str("No results. Try a different filter or search term.\n");
        return out;
    }

    for item in items {
        let ex = item.exercise;
        let marker = if item.is_added { "✓" } else { "+" };
        let _ = writeln!(
            out,
            "[{}] {:>2}  {} {:<24} {} · {}",
            marker,
            ex.id,
            ex.emoji,
            ex.name,
            style.group(ex.muscle_group),
            ex.category
        );
    }
    out
}

pub fn workout(state: &WorkoutState, style: Style) -> String {
    let summary = WorkoutSummary::from_state(state);
    let mut out = String::new();

    out.push_str("MY WORKOUT\n");

    if summary.total == 0 {
        out.push_str("Workout is empty.\n");
        out.push_str("Head to the library and add some exercises to get started.\n");
        return out;
    }

    let _ = writeln!(
        out,
        "Exercises: {}  Completed: {}  Progress: {}%  Total sets: {}",
        summary.total, summary.completed, summary.progress, summary.total_sets
    );
    let _ = writeln!(out, "{}", progress_bar(summary.progress));
    out.push('\n');

    for entry in &state.workout_list {
        let check = if entry.completed { "x" } else { " " };
        let _ = writeln!(
            out,
            "[{}] #{:<3} {} {:<24} {:<10} {} sets x {} reps",
            check,
            entry.id,
            entry.emoji,
            entry.name,
            style.group(entry.muscle_group),
            entry.sets,
            entry.reps
        );
        if state.editing_id == Some(entry.id) {
            let _ = writeln!(
                out,
                "      editing {}: 'save <sets> <reps>' or 'cancel'",
                entry.name
            );
        }
    }
    out
}

fn progress_bar(progress: u32) -> String {
    let filled = (progress.min(100) as usize * PROGRESS_WIDTH) / 100;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled)
    )
}

/// Muscle groups with their colours
pub fn groups(catalog: &Catalog, style: Style) -> String {
    let mut out = String::new();
    for filter in Filter::choices() {
        let count = match filter {
            Filter::All => catalog.len(),
            Filter::Group(g) => catalog.count_in(g),
        };
        let name = filter.to_string();
        let _ = writeln!(
            out,
            "{:<10} {}  {:>2} exercises",
            style.paint(&name, filter.color()),
            filter.color(),
            count
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftlist_core::{get_default_catalog, Action};

    const PLAIN: Style = Style { color: false };

    fn with_squat() -> WorkoutState {
        WorkoutState::default().apply(Action::AddExercise {
            exercise: get_default_catalog().get(11).unwrap().clone(),
        })
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#FF6B6B"), Some((255, 107, 107)));
        assert_eq!(parse_hex("FF6B6B"), None);
        assert_eq!(parse_hex("#FFF"), None);
    }

    #[test]
    fn test_paint_respects_color_flag() {
        assert_eq!(PLAIN.paint("legs", "#45B7D1"), "legs");
        let colored = Style { color: true }.paint("legs", "#45B7D1");
        assert!(colored.starts_with("\x1b[38;2;69;183;209m"));
        assert!(colored.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_nav_badge() {
        assert!(nav(&WorkoutState::default()).contains("[Library]  Workout "));
        let state = with_squat().apply(Action::SetView { view: View::Workout });
        assert!(nav(&state).contains("[Workout (1)]"));
    }

    #[test]
    fn test_library_marks_added_exercise() {
        let out = library(get_default_catalog(), &with_squat(), "squat", PLAIN);
        assert!(out.contains("(1 movements)"));
        assert!(out.contains("[✓] 11"));
        assert!(out.contains("[All Muscles]"));
    }

    #[test]
    fn test_library_empty_search() {
        let out = library(get_default_catalog(), &WorkoutState::default(), "zzz", PLAIN);
        assert!(out.contains("No results"));
    }

    #[test]
    fn test_workout_empty_state() {
        let out = workout(&WorkoutState::default(), PLAIN);
        assert!(out.contains("Workout is empty."));
        assert!(!out.contains("Progress"));
    }

    #[test]
    fn test_workout_stats_and_editing_hint() {
        let state = with_squat()
            .apply(Action::ToggleComplete { id: 1 })
            .apply(Action::SetEditing { id: Some(1) });
        let out = workout(&state, PLAIN);

        assert!(out.contains("Progress: 100%"));
        assert!(out.contains("Total sets: 3"));
        assert!(out.contains("[x] #1"));
        assert!(out.contains("3 sets x 10 reps"));
        assert!(out.contains("editing Squat"));
    }

    #[test]
    fn test_progress_bar_width() {
        assert_eq!(progress_bar(0), format!("[{}]", "-".repeat(30)));
        assert_eq!(progress_bar(50).matches('#').count(), 15);
        assert_eq!(progress_bar(100), format!("[{}]", "#".repeat(30)));
    }

    #[test]
    fn test_groups_listing() {
        let out = groups(get_default_catalog(), PLAIN);
        assert!(out.contains("all"));
        assert!(out.contains("#A8A8B3"));
        assert!(out.contains("shoulders"));
        assert!(out.contains(" 4 exercises"));
    }
}
