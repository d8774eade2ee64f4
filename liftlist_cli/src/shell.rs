//! Interactive command shell.
//!
//! Each input line is parsed into a [`Command`]; commands that change state
//! are turned into reducer actions and applied, then the active view is
//! rendered again.

use crate::render::{self, Style};
use liftlist_core::{Action, Catalog, Error, Reps, Result, Sets, WorkoutState};
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  add <exercise-id>          add a library exercise to the workout
  remove <id>                remove a workout entry
  toggle <id>                mark an entry done / not done
  edit <id>                  open an entry for editing
  save <sets> <reps>         save the entry being edited
  cancel                     close the editor
  update <id> <sets> <reps>  set sets and reps directly
  filter <group|all>         filter the library by muscle group
  search [text]              search the library by name (empty clears)
  view <library|workout>     switch view
  clear                      remove every workout entry
  show                       render the current view
  help                       show this message
  quit                       leave the shell
";

/// A parsed shell line
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Add a catalog exercise by its library id
    Add(u32),
    Remove(u32),
    Toggle(u32),
    Edit(u32),
    Cancel,
    /// Save raw sets/reps input for the entry being edited
    Save(String, String),
    Update(u32, String, String),
    Filter(String),
    Search(String),
    View(String),
    Clear,
    Show,
    Help,
    Quit,
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Command::Empty);
        };
        let args: Vec<&str> = words.collect();

        let command = match (head.to_lowercase().as_str(), args.as_slice()) {
            ("add", [id]) => Command::Add(parse_id(id)?),
            ("remove" | "rm", [id]) => Command::Remove(parse_id(id)?),
            ("toggle" | "done", [id]) => Command::Toggle(parse_id(id)?),
            ("edit", [id]) => Command::Edit(parse_id(id)?),
            ("cancel", []) => Command::Cancel,
            ("save", [sets, reps]) => Command::Save(sets.to_string(), reps.to_string()),
            ("update", [id, sets, reps]) => {
                Command::Update(parse_id(id)?, sets.to_string(), reps.to_string())
            }
            ("filter", [group]) => Command::Filter(group.to_string()),
            ("search", rest) => Command::Search(rest.join(" ")),
            ("view", [view]) => Command::View(view.to_string()),
            ("clear", []) => Command::Clear,
            ("show", []) => Command::Show,
            ("help" | "?", _) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            (other, _) => {
                return Err(Error::Parse(format!(
                    "invalid command '{}' (try 'help')",
                    other
                )))
            }
        };
        Ok(command)
    }
}

fn parse_id(raw: &str) -> Result<u32> {
    raw.parse()
        .map_err(|_| Error::Parse(format!("'{}' is not a valid id", raw)))
}

/// What the shell should do after handling a command
enum Outcome {
    Dispatch(Action),
    Render,
    Print(String),
    Quit,
    Nothing,
}

/// Shell session: reducer state plus the library search term
pub struct Shell<'a> {
    catalog: &'a Catalog,
    state: WorkoutState,
    search: String,
    style: Style,
}

impl<'a> Shell<'a> {
    pub fn new(catalog: &'a Catalog, state: WorkoutState, style: Style) -> Self {
        Self {
            catalog,
            state,
            search: String::new(),
            style,
        }
    }

    pub fn state(&self) -> &WorkoutState {
        &self.state
    }

    /// Read commands until EOF or `quit`, writing output to `out`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W, prompt: bool) -> Result<()> {
        write!(out, "{}", self.render())?;
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        for line in input.lines() {
            let line = line?;
            match self.handle(&line) {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Dispatch(action)) => {
                    self.dispatch(action);
                    write!(out, "{}", self.render())?;
                }
                Ok(Outcome::Render) => write!(out, "{}", self.render())?,
                Ok(Outcome::Print(text)) => write!(out, "{}", text)?,
                Ok(Outcome::Nothing) => {}
                Err(e) => writeln!(out, "error: {}", e)?,
            }
            if prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, action: Action) {
        tracing::debug!("Dispatching {}", action.kind());
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);
    }

    fn render(&self) -> String {
        render::active_view(self.catalog, &self.state, &self.search, self.style)
    }

    fn handle(&mut self, line: &str) -> Result<Outcome> {
        let outcome = match Command::parse(line)? {
            Command::Add(exercise_id) => {
                let exercise = self
                    .catalog
                    .get(exercise_id)
                    .ok_or_else(|| Error::Parse(format!("no exercise with id {}", exercise_id)))?;
                Outcome::Dispatch(Action::AddExercise {
                    exercise: exercise.clone(),
                })
            }
            Command::Remove(id) => Outcome::Dispatch(Action::RemoveExercise { id }),
            Command::Toggle(id) => Outcome::Dispatch(Action::ToggleComplete { id }),
            Command::Edit(id) => Outcome::Dispatch(Action::SetEditing { id: Some(id) }),
            Command::Cancel => Outcome::Dispatch(Action::SetEditing { id: None }),
            Command::Save(sets, reps) => {
                let entry = self
                    .state
                    .editing_entry()
                    .ok_or_else(|| Error::Parse("nothing is being edited".into()))?;
                Outcome::Dispatch(Action::UpdateExercise {
                    id: entry.id,
                    sets: Sets::coerce(&sets),
                    reps: Reps::coerce(&reps),
                })
            }
            Command::Update(id, sets, reps) => Outcome::Dispatch(Action::UpdateExercise {
                id,
                sets: Sets::coerce(&sets),
                reps: Reps::coerce(&reps),
            }),
            Command::Filter(group) => Outcome::Dispatch(Action::SetFilter {
                filter: group.parse()?,
            }),
            Command::View(view) => Outcome::Dispatch(Action::SetView {
                view: view.parse()?,
            }),
            Command::Search(term) => {
                self.search = term;
                Outcome::Render
            }
            Command::Clear => Outcome::Dispatch(Action::ClearWorkout),
            Command::Show => Outcome::Render,
            Command::Help => Outcome::Print(HELP.to_string()),
            Command::Quit => Outcome::Quit,
            Command::Empty => Outcome::Nothing,
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftlist_core::{get_default_catalog, Filter, MuscleGroup, View};

    const PLAIN: Style = Style { color: false };

    fn run(script: &str) -> (WorkoutState, String) {
        let mut shell = Shell::new(get_default_catalog(), WorkoutState::default(), PLAIN);
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out, false).unwrap();
        (shell.state().clone(), String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("add 11").unwrap(), Command::Add(11));
        assert_eq!(Command::parse("  RM 2 ").unwrap(), Command::Remove(2));
        assert_eq!(
            Command::parse("save 5 8").unwrap(),
            Command::Save("5".into(), "8".into())
        );
        assert_eq!(
            Command::parse("search leg curl").unwrap(),
            Command::Search("leg curl".into())
        );
        assert_eq!(Command::parse("search").unwrap(), Command::Search(String::new()));
        assert_eq!(Command::parse("").unwrap(), Command::Empty);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Command::parse("add squat"), Err(Error::Parse(_))));
        assert!(matches!(Command::parse("add"), Err(Error::Parse(_))));
        assert!(matches!(Command::parse("jump 3"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_add_edit_save_flow() {
        let (state, out) = run("add 11\nedit 1\nsave 5 8\n");
        let entry = state.entry(1).unwrap();
        assert_eq!(entry.sets.get(), 5);
        assert_eq!(entry.reps.get(), 8);
        assert_eq!(state.editing_id, None);
        assert!(out.contains("[✓] 11"));
    }

    #[test]
    fn test_save_coerces_input() {
        let (state, _) = run("add 1\nedit 1\nsave abc 500\n");
        let entry = state.entry(1).unwrap();
        assert_eq!(entry.sets.get(), 1);
        assert_eq!(entry.reps.get(), 100);
    }

    #[test]
    fn test_save_without_editor_reports_error() {
        let (state, out) = run("add 1\nsave 4 4\n");
        assert!(out.contains("error: Parse error: nothing is being edited"));
        assert_eq!(state.entry(1).unwrap().sets.get(), 3);
    }

    #[test]
    fn test_unknown_exercise_and_filter_are_errors() {
        let (state, out) = run("add 99\nfilter cardio\n");
        assert!(state.workout_list.is_empty());
        assert_eq!(state.filter, Filter::All);
        assert!(out.contains("no exercise with id 99"));
        assert!(out.contains("Unknown muscle group: 'cardio'"));
    }

    #[test]
    fn test_view_filter_and_quit() {
        let (state, out) = run("filter legs\nview workout\nquit\nadd 1\n");
        assert_eq!(state.filter, Filter::Group(MuscleGroup::Legs));
        assert_eq!(state.active_view, View::Workout);
        assert!(state.workout_list.is_empty());
        assert!(out.contains("MY WORKOUT"));
    }

    #[test]
    fn test_clear_keeps_counter() {
        let (state, _) = run("add 1\nadd 2\nclear\nadd 3\n");
        assert_eq!(state.workout_list.len(), 1);
        assert_eq!(state.workout_list[0].id, 3);
    }

    #[test]
    fn test_search_narrows_library() {
        let (_, out) = run("search press\n");
        assert!(out.contains("Search: \"press\""));
        assert!(out.contains("(5 movements)"));
    }

    #[test]
    fn test_help() {
        let (_, out) = run("help\n");
        assert!(out.contains("update <id> <sets> <reps>"));
    }
}
