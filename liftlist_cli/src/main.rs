mod render;
mod shell;

use clap::{Parser, Subcommand};
use liftlist_core::*;
use render::Style;
use shell::Shell;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "liftlist")]
#[command(about = "Browse the exercise library and track a workout list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive workout shell (default)
    Shell,

    /// List library exercises
    Library {
        /// Muscle group to show (chest, back, legs, shoulders, arms, core, all)
        #[arg(long)]
        group: Option<String>,

        /// Case-insensitive name search
        #[arg(long)]
        search: Option<String>,
    },

    /// List muscle groups and their colours
    Groups,

    /// Apply JSON actions from a file (one per line) and print the final state
    Replay {
        /// File with one JSON action per line
        file: PathBuf,

        /// Print workout totals instead of the full state
        #[arg(long)]
        summary: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Initialize logging
    liftlist_core::logging::init_with_level(&config.logging.level);

    let catalog = get_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    let style = Style {
        color: config.ui.color && !cli.no_color,
    };

    match cli.command {
        Some(Commands::Library { group, search }) => cmd_library(catalog, group, search, style),
        Some(Commands::Groups) => {
            print!("{}", render::groups(catalog, style));
            Ok(())
        }
        Some(Commands::Replay { file, summary }) => cmd_replay(&file, summary, &config),
        Some(Commands::Shell) | None => cmd_shell(catalog, &config, style),
    }
}

fn cmd_shell(catalog: &Catalog, config: &Config, style: Style) -> Result<()> {
    let state = config.initial_state()?;
    let interactive = io::stdin().is_terminal();

    if interactive {
        println!("Type 'help' for commands.");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut shell = Shell::new(catalog, state, style);
    shell.run(stdin.lock(), &mut out, interactive)?;
    out.flush()?;

    tracing::info!(
        "Shell closed with {} workout entries",
        shell.state().workout_count()
    );
    Ok(())
}

fn cmd_library(
    catalog: &Catalog,
    group: Option<String>,
    search: Option<String>,
    style: Style,
) -> Result<()> {
    let filter = match group {
        Some(g) => g.parse()?,
        None => Filter::All,
    };
    let state = WorkoutState::default().apply(Action::SetFilter { filter });
    print!(
        "{}",
        render::library(catalog, &state, search.as_deref().unwrap_or(""), style)
    );
    Ok(())
}

fn cmd_replay(path: &Path, summary: bool, config: &Config) -> Result<()> {
    let file = std::fs::File::open(path)?;
    let state = replay(BufReader::new(file), config.initial_state()?)?;

    let json = if summary {
        serde_json::to_string_pretty(&WorkoutSummary::from_state(&state))?
    } else {
        serde_json::to_string_pretty(&state)?
    };
    println!("{}", json);
    Ok(())
}

/// Apply every action in `input` to `state`.
///
/// Blank lines and lines starting with `#` are skipped. A malformed line
/// aborts the replay with its line number.
fn replay<R: BufRead>(input: R, mut state: WorkoutState) -> Result<WorkoutState> {
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let action: Action = serde_json::from_str(trimmed)
            .map_err(|e| Error::Parse(format!("line {}: {}", index + 1, e)))?;
        if action == Action::Unknown {
            tracing::warn!("line {}: unrecognised action type, ignored", index + 1);
        }
        state = state.apply(action);
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_skips_comments_and_blank_lines() {
        let script = r#"
# build a small workout
{"type":"ADD_EXERCISE","exercise":{"id":11,"name":"Squat","muscleGroup":"legs","emoji":"🦵"}}

{"type":"ADD_EXERCISE","exercise":{"id":11,"name":"Squat","muscleGroup":"legs","emoji":"🦵"}}
{"type":"UPDATE_EXERCISE","id":1,"sets":5,"reps":8}
{"type":"NOT_A_THING"}
"#;
        let state = replay(script.as_bytes(), WorkoutState::default()).unwrap();
        assert_eq!(state.workout_list.len(), 1);
        assert_eq!(state.workout_list[0].sets.get(), 5);
        assert_eq!(state.next_workout_item_id, 2);
    }

    #[test]
    fn test_replay_reports_line_number() {
        let script = "{\"type\":\"CLEAR_WORKOUT\"}\n{\"type\":\"UPDATE_EXERCISE\",\"id\":1,\"sets\":50,\"reps\":8}\n";
        let err = replay(script.as_bytes(), WorkoutState::default()).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
    }
}
