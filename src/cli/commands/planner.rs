//! Plan command handlers

use crate::args::PlanCommand;
use degree_planner::config::Config;
use degree_planner::core::models::Code;
use degree_planner::core::planner::PlannerSession;
use degree_planner::core::storage;
use degree_planner::{error, info, verbose};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::rc::Rc;

/// Run one plan command against the configured data file.
///
/// Changes are saved before the command's output is printed; a failed save
/// fails the command.
pub fn run(command: PlanCommand, config: &Config) {
    let result = open_session(config)
        .and_then(|(mut session, autosave)| execute_and_save(&mut session, &autosave, command, config));
    match result {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}

/// Load the configured data file and start a session that saves after every change.
///
/// A missing data file seeds an empty plan from the `[planner]` config section.
///
/// # Errors
/// Returns a message when no data file is configured or it cannot be loaded.
pub fn open_session(config: &Config) -> Result<(PlannerSession, Autosave), String> {
    if config.paths.data_file.is_empty() {
        return Err(
            "No data file configured. Pass --data-file or run `config set data_file PATH`."
                .to_string(),
        );
    }
    let path = PathBuf::from(&config.paths.data_file);

    let data = storage::load_or_seed(&path, config.planner.years, config.planner.semesters)
        .map_err(|e| {
            error!("Failed to load planner data {}: {e}", path.display());
            format!("Failed to load {}: {e}", path.display())
        })?;
    verbose!("✓ Planner data loaded from: {}", path.display());

    let mut session = PlannerSession::from_data(data, config.planner.history_limit);
    let autosave = attach_autosave(&mut session, path);
    Ok((session, autosave))
}

/// Outcome of the most recent autosave
#[derive(Debug, Clone, Default)]
pub struct Autosave {
    failure: Rc<RefCell<Option<String>>>,
}

impl Autosave {
    /// Report the last save failure, if the plan on disk is behind the session.
    ///
    /// # Errors
    /// Returns the save failure message; it is cleared once reported.
    pub fn check(&self) -> Result<(), String> {
        self.failure.borrow_mut().take().map_or(Ok(()), Err)
    }
}

/// Save the session's data to `path` whenever its plan changes.
///
/// The returned handle reports whether the latest save succeeded.
pub fn attach_autosave(session: &mut PlannerSession, path: PathBuf) -> Autosave {
    let autosave = Autosave::default();
    let failure = Rc::clone(&autosave.failure);
    let mut snapshot = session.to_data();
    session.subscribe(move |plan| {
        snapshot.plan.clone_from(plan);
        let saved = storage::save(&path, &snapshot).map_err(|e| {
            error!("Failed to save planner data {}: {e}", path.display());
            format!("Failed to save {}: {e}", path.display())
        });
        if saved.is_ok() {
            verbose!("✓ Degree plan saved to: {}", path.display());
        }
        *failure.borrow_mut() = saved.err();
    });
    autosave
}

/// Execute a plan command, then fail if its change could not be saved.
///
/// # Errors
/// Returns the planner's failure message, or the save failure after a change.
pub fn execute_and_save(
    session: &mut PlannerSession,
    autosave: &Autosave,
    command: PlanCommand,
    config: &Config,
) -> Result<String, String> {
    let output = execute(session, command, config)?;
    autosave.check()?;
    Ok(output)
}

/// Execute a plan command and return its user-facing output.
///
/// # Errors
/// Returns the planner's failure message; the plan is unchanged in that case.
pub fn execute(
    session: &mut PlannerSession,
    command: PlanCommand,
    config: &Config,
) -> Result<String, String> {
    match command {
        PlanCommand::Show => Ok(render_plan(session)),
        PlanCommand::Add {
            year,
            semester,
            codes,
        } => {
            let codes: BTreeSet<Code> = codes.into_iter().collect();
            let outcome = session
                .add_modules(year, semester, &codes)
                .map_err(|e| e.to_string())?;
            info!("Added {} to year {year} semester {semester}", codes.len());
            Ok(outcome.to_string())
        }
        PlanCommand::Remove { codes } => {
            let codes: BTreeSet<Code> = codes.into_iter().collect();
            let outcome = session.remove_modules(&codes).map_err(|e| e.to_string())?;
            Ok(outcome.to_string())
        }
        PlanCommand::Suggest { credits, tags } => {
            let tags = tags.into_iter().collect();
            Ok(session
                .suggest(credits, &tags, config.planner.suggestion_limit)
                .to_string())
        }
        PlanCommand::Requirements => Ok(render_requirements(session)),
    }
}

fn render_plan(session: &PlannerSession) -> String {
    let mut out = String::from("=== Degree Plan ===\n");
    if session.plan().slots().is_empty() {
        out.push_str("No slots in the degree plan.\n");
    } else {
        let _ = write!(out, "{}", session.plan());
    }
    if !session.categories().is_empty() {
        out.push_str("\n=== Requirements ===\n");
        out.push_str(&render_requirements(session));
    }
    out.trim_end().to_string()
}

fn render_requirements(session: &PlannerSession) -> String {
    let progress = session.requirement_progress();
    if progress.is_empty() {
        return "No requirement categories defined.".to_string();
    }
    progress
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
