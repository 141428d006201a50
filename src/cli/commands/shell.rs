//! Interactive planner shell

use super::planner::{execute_and_save, open_session, Autosave};
use crate::args::{ShellCommand, ShellLine};
use clap::Parser;
use degree_planner::config::Config;
use degree_planner::core::planner::PlannerSession;
use degree_planner::{debug, error};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "> ";

/// Run the shell on stdin/stdout against the configured data file.
pub fn run(config: &Config) {
    let (mut session, autosave) = match open_session(config) {
        Ok(opened) => opened,
        Err(err) => {
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    };

    println!("Degree planner shell. Type `help` for commands, `exit` to leave.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = run_loop(&mut session, &autosave, stdin.lock(), &mut stdout, config) {
        error!("Shell I/O failed: {e}");
        eprintln!("✗ {e}");
    }
}

/// Read commands from `input` until `exit` or end of input, writing results to `output`.
///
/// A change that `autosave` failed to write is reported as a failed command.
///
/// # Errors
/// Returns an error if reading input or writing output fails.
pub fn run_loop(
    session: &mut PlannerSession,
    autosave: &Autosave,
    input: impl BufRead,
    output: &mut impl Write,
    config: &Config,
) -> io::Result<()> {
    let mut entered: Vec<String> = Vec::new();
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match ShellLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                debug!("Rejected shell input '{line}': {:?}", err.kind());
                writeln!(output, "{}", err.to_string().trim_end())?;
                continue;
            }
        };
        if command == ShellCommand::Exit {
            break;
        }

        match dispatch(session, autosave, command, &entered, config) {
            Ok(text) => writeln!(output, "{text}")?,
            Err(text) => writeln!(output, "✗ {text}")?,
        }
        entered.push(line.to_string());
    }
    Ok(())
}

fn dispatch(
    session: &mut PlannerSession,
    autosave: &Autosave,
    command: ShellCommand,
    entered: &[String],
    config: &Config,
) -> Result<String, String> {
    match command {
        ShellCommand::Plan(plan_command) => execute_and_save(session, autosave, plan_command, config),
        ShellCommand::Undo => {
            session.undo().map_err(|e| e.to_string())?;
            autosave.check()?;
            Ok("Undo success!".to_string())
        }
        ShellCommand::Redo => {
            session.redo().map_err(|e| e.to_string())?;
            autosave.check()?;
            Ok("Redo success!".to_string())
        }
        ShellCommand::History => Ok(render_history(session, entered)),
        ShellCommand::Exit => Ok(String::new()),
    }
}

fn render_history(session: &PlannerSession, entered: &[String]) -> String {
    let history = session.history();
    let depth = format!(
        "Undo steps available: {}, redo steps available: {}",
        history.undo_depth(),
        history.redo_depth()
    );
    if entered.is_empty() {
        return format!("You have not yet entered any commands.\n{depth}");
    }
    let listing = entered
        .iter()
        .rev()
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Entered commands (from most recent to earliest):\n{listing}\n{depth}")
}
