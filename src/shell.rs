//! Line-oriented session. Tickets live in memory, so this is where a run of
//! create/edit/comment commands can build on each other.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, IsTerminal, Write};

use crate::app::App;
use crate::cli::{Commands, ShellLine};
use crate::commands;

const PROMPT: &str = "helpdesk> ";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShellSummary {
    pub executed: usize,
    pub failed: usize,
}

/// Reads commands from stdin until EOF or `exit`.
pub async fn run(app: &mut App) -> Result<ShellSummary> {
    let interactive = io::stdin().is_terminal();
    if interactive {
        println!("Type a command (e.g. `list --status open`), `help`, or `exit`.");
    }

    // The lock is taken per line so commands that prompt can read stdin too.
    let summary = run_with(app, interactive, || {
        let mut line = String::new();
        match io::stdin().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    })
    .await?;

    tracing::debug!(executed = summary.executed, failed = summary.failed, "Shell finished");
    Ok(summary)
}

pub async fn run_with<F>(app: &mut App, prompt: bool, mut next_line: F) -> Result<ShellSummary>
where
    F: FnMut() -> io::Result<Option<String>>,
{
    let mut summary = ShellSummary::default();

    loop {
        if prompt {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }

        let Some(line) = next_line()? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        let Some(words) = shlex::split(line) else {
            eprintln!("Error: Unbalanced quotes");
            summary.failed += 1;
            continue;
        };

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                if !matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                    summary.failed += 1;
                }
                let _ = e.print();
                continue;
            }
        };

        if matches!(command, Commands::Shell) {
            eprintln!("Error: Already in the shell");
            summary.failed += 1;
            continue;
        }

        summary.executed += 1;
        if let Err(e) = commands::dispatch(app, command).await {
            eprintln!("Error: {:#}", e);
            summary.failed += 1;
        }
    }

    Ok(summary)
}
