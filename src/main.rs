mod shell;

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut shell = shell::Shell::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{}", shell::HELP)?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if !line.trim().is_empty() {
            match line.parse::<shell::Command>() {
                Ok(command) => match shell.execute(command)? {
                    shell::Step::Continue(lines) => {
                        writeln!(stdout)?;
                        for line in lines {
                            writeln!(stdout, "{line}")?;
                        }
                    }
                    shell::Step::Quit => break,
                },
                Err(e) => {
                    debug!(%line, error = %e, "bad command");
                    writeln!(stdout, "{e}")?;
                }
            }
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    debug!(lots = shell.auction().lots().len(), "shell finished");
    Ok(())
}
