//! Interactive shell: readline loop wiring command parsing to the
//! session dispatcher.

pub mod readline;

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;

use crate::commands::parse_command;
use crate::session::{Outcome, Session};

const COMMANDS: &[&str] = &[
    "stocks", "trades", "yield", "pe", "trade", "vwap", "index", "help", "exit", "quit",
];

/// Launch the interactive shell loop.
pub fn launch_shell(mut session: Session) -> Result<()> {
    println!("{}", "GBCE - Interactive Mode".bold());
    println!(
        "Type {} for commands, {} to leave\n",
        "/help".cyan(),
        "/exit".cyan()
    );

    let mut rl = readline::Readline::new(COMMANDS, None)?;

    loop {
        match rl.readline("gbce> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match parse_command(trimmed) {
                    Ok(command) => match session.dispatch(command) {
                        Ok(Outcome::Continue) => {}
                        Ok(Outcome::Exit) => {
                            println!("Goodbye!");
                            break;
                        }
                        Err(e) => {
                            eprintln!("{} {}", "Error:".red().bold(), e);
                        }
                    },
                    Err(e) => {
                        eprintln!("{} {}", "Parse error:".yellow().bold(), e.message);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".red().bold(), err);
                break;
            }
        }
    }

    Ok(())
}
