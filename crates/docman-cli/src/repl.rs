//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! The REPL owns one store for the whole session, so documents imported by
//! one command stay searchable by the next.

use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use docman_domain::{Document, DocumentStore, Query};
use docman_store::{MemoryStore, StoreError};
use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use std::path::PathBuf;
use tracing::debug;

/// Run the interactive REPL.
pub fn run_repl(
    store: &mut MemoryStore,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", formatter.info("Docman REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = EditorConfig::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    let history_path = get_history_path()?;
    if let Err(e) = editor.load_history(&history_path) {
        debug!("No history loaded from {}: {}", history_path.display(), e);
    }

    loop {
        let prompt = format!("docman ({})> ", store.len());

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, store, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    Import(Vec<PathBuf>),
    List,
    Search(String),
    Formats,
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "list" | "ls" => Ok(ReplCommand::List),
        "formats" => Ok(ReplCommand::Formats),
        "import" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: import <file> [file2] ...".to_string()));
            }
            Ok(ReplCommand::Import(
                rest.split_whitespace().map(PathBuf::from).collect(),
            ))
        }
        // The query keeps its inner spaces: "search body:Diet Coke"
        "search" => Ok(ReplCommand::Search(rest.to_string())),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            command
        ))),
    }
}

/// Execute a REPL command.
fn execute_repl_command(
    cmd: ReplCommand,
    store: &mut MemoryStore,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        ReplCommand::Import(files) => {
            let summary = commands::import_files(store, &files, true, formatter)?;
            println!(
                "{}",
                formatter.import_result(summary.imported, summary.imported + summary.failed)
            );
        }
        ReplCommand::List => {
            let documents: Vec<&Document> = store.contents().iter().collect();
            println!("{}", formatter.format_documents(&documents)?);
        }
        ReplCommand::Search(text) => {
            let query = Query::parse(&text).map_err(StoreError::from)?;
            println!("{}", formatter.format_documents(&store.find(&query))?);
        }
        ReplCommand::Formats => {
            commands::execute_formats(store, formatter)?;
        }
        ReplCommand::Exit | ReplCommand::Help => {}
    }

    Ok(())
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  import <file> [file2] ...   - Import files into this session");
    println!("  list, ls                    - List imported documents");
    println!("  search <query>              - Show documents matching a query");
    println!("    query: name:substring clauses joined by ','");
    println!("    e.g. search patient:Joe,body:Diet Coke");
    println!("  formats                     - Show importable file extensions");
    println!("  help, ?                     - Show this help");
    println!("  exit, quit, q               - Exit REPL");
    println!();
}
