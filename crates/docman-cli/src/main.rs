//! Docman CLI - Import patient documents and search them by attribute.

use clap::Parser;
use docman_cli::commands;
use docman_cli::repl;
use docman_cli::{Cli, Command, Config, Formatter};
use docman_store::MemoryStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout carries only command output.
/// RUST_LOG wins over the -v count when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> docman_cli::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    debug!("Loaded configuration: {:?}", config);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let mut store = MemoryStore::from_config(&config.extractor)?;

    match cli.command {
        None => {
            repl::run_repl(&mut store, &config, &formatter)?;
        }
        Some(Command::Repl(args)) => {
            let summary = commands::import_files(&mut store, &args.files, true, &formatter)?;
            if !args.files.is_empty() {
                println!(
                    "{}",
                    formatter.import_result(summary.imported, summary.imported + summary.failed)
                );
            }
            repl::run_repl(&mut store, &config, &formatter)?;
        }
        Some(Command::List(args)) => {
            commands::execute_list(args, &mut store, cli.keep_going, &formatter)?;
        }
        Some(Command::Search(args)) => {
            commands::execute_search(args, &mut store, cli.keep_going, &formatter)?;
        }
        Some(Command::Formats) => {
            commands::execute_formats(&store, &formatter)?;
        }
    }

    Ok(())
}
