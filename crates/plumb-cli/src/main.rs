//! plumb CLI: doc-comment structure checks and autofixes.
//!
//! This binary provides the `plumb` command with `check` and `fix`
//! subcommands. See `plumb --help` for usage.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli_args;
mod commands;
mod walker;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let formatter: Box<dyn plumb_output::OutputFormatter> = if cli.json {
        Box::new(plumb_output::json::JsonFormatter)
    } else {
        Box::new(plumb_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check {
            paths,
            suppress,
            strict,
        } => commands::check::run(&*formatter, cli.verbose, paths, suppress, strict),
        Commands::Fix { paths, dry_run } => {
            commands::fix::run(&*formatter, cli.verbose, paths, dry_run)
        }
    };

    std::process::exit(exit_code);
}

/// Logs go to stderr so stdout stays parseable. `--verbose` forces debug;
/// otherwise `PLUMB_LOG` applies, defaulting to warn.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("PLUMB_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
