use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "plumb", version, about = "Doc-comment structure enforcement and autofixing")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Debug logging and a summary line on stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Report doc-comment violations
    Check {
        /// Files or directories to check (empty = current directory)
        paths: Vec<String>,
        /// Suppress a code (`Rule.Code` or a bare code name); repeatable
        #[arg(long)]
        suppress: Vec<String>,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// Apply every available fix until the files settle
    Fix {
        /// Files or directories to fix (empty = current directory)
        paths: Vec<String>,
        /// Report what would change without writing files
        #[arg(long)]
        dry_run: bool,
    },
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
