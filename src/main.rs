//! CLI entry point for charclass-lint
//!
//! Validates regex patterns given on the command line or read from a
//! pattern list file, printing a coloured report or JSON.

use clap::{Args, Parser, Subcommand};
use colored::*;
use charclass_lint::lint::{
    input::load_patterns,
    output::{batch_to_json, BatchReport},
};
use charclass_lint::{AnalyzerOptions, ClassValidator, ValidationResult};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "charclass-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check patterns given as arguments
    Check {
        /// Patterns to validate, bare or as /pattern/flags
        #[arg(required = true)]
        patterns: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check every pattern in a pattern list file
    File {
        /// Path to a file with one pattern per line
        path: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Emit results as JSON keyed by pattern
    #[arg(long)]
    json: bool,

    /// Also report ranges fully contained in another range
    #[arg(long)]
    flag_containment: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (patterns, output) = match cli.command {
        Commands::Check { patterns, output } => (patterns, output),
        Commands::File { path, output } => {
            let patterns = load_patterns(&path)
                .map_err(|e| anyhow::anyhow!("Failed to load patterns: {}", e))?;
            (patterns, output)
        }
    };

    let options = AnalyzerOptions::new().with_flag_containment(output.flag_containment);
    let results = ClassValidator::with_options(options).validate_many(patterns.iter().cloned());

    if output.json {
        println!("{}", batch_to_json(&results)?);
    } else {
        print_report(&patterns, &results);
    }

    if !BatchReport::new(&results).all_valid() {
        std::process::exit(1);
    }

    Ok(())
}

/// Installs a stderr subscriber; RUST_LOG takes precedence over --verbose
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints results in input order, each pattern once
fn print_report(patterns: &[String], results: &HashMap<String, ValidationResult>) {
    let mut seen = std::collections::HashSet::new();
    let mut invalid = 0;

    for pattern in patterns {
        if !seen.insert(pattern.as_str()) {
            continue;
        }
        let Some(result) = results.get(pattern) else {
            continue;
        };

        if result.is_valid {
            println!("{} {}", "✓".green().bold(), pattern.cyan());
            continue;
        }

        invalid += 1;
        println!("{} {}", "✗".red().bold(), pattern.cyan().bold());

        for issue in &result.issues {
            println!(
                "  {} {} {}",
                format!("{}..{}", issue.span.start, issue.span.end).dimmed(),
                format!("[{}]", issue.kind).magenta(),
                issue.message,
            );
            if let Some(fix) = &issue.suggested_fix {
                println!("    {} {}", "fix:".green(), fix);
            }
        }

        for tip in &result.suggestions {
            println!("  {} {}", "→".yellow(), tip);
        }
        println!();
    }

    let total = seen.len();
    if invalid == 0 {
        println!("{} {} pattern{} checked, no issues", "✓".green().bold(), total, plural(total));
    } else {
        println!(
            "{} {} of {} pattern{} with issues",
            "✗".red().bold(),
            invalid,
            total,
            plural(total)
        );
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
