//! linediff -- compare two text files line by line.
//!
//! Usage: linediff [OPTIONS] <ORIGINAL> <MODIFIED>

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use linediff::{compute_diff, Algorithm, DiffOptions, DiffResult, Escape, LineRole, ToUnified};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Unified,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Parser)]
#[command(
    name = "linediff",
    version,
    about = "Compare two text files line by line",
    long_about = "Computes a minimal line-level edit script between two files \
    and prints it as a unified diff or as JSON. \
    Lines are compared without their terminators, so files that differ only in \
    CRLF versus LF endings count as identical. \
    Exits with 0 when the files are identical, 1 when they differ and 2 on error."
)]
struct Cli {
    #[arg(index = 1, help = "The original file")]
    original: PathBuf,
    #[arg(index = 2, help = "The modified file")]
    modified: PathBuf,
    #[arg(
        short = 'U',
        long = "context",
        default_value_t = 3,
        help = "Unchanged lines shown around each change"
    )]
    context: usize,
    #[arg(long, default_value = "auto", help = "Alignment algorithm: auto, lcs or myers")]
    algorithm: Algorithm,
    #[arg(long, help = "LCS table size above which `auto` switches to myers")]
    max_table_cells: Option<usize>,
    #[arg(long, value_enum, default_value_t = Format::Unified)]
    format: Format,
    #[arg(long, default_value = "none", help = "Escape line text: none or html")]
    escape: Escape,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

impl Cli {
    fn options(&self) -> DiffOptions {
        let options = DiffOptions::default()
            .with_context_lines(self.context)
            .with_algorithm(self.algorithm)
            .with_escape(self.escape);
        match self.max_table_cells {
            Some(cells) => options.with_max_table_cells(cells),
            None => options,
        }
    }
}

fn main() -> ExitCode {
    // logs go to stderr so they never mix with the diff on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("linediff: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the files are identical.
fn run(cli: &Cli) -> Result<bool> {
    let original = read(&cli.original)?;
    let modified = read(&cli.modified)?;
    let result = compute_diff(&original, &modified, &cli.options());
    tracing::debug!(
        added = result.stats.added,
        removed = result.stats.removed,
        hunks = result.hunks.len(),
        "compared {} and {}",
        cli.original.display(),
        cli.modified.display()
    );

    let mut out = std::io::stdout().lock();
    match cli.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &result)?;
            writeln!(out)?;
        }
        Format::Unified => {
            let names = (
                cli.original.display().to_string(),
                cli.modified.display().to_string(),
            );
            if use_color(cli.color) {
                colored::control::set_override(true);
                print_colored(&mut out, &result, &names.0, &names.1)?;
            } else {
                write!(out, "{}", result.to_unified(Some(&names.0), Some(&names.1)))?;
            }
        }
    }

    Ok(result.identical)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn use_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal(),
    }
}

fn print_colored(
    out: &mut impl Write,
    result: &DiffResult,
    old_name: &str,
    new_name: &str,
) -> Result<()> {
    if result.identical {
        return Ok(());
    }

    writeln!(out, "{}", format!("--- {old_name}").bold())?;
    writeln!(out, "{}", format!("+++ {new_name}").bold())?;
    for hunk in &result.hunks {
        writeln!(out, "{}", hunk.header().cyan())?;
        for line in &hunk.lines {
            let text = format!("{}{}", line.role.marker(), line.text);
            match line.role {
                LineRole::Unchanged => writeln!(out, "{text}")?,
                LineRole::Added => writeln!(out, "{}", text.green())?,
                LineRole::Removed => writeln!(out, "{}", text.red())?,
            }
        }
    }

    Ok(())
}
