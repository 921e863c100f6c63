//! rf-scaffold CLI - Robot Framework test-scaffold generator.
//!
//! Scans a build-output module root and writes three linked artifacts into
//! the working directory: the test-suite document, the stub library, and
//! the run script.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rf_scaffold_core::{Generator, Numbering, RuleTable};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rf-scaffold")]
#[command(
    version,
    about = "Generate Robot Framework compilation-output test scaffolds"
)]
struct Cli {
    /// Module root to scan
    path: PathBuf,

    /// Assign non-colliding case codes (path checks take NN00 instead of
    /// sharing NN01 with the first file check)
    #[arg(long)]
    unique_codes: bool,

    /// Custom assertion rule table (TOML); defaults to the built-in table
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rules = match &cli.rules {
        Some(path) => RuleTable::load(path)
            .with_context(|| format!("Failed to load rule table: {}", path.display()))?,
        None => RuleTable::builtin().context("Built-in rule table is malformed")?,
    };

    let numbering = if cli.unique_codes {
        Numbering::Unique
    } else {
        Numbering::Legacy
    };

    let cwd = std::env::current_dir().context("Failed to resolve the working directory")?;
    let generator = Generator::new(&cli.path, &cwd, numbering, rules);
    let artifacts = generator
        .run()
        .with_context(|| format!("Generation failed for {}", cli.path.display()))?;

    let rel = |path: &Path| path.strip_prefix(&cwd).unwrap_or(path).display().to_string();
    println!("{} Test suite    {}", "✓".green(), rel(&artifacts.suite));
    println!("{} Library stub  {}", "✓".green(), rel(&artifacts.library));
    println!("{} Run script    {}", "✓".green(), rel(&artifacts.run_script));
    println!();
    println!(
        "{} Execute with: ./{}",
        "→".blue(),
        rel(&artifacts.run_script)
    );

    Ok(())
}
