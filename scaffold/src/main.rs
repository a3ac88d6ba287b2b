//! Create a new exercise directory from the template.
//!
//! Usage: `scaffold <NAME> <LEVEL>`. Copies `scripts/template` into
//! `<LEVEL>/<NAME>` and prints the index row to paste into the README.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use scaffold::core::args::validate_args;
use scaffold::core::readme::readme_entry;
use scaffold::create::create_exercise;
use scaffold::exit_codes;
use scaffold::io::config::load_config;
use scaffold::io::paths::config_path;
use scaffold::logging;

#[derive(Parser)]
#[command(
    name = "scaffold",
    version,
    about = "Create a new exercise directory from the template"
)]
struct Cli {
    /// Exercise name, used verbatim as the directory name.
    name: Option<String>,

    /// Difficulty level: easy, medium or hard.
    level: Option<String>,

    /// Trailing arguments are accepted and ignored.
    #[arg(hide = true)]
    rest: Vec<String>,

    /// Project root holding the level directories and the template.
    #[arg(short = 'C', long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Config file (defaults to `<root>/scaffold.toml`).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Arguments are checked before touching the filesystem.
    let invocation = validate_args(cli.name.as_deref(), cli.level.as_deref())?;
    if !cli.rest.is_empty() {
        debug!(ignored = ?cli.rest, "ignoring extra arguments");
    }

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("read current directory")?,
    };
    let config_path = cli.config.unwrap_or_else(|| config_path(&root));
    let config = load_config(&config_path)?;

    let outcome = create_exercise(&root, &invocation, &config)?;

    println!("New directory created: {}", outcome.display_dir.display());
    println!("Readme entry: ");
    println!("\n{}", readme_entry(&invocation, &config.solution_file));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_name_and_level() {
        let cli = Cli::parse_from(["scaffold", "00007_readonly", "easy"]);
        assert_eq!(cli.name.as_deref(), Some("00007_readonly"));
        assert_eq!(cli.level.as_deref(), Some("easy"));
        assert!(cli.root.is_none());
    }

    #[test]
    fn parse_without_arguments_leaves_validation_to_run() {
        let cli = Cli::parse_from(["scaffold"]);
        assert!(cli.name.is_none());
        assert!(cli.level.is_none());
    }

    #[test]
    fn parse_accepts_trailing_arguments() {
        let cli = Cli::parse_from(["scaffold", "foo", "easy", "extra", "more"]);
        assert_eq!(cli.level.as_deref(), Some("easy"));
        assert_eq!(cli.rest, vec!["extra", "more"]);
    }

    #[test]
    fn parse_root_and_config() {
        let cli = Cli::parse_from([
            "scaffold",
            "-C",
            "/repo",
            "--config",
            "/repo/alt.toml",
            "foo",
            "hard",
        ]);
        assert_eq!(cli.root, Some(PathBuf::from("/repo")));
        assert_eq!(cli.config, Some(PathBuf::from("/repo/alt.toml")));
        assert_eq!(cli.name.as_deref(), Some("foo"));
    }

    #[test]
    fn run_rejects_invalid_level_before_reading_root() {
        let cli = Cli::parse_from(["scaffold", "-C", "/does/not/exist", "foo", "expert"]);
        let err = run(cli).expect_err("should fail");
        assert!(err.to_string().starts_with("Invalid level."));
    }
}
