//! # Anchor Select CLI Entry Point
//!
//! Shows an inline menu over the given labels and reports the choice.
//!
//! ## Usage
//!
//! ```bash
//! # Labels as arguments
//! anchor-select "feat: A new feature" "fix: A bug fix" "docs: Documentation only changes"
//!
//! # One label per line from a file
//! anchor-select --file types.txt --visible 5 --width 50
//!
//! # Print the chosen index afterwards
//! anchor-select --index a b c
//!
//! # Persist the effective settings as the new defaults
//! anchor-select --visible 5 --no-animation --save-config
//! ```
//!
//! ## Key Bindings
//!
//! - `↑` / `k` - Move selection up (wraps to the last option)
//! - `↓` / `j` - Move selection down (wraps to the first option)
//! - `Enter` - Select
//! - `Ctrl+C` - Cancel
//!
//! ## Exit Status
//!
//! - `0` - an option was selected
//! - `130` - cancelled
//! - `1` - any other error
//!
//! Defaults come from `~/.config/anchor-select/config.json`; see
//! [`anchor_select::config`].

use anchor_select::{MenuConfig, SelectError, Selector};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{cursor, execute};
use std::fs;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};

/// Pick one option from an inline terminal menu
#[derive(Parser, Debug)]
#[command(name = "anchor-select")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pick one option from an inline terminal menu", long_about = None)]
struct Args {
    /// Option labels, in display order
    #[arg(value_name = "LABEL", conflicts_with = "file")]
    labels: Vec<String>,

    /// Read option labels from a file, one per non-empty line
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: Option<PathBuf>,

    /// Maximum number of options shown at once
    #[arg(short = 'n', long, value_name = "N")]
    visible: Option<usize>,

    /// Column width at which option labels wrap
    #[arg(short, long, value_name = "COLS")]
    width: Option<usize>,

    /// Use this configuration file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Move instantly instead of animating between options
    #[arg(long)]
    no_animation: bool,

    /// Print the selected index on stdout after the menu closes
    #[arg(long)]
    index: bool,

    /// Write the effective settings to the configuration file and exit
    #[arg(long)]
    save_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // Set up panic hook to ensure the cursor comes back on panic. Raw mode is
    // restored by the session's own drop.
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), cursor::Show);
        original_hook(panic_info);
    }));

    let code = match run_application(args) {
        Ok(()) => 0,
        Err(err) => {
            if err
                .downcast_ref::<SelectError>()
                .is_some_and(SelectError::is_cancelled)
            {
                eprintln!("Cancelled");
                130
            } else {
                eprintln!("Error: {err:#}");
                1
            }
        }
    };

    std::process::exit(code);
}

fn run_application(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => MenuConfig::load_from(path)?,
        None => MenuConfig::load(),
    };
    apply_overrides(&mut config, &args);

    if args.save_config {
        let path = match &args.config {
            Some(path) => path.clone(),
            None => MenuConfig::config_path()?,
        };
        config.save_to(&path)?;
        eprintln!("Saved configuration to {}", path.display());
        return Ok(());
    }

    let labels = match &args.file {
        Some(path) => read_labels(path)?,
        None => args.labels.clone(),
    };
    if labels.is_empty() {
        anyhow::bail!("No options given. Pass labels as arguments or use --file.");
    }

    let selection = Selector::new(labels, &config)?.run()?;

    if args.index {
        println!("{}", selection.index);
    }
    Ok(())
}

/// Command-line flags win over the configuration file.
fn apply_overrides(config: &mut MenuConfig, args: &Args) {
    if let Some(visible) = args.visible {
        config.visible = visible;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if args.no_animation {
        config.animation.enabled = false;
    }
}

fn read_labels(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read labels from: {}", path.display()))?;
    Ok(parse_labels(&contents))
}

fn parse_labels(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels_skips_blank_lines() {
        let labels = parse_labels("feat: x\n\n  \nfix: y  \r\n");
        assert_eq!(labels, vec!["feat: x", "fix: y"]);
    }

    #[test]
    fn test_cli_overrides_config() {
        let args = Args::parse_from(["anchor-select", "-n", "3", "-w", "40", "--no-animation", "a"]);
        let mut config = MenuConfig::default();
        apply_overrides(&mut config, &args);

        assert_eq!(config.visible, 3);
        assert_eq!(config.width, 40);
        assert!(!config.animation.enabled);
        assert_eq!(args.labels, vec!["a"]);
    }

    #[test]
    fn test_cli_without_overrides_keeps_config() {
        let args = Args::parse_from(["anchor-select", "a", "b"]);
        let mut config = MenuConfig::default();
        apply_overrides(&mut config, &args);
        assert_eq!(config, MenuConfig::default());
    }

    #[test]
    fn test_save_config_writes_effective_settings() {
        let temp_dir = tempfile::TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("config.json");
        let args = Args::parse_from([
            "anchor-select",
            "--config",
            path.to_str().expect("utf-8 temp path"),
            "-n",
            "4",
            "--no-animation",
            "--save-config",
        ]);

        run_application(args).expect("save config");

        let saved = MenuConfig::load_from(&path).expect("load saved config");
        assert_eq!(saved.visible, 4);
        assert_eq!(saved.width, MenuConfig::default().width);
        assert!(!saved.animation.enabled);
    }

    #[test]
    fn test_labels_conflict_with_file() {
        let result = Args::try_parse_from(["anchor-select", "--file", "x.txt", "a"]);
        assert!(result.is_err());
    }
}
